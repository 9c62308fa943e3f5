// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! Networks that go through the Asset Hub Migration.

use sp_core::crypto::Ss58AddressFormat;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Network {
	#[default]
	Polkadot,
	Kusama,
	Westend,
	Paseo,
}

impl Network {
	pub const ALL: [Network; 4] =
		[Network::Polkadot, Network::Kusama, Network::Westend, Network::Paseo];

	/// SS58 prefix used by both the Relay Chain and Asset Hub of this network.
	pub fn ss58_prefix(&self) -> u16 {
		match self {
			Network::Polkadot => 0,
			Network::Kusama => 2,
			Network::Westend | Network::Paseo => 42,
		}
	}

	pub fn ss58_format(&self) -> Ss58AddressFormat {
		Ss58AddressFormat::custom(self.ss58_prefix())
	}

	pub fn name(&self) -> &'static str {
		match self {
			Network::Polkadot => "polkadot",
			Network::Kusama => "kusama",
			Network::Westend => "westend",
			Network::Paseo => "paseo",
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Network {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|n| n.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| {
				format!("unknown network `{s}`, expected one of polkadot, kusama, westend, paseo")
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitive() {
		assert_eq!("Kusama".parse::<Network>(), Ok(Network::Kusama));
		assert_eq!("PASEO".parse::<Network>(), Ok(Network::Paseo));
		assert!("rococo".parse::<Network>().is_err());
	}
}
