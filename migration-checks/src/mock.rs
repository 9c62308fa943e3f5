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

//! In-memory snapshots for tests.

use crate::{
	snapshot::{ChainKind, MemorySnapshot},
	types::{PostCheckContext, PreCheckContext},
};
use serde_json::{json, Value};
use sp_core::{
	crypto::{AccountId32, Ss58Codec},
	H256,
};

pub const RC_PRE_BLOCK: u32 = 26_041_702;
pub const RC_POST_BLOCK: u32 = 26_071_771;
pub const AH_PRE_BLOCK: u32 = 11_716_733;
pub const AH_POST_BLOCK: u32 = 11_736_597;

/// The four chain states a full run needs.
pub struct Snapshots {
	pub rc_before: MemorySnapshot,
	pub rc_after: MemorySnapshot,
	pub ah_before: MemorySnapshot,
	pub ah_after: MemorySnapshot,
}

impl Snapshots {
	pub fn empty() -> Self {
		Self {
			rc_before: MemorySnapshot::new(ChainKind::Relay, RC_PRE_BLOCK, hash(1)),
			rc_after: MemorySnapshot::new(ChainKind::Relay, RC_POST_BLOCK, hash(2)),
			ah_before: MemorySnapshot::new(ChainKind::AssetHub, AH_PRE_BLOCK, hash(3)),
			ah_after: MemorySnapshot::new(ChainKind::AssetHub, AH_POST_BLOCK, hash(4)),
		}
	}

	pub fn pre(&self) -> PreCheckContext<'_> {
		PreCheckContext { rc_before: &self.rc_before, ah_before: &self.ah_before }
	}

	pub fn post(&self) -> PostCheckContext<'_> {
		PostCheckContext { rc_after: &self.rc_after, ah_after: &self.ah_after }
	}
}

pub fn hash(n: u8) -> H256 {
	H256::repeat_byte(n)
}

/// A plain account, rendered with the Polkadot prefix.
pub fn account(n: u8) -> AccountId32 {
	AccountId32::new([n; 32])
}

pub fn address(id: &AccountId32) -> Value {
	json!(id.to_ss58check_with_version(crate::Network::Polkadot.ss58_format()))
}

pub fn account_info(free: u128, reserved: u128) -> Value {
	json!({
		"nonce": 0,
		"consumers": 0,
		"providers": 1,
		"sufficients": 0,
		"data": {
			"free": free.to_string(),
			"reserved": reserved.to_string(),
			"frozen": "0",
			"flags": "0x0"
		}
	})
}
