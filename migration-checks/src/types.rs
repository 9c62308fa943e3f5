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

//! Types shared by all migration checks.

use crate::{
	call::parse_account,
	snapshot::{Snapshot, SnapshotError},
};
use serde_json::Value;
use sp_core::crypto::AccountId32;

/// Reason why a check did not pass.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
	#[error("{0}")]
	Assertion(String),
	#[error("could not decode {what}: {reason}")]
	Decode { what: String, reason: String },
	#[error(transparent)]
	Snapshot(#[from] SnapshotError),
	#[error("check panicked: {0}")]
	Panicked(String),
}

impl CheckError {
	pub fn decode(what: impl Into<String>, reason: impl Into<String>) -> Self {
		CheckError::Decode { what: what.into(), reason: reason.into() }
	}
}

/// State of both chains before the migration.
#[derive(Clone, Copy)]
pub struct PreCheckContext<'a> {
	pub rc_before: &'a dyn Snapshot,
	pub ah_before: &'a dyn Snapshot,
}

/// State of both chains after the migration.
#[derive(Clone, Copy)]
pub struct PostCheckContext<'a> {
	pub rc_after: &'a dyn Snapshot,
	pub ah_after: &'a dyn Snapshot,
}

/// What a pre-check hands to the post-check of the same test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreCheckResult<Rc, Ah> {
	pub rc_pre_payload: Rc,
	pub ah_pre_payload: Ah,
}

/// A check that runs once against the state before and once against the state after the
/// migration.
///
/// The payloads are private to the implementation; the runner only moves them from
/// [`Self::pre_check`] to [`Self::post_check`].
pub trait MigrationTest {
	type RcPrePayload: 'static;
	type AhPrePayload: 'static;

	/// Unique name, used in reports and for network exclusions.
	fn name(&self) -> &'static str;

	/// Inspect the state before the migration and capture what must be found afterwards.
	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, Self::AhPrePayload>, CheckError>;

	/// Verify the state after the migration against the captured payload.
	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, Self::AhPrePayload>,
	) -> Result<(), CheckError>;
}

/// Balances are encoded either as JSON numbers or as (hex or decimal) strings.
pub fn decode_u128(value: &Value, what: &str) -> Result<u128, CheckError> {
	let parsed = match value {
		Value::Number(n) => n.as_u64().map(u128::from),
		Value::String(s) => match s.strip_prefix("0x") {
			Some(hex) => u128::from_str_radix(hex, 16).ok(),
			None => s.replace(',', "").parse().ok(),
		},
		_ => None,
	};
	parsed.ok_or_else(|| CheckError::decode(what, format!("not an integer: {value}")))
}

pub fn decode_u32(value: &Value, what: &str) -> Result<u32, CheckError> {
	let n = decode_u128(value, what)?;
	u32::try_from(n).map_err(|_| CheckError::decode(what, format!("{n} exceeds u32")))
}

pub fn decode_bool(value: &Value, what: &str) -> Result<bool, CheckError> {
	value
		.as_bool()
		.ok_or_else(|| CheckError::decode(what, format!("not a boolean: {value}")))
}

pub fn decode_account(value: &Value, what: &str) -> Result<AccountId32, CheckError> {
	crate::call::account_from_value(value)
		.as_deref()
		.and_then(parse_account)
		.ok_or_else(|| CheckError::decode(what, format!("not an account: {value}")))
}

/// Field `name` of a JSON object, accepting both camelCase and snake_case spellings.
pub fn field<'a>(value: &'a Value, name: &str, what: &str) -> Result<&'a Value, CheckError> {
	value
		.get(name)
		.or_else(|| value.get(to_snake_case(name)))
		.ok_or_else(|| CheckError::decode(what, format!("missing field `{name}`")))
}

fn to_snake_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 4);
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			out.push('_');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}
