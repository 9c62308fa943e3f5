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

//! Account indices keep their deposit and frozen flag and point at the translated owner.

use super::count;
use crate::{
	account_translation::AccountTranslator,
	ensure_check,
	snapshot::{Snapshot, StorageEntry, StorageItem},
	types::{
		decode_account, decode_bool, decode_u128, decode_u32, CheckError, MigrationTest,
		PostCheckContext, PreCheckContext, PreCheckResult,
	},
	LOG_TARGET,
};
use sp_core::crypto::AccountId32;
use std::collections::BTreeMap;

pub const ACCOUNTS: StorageItem = StorageItem::new("Indices", "Accounts");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
	pub who: AccountId32,
	pub deposit: u128,
	pub frozen: bool,
}

impl IndexEntry {
	/// Decode `(who, deposit, frozen)`.
	fn decode(entry: &StorageEntry) -> Result<(u32, Self), CheckError> {
		let what = ACCOUNTS.to_string();
		let index = entry
			.key_arg()
			.ok_or_else(|| CheckError::decode(&what, "entry without key"))
			.and_then(|k| decode_u32(k, &what))?;
		let [who, deposit, frozen] = entry.value.as_array().map(Vec::as_slice).unwrap_or_default()
		else {
			return Err(CheckError::decode(
				what,
				format!("index {index}: expected (who, deposit, frozen)"),
			));
		};

		Ok((
			index,
			Self {
				who: decode_account(who, &what)?,
				deposit: decode_u128(deposit, &what)?,
				frozen: decode_bool(frozen, &what)?,
			},
		))
	}
}

fn indices(snapshot: &dyn Snapshot) -> Result<BTreeMap<u32, IndexEntry>, CheckError> {
	snapshot.storage_entries(&ACCOUNTS)?.iter().map(IndexEntry::decode).collect()
}

pub struct IndicesCheck {
	translator: AccountTranslator,
}

impl IndicesCheck {
	pub fn new(translator: AccountTranslator) -> Self {
		Self { translator }
	}
}

impl MigrationTest for IndicesCheck {
	type RcPrePayload = BTreeMap<u32, IndexEntry>;
	type AhPrePayload = ();

	fn name(&self) -> &'static str {
		"indices_pallet"
	}

	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, ()>, CheckError> {
		let ah_entries = count(ctx.ah_before, &ACCOUNTS)?;
		ensure_check!(
			ah_entries == 0,
			"Indices entries on Asset Hub should be empty before the migration, found {}",
			ah_entries
		);

		let rc = indices(ctx.rc_before)?;
		log::info!(target: LOG_TARGET, "Found {} indices on the Relay Chain", rc.len());
		Ok(PreCheckResult { rc_pre_payload: rc, ah_pre_payload: () })
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, ()>,
	) -> Result<(), CheckError> {
		let rc_entries = count(ctx.rc_after, &ACCOUNTS)?;
		ensure_check!(
			rc_entries == 0,
			"Indices entries on the Relay Chain should be empty after the migration, found {}",
			rc_entries
		);

		let ah = indices(ctx.ah_after)?;
		for (index, rc_entry) in &payload.rc_pre_payload {
			let Some(ah_entry) = ah.get(index) else {
				return Err(CheckError::Assertion(format!("Index {index} is missing on Asset Hub")));
			};
			let expected_owner = self.translator.translate_account(&rc_entry.who);
			ensure_check!(
				ah_entry.who == expected_owner,
				"Owner of index {} should be {}, got {}",
				index,
				expected_owner,
				ah_entry.who
			);
			ensure_check!(
				ah_entry.deposit == rc_entry.deposit,
				"Deposit of index {} changed from {} to {}",
				index,
				rc_entry.deposit,
				ah_entry.deposit
			);
			ensure_check!(
				ah_entry.frozen == rc_entry.frozen,
				"Frozen flag of index {} changed",
				index
			);
		}
		ensure_check!(
			ah.len() == payload.rc_pre_payload.len(),
			"Asset Hub has {} indices, the Relay Chain had {}",
			ah.len(),
			payload.rc_pre_payload.len()
		);
		Ok(())
	}
}
