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

//! The migration checks that are registered by default.
//!
//! Each check compares one pallet (or one aspect of the state) between the snapshots taken before
//! and after the migration. Accounts are compared as [`AccountId32`], so it does not matter whether
//! a dump renders them as hex or SS58.

pub mod account_translation;
pub mod indices;
pub mod multisig;
pub mod proxy;
pub mod vesting;

use crate::{
	account_translation::AccountTranslator,
	runner::MigrationTestRunner,
	snapshot::{Snapshot, StorageItem},
	types::{decode_account, CheckError},
};
use serde_json::Value;
use sp_core::crypto::AccountId32;
use std::collections::BTreeMap;

pub const SYSTEM_ACCOUNT: StorageItem = StorageItem::new("System", "Account");

/// A runner with all checks of this crate, in the order they run.
pub fn default_checks(translator: &AccountTranslator) -> MigrationTestRunner {
	let mut runner = MigrationTestRunner::new();
	runner
		.register(account_translation::AccountTranslationCheck::new(translator.clone()))
		.register(vesting::VestingCheck::new(translator.clone()))
		.register(indices::IndicesCheck::new(translator.clone()))
		.register(proxy::ProxyCheck::new(translator.clone()))
		.register(multisig::MultisigCheck::new(translator.clone()));
	runner
}

/// All entries of a map keyed by a single account.
pub(crate) fn entries_by_account(
	snapshot: &dyn Snapshot,
	item: &StorageItem,
) -> Result<BTreeMap<AccountId32, Value>, CheckError> {
	snapshot
		.storage_entries(item)?
		.into_iter()
		.map(|entry| {
			let key = entry
				.key_arg()
				.ok_or_else(|| CheckError::decode(item.to_string(), "entry without key"))?;
			Ok((decode_account(key, &item.to_string())?, entry.value))
		})
		.collect()
}

/// Number of entries of `item`.
pub(crate) fn count(snapshot: &dyn Snapshot, item: &StorageItem) -> Result<usize, CheckError> {
	Ok(snapshot.storage_entries(item)?.len())
}
