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

//! Multisig deposits are unreserved on the Relay Chain and the depositor's funds arrive on Asset
//! Hub, so every depositor must hold a balance there afterwards.

use super::{entries_by_account, SYSTEM_ACCOUNT};
use crate::{
	account_translation::AccountTranslator,
	ensure_check,
	snapshot::StorageItem,
	types::{
		decode_account, decode_u128, field, CheckError, MigrationTest, PostCheckContext,
		PreCheckContext, PreCheckResult,
	},
	LOG_TARGET,
};
use sp_core::crypto::AccountId32;
use std::collections::BTreeSet;

pub const MULTISIGS: StorageItem = StorageItem::new("Multisig", "Multisigs");

pub struct MultisigCheck {
	translator: AccountTranslator,
}

impl MultisigCheck {
	pub fn new(translator: AccountTranslator) -> Self {
		Self { translator }
	}
}

impl MigrationTest for MultisigCheck {
	/// Depositors of open multisig operations.
	type RcPrePayload = BTreeSet<AccountId32>;
	/// Number of multisig operations on Asset Hub.
	type AhPrePayload = usize;

	fn name(&self) -> &'static str {
		"multisig_pallet"
	}

	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, usize>, CheckError> {
		let what = MULTISIGS.to_string();
		let entries = ctx.rc_before.storage_entries(&MULTISIGS)?;
		let depositors = entries
			.iter()
			.map(|e| decode_account(field(&e.value, "depositor", &what)?, &what))
			.collect::<Result<BTreeSet<_>, _>>()?;
		let ah_count = ctx.ah_before.storage_entries(&MULTISIGS)?.len();

		log::info!(
			target: LOG_TARGET,
			"Found {} RC multisig entries from {} depositors, {} on AH",
			entries.len(),
			depositors.len(),
			ah_count
		);
		Ok(PreCheckResult { rc_pre_payload: depositors, ah_pre_payload: ah_count })
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, usize>,
	) -> Result<(), CheckError> {
		let what = SYSTEM_ACCOUNT.to_string();
		let ah_accounts = entries_by_account(ctx.ah_after, &SYSTEM_ACCOUNT)?;

		let rc_left = ctx.rc_after.storage_entries(&MULTISIGS)?.len();
		if rc_left > 0 {
			log::warn!(target: LOG_TARGET, "{} multisig entries left on the Relay Chain", rc_left);
		}

		for depositor in &payload.rc_pre_payload {
			let ah_account = self.translator.translate_account(depositor);
			let Some(info) = ah_accounts.get(&ah_account) else {
				return Err(CheckError::Assertion(format!(
					"Multisig depositor {depositor} has no account on Asset Hub"
				)));
			};
			let data = field(info, "data", &what)?;
			let free = decode_u128(field(data, "free", &what)?, &what)?;
			let reserved = decode_u128(field(data, "reserved", &what)?, &what)?;
			ensure_check!(
				free > 0 || reserved > 0,
				"Multisig depositor {} has no balance on Asset Hub",
				depositor
			);
		}

		log::debug!(
			target: LOG_TARGET,
			"{} multisig operations on AH before the migration",
			payload.ah_pre_payload
		);
		Ok(())
	}
}
