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

//! Accounts with a known translation must be found on Asset Hub under their new identity.

use super::{entries_by_account, SYSTEM_ACCOUNT};
use crate::{
	account_translation::AccountTranslator,
	ensure_check,
	types::{CheckError, MigrationTest, PostCheckContext, PreCheckContext, PreCheckResult},
	LOG_TARGET,
};
use sp_core::crypto::AccountId32;
use std::collections::BTreeSet;

pub struct AccountTranslationCheck {
	translator: AccountTranslator,
}

impl AccountTranslationCheck {
	pub fn new(translator: AccountTranslator) -> Self {
		Self { translator }
	}
}

impl MigrationTest for AccountTranslationCheck {
	/// Translated RC accounts that exist before the migration.
	type RcPrePayload = Vec<AccountId32>;
	type AhPrePayload = ();

	fn name(&self) -> &'static str {
		"account_translation"
	}

	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, ()>, CheckError> {
		let existing = entries_by_account(ctx.rc_before, &SYSTEM_ACCOUNT)?;
		let tables = self.translator.tables();

		let sources: BTreeSet<AccountId32> = tables
			.sovereign()
			.iter()
			.map(|e| e.source_key)
			.chain(tables.derived().iter().map(|d| d.entry.source_key))
			.map(AccountId32::new)
			.filter(|who| existing.contains_key(who))
			.collect();

		log::info!(
			target: LOG_TARGET,
			"{} of {} translated accounts exist on the Relay Chain",
			sources.len(),
			tables.sovereign().len() + tables.derived().len()
		);
		Ok(PreCheckResult { rc_pre_payload: sources.into_iter().collect(), ah_pre_payload: () })
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, ()>,
	) -> Result<(), CheckError> {
		let ah_accounts = entries_by_account(ctx.ah_after, &SYSTEM_ACCOUNT)?;

		for rc_account in payload.rc_pre_payload {
			let ah_account = self.translator.translate_account(&rc_account);
			ensure_check!(
				ah_account != rc_account,
				"Account {} has no translation",
				rc_account
			);
			ensure_check!(
				ah_accounts.contains_key(&ah_account),
				"Translated account {} of {} is missing on Asset Hub",
				ah_account,
				rc_account
			);
		}
		Ok(())
	}
}
