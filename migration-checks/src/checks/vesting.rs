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

//! Vesting schedules move to Asset Hub unchanged, keyed by the translated account.

use super::{count, entries_by_account};
use crate::{
	account_translation::AccountTranslator,
	ensure_check,
	snapshot::{Snapshot, StorageItem},
	types::{CheckError, MigrationTest, PostCheckContext, PreCheckContext, PreCheckResult},
	LOG_TARGET,
};
use serde_json::Value;
use sp_core::crypto::AccountId32;
use std::collections::BTreeMap;

pub const VESTING: StorageItem = StorageItem::new("Vesting", "Vesting");
pub const STORAGE_VERSION: StorageItem = StorageItem::new("Vesting", "StorageVersion");

pub struct VestingCheck {
	translator: AccountTranslator,
}

impl VestingCheck {
	pub fn new(translator: AccountTranslator) -> Self {
		Self { translator }
	}
}

/// `V0` when never written.
fn storage_version(snapshot: &dyn Snapshot) -> Result<String, CheckError> {
	match snapshot.storage_value(&STORAGE_VERSION)? {
		None => Ok("V0".into()),
		Some(Value::String(v)) => Ok(v),
		Some(other) => Err(CheckError::decode(STORAGE_VERSION.to_string(), other.to_string())),
	}
}

impl MigrationTest for VestingCheck {
	/// Schedules per RC account.
	type RcPrePayload = BTreeMap<AccountId32, Value>;
	type AhPrePayload = ();

	fn name(&self) -> &'static str {
		"vesting_pallet"
	}

	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, ()>, CheckError> {
		let ah_version = storage_version(ctx.ah_before)?;
		ensure_check!(
			ah_version == "V0",
			"Vesting storage version on Asset Hub should be V0 before the migration, got {}",
			ah_version
		);
		let ah_entries = count(ctx.ah_before, &VESTING)?;
		ensure_check!(
			ah_entries == 0,
			"Vesting entries on Asset Hub should be empty before the migration, found {}",
			ah_entries
		);

		let schedules = entries_by_account(ctx.rc_before, &VESTING)?;
		log::info!(
			target: LOG_TARGET,
			"Found {} vesting accounts on the Relay Chain",
			schedules.len()
		);

		Ok(PreCheckResult { rc_pre_payload: schedules, ah_pre_payload: () })
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, ()>,
	) -> Result<(), CheckError> {
		let rc_entries = count(ctx.rc_after, &VESTING)?;
		ensure_check!(
			rc_entries == 0,
			"Vesting entries on the Relay Chain should be empty after the migration, found {}",
			rc_entries
		);

		let ah_schedules = entries_by_account(ctx.ah_after, &VESTING)?;
		for (rc_account, rc_schedules) in &payload.rc_pre_payload {
			let ah_account = self.translator.translate_account(rc_account);
			let Some(ah) = ah_schedules.get(&ah_account) else {
				return Err(CheckError::Assertion(format!(
					"Vesting schedules of {rc_account} are missing on Asset Hub (as {ah_account})"
				)));
			};
			ensure_check!(
				ah == rc_schedules,
				"Vesting schedules of {} differ: Relay Chain {}, Asset Hub {}",
				rc_account,
				rc_schedules,
				ah
			);
		}
		ensure_check!(
			ah_schedules.len() == payload.rc_pre_payload.len(),
			"Asset Hub has {} vesting accounts, the Relay Chain had {}",
			ah_schedules.len(),
			payload.rc_pre_payload.len()
		);

		let ah_version = storage_version(ctx.ah_after)?;
		ensure_check!(
			ah_version == "V1",
			"Vesting storage version on Asset Hub should be V1 after the migration, got {}",
			ah_version
		);
		Ok(())
	}
}
