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

//! Proxy delegations move to Asset Hub with their proxy type converted.
//!
//! Types that were removed from the Relay Chain or have no use on Asset Hub are not migrated.

use crate::{
	account_translation::AccountTranslator,
	ensure_check,
	snapshot::{Snapshot, StorageItem},
	types::{
		decode_account, field, CheckError, MigrationTest, PostCheckContext, PreCheckContext,
		PreCheckResult,
	},
	LOG_TARGET,
};
use serde_json::Value;
use sp_core::crypto::AccountId32;
use std::collections::{BTreeMap, BTreeSet};

pub const PROXIES: StorageItem = StorageItem::new("Proxy", "Proxies");

/// Proxy types of the Relay Chain, by encoded index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RcProxyType {
	Any = 0,
	NonTransfer = 1,
	Governance = 2,
	Staking = 3,
	SudoBalances = 4,
	IdentityJudgement = 5,
	CancelProxy = 6,
	Auction = 7,
	NominationPools = 8,
	ParaRegistration = 9,
}

/// Proxy types of Asset Hub, by encoded index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AhProxyType {
	Any = 0,
	NonTransfer = 1,
	CancelProxy = 2,
	Assets = 3,
	AssetOwner = 4,
	AssetManager = 5,
	Collator = 6,
	Governance = 7,
	Staking = 8,
	NominationPools = 9,
}

impl RcProxyType {
	const ALL: [(Self, &'static str); 10] = [
		(Self::Any, "Any"),
		(Self::NonTransfer, "NonTransfer"),
		(Self::Governance, "Governance"),
		(Self::Staking, "Staking"),
		(Self::SudoBalances, "SudoBalances"),
		(Self::IdentityJudgement, "IdentityJudgement"),
		(Self::CancelProxy, "CancelProxy"),
		(Self::Auction, "Auction"),
		(Self::NominationPools, "NominationPools"),
		(Self::ParaRegistration, "ParaRegistration"),
	];

	/// The Asset Hub type a delegation of this type becomes, if it is migrated at all.
	pub fn to_ah(self) -> Option<AhProxyType> {
		match self {
			Self::Any => Some(AhProxyType::Any),
			Self::NonTransfer => Some(AhProxyType::NonTransfer),
			Self::Governance => Some(AhProxyType::Governance),
			Self::Staking => Some(AhProxyType::Staking),
			Self::CancelProxy => Some(AhProxyType::CancelProxy),
			Self::NominationPools => Some(AhProxyType::NominationPools),
			Self::SudoBalances |
			Self::IdentityJudgement |
			Self::Auction |
			Self::ParaRegistration => None,
		}
	}

	fn from_value(value: &Value) -> Result<Self, CheckError> {
		lookup(&Self::ALL, value)
	}
}

impl AhProxyType {
	const ALL: [(Self, &'static str); 10] = [
		(Self::Any, "Any"),
		(Self::NonTransfer, "NonTransfer"),
		(Self::CancelProxy, "CancelProxy"),
		(Self::Assets, "Assets"),
		(Self::AssetOwner, "AssetOwner"),
		(Self::AssetManager, "AssetManager"),
		(Self::Collator, "Collator"),
		(Self::Governance, "Governance"),
		(Self::Staking, "Staking"),
		(Self::NominationPools, "NominationPools"),
	];

	fn from_value(value: &Value) -> Result<Self, CheckError> {
		lookup(&Self::ALL, value)
	}
}

/// Proxy types are dumped either by index or by variant name.
fn lookup<T: Copy>(all: &[(T, &'static str)], value: &Value) -> Result<T, CheckError> {
	let found = match value {
		Value::Number(n) => n.as_u64().and_then(|i| all.get(usize::try_from(i).ok()?)),
		Value::String(s) => all.iter().find(|(_, name)| *name == s.as_str()),
		_ => None,
	};
	found
		.map(|(t, _)| *t)
		.ok_or_else(|| CheckError::decode("proxy type", value.to_string()))
}

type Delegations<P> = BTreeMap<AccountId32, Vec<(P, AccountId32)>>;

/// Delegator to `(type, delegate)`, decoded from `(Vec<ProxyDefinition>, deposit)`.
fn delegations<P>(
	snapshot: &dyn Snapshot,
	decode_type: impl Fn(&Value) -> Result<P, CheckError>,
) -> Result<Delegations<P>, CheckError> {
	let what = PROXIES.to_string();
	let mut out = BTreeMap::new();

	for entry in snapshot.storage_entries(&PROXIES)? {
		let delegator = entry
			.key_arg()
			.ok_or_else(|| CheckError::decode(&what, "entry without key"))
			.and_then(|k| decode_account(k, &what))?;
		let definitions = entry
			.value
			.get(0)
			.and_then(Value::as_array)
			.ok_or_else(|| CheckError::decode(&what, "expected (definitions, deposit)"))?;

		let mut decoded = Vec::with_capacity(definitions.len());
		for definition in definitions {
			let kind = decode_type(field(definition, "proxyType", &what)?)?;
			let delegate = decode_account(field(definition, "delegate", &what)?, &what)?;
			decoded.push((kind, delegate));
		}
		if !decoded.is_empty() {
			out.insert(delegator, decoded);
		}
	}

	Ok(out)
}

pub struct ProxyCheck {
	translator: AccountTranslator,
}

impl ProxyCheck {
	pub fn new(translator: AccountTranslator) -> Self {
		Self { translator }
	}
}

impl MigrationTest for ProxyCheck {
	type RcPrePayload = Delegations<RcProxyType>;
	type AhPrePayload = Delegations<AhProxyType>;

	fn name(&self) -> &'static str {
		"proxy_pallet"
	}

	fn pre_check(
		&self,
		ctx: &PreCheckContext<'_>,
	) -> Result<PreCheckResult<Self::RcPrePayload, Self::AhPrePayload>, CheckError> {
		let rc = delegations(ctx.rc_before, RcProxyType::from_value)?;
		let ah = delegations(ctx.ah_before, AhProxyType::from_value)?;
		log::info!(
			target: LOG_TARGET,
			"Found {} delegators on the Relay Chain and {} on Asset Hub",
			rc.len(),
			ah.len()
		);
		Ok(PreCheckResult { rc_pre_payload: rc, ah_pre_payload: ah })
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: PreCheckResult<Self::RcPrePayload, Self::AhPrePayload>,
	) -> Result<(), CheckError> {
		let rc_left = ctx.rc_after.storage_entries(&PROXIES)?.len();
		ensure_check!(rc_left == 0, "RC proxies should be empty after migration, found {}", rc_left);

		let ah_post = delegations(ctx.ah_after, AhProxyType::from_value)?;
		let none = Vec::new();

		for (delegator, pre) in &payload.ah_pre_payload {
			let post = ah_post.get(delegator).unwrap_or(&none);
			for delegation in pre {
				ensure_check!(
					post.contains(delegation),
					"Missing AH pre-delegation after migration for {}: {:?} to {}",
					delegator,
					delegation.0,
					delegation.1
				);
			}
		}

		let mut skipped = BTreeSet::new();
		for (delegator, rc) in &payload.rc_pre_payload {
			let ah_delegator = self.translator.translate_account(delegator);
			let post = ah_post.get(&ah_delegator).unwrap_or(&none);

			for (rc_type, delegate) in rc {
				let Some(ah_type) = rc_type.to_ah() else {
					log::debug!(
						target: LOG_TARGET,
						"Skipping unsupported RC proxy type {:?} for {}",
						rc_type,
						delegator
					);
					skipped.insert(*rc_type);
					continue;
				};
				let ah_delegate = self.translator.translate_account(delegate);
				ensure_check!(
					post.contains(&(ah_type, ah_delegate)),
					"Missing translated RC delegation for {}: RC type {:?} should be converted to AH type {:?}",
					delegator,
					rc_type,
					ah_type
				);
			}
		}
		if !skipped.is_empty() {
			log::info!(target: LOG_TARGET, "Proxy types not migrated: {:?}", skipped);
		}

		Ok(())
	}
}
