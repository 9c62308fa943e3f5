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

//! Resolution of nested calls.
//!
//! Batches, proxies, multisigs, sudo and the scheduler all wrap other calls. To find out who
//! actually dispatched a `utility.asDerivative` we walk the wrapped calls and track which account
//! is the effective origin at every level.

use crate::{
	snapshot::{EventRecord, EventSource, Phase, SnapshotError},
	LOG_TARGET,
};
use codec::Encode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sp_core::{
	crypto::{AccountId32, Ss58AddressFormat, Ss58Codec},
	hashing::blake2_256,
	H256,
};
use std::fmt;

/// One decoded call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallNode {
	pub section: String,
	pub method: String,
	#[serde(default)]
	pub args: Vec<Value>,
}

impl CallNode {
	pub fn new(section: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
		Self { section: section.into(), method: method.into(), args }
	}

	/// Interpret a call argument as a call. `None` if it does not have the shape of one.
	pub fn from_value(value: &Value) -> Option<Self> {
		let obj = value.as_object()?;
		let section = obj.get("section")?.as_str()?;
		let method = obj.get("method")?.as_str()?;
		let args = match obj.get("args") {
			Some(Value::Array(args)) => args.clone(),
			None => Vec::new(),
			Some(_) => return None,
		};

		Some(Self::new(section, method, args))
	}

	pub fn to_value(&self) -> Value {
		serde_json::json!({ "section": self.section, "method": self.method, "args": self.args })
	}

	fn call_arg(&self, index: usize) -> Option<CallNode> {
		self.args.get(index).and_then(Self::from_value)
	}
}

impl fmt::Display for CallNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.section, self.method)
	}
}

/// The call shapes the resolver knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
	/// `utility.asDerivative(index, call)`.
	AsDerivative,
	/// `utility.batch|batchAll|forceBatch(calls)`.
	Batch,
	/// `proxy.proxy|proxyAnnounced(real, force_proxy_type, call, ..)`.
	Proxy,
	/// `multisig.asMulti(threshold, other_signatories, maybe_timepoint, call, max_weight)`.
	AsMulti,
	/// `multisig.asMultiThreshold1(other_signatories, call)`.
	AsMultiThreshold1,
	/// `sudo.sudo(call)` and `sudo.sudoUncheckedWeight(call, weight)`.
	Sudo,
	/// `sudo.sudoAs(who, call)`.
	SudoAs,
	/// `scheduler.schedule|scheduleAfter(when, maybe_periodic, priority, call)`.
	Schedule,
	/// `scheduler.scheduleNamed|scheduleNamedAfter(id, when, maybe_periodic, priority, call)`.
	ScheduleNamed,
	/// Calls of a wrapping pallet that never carry an executable inner call, and the governance
	/// pallets that only store proposals.
	Inert,
	/// Anything else.
	Other,
}

impl CallKind {
	pub fn of(call: &CallNode) -> Self {
		match (call.section.as_str(), call.method.as_str()) {
			("utility", "asDerivative") => CallKind::AsDerivative,
			("utility", "batch" | "batchAll" | "forceBatch") => CallKind::Batch,
			("proxy", "proxy" | "proxyAnnounced") => CallKind::Proxy,
			(
				"proxy",
				"anonymous" | "killAnonymous" | "createPure" | "killPure" | "addProxy" |
				"removeProxy" | "removeProxies" | "rejectAnnouncement" | "removeAnnouncement",
			) => CallKind::Inert,
			("multisig", "asMulti") => CallKind::AsMulti,
			("multisig", "asMultiThreshold1") => CallKind::AsMultiThreshold1,
			("multisig", "approveAsMulti" | "cancelAsMulti") => CallKind::Inert,
			("sudo", "sudo" | "sudoUncheckedWeight") => CallKind::Sudo,
			("sudo", "sudoAs") => CallKind::SudoAs,
			("scheduler", "schedule" | "scheduleAfter") => CallKind::Schedule,
			("scheduler", "scheduleNamed" | "scheduleNamedAfter") => CallKind::ScheduleNamed,
			("democracy" | "preimage", _) => CallKind::Inert,
			_ => CallKind::Other,
		}
	}
}

/// What a call wraps and under which origin the wrapped calls run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Unwrapped {
	pub inner_calls: Vec<CallNode>,
	pub signer_override: Option<String>,
	pub is_terminal: bool,
}

impl Unwrapped {
	fn inner(call: Option<CallNode>) -> Self {
		Self { inner_calls: call.into_iter().collect(), ..Default::default() }
	}

	/// `call` dispatched with `origin` as signer.
	///
	/// An origin that is not a plain account (e.g. `MultiAddress::Index`) is kept in its JSON
	/// rendering, so derivations below it are still found without a derived account.
	fn as_origin(origin: Option<&Value>, call: Option<CallNode>) -> Self {
		let signer_override =
			origin.map(|origin| account_from_value(origin).unwrap_or_else(|| origin.to_string()));
		Self { signer_override, ..Self::inner(call) }
	}
}

/// Open one level of `call`.
///
/// Arguments that are missing or do not decode as calls are treated as absent.
pub fn unwrap_call(call: &CallNode) -> Unwrapped {
	match CallKind::of(call) {
		CallKind::AsDerivative =>
			Unwrapped { is_terminal: true, ..Unwrapped::inner(call.call_arg(1)) },
		CallKind::Batch => Unwrapped {
			inner_calls: call
				.args
				.first()
				.and_then(Value::as_array)
				.map(|calls| calls.iter().filter_map(CallNode::from_value).collect())
				.unwrap_or_default(),
			..Default::default()
		},
		CallKind::Proxy => Unwrapped::as_origin(call.args.first(), call.call_arg(2)),
		CallKind::AsMulti => Unwrapped::inner(call.call_arg(3)),
		CallKind::AsMultiThreshold1 => Unwrapped::inner(call.call_arg(1)),
		CallKind::Sudo => Unwrapped::inner(call.call_arg(0)),
		CallKind::SudoAs => Unwrapped::as_origin(call.args.first(), call.call_arg(1)),
		CallKind::Schedule => Unwrapped::inner(call.call_arg(3)),
		CallKind::ScheduleNamed => Unwrapped::inner(call.call_arg(4)),
		CallKind::Inert | CallKind::Other => Unwrapped::default(),
	}
}

/// Extract an account from an argument: either a plain string or a `MultiAddress::Id`.
pub fn account_from_value(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Object(obj) => obj.get("id").or_else(|| obj.get("Id"))?.as_str().map(Into::into),
		_ => None,
	}
}

fn u64_from_value(value: &Value) -> Option<u64> {
	match value {
		Value::Number(n) => n.as_u64(),
		Value::String(s) => s.replace(',', "").parse().ok(),
		_ => None,
	}
}

/// Parse an account given as hex key or SS58 address.
pub fn parse_account(account: &str) -> Option<AccountId32> {
	let raw = account.strip_prefix("0x").unwrap_or(account);
	if raw.len() == 64 {
		if let Ok(bytes) = hex::decode(raw) {
			let bytes: [u8; 32] = bytes.try_into().ok()?;
			return Some(AccountId32::new(bytes));
		}
	}
	AccountId32::from_ss58check_with_version(account).ok().map(|(id, _)| id)
}

/// The account that `utility.asDerivative(index, ..)` dispatches from when sent by `who`.
pub fn derivative_account_id(who: &AccountId32, index: u16) -> AccountId32 {
	let entropy = (b"modlpy/utilisuba", who, index).using_encoded(blake2_256);
	AccountId32::new(entropy)
}

/// Outcome of the extrinsic that contained a resolved call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtrinsicOutcome {
	Success,
	/// Carries `section.Error` for module errors, the raw error otherwise.
	Failed(String),
	/// Neither success nor failure was recorded for the extrinsic.
	Unknown,
	/// The call was found inside a wrapper; the outcome of the extrinsic is reported at depth 0.
	Nested,
}

impl ExtrinsicOutcome {
	/// `Some(true|false)` for known outcomes, as written in the details CSV.
	pub fn success(&self) -> Option<bool> {
		match self {
			ExtrinsicOutcome::Success => Some(true),
			ExtrinsicOutcome::Failed(_) => Some(false),
			ExtrinsicOutcome::Unknown | ExtrinsicOutcome::Nested => None,
		}
	}
}

impl fmt::Display for ExtrinsicOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExtrinsicOutcome::Success => write!(f, "SUCCESS"),
			ExtrinsicOutcome::Failed(e) => write!(f, "FAILED ({e})"),
			ExtrinsicOutcome::Unknown => write!(f, "UNKNOWN"),
			ExtrinsicOutcome::Nested => write!(f, "NESTED"),
		}
	}
}

/// Where the top-level call being resolved came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveContext {
	pub block_number: u32,
	pub block_hash: H256,
	pub extrinsic_index: u32,
	pub signer: String,
}

/// A `utility.asDerivative` found while resolving.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolutionEvent {
	pub block_number: u32,
	pub extrinsic_index: u32,
	pub depth: u32,
	pub effective_signer: String,
	pub derivation_index: u16,
	/// `None` if the effective signer is not a parseable account.
	pub derived_account: Option<String>,
	pub inner_call: Option<CallNode>,
	pub outcome: ExtrinsicOutcome,
}

impl ResolutionEvent {
	pub fn key(&self) -> DerivationKey {
		DerivationKey {
			block_number: self.block_number,
			extrinsic_index: self.extrinsic_index,
			signer: self.effective_signer.clone(),
			derivation_index: self.derivation_index,
		}
	}
}

/// Identity of a resolved derivation. Callers aggregating events drop repeated keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DerivationKey {
	pub block_number: u32,
	pub extrinsic_index: u32,
	pub signer: String,
	pub derivation_index: u16,
}

/// Walks call trees and reports every `utility.asDerivative` with its effective signer.
pub struct CallResolver<'a, E: EventSource + ?Sized> {
	events: &'a E,
	format: Ss58AddressFormat,
}

impl<'a, E: EventSource + ?Sized> CallResolver<'a, E> {
	pub fn new(events: &'a E, format: Ss58AddressFormat) -> Self {
		Self { events, format }
	}

	/// Resolve `call`, which sits at `depth` below the extrinsic described by `ctx`.
	///
	/// Events are handed to `sink` in discovery order: batch elements are visited in order and a
	/// derivation is reported before anything it wraps. Only fails if the events of the block are
	/// needed and cannot be read.
	pub fn resolve<F: FnMut(ResolutionEvent)>(
		&self,
		call: &CallNode,
		ctx: &ResolveContext,
		depth: u32,
		sink: &mut F,
	) -> Result<(), SnapshotError> {
		self.resolve_as(call, ctx, &ctx.signer, depth, sink)
	}

	fn resolve_as<F: FnMut(ResolutionEvent)>(
		&self,
		call: &CallNode,
		ctx: &ResolveContext,
		signer: &str,
		depth: u32,
		sink: &mut F,
	) -> Result<(), SnapshotError> {
		let unwrapped = unwrap_call(call);

		if unwrapped.is_terminal {
			let Some(index) = call
				.args
				.first()
				.and_then(u64_from_value)
				.and_then(|i| u16::try_from(i).ok())
			else {
				log::debug!(
					target: LOG_TARGET,
					"Ignoring malformed {} in block #{} extrinsic {}",
					call,
					ctx.block_number,
					ctx.extrinsic_index
				);
				return Ok(());
			};

			let outcome = if depth == 0 {
				self.extrinsic_outcome(&ctx.block_hash, ctx.extrinsic_index)?
			} else {
				ExtrinsicOutcome::Nested
			};
			let derived_account = parse_account(signer).map(|who| {
				derivative_account_id(&who, index).to_ss58check_with_version(self.format)
			});

			log::debug!(
				target: LOG_TARGET,
				"Found asDerivative in block #{} extrinsic {}: index {}, signer {}, depth {}, {}",
				ctx.block_number,
				ctx.extrinsic_index,
				index,
				signer,
				depth,
				outcome
			);

			sink(ResolutionEvent {
				block_number: ctx.block_number,
				extrinsic_index: ctx.extrinsic_index,
				depth,
				effective_signer: signer.to_string(),
				derivation_index: index,
				derived_account,
				inner_call: unwrapped.inner_calls.first().cloned(),
				outcome,
			});
		}

		let signer = unwrapped.signer_override.as_deref().unwrap_or(signer);
		for inner in &unwrapped.inner_calls {
			self.resolve_as(inner, ctx, signer, depth + 1, sink)?;
		}

		Ok(())
	}

	/// Outcome of extrinsic `index` according to the `system` events of its block.
	pub fn extrinsic_outcome(
		&self,
		block_hash: &H256,
		index: u32,
	) -> Result<ExtrinsicOutcome, SnapshotError> {
		let records = self.events.block_events(block_hash)?;
		Ok(outcome_from_events(&records, index))
	}
}

fn outcome_from_events(records: &[EventRecord], index: u32) -> ExtrinsicOutcome {
	records
		.iter()
		.filter(|r| r.phase == Phase::ApplyExtrinsic(index) && r.event.section == "system")
		.find_map(|r| match r.event.method.as_str() {
			"ExtrinsicSuccess" => Some(ExtrinsicOutcome::Success),
			"ExtrinsicFailed" => Some(ExtrinsicOutcome::Failed(
				r.event.data.first().map(dispatch_error_to_string).unwrap_or_default(),
			)),
			_ => None,
		})
		.unwrap_or(ExtrinsicOutcome::Unknown)
}

/// `section.Name` for decoded module errors, the JSON of the error otherwise.
fn dispatch_error_to_string(error: &Value) -> String {
	let module = error.get("module").or_else(|| error.get("Module"));
	if let Some(module) = module {
		let section = module.get("section").and_then(Value::as_str);
		let name = module.get("name").or_else(|| module.get("error")).and_then(Value::as_str);
		if let (Some(section), Some(name)) = (section, name) {
			return format!("{section}.{name}");
		}
	}

	match error {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::snapshot::RuntimeEvent;
	use assert_matches::assert_matches;
	use serde_json::json;
	use std::collections::HashMap;

	const SIGNER: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
	const REAL: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

	#[derive(Default)]
	struct Events(HashMap<H256, Vec<EventRecord>>);

	impl EventSource for Events {
		fn block_events(&self, block_hash: &H256) -> Result<Vec<EventRecord>, SnapshotError> {
			self.0.get(block_hash).cloned().ok_or(SnapshotError::EventsUnavailable(*block_hash))
		}
	}

	fn record(index: u32, method: &str, data: Vec<Value>) -> EventRecord {
		EventRecord {
			phase: Phase::ApplyExtrinsic(index),
			event: RuntimeEvent { section: "system".into(), method: method.into(), data },
		}
	}

	fn ctx() -> ResolveContext {
		ResolveContext {
			block_number: 100,
			block_hash: H256::repeat_byte(7),
			extrinsic_index: 2,
			signer: SIGNER.into(),
		}
	}

	fn events_ok() -> Events {
		Events(HashMap::from([(
			H256::repeat_byte(7),
			vec![record(1, "ExtrinsicFailed", vec![json!("Other")]), record(2, "ExtrinsicSuccess", vec![])],
		)]))
	}

	fn remark() -> Value {
		CallNode::new("system", "remark", vec![json!("0x00")]).to_value()
	}

	fn as_derivative(index: u16, inner: Value) -> CallNode {
		CallNode::new("utility", "asDerivative", vec![json!(index), inner])
	}

	fn resolve(call: &CallNode, events: &Events) -> Vec<ResolutionEvent> {
		let resolver = CallResolver::new(events, Ss58AddressFormat::custom(42));
		let mut found = Vec::new();
		resolver.resolve(call, &ctx(), 0, &mut |e| found.push(e)).unwrap();
		found
	}

	#[test]
	fn direct_as_derivative_reports_outcome() {
		let found = resolve(&as_derivative(5, remark()), &events_ok());

		assert_eq!(found.len(), 1);
		let e = &found[0];
		assert_eq!((e.block_number, e.extrinsic_index, e.depth), (100, 2, 0));
		assert_eq!(e.derivation_index, 5);
		assert_eq!(e.outcome, ExtrinsicOutcome::Success);
		assert_eq!(e.inner_call.as_ref().map(|c| c.to_string()), Some("system.remark".into()));

		let who = parse_account(SIGNER).unwrap();
		assert_eq!(
			e.derived_account.as_deref(),
			Some(
				derivative_account_id(&who, 5)
					.to_ss58check_with_version(Ss58AddressFormat::custom(42))
					.as_str()
			)
		);
	}

	#[test]
	fn batch_all_yields_one_event_per_derivation() {
		let call = CallNode::new(
			"utility",
			"batchAll",
			vec![json!([as_derivative(3, remark()).to_value(), as_derivative(7, remark()).to_value()])],
		);
		let keys: Vec<_> = resolve(&call, &events_ok()).iter().map(|e| e.key()).collect();

		let key = |i| DerivationKey {
			block_number: 100,
			extrinsic_index: 2,
			signer: SIGNER.into(),
			derivation_index: i,
		};
		assert_eq!(keys, vec![key(3), key(7)]);
	}

	#[test]
	fn proxy_substitutes_the_real_account() {
		let call = CallNode::new(
			"proxy",
			"proxy",
			vec![json!({ "id": REAL }), Value::Null, as_derivative(5, remark()).to_value()],
		);
		let found = resolve(&call, &events_ok());

		assert_eq!(found.len(), 1);
		assert_eq!(found[0].effective_signer, REAL);
		assert_eq!(found[0].depth, 1);
		assert_eq!(found[0].outcome, ExtrinsicOutcome::Nested);
	}

	#[test]
	fn sudo_as_substitutes_who_and_multisig_does_not() {
		let sudo_as = CallNode::new(
			"sudo",
			"sudoAs",
			vec![json!(REAL), as_derivative(1, remark()).to_value()],
		);
		assert_eq!(resolve(&sudo_as, &events_ok())[0].effective_signer, REAL);

		let as_multi = CallNode::new(
			"multisig",
			"asMulti",
			vec![json!(2), json!([REAL]), Value::Null, as_derivative(1, remark()).to_value(), json!({})],
		);
		assert_eq!(resolve(&as_multi, &events_ok())[0].effective_signer, SIGNER);
	}

	#[test]
	fn non_id_origins_still_resolve_inner_calls() {
		let index = json!({ "index": 7 });
		let proxy = CallNode::new(
			"proxy",
			"proxy",
			vec![index.clone(), Value::Null, as_derivative(5, remark()).to_value()],
		);
		let sudo_as =
			CallNode::new("sudo", "sudoAs", vec![index, as_derivative(6, remark()).to_value()]);

		for (call, derivation_index) in [(proxy, 5), (sudo_as, 6)] {
			let found = resolve(&call, &events_ok());
			assert_eq!(found.len(), 1, "{call} must resolve");
			assert_eq!(found[0].derivation_index, derivation_index);
			assert_eq!(found[0].effective_signer, r#"{"index":7}"#);
			assert_eq!(found[0].derived_account, None);
		}
	}

	#[test]
	fn depth_grows_by_one_per_wrapper() {
		// scheduleNamed(sudo(asMultiThreshold1(asDerivative(asDerivative(remark)))))
		let innermost = as_derivative(2, remark());
		let derivative = as_derivative(1, innermost.to_value());
		let threshold1 =
			CallNode::new("multisig", "asMultiThreshold1", vec![json!([]), derivative.to_value()]);
		let sudo = CallNode::new("sudo", "sudo", vec![threshold1.to_value()]);
		let scheduled = CallNode::new(
			"scheduler",
			"scheduleNamed",
			vec![json!("0x01"), json!(10), Value::Null, json!(0), sudo.to_value()],
		);

		let found = resolve(&scheduled, &events_ok());
		let depths: Vec<_> = found.iter().map(|e| (e.derivation_index, e.depth)).collect();
		assert_eq!(depths, vec![(1, 3), (2, 4)]);
	}

	#[test]
	fn inert_and_malformed_calls_stop_recursion() {
		let wrapped = as_derivative(1, remark()).to_value();
		let inert = [
			CallNode::new("democracy", "propose", vec![wrapped.clone()]),
			CallNode::new("preimage", "notePreimage", vec![wrapped.clone()]),
			CallNode::new("multisig", "approveAsMulti", vec![json!(2), json!([]), Value::Null, wrapped.clone()]),
			CallNode::new("proxy", "removeProxies", vec![wrapped.clone()]),
			// inner call missing
			CallNode::new("multisig", "asMulti", vec![json!(2), json!([])]),
			// inner call not a call
			CallNode::new("sudo", "sudo", vec![json!({ "section": "utility" })]),
			// index not a number
			CallNode::new("utility", "asDerivative", vec![json!("abc"), remark()]),
		];

		for call in inert {
			assert!(resolve(&call, &events_ok()).is_empty(), "{call} must not resolve");
		}
	}

	#[test]
	fn as_derivative_without_inner_call_is_still_reported() {
		let call = CallNode::new("utility", "asDerivative", vec![json!(4)]);
		let found = resolve(&call, &events_ok());
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].inner_call, None);
	}

	#[test]
	fn failed_extrinsics_decode_module_errors() {
		let error = json!({ "module": { "section": "balances", "name": "InsufficientBalance" } });
		let events = Events(HashMap::from([(
			H256::repeat_byte(7),
			vec![record(2, "ExtrinsicFailed", vec![error])],
		)]));

		assert_eq!(
			resolve(&as_derivative(0, remark()), &events)[0].outcome,
			ExtrinsicOutcome::Failed("balances.InsufficientBalance".into())
		);
	}

	#[test]
	fn missing_outcome_is_unknown_and_missing_events_fail() {
		let events = Events(HashMap::from([(H256::repeat_byte(7), vec![])]));
		assert_eq!(resolve(&as_derivative(0, remark()), &events)[0].outcome, ExtrinsicOutcome::Unknown);

		let no_events = Events::default();
		let resolver = CallResolver::new(&no_events, Ss58AddressFormat::custom(42));
		assert_matches!(
			resolver.resolve(&as_derivative(0, remark()), &ctx(), 0, &mut |_| {}),
			Err(SnapshotError::EventsUnavailable(_))
		);
	}

	#[test]
	fn unparseable_signer_has_no_derived_account() {
		let mut context = ctx();
		context.signer = "not-an-account".into();
		let events = events_ok();
		let resolver = CallResolver::new(&events, Ss58AddressFormat::custom(42));
		let mut found = Vec::new();
		resolver.resolve(&as_derivative(1, remark()), &context, 0, &mut |e| found.push(e)).unwrap();
		assert_eq!(found[0].derived_account, None);
	}

	#[test]
	fn derivative_accounts_differ_per_index() {
		let who = parse_account(SIGNER).unwrap();
		assert_ne!(derivative_account_id(&who, 0), derivative_account_id(&who, 1));
		assert_eq!(parse_account(&format!("0x{}", hex::encode(<[u8; 32]>::from(who.clone())))), Some(who));
	}
}
