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

//! Scanning decoded blocks for `utility.asDerivative` usage.
//!
//! Accounts derived from parachain sovereign accounts need an explicit translation entry. This
//! module finds which derivations were actually used on chain.

use crate::{
	call::{CallNode, CallResolver, DerivationKey, ResolutionEvent, ResolveContext},
	snapshot::{parse_block_hash, EventRecord, EventSource, SnapshotError},
	LOG_TARGET,
};
use serde::{Deserialize, Serialize};
use sp_core::H256;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Header of the derivation details CSV.
pub const CSV_HEADER: &str = "block,extrinsicIndex,signer,derivativeIndex,derivedAccount,success";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extrinsic {
	/// `None` for inherents and unsigned extrinsics.
	#[serde(default)]
	pub signer: Option<String>,
	pub call: CallNode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
	pub number: u32,
	pub hash: String,
	#[serde(default)]
	pub extrinsics: Vec<Extrinsic>,
	#[serde(default)]
	pub events: Vec<EventRecord>,
}

/// A range of decoded blocks together with their events.
#[derive(Clone, Debug, Default)]
pub struct BlockRange {
	blocks: Vec<(H256, Block)>,
	events: HashMap<H256, Vec<EventRecord>>,
}

impl BlockRange {
	pub fn new(mut blocks: Vec<Block>) -> Result<Self, SnapshotError> {
		blocks.sort_by_key(|b| b.number);

		let mut range = Self::default();
		for block in blocks {
			let hash = parse_block_hash(&block.hash)?;
			range.events.insert(hash, block.events.clone());
			range.blocks.push((hash, block));
		}
		Ok(range)
	}

	pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, SnapshotError> {
		let file = std::fs::File::open(path.as_ref())?;
		let blocks: Vec<Block> = serde_json::from_reader(std::io::BufReader::new(file))?;
		Self::new(blocks)
	}

	pub fn blocks(&self) -> impl Iterator<Item = (&H256, &Block)> {
		self.blocks.iter().map(|(h, b)| (h, b))
	}

	pub fn first_block(&self) -> Option<u32> {
		self.blocks.first().map(|(_, b)| b.number)
	}

	pub fn last_block(&self) -> Option<u32> {
		self.blocks.last().map(|(_, b)| b.number)
	}
}

impl EventSource for BlockRange {
	fn block_events(&self, block_hash: &H256) -> Result<Vec<EventRecord>, SnapshotError> {
		self.events.get(block_hash).cloned().ok_or(SnapshotError::EventsUnavailable(*block_hash))
	}
}

/// Resolve every signed extrinsic of `block`, in extrinsic order.
pub fn scan_block<E: EventSource + ?Sized>(
	resolver: &CallResolver<'_, E>,
	hash: H256,
	block: &Block,
	collector: &mut DerivationCollector,
) -> Result<(), SnapshotError> {
	for (index, extrinsic) in block.extrinsics.iter().enumerate() {
		collector.total_extrinsics += 1;
		let Some(signer) = &extrinsic.signer else { continue };
		*collector.sections.entry(extrinsic.call.section.clone()).or_default() += 1;

		let ctx = ResolveContext {
			block_number: block.number,
			block_hash: hash,
			extrinsic_index: index as u32,
			signer: signer.clone(),
		};
		resolver.resolve(&extrinsic.call, &ctx, 0, &mut |event| {
			collector.record(event);
		})?;
	}
	Ok(())
}

/// Aggregates resolution events, dropping repeated [`DerivationKey`]s.
#[derive(Debug, Default)]
pub struct DerivationCollector {
	seen: HashSet<DerivationKey>,
	unique_accounts: BTreeSet<String>,
	events: Vec<ResolutionEvent>,
	pub duplicates_skipped: u64,
	pub total_extrinsics: u64,
	/// Signed extrinsics per top-level section.
	pub sections: BTreeMap<String, u64>,
}

impl DerivationCollector {
	/// Returns whether the event was new.
	pub fn record(&mut self, event: ResolutionEvent) -> bool {
		if !self.seen.insert(event.key()) {
			self.duplicates_skipped += 1;
			log::warn!(
				target: LOG_TARGET,
				"Skipping duplicate: block {}, extrinsic {}, index {}",
				event.block_number,
				event.extrinsic_index,
				event.derivation_index
			);
			return false;
		}

		if let Some(account) = &event.derived_account {
			self.unique_accounts.insert(account.clone());
		}
		self.events.push(event);
		true
	}

	/// Unique events in discovery order.
	pub fn events(&self) -> &[ResolutionEvent] {
		&self.events
	}

	/// Unique events recorded.
	pub fn total(&self) -> usize {
		self.events.len()
	}

	pub fn unique_derived_accounts(&self) -> usize {
		self.unique_accounts.len()
	}

	pub fn summary(&self, network: &str, range: &BlockRange) -> ScanSummary {
		ScanSummary {
			network: network.to_string(),
			start_block: range.first_block(),
			end_block: range.last_block(),
			total_derivatives: self.total() as u64 + self.duplicates_skipped,
			unique_derived_accounts: self.unique_derived_accounts() as u64,
			duplicates_skipped: self.duplicates_skipped,
		}
	}
}

/// One CSV line (without newline) for `event`.
pub fn csv_row(event: &ResolutionEvent) -> String {
	let success = match event.outcome.success() {
		Some(true) => "true",
		Some(false) => "false",
		None => "",
	};
	format!(
		"{},{},{},{},{},{}",
		event.block_number,
		event.extrinsic_index,
		event.effective_signer,
		event.derivation_index,
		event.derived_account.as_deref().unwrap_or_default(),
		success
	)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
	pub network: String,
	pub start_block: Option<u32>,
	pub end_block: Option<u32>,
	/// Every discovery, including the skipped duplicates.
	pub total_derivatives: u64,
	pub unique_derived_accounts: u64,
	pub duplicates_skipped: u64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		call::ExtrinsicOutcome,
		snapshot::{Phase, RuntimeEvent},
	};
	use serde_json::json;
	use sp_core::crypto::Ss58AddressFormat;

	const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

	fn derivative(index: u16) -> serde_json::Value {
		json!({ "section": "utility", "method": "asDerivative", "args": [index, {
			"section": "balances", "method": "transferKeepAlive", "args": []
		}] })
	}

	fn block(number: u32, extrinsics: Vec<Extrinsic>) -> Block {
		Block {
			number,
			hash: format!("0x{}", hex::encode([number as u8; 32])),
			extrinsics,
			events: vec![EventRecord {
				phase: Phase::ApplyExtrinsic(1),
				event: RuntimeEvent {
					section: "system".into(),
					method: "ExtrinsicSuccess".into(),
					data: vec![],
				},
			}],
		}
	}

	fn scan(range: &BlockRange) -> DerivationCollector {
		let resolver = CallResolver::new(range, Ss58AddressFormat::custom(0));
		let mut collector = DerivationCollector::default();
		for (hash, block) in range.blocks() {
			scan_block(&resolver, *hash, block, &mut collector).unwrap();
		}
		collector
	}

	#[test]
	fn scans_signed_extrinsics_only() {
		let inherent =
			Extrinsic { signer: None, call: CallNode::from_value(&derivative(1)).unwrap() };
		let signed =
			Extrinsic { signer: Some(ALICE.into()), call: CallNode::from_value(&derivative(2)).unwrap() };
		let range = BlockRange::new(vec![block(5, vec![inherent, signed])]).unwrap();

		let collector = scan(&range);
		assert_eq!(collector.total(), 1);
		assert_eq!(collector.total_extrinsics, 2);
		assert_eq!(collector.sections.get("utility"), Some(&1));

		let event = &collector.events()[0];
		assert_eq!((event.extrinsic_index, event.derivation_index), (1, 2));
		assert_eq!(event.outcome, ExtrinsicOutcome::Success);
		assert!(csv_row(event).ends_with(",true"));
	}

	#[test]
	fn repeated_keys_are_counted_not_recorded() {
		// The same derivation reachable twice through one batch.
		let batch = CallNode::new("utility", "batch", vec![json!([derivative(3), derivative(3)])]);
		let range = BlockRange::new(vec![block(
			9,
			vec![Extrinsic { signer: Some(ALICE.into()), call: batch }],
		)])
		.unwrap();

		let collector = scan(&range);
		assert_eq!(collector.total(), 1);
		assert_eq!(collector.duplicates_skipped, 1);
		assert_eq!(collector.unique_derived_accounts(), 1);

		let summary = collector.summary("polkadot", &range);
		assert_eq!(summary.start_block, Some(9));
		// Discoveries, duplicates included.
		assert_eq!(summary.total_derivatives, 2);
		assert_eq!(summary.duplicates_skipped, 1);
	}

	#[test]
	fn nested_rows_have_empty_success_column() {
		let event = ResolutionEvent {
			block_number: 1,
			extrinsic_index: 0,
			depth: 1,
			effective_signer: ALICE.into(),
			derivation_index: 4,
			derived_account: None,
			inner_call: None,
			outcome: ExtrinsicOutcome::Nested,
		};
		assert_eq!(csv_row(&event), format!("1,0,{ALICE},4,,"));
	}
}
