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

//! Read-only access to the state of one chain at one historical block.
//!
//! The checks never talk to a node directly. They are handed four [`Snapshot`]s (Relay Chain and
//! Asset Hub, each before and after the migration) and only use the query interface defined here.
//! [`MemorySnapshot`] is the implementation used by the verifier binary (loaded from a JSON dump)
//! and by the tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sp_core::H256;
use std::{
	collections::{BTreeMap, HashMap},
	fmt,
	ops::Bound,
	path::Path,
};

/// Number of entries requested per page by [`Snapshot::storage_entries`].
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// The two chains taking part in the migration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChainKind {
	Relay,
	AssetHub,
}

impl fmt::Display for ChainKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChainKind::Relay => write!(f, "Relay Chain"),
			ChainKind::AssetHub => write!(f, "Asset Hub"),
		}
	}
}

/// A storage map or value, addressed by pallet and item name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StorageItem {
	pub pallet: &'static str,
	pub item: &'static str,
}

impl StorageItem {
	pub const fn new(pallet: &'static str, item: &'static str) -> Self {
		Self { pallet, item }
	}
}

impl fmt::Display for StorageItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.pallet, self.item)
	}
}

/// One decoded key/value pair of a storage map.
///
/// `key` holds the decoded key arguments; it is empty for storage values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEntry {
	#[serde(default)]
	pub key: Vec<Value>,
	pub value: Value,
}

impl StorageEntry {
	/// The first key argument, if any.
	pub fn key_arg(&self) -> Option<&Value> {
		self.key.first()
	}
}

/// Phase of block execution in which an event was deposited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
	ApplyExtrinsic(u32),
	Finalization,
	Initialization,
}

/// A decoded runtime event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEvent {
	pub section: String,
	pub method: String,
	#[serde(default)]
	pub data: Vec<Value>,
}

/// An event together with the phase it was emitted in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
	pub phase: Phase,
	pub event: RuntimeEvent,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
	#[error("events of block {0:?} are not available")]
	EventsUnavailable(H256),
	#[error("invalid snapshot dump: {0}")]
	InvalidDump(String),
	#[error(transparent)]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

/// Lookup of the events of a historical block.
pub trait EventSource {
	/// All events of the block with hash `block_hash`, in emission order.
	fn block_events(&self, block_hash: &H256) -> Result<Vec<EventRecord>, SnapshotError>;
}

/// Immutable view of the storage of one chain at one block.
pub trait Snapshot: EventSource {
	fn chain(&self) -> ChainKind;

	fn block_number(&self) -> u32;

	fn block_hash(&self) -> H256;

	/// Point lookup. `key` is empty for storage values.
	fn storage(&self, item: &StorageItem, key: &[Value]) -> Result<Option<Value>, SnapshotError>;

	/// Up to `page_size` entries of `item` that come strictly after `start_key`.
	fn storage_page(
		&self,
		item: &StorageItem,
		start_key: Option<&[Value]>,
		page_size: u32,
	) -> Result<Vec<StorageEntry>, SnapshotError>;

	/// Convenience for storage values.
	fn storage_value(&self, item: &StorageItem) -> Result<Option<Value>, SnapshotError> {
		self.storage(item, &[])
	}

	/// All entries of `item`, fetched page by page.
	///
	/// Stops at the first page that is shorter than [`DEFAULT_PAGE_SIZE`].
	fn storage_entries(&self, item: &StorageItem) -> Result<Vec<StorageEntry>, SnapshotError> {
		let mut entries: Vec<StorageEntry> = Vec::new();

		loop {
			let start_key = entries.last().map(|e| e.key.clone());
			let page = self.storage_page(item, start_key.as_deref(), DEFAULT_PAGE_SIZE)?;
			let exhausted = page.len() < DEFAULT_PAGE_SIZE as usize;
			entries.extend(page);

			if exhausted {
				break;
			}
		}

		log::trace!(
			target: crate::LOG_TARGET,
			"Read {} entries of {} from {} #{}",
			entries.len(),
			item,
			self.chain(),
			self.block_number()
		);
		Ok(entries)
	}
}

/// On-disk format of a [`MemorySnapshot`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDump {
	pub chain: ChainKind,
	pub block_number: u32,
	pub block_hash: String,
	/// Entries per `"Pallet.Item"`.
	#[serde(default)]
	pub storage: BTreeMap<String, Vec<StorageEntry>>,
	/// Event lists per block hash.
	#[serde(default)]
	pub events: BTreeMap<String, Vec<EventRecord>>,
}

/// Snapshot held fully in memory.
///
/// Map entries are ordered by the canonical JSON encoding of their key, which is also the order
/// in which pages are served.
#[derive(Clone, Debug)]
pub struct MemorySnapshot {
	chain: ChainKind,
	block_number: u32,
	block_hash: H256,
	storage: HashMap<String, BTreeMap<String, StorageEntry>>,
	events: HashMap<H256, Vec<EventRecord>>,
}

impl MemorySnapshot {
	pub fn new(chain: ChainKind, block_number: u32, block_hash: H256) -> Self {
		Self {
			chain,
			block_number,
			block_hash,
			storage: Default::default(),
			events: Default::default(),
		}
	}

	/// Insert or replace one entry.
	pub fn insert(&mut self, item: &StorageItem, key: Vec<Value>, value: Value) {
		self.insert_raw(item.to_string(), StorageEntry { key, value });
	}

	/// Remove one entry, returning its value.
	pub fn remove(&mut self, item: &StorageItem, key: &[Value]) -> Option<Value> {
		self.storage
			.get_mut(&item.to_string())?
			.remove(&canonical_key(key))
			.map(|entry| entry.value)
	}

	/// Builder variant of [`Self::insert`].
	pub fn with_entry(mut self, item: &StorageItem, key: Vec<Value>, value: Value) -> Self {
		self.insert(item, key, value);
		self
	}

	pub fn with_value(self, item: &StorageItem, value: Value) -> Self {
		self.with_entry(item, Vec::new(), value)
	}

	pub fn with_events(mut self, block_hash: H256, events: Vec<EventRecord>) -> Self {
		self.events.insert(block_hash, events);
		self
	}

	pub fn from_dump(dump: SnapshotDump) -> Result<Self, SnapshotError> {
		let block_hash = parse_block_hash(&dump.block_hash)?;
		let mut snapshot = Self::new(dump.chain, dump.block_number, block_hash);

		for (item, entries) in dump.storage {
			if !item.contains('.') {
				return Err(SnapshotError::InvalidDump(format!(
					"storage item `{item}` is not of the form `Pallet.Item`"
				)));
			}
			for entry in entries {
				snapshot.insert_raw(item.clone(), entry);
			}
		}
		for (hash, records) in dump.events {
			snapshot.events.insert(parse_block_hash(&hash)?, records);
		}

		Ok(snapshot)
	}

	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
		let file = std::fs::File::open(path.as_ref())?;
		let dump: SnapshotDump = serde_json::from_reader(std::io::BufReader::new(file))?;
		Self::from_dump(dump)
	}

	fn insert_raw(&mut self, item: String, entry: StorageEntry) {
		self.storage.entry(item).or_default().insert(canonical_key(&entry.key), entry);
	}
}

impl EventSource for MemorySnapshot {
	fn block_events(&self, block_hash: &H256) -> Result<Vec<EventRecord>, SnapshotError> {
		self.events
			.get(block_hash)
			.cloned()
			.ok_or(SnapshotError::EventsUnavailable(*block_hash))
	}
}

impl Snapshot for MemorySnapshot {
	fn chain(&self) -> ChainKind {
		self.chain
	}

	fn block_number(&self) -> u32 {
		self.block_number
	}

	fn block_hash(&self) -> H256 {
		self.block_hash
	}

	fn storage(&self, item: &StorageItem, key: &[Value]) -> Result<Option<Value>, SnapshotError> {
		Ok(self
			.storage
			.get(&item.to_string())
			.and_then(|entries| entries.get(&canonical_key(key)))
			.map(|entry| entry.value.clone()))
	}

	fn storage_page(
		&self,
		item: &StorageItem,
		start_key: Option<&[Value]>,
		page_size: u32,
	) -> Result<Vec<StorageEntry>, SnapshotError> {
		let Some(entries) = self.storage.get(&item.to_string()) else {
			return Ok(Vec::new());
		};
		let lower = match start_key {
			Some(key) => Bound::Excluded(canonical_key(key)),
			None => Bound::Unbounded,
		};

		Ok(entries
			.range::<String, _>((lower, Bound::Unbounded))
			.take(page_size as usize)
			.map(|(_, entry)| entry.clone())
			.collect())
	}
}

/// Parse a `0x`-prefixed (or bare) 32 byte hex block hash.
pub fn parse_block_hash(hash: &str) -> Result<H256, SnapshotError> {
	let raw = hash.strip_prefix("0x").unwrap_or(hash);
	let bytes = hex::decode(raw)
		.map_err(|e| SnapshotError::InvalidDump(format!("block hash `{hash}`: {e}")))?;
	if bytes.len() != 32 {
		return Err(SnapshotError::InvalidDump(format!(
			"block hash `{hash}` has {} bytes, expected 32",
			bytes.len()
		)));
	}
	Ok(H256::from_slice(&bytes))
}

fn canonical_key(key: &[Value]) -> String {
	// `Value` serializes maps with sorted keys, so equal keys encode equally.
	Value::Array(key.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use serde_json::json;

	const ITEM: StorageItem = StorageItem::new("Indices", "Accounts");

	fn snapshot_with(n: u32) -> MemorySnapshot {
		let mut snap = MemorySnapshot::new(ChainKind::Relay, 10, H256::repeat_byte(1));
		for i in 0..n {
			snap.insert(&ITEM, vec![json!(i)], json!({ "index": i }));
		}
		snap
	}

	#[test]
	fn paging_continues_after_start_key() {
		let snap = snapshot_with(5);
		let first = snap.storage_page(&ITEM, None, 2).unwrap();
		assert_eq!(first.len(), 2);

		let second = snap.storage_page(&ITEM, Some(&first[1].key), 2).unwrap();
		assert_eq!(second.len(), 2);
		assert!(second.iter().all(|e| !first.contains(e)));
	}

	#[test]
	fn storage_entries_reads_across_pages() {
		let n = DEFAULT_PAGE_SIZE * 2 + 3;
		let snap = snapshot_with(n);
		assert_eq!(snap.storage_entries(&ITEM).unwrap().len(), n as usize);
	}

	#[test]
	fn storage_entries_with_exact_multiple_of_page_size() {
		let snap = snapshot_with(DEFAULT_PAGE_SIZE);
		assert_eq!(snap.storage_entries(&ITEM).unwrap().len(), DEFAULT_PAGE_SIZE as usize);
	}

	#[test]
	fn absent_items_read_as_empty() {
		let snap = snapshot_with(0);
		assert!(snap.storage_entries(&StorageItem::new("Nope", "Nope")).unwrap().is_empty());
		assert_eq!(snap.storage(&ITEM, &[json!(1)]).unwrap(), None);
	}

	#[test]
	fn removed_entries_are_gone() {
		let mut snap = snapshot_with(3);
		assert_eq!(snap.remove(&ITEM, &[json!(1)]), Some(json!({ "index": 1 })));
		assert_eq!(snap.remove(&ITEM, &[json!(1)]), None);
		assert_eq!(snap.storage_entries(&ITEM).unwrap().len(), 2);
	}

	#[test]
	fn missing_events_are_an_error() {
		let snap = snapshot_with(0);
		assert_matches!(
			snap.block_events(&H256::zero()),
			Err(SnapshotError::EventsUnavailable(h)) if h == H256::zero()
		);
	}

	#[test]
	fn dump_roundtrips_through_json_file() {
		let dump = json!({
			"chain": "assetHub",
			"blockNumber": 42,
			"blockHash": format!("0x{}", "ab".repeat(32)),
			"storage": {
				"Vesting.StorageVersion": [{ "value": "V1" }],
				"Vesting.Vesting": [{ "key": ["5Alice"], "value": [{ "locked": 10 }] }]
			},
			"events": {
				format!("0x{}", "cd".repeat(32)): [{
					"phase": { "applyExtrinsic": 1 },
					"event": { "section": "system", "method": "ExtrinsicSuccess", "data": [] }
				}]
			}
		});
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ah.json");
		std::fs::write(&path, dump.to_string()).unwrap();

		let snap = MemorySnapshot::from_json_file(&path).unwrap();
		assert_eq!(snap.chain(), ChainKind::AssetHub);
		assert_eq!(snap.block_number(), 42);
		assert_eq!(
			snap.storage_value(&StorageItem::new("Vesting", "StorageVersion")).unwrap(),
			Some(json!("V1"))
		);
		let events = snap.block_events(&H256::repeat_byte(0xcd)).unwrap();
		assert_eq!(events[0].phase, Phase::ApplyExtrinsic(1));
	}

	#[test]
	fn malformed_dump_is_rejected() {
		let dump = SnapshotDump {
			chain: ChainKind::Relay,
			block_number: 1,
			block_hash: "0x1234".into(),
			storage: Default::default(),
			events: Default::default(),
		};
		assert_matches!(MemorySnapshot::from_dump(dump), Err(SnapshotError::InvalidDump(_)));
	}
}
