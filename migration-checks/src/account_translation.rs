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

//! Translation of Relay Chain accounts to the account that holds their state on Asset Hub.
//!
//! Most accounts keep their identity across the migration. The exceptions are parachain sovereign
//! accounts (`para` + id on the Relay, `sibl` + id on Asset Hub) and accounts derived from them
//! through `utility.asDerivative`. Both are listed in [`crate::sovereign_account_translation`].

use crate::{
	network::Network,
	sovereign_account_translation::{DERIVED_TRANSLATIONS, SOV_TRANSLATIONS},
	LOG_TARGET,
};
use sp_core::crypto::{AccountId32, Ss58AddressFormat, Ss58Codec};
use std::sync::Arc;

/// One statically known account correspondence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationEntry {
	pub source_key: [u8; 32],
	pub source_address: String,
	pub destination_key: [u8; 32],
	pub destination_address: String,
}

impl TranslationEntry {
	pub fn new(source_key: [u8; 32], destination_key: [u8; 32], format: Ss58AddressFormat) -> Self {
		Self {
			source_key,
			source_address: AccountId32::new(source_key).to_ss58check_with_version(format),
			destination_key,
			destination_address: AccountId32::new(destination_key)
				.to_ss58check_with_version(format),
		}
	}

	/// Lower case hex of the source key, without `0x`. This is the sort key of the tables.
	pub fn source_hex(&self) -> String {
		hex::encode(self.source_key)
	}
}

impl AsRef<TranslationEntry> for TranslationEntry {
	fn as_ref(&self) -> &TranslationEntry {
		self
	}
}

/// A translated account that was derived from a sovereign account with `derivation_index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedTranslationEntry {
	pub entry: TranslationEntry,
	pub derivation_index: u16,
}

impl AsRef<TranslationEntry> for DerivedTranslationEntry {
	fn as_ref(&self) -> &TranslationEntry {
		&self.entry
	}
}

/// The sovereign and derived lookup tables.
///
/// Both tables are kept sorted by [`TranslationEntry::source_hex`].
#[derive(Clone, Debug, Default)]
pub struct TranslationTables {
	sovereign: Vec<TranslationEntry>,
	derived: Vec<DerivedTranslationEntry>,
}

impl TranslationTables {
	/// Tables of all known translations, with addresses rendered for `network`.
	pub fn for_network(network: Network) -> Self {
		let format = network.ss58_format();
		let sovereign = SOV_TRANSLATIONS
			.iter()
			.map(|(_para, rc, ah)| TranslationEntry::new(*rc, *ah, format))
			.collect();
		let derived = DERIVED_TRANSLATIONS
			.iter()
			.map(|(_para, index, rc, ah)| DerivedTranslationEntry {
				entry: TranslationEntry::new(*rc, *ah, format),
				derivation_index: *index,
			})
			.collect();

		Self::from_entries(sovereign, derived)
	}

	pub fn from_entries(
		sovereign: Vec<TranslationEntry>,
		derived: Vec<DerivedTranslationEntry>,
	) -> Self {
		let mut tables = Self { sovereign, derived };
		tables.sort();
		tables
	}

	/// Add `entry`, replacing any entry with the same source key. Returns the replaced entry.
	pub fn insert_sovereign(&mut self, entry: TranslationEntry) -> Option<TranslationEntry> {
		upsert(&mut self.sovereign, entry)
	}

	/// Same as [`Self::insert_sovereign`] for the derived table.
	pub fn insert_derived(
		&mut self,
		entry: DerivedTranslationEntry,
	) -> Option<DerivedTranslationEntry> {
		upsert(&mut self.derived, entry)
	}

	pub fn sovereign(&self) -> &[TranslationEntry] {
		&self.sovereign
	}

	pub fn derived(&self) -> &[DerivedTranslationEntry] {
		&self.derived
	}

	fn sort(&mut self) {
		self.sovereign.sort_by_key(|e| e.source_hex());
		self.sovereign.dedup_by_key(|e| e.source_key);
		self.derived.sort_by_key(|e| e.entry.source_hex());
		self.derived.dedup_by_key(|e| e.entry.source_key);
	}
}

/// A successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Translation<'a> {
	Sovereign(&'a TranslationEntry),
	Derived(&'a DerivedTranslationEntry),
}

impl<'a> Translation<'a> {
	pub fn entry(&self) -> &'a TranslationEntry {
		match self {
			Translation::Sovereign(e) => e,
			Translation::Derived(d) => &d.entry,
		}
	}

	pub fn destination_address(&self) -> &'a str {
		&self.entry().destination_address
	}

	pub fn derivation_index(&self) -> Option<u16> {
		match self {
			Translation::Sovereign(_) => None,
			Translation::Derived(d) => Some(d.derivation_index),
		}
	}
}

/// Maps Relay Chain accounts to Asset Hub accounts.
///
/// Cheap to clone; the tables are shared and never mutated after construction.
#[derive(Clone, Debug)]
pub struct AccountTranslator {
	tables: Arc<TranslationTables>,
}

impl AccountTranslator {
	pub fn new(tables: Arc<TranslationTables>) -> Self {
		Self { tables }
	}

	pub fn for_network(network: Network) -> Self {
		Self::new(Arc::new(TranslationTables::for_network(network)))
	}

	pub fn tables(&self) -> &TranslationTables {
		&self.tables
	}

	/// Translate an account given either as hex key or as SS58 address.
	///
	/// Returns the input unchanged if no translation is known. Use [`Self::try_translate`] to
	/// tell the two cases apart.
	pub fn translate(&self, account: &str) -> String {
		match self.try_translate(account) {
			Some(translation) => {
				log::debug!(
					target: LOG_TARGET,
					"Translated account: {} -> {}",
					account,
					translation.destination_address()
				);
				translation.destination_address().to_string()
			},
			None => account.to_string(),
		}
	}

	/// Sovereign translations take precedence over derived ones.
	pub fn try_translate(&self, account: &str) -> Option<Translation<'_>> {
		find(&self.tables.sovereign, account)
			.map(Translation::Sovereign)
			.or_else(|| find(&self.tables.derived, account).map(Translation::Derived))
	}

	/// Translate a raw account id.
	pub fn translate_account(&self, account: &AccountId32) -> AccountId32 {
		let raw: &[u8; 32] = account.as_ref();
		let found = self
			.tables
			.sovereign
			.binary_search_by_key(raw, |e| e.source_key)
			.ok()
			.and_then(|i| self.tables.sovereign.get(i))
			.or_else(|| {
				self.tables
					.derived
					.binary_search_by_key(raw, |d| d.entry.source_key)
					.ok()
					.and_then(|i| self.tables.derived.get(i))
					.map(|d| &d.entry)
			});

		match found {
			Some(entry) => AccountId32::new(entry.destination_key),
			None => account.clone(),
		}
	}
}

fn upsert<E: AsRef<TranslationEntry>>(table: &mut Vec<E>, entry: E) -> Option<E> {
	let key = entry.as_ref().source_hex();
	match table.binary_search_by(|e| e.as_ref().source_hex().cmp(&key)) {
		Ok(i) => Some(std::mem::replace(&mut table[i], entry)),
		Err(i) => {
			table.insert(i, entry);
			None
		},
	}
}

/// Binary search by hex key, then a linear scan by textual address.
///
/// SS58 addresses do not sort like the keys they encode, hence the second pass.
fn find<'a, E: AsRef<TranslationEntry>>(table: &'a [E], account: &str) -> Option<&'a E> {
	let needle = account.strip_prefix("0x").unwrap_or(account).to_ascii_lowercase();

	if let Ok(i) = table.binary_search_by(|e| e.as_ref().source_hex().cmp(&needle)) {
		return table.get(i);
	}

	table.iter().find(|e| e.as_ref().source_address == account)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	fn translator() -> AccountTranslator {
		AccountTranslator::for_network(Network::Polkadot)
	}

	#[test]
	fn tables_are_sorted_by_hex_key() {
		let t = TranslationTables::for_network(Network::Kusama);
		assert!(t.sovereign().windows(2).all(|w| w[0].source_hex() < w[1].source_hex()));
		assert!(t.derived().windows(2).all(|w| w[0].entry.source_hex() < w[1].entry.source_hex()));
	}

	#[test]
	fn every_sovereign_entry_translates_by_key_and_by_address() {
		let translator = translator();
		for entry in translator.tables().sovereign() {
			assert_eq!(translator.translate(&entry.source_hex()), entry.destination_address);
			assert_eq!(translator.translate(&entry.source_address), entry.destination_address);
		}
	}

	#[test]
	fn every_derived_entry_translates_with_its_index() {
		let translator = translator();
		for derived in translator.tables().derived() {
			let translation = translator.try_translate(&derived.entry.source_address).unwrap();
			assert_eq!(translation.derivation_index(), Some(derived.derivation_index));
			assert_eq!(
				translator.translate(&derived.entry.source_hex()),
				derived.entry.destination_address
			);
		}
	}

	#[test]
	fn para_sovereign_becomes_sibling_sovereign() {
		// para 2034
		let rc = AccountId32::new(hex!(
			"70617261f2070000000000000000000000000000000000000000000000000000"
		));
		let ah = AccountId32::new(hex!(
			"7369626cf2070000000000000000000000000000000000000000000000000000"
		));

		assert_eq!(translator().translate_account(&rc), ah);
		assert_eq!(
			translator().translate("0x70617261F2070000000000000000000000000000000000000000000000000000"),
			ah.to_ss58check_with_version(Network::Polkadot.ss58_format())
		);
	}

	#[test]
	fn unknown_accounts_are_returned_unchanged() {
		let translator = translator();
		for account in ["", "not an account", "0x00", &hex::encode([7u8; 32])] {
			assert_eq!(translator.translate(account), account);
			assert!(translator.try_translate(account).is_none());
		}
		let raw = AccountId32::new([1u8; 32]);
		assert_eq!(translator.translate_account(&raw), raw);
	}

	#[test]
	fn translation_is_not_applied_twice() {
		let translator = translator();
		for entry in translator.tables().sovereign() {
			let once = translator.translate(&entry.source_address);
			assert_eq!(translator.translate(&once), once);
		}
	}

	#[test]
	fn inserted_entries_are_found() {
		let format = Network::Westend.ss58_format();
		let mut tables = TranslationTables::for_network(Network::Westend);
		let entry = TranslationEntry::new([0u8; 32], [9u8; 32], format);
		tables.insert_sovereign(entry.clone());
		tables.insert_derived(DerivedTranslationEntry {
			entry: TranslationEntry::new([0xffu8; 32], [8u8; 32], format),
			derivation_index: 3,
		});

		let translator = AccountTranslator::new(Arc::new(tables));
		assert_eq!(translator.translate(&hex::encode([0u8; 32])), entry.destination_address);
		assert_eq!(
			translator.try_translate(&hex::encode([0xffu8; 32])).unwrap().derivation_index(),
			Some(3)
		);
	}

	#[test]
	fn inserting_a_known_key_replaces_its_entry() {
		let format = Network::Polkadot.ss58_format();
		let mut tables = TranslationTables::for_network(Network::Polkadot);
		let old = tables.sovereign()[0].clone();
		let len = tables.sovereign().len();

		let corrected = TranslationEntry::new(old.source_key, [9u8; 32], format);
		assert_eq!(tables.insert_sovereign(corrected.clone()), Some(old.clone()));
		assert_eq!(tables.sovereign().len(), len);
		assert!(tables.sovereign().windows(2).all(|w| w[0].source_hex() < w[1].source_hex()));

		let translator = AccountTranslator::new(Arc::new(tables));
		assert_eq!(
			translator.translate_account(&AccountId32::new(old.source_key)),
			AccountId32::new([9u8; 32])
		);
		assert_eq!(translator.translate(&old.source_address), corrected.destination_address);
	}
}
