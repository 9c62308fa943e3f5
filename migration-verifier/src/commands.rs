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

use ahm_migration_checks::{
	call::CallResolver,
	checks::default_checks,
	scan::{csv_row, scan_block, BlockRange, DerivationCollector, ScanSummary, CSV_HEADER},
	AccountTranslator, MemorySnapshot, Network, PostCheckContext, PreCheckContext,
};
use anyhow::Context;
use clap::Args;
use std::{
	collections::BTreeSet,
	fs::File,
	io::{BufWriter, Write},
	path::{Path, PathBuf},
};

const DETAILS_FILE: &str = "derived_details.csv";
const SUMMARY_FILE: &str = "derived_summary.json";

#[derive(Args)]
pub struct CheckArgs {
	/// Relay Chain dump before the migration.
	#[arg(long, env = "AHM_RC_BEFORE")]
	pub rc_before: PathBuf,
	/// Relay Chain dump after the migration.
	#[arg(long, env = "AHM_RC_AFTER")]
	pub rc_after: PathBuf,
	/// Asset Hub dump before the migration.
	#[arg(long, env = "AHM_AH_BEFORE")]
	pub ah_before: PathBuf,
	/// Asset Hub dump after the migration.
	#[arg(long, env = "AHM_AH_AFTER")]
	pub ah_after: PathBuf,
	/// Checks to skip, comma separated.
	#[arg(long, env = "AHM_EXCLUDE", value_delimiter = ',')]
	pub exclude: Vec<String>,
}

#[derive(Args)]
pub struct ScanArgs {
	/// JSON list of decoded blocks with their events.
	#[arg(long)]
	pub blocks: PathBuf,
	/// Where the CSV and summary are written.
	#[arg(long, env = "AHM_OUT_DIR", default_value = ".")]
	pub out_dir: PathBuf,
}

fn load(path: &Path) -> anyhow::Result<MemorySnapshot> {
	MemorySnapshot::from_json_file(path)
		.with_context(|| format!("loading snapshot {}", path.display()))
}

fn selected_checks<'a>(names: &[&'a str], exclusions: &BTreeSet<String>) -> Vec<&'a str> {
	names.iter().copied().filter(|n| !exclusions.contains(*n)).collect()
}

/// Returns whether every check that ran passed.
pub fn check(network: Network, args: &CheckArgs) -> anyhow::Result<bool> {
	let rc_before = load(&args.rc_before)?;
	let rc_after = load(&args.rc_after)?;
	let ah_before = load(&args.ah_before)?;
	let ah_after = load(&args.ah_after)?;

	let translator = AccountTranslator::for_network(network);
	let runner = default_checks(&translator);
	let exclusions: BTreeSet<String> =
		args.exclude.iter().map(|e| e.trim().to_string()).filter(|e| !e.is_empty()).collect();
	let names = runner.names();
	for unknown in exclusions.iter().filter(|e| !names.iter().any(|n| *n == e.as_str())) {
		log::warn!("Excluded check `{unknown}` does not exist");
	}

	let selected = selected_checks(&names, &exclusions);
	log::info!("Running {} of {} checks on {network}", selected.len(), names.len());
	let report = runner.run(
		&PreCheckContext { rc_before: &rc_before, ah_before: &ah_before },
		&PostCheckContext { rc_after: &rc_after, ah_after: &ah_after },
		&exclusions,
	);

	print!("{report}");
	Ok(report.is_success())
}

pub fn scan_derivatives(network: Network, args: &ScanArgs) -> anyhow::Result<ScanSummary> {
	let range = BlockRange::from_json_file(&args.blocks)
		.with_context(|| format!("loading blocks {}", args.blocks.display()))?;
	let resolver = CallResolver::new(&range, network.ss58_format());
	let mut collector = DerivationCollector::default();

	for (hash, block) in range.blocks() {
		scan_block(&resolver, *hash, block, &mut collector)
			.with_context(|| format!("scanning block #{}", block.number))?;
	}

	std::fs::create_dir_all(&args.out_dir)
		.with_context(|| format!("creating {}", args.out_dir.display()))?;

	let details = args.out_dir.join(DETAILS_FILE);
	let mut csv = BufWriter::new(
		File::create(&details).with_context(|| format!("creating {}", details.display()))?,
	);
	writeln!(csv, "{CSV_HEADER}")?;
	for event in collector.events() {
		writeln!(csv, "{}", csv_row(event))?;
	}
	csv.flush()?;

	let summary = collector.summary(network.name(), &range);
	let summary_path = args.out_dir.join(SUMMARY_FILE);
	let file = File::create(&summary_path)
		.with_context(|| format!("creating {}", summary_path.display()))?;
	serde_json::to_writer_pretty(file, &summary)?;

	log::info!(
		"Scanned {} extrinsics: {} derivatives, {} unique derived accounts, {} duplicates skipped",
		collector.total_extrinsics,
		summary.total_derivatives,
		summary.unique_derived_accounts,
		summary.duplicates_skipped
	);
	for (section, n) in &collector.sections {
		log::debug!("{section}: {n} signed extrinsics");
	}

	Ok(summary)
}

pub fn list(network: Network) -> Vec<&'static str> {
	default_checks(&AccountTranslator::for_network(network)).names()
}
