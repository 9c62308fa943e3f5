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

//! Command line entry point of the Asset Hub Migration verifier.

use ahm_migration_checks::Network;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
	/// Network whose snapshots are verified. Selects the SS58 address format.
	#[arg(long, global = true, env = "AHM_NETWORK", default_value = "polkadot")]
	network: Network,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Run the migration checks against four snapshot dumps.
	Check(commands::CheckArgs),
	/// Find `utility.asDerivative` calls in a block dump.
	ScanDerivatives(commands::ScanArgs),
	/// Print the names of all registered checks.
	List,
}

fn main() -> ExitCode {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let cli = Cli::parse();
	let result = match cli.command {
		Command::Check(args) => commands::check(cli.network, &args),
		Command::ScanDerivatives(args) =>
			commands::scan_derivatives(cli.network, &args).map(|_| true),
		Command::List => {
			for name in commands::list(cli.network) {
				println!("{name}");
			}
			Ok(true)
		},
	};

	match result {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(e) => {
			log::error!("{e:?}");
			ExitCode::from(2)
		},
	}
}
