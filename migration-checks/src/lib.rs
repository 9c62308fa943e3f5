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

//! Verification of the Asset Hub Migration.
//!
//! Compares the state of the Relay Chain and Asset Hub before the migration with their state
//! afterwards. Every [`MigrationTest`] captures a payload from the snapshots taken before and
//! checks it against the snapshots taken after. Accounts that change identity across the
//! migration are mapped with the [`AccountTranslator`].
//!
//! The [`call`] and [`scan`] modules find `utility.asDerivative` usage in historical blocks, which
//! is how missing entries of the derived translation table are discovered.

pub mod account_translation;
pub mod call;
pub mod checks;
pub mod network;
pub mod runner;
pub mod scan;
pub mod snapshot;
pub mod sovereign_account_translation;
pub mod types;

#[cfg(test)]
mod mock;

pub use account_translation::{AccountTranslator, Translation, TranslationTables};
pub use network::Network;
pub use runner::{MigrationTestRunner, RunReport, Stage, TestState};
pub use snapshot::{MemorySnapshot, Snapshot, SnapshotError};
pub use types::{CheckError, MigrationTest, PostCheckContext, PreCheckContext, PreCheckResult};

pub const LOG_TARGET: &str = "runtime::ahm-checks";

/// Fail the surrounding check with [`CheckError::Assertion`] unless `cond` holds.
///
/// ```
/// use ahm_migration_checks::{ensure_check, CheckError};
///
/// fn positive(n: i32) -> Result<(), CheckError> {
/// 	ensure_check!(n > 0, "{} is not positive", n);
/// 	Ok(())
/// }
///
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure_check {
	($cond:expr, $($msg:tt)+) => {
		if !$cond {
			return Err($crate::types::CheckError::Assertion(format!($($msg)+)).into());
		}
	};
}
