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

//! Sequential execution of registered [`MigrationTest`]s.

use crate::{
	types::{CheckError, MigrationTest, PostCheckContext, PreCheckContext, PreCheckResult},
	LOG_TARGET,
};
use std::{
	any::Any,
	collections::BTreeSet,
	fmt,
	panic::{catch_unwind, AssertUnwindSafe},
};

/// The phase of a test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	PreCheck,
	PostCheck,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Stage::PreCheck => f.write_str("pre-check"),
			Stage::PostCheck => f.write_str("post-check"),
		}
	}
}

/// Where a test is in its lifecycle.
///
/// `PostChecked` and `Failed` are terminal.
#[derive(Debug)]
pub enum TestState {
	NotStarted,
	PreChecked,
	PostChecked,
	Failed { stage: Stage, error: CheckError },
}

impl TestState {
	pub fn is_success(&self) -> bool {
		matches!(self, TestState::PostChecked)
	}
}

#[derive(Debug)]
pub struct TestOutcome {
	pub name: &'static str,
	pub state: TestState,
}

/// Outcome of every test that was not excluded, in registration order.
#[derive(Debug, Default)]
pub struct RunReport {
	pub outcomes: Vec<TestOutcome>,
}

impl RunReport {
	pub fn passed(&self) -> usize {
		self.outcomes.iter().filter(|o| o.state.is_success()).count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.passed()
	}

	/// Name, stage and error of every failed test.
	pub fn failures(&self) -> impl Iterator<Item = (&'static str, Stage, &CheckError)> + '_ {
		self.outcomes.iter().filter_map(|o| match &o.state {
			TestState::Failed { stage, error } => Some((o.name, *stage, error)),
			_ => None,
		})
	}

	pub fn is_success(&self) -> bool {
		self.failed() == 0
	}

	pub fn outcome(&self, name: &str) -> Option<&TestOutcome> {
		self.outcomes.iter().find(|o| o.name == name)
	}
}

impl fmt::Display for RunReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{} passed, {} failed", self.passed(), self.failed())?;
		for (name, stage, error) in self.failures() {
			writeln!(f, "  {name} failed during {stage}: {error}")?;
		}
		Ok(())
	}
}

/// [`MigrationTest`] with its payload types erased.
trait ErasedTest {
	fn name(&self) -> &'static str;

	fn pre_check(&self, ctx: &PreCheckContext<'_>) -> Result<Box<dyn Any>, CheckError>;

	fn post_check(&self, ctx: &PostCheckContext<'_>, payload: Box<dyn Any>)
		-> Result<(), CheckError>;
}

impl<T: MigrationTest> ErasedTest for T {
	fn name(&self) -> &'static str {
		MigrationTest::name(self)
	}

	fn pre_check(&self, ctx: &PreCheckContext<'_>) -> Result<Box<dyn Any>, CheckError> {
		MigrationTest::pre_check(self, ctx).map(|payload| Box::new(payload) as Box<dyn Any>)
	}

	fn post_check(
		&self,
		ctx: &PostCheckContext<'_>,
		payload: Box<dyn Any>,
	) -> Result<(), CheckError> {
		let payload = payload
			.downcast::<PreCheckResult<T::RcPrePayload, T::AhPrePayload>>()
			.map_err(|_| CheckError::decode("pre-check payload", "unexpected payload type"))?;
		MigrationTest::post_check(self, ctx, *payload)
	}
}

/// Registry of migration tests.
#[derive(Default)]
pub struct MigrationTestRunner {
	tests: Vec<Box<dyn ErasedTest>>,
}

impl MigrationTestRunner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register<T: MigrationTest + 'static>(&mut self, test: T) -> &mut Self {
		self.tests.push(Box::new(test));
		self
	}

	/// Names of all registered tests, in registration order.
	pub fn names(&self) -> Vec<&'static str> {
		self.tests.iter().map(|t| t.name()).collect()
	}

	/// Run every registered test whose name is not in `exclusions`.
	///
	/// Tests run one after the other. A failing or panicking test is recorded and does not stop
	/// the remaining ones.
	pub fn run(
		&self,
		pre: &PreCheckContext<'_>,
		post: &PostCheckContext<'_>,
		exclusions: &BTreeSet<String>,
	) -> RunReport {
		let mut report = RunReport::default();

		for test in &self.tests {
			let name = test.name();
			if exclusions.contains(name) {
				log::info!(target: LOG_TARGET, "Skipping excluded test {}", name);
				continue;
			}

			let state = run_one(test.as_ref(), pre, post);
			match &state {
				TestState::PostChecked => {
					log::info!(target: LOG_TARGET, "✅ Test {} completed successfully", name)
				},
				TestState::Failed { stage, error } => {
					log::error!(
						target: LOG_TARGET,
						"❌ Test '{}' failed during {}: {}",
						name,
						stage,
						error
					)
				},
				TestState::NotStarted | TestState::PreChecked => {},
			}
			report.outcomes.push(TestOutcome { name, state });
		}

		report
	}
}

fn run_one(
	test: &dyn ErasedTest,
	pre: &PreCheckContext<'_>,
	post: &PostCheckContext<'_>,
) -> TestState {
	let mut state = TestState::NotStarted;
	log::debug!(target: LOG_TARGET, "Running {} ({:?})", test.name(), state);

	let payload = match contain(|| test.pre_check(pre)) {
		Ok(payload) => payload,
		Err(error) => return TestState::Failed { stage: Stage::PreCheck, error },
	};
	state = TestState::PreChecked;
	log::debug!(target: LOG_TARGET, "Running {} ({:?})", test.name(), state);

	match contain(|| test.post_check(post, payload)) {
		Ok(()) => TestState::PostChecked,
		Err(error) => TestState::Failed { stage: Stage::PostCheck, error },
	}
}

/// Turn a panic inside `f` into [`CheckError::Panicked`].
fn contain<R>(f: impl FnOnce() -> Result<R, CheckError>) -> Result<R, CheckError> {
	catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|panic| {
		let message = panic
			.downcast_ref::<&str>()
			.map(|s| s.to_string())
			.or_else(|| panic.downcast_ref::<String>().cloned())
			.unwrap_or_else(|| "unknown panic payload".into());
		Err(CheckError::Panicked(message))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ensure_check, mock::Snapshots};
	use assert_matches::assert_matches;
	use std::{cell::RefCell, rc::Rc};

	/// Records its phases and fails where told to.
	struct Probe {
		name: &'static str,
		fail_pre: bool,
		panic_post: bool,
		log: Rc<RefCell<Vec<String>>>,
	}

	impl Probe {
		fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
			Self { name, fail_pre: false, panic_post: false, log: log.clone() }
		}
	}

	impl MigrationTest for Probe {
		type RcPrePayload = String;
		type AhPrePayload = u32;

		fn name(&self) -> &'static str {
			self.name
		}

		fn pre_check(
			&self,
			_: &PreCheckContext<'_>,
		) -> Result<PreCheckResult<String, u32>, CheckError> {
			self.log.borrow_mut().push(format!("{}:pre", self.name));
			ensure_check!(!self.fail_pre, "{} refuses", self.name);
			Ok(PreCheckResult { rc_pre_payload: self.name.to_string(), ah_pre_payload: 7 })
		}

		fn post_check(
			&self,
			_: &PostCheckContext<'_>,
			payload: PreCheckResult<String, u32>,
		) -> Result<(), CheckError> {
			self.log.borrow_mut().push(format!("{}:post", self.name));
			assert!(!self.panic_post, "boom");
			ensure_check!(payload.rc_pre_payload == self.name, "payload of another test");
			ensure_check!(payload.ah_pre_payload == 7, "payload was altered");
			Ok(())
		}
	}

	#[test]
	fn failing_pre_check_does_not_stop_other_tests() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut runner = MigrationTestRunner::new();
		runner
			.register(Probe::new("first", &log))
			.register(Probe { fail_pre: true, ..Probe::new("second", &log) })
			.register(Probe::new("third", &log));

		let snapshots = Snapshots::empty();
		let report = runner.run(&snapshots.pre(), &snapshots.post(), &BTreeSet::new());

		assert_eq!(report.outcomes.len(), 3);
		assert_eq!((report.passed(), report.failed()), (2, 1));
		assert_matches!(report.outcome("first").unwrap().state, TestState::PostChecked);
		assert_matches!(
			&report.outcome("second").unwrap().state,
			TestState::Failed { stage: Stage::PreCheck, error: CheckError::Assertion(msg) } if msg == "second refuses"
		);
		assert_matches!(report.outcome("third").unwrap().state, TestState::PostChecked);
		assert_eq!(
			*log.borrow(),
			["first:pre", "first:post", "second:pre", "third:pre", "third:post"]
		);
	}

	#[test]
	fn excluded_tests_are_not_reported() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut runner = MigrationTestRunner::new();
		runner.register(Probe::new("foo", &log)).register(Probe::new("bar", &log));

		let snapshots = Snapshots::empty();
		let exclusions = BTreeSet::from(["foo".to_string()]);
		let report = runner.run(&snapshots.pre(), &snapshots.post(), &exclusions);

		assert!(report.outcome("foo").is_none());
		assert_eq!(report.outcomes.len(), 1);
		assert!(report.is_success());
		assert_eq!(*log.borrow(), ["bar:pre", "bar:post"]);
	}

	#[test]
	fn panics_are_recorded_as_failures() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut runner = MigrationTestRunner::new();
		runner
			.register(Probe { panic_post: true, ..Probe::new("panicky", &log) })
			.register(Probe::new("calm", &log));

		let snapshots = Snapshots::empty();
		let report = runner.run(&snapshots.pre(), &snapshots.post(), &BTreeSet::new());

		assert!(!report.is_success());
		let failures: Vec<_> = report.failures().collect();
		assert_eq!(failures.len(), 1);
		assert_matches!(failures[0], ("panicky", Stage::PostCheck, CheckError::Panicked(msg)) if msg == "boom");
		assert!(report.to_string().starts_with("1 passed, 1 failed"));
	}
}
