// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// A single test case, as reported by the host test runner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Example {
    pub name: String,
}

impl Example {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

/// The callbacks a host test runner drives, in this order:
///
/// 1. [`start`] once, with the number of tests about to run.
/// 2. One of [`example_passed`], [`example_pending`], or [`example_failed`] per test.
/// 3. [`start_dump`] when the run is over.
/// 4. [`dump_failures`], then [`dump_summary`].
///
/// None of these return errors. A reporter is cosmetic, and nothing it runs into should
/// change the outcome of the test run.
///
/// [`start`]: TestEventReporter::start
/// [`example_passed`]: TestEventReporter::example_passed
/// [`example_pending`]: TestEventReporter::example_pending
/// [`example_failed`]: TestEventReporter::example_failed
/// [`start_dump`]: TestEventReporter::start_dump
/// [`dump_failures`]: TestEventReporter::dump_failures
/// [`dump_summary`]: TestEventReporter::dump_summary
pub trait TestEventReporter {
    fn start(&mut self, example_count: usize);

    fn example_passed(&mut self, example: &Example);

    fn example_pending(&mut self, example: &Example);

    fn example_failed(&mut self, example: &Example);

    /// The run is finishing. Called before any of the `dump_*` methods.
    fn start_dump(&mut self);

    fn dump_failures(&mut self);

    fn dump_summary(
        &mut self,
        duration: Duration,
        example_count: usize,
        failure_count: usize,
        pending_count: usize,
    );
}
