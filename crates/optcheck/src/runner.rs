//! Scenario runner: RUN/OK/FAILURE banners, a summary, and an exit code.

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe, Location};

use thiserror::Error;
use tracing::debug;

const ANSI_CLEAR: &str = "\x1b[0m";
const ANSI_BOLD_RED: &str = "\x1b[1m\x1b[31m";
const ANSI_BOLD_GREEN: &str = "\x1b[1m\x1b[32m";

/// Returned by a scenario when a fatal `ensure` failed.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("assertion failed: {0}")]
    Aborted(&'static str),
}

pub type Scenario = fn(&mut Case) -> Result<(), CaseError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Check,
    Assertion,
    Panic,
}

#[derive(Clone, Debug)]
pub struct Failure {
    pub kind: FailureKind,
    pub expr: String,
    pub location: Option<&'static Location<'static>>,
}

/// Per-scenario failure log.
#[derive(Default, Debug)]
pub struct Case {
    failures: Vec<Failure>,
}

impl Case {
    /// Non-fatal: records the failure and lets the scenario continue.
    #[track_caller]
    pub fn check(&mut self, cond: bool, expr: &'static str) -> bool {
        if !cond {
            self.record(FailureKind::Check, expr.to_string(), Some(Location::caller()));
        }
        cond
    }

    /// Fatal: records the failure and stops the scenario through `?`.
    #[track_caller]
    pub fn ensure(&mut self, cond: bool, expr: &'static str) -> Result<(), CaseError> {
        if cond {
            return Ok(());
        }
        self.record(FailureKind::Assertion, expr.to_string(), Some(Location::caller()));
        Err(CaseError::Aborted(expr))
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, kind: FailureKind, expr: String, location: Option<&'static Location<'static>>) {
        self.failures.push(Failure { kind, expr, location });
    }
}

/// `check!(case, cond)` records a failure and continues.
#[macro_export]
macro_rules! check {
    ($case:expr, $cond:expr) => {
        $case.check($cond, stringify!($cond))
    };
}

/// `ensure!(case, cond)` records a failure and returns from the scenario.
#[macro_export]
macro_rules! ensure {
    ($case:expr, $cond:expr) => {
        $case.ensure($cond, stringify!($cond))?
    };
}

pub struct Runner<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
    filter: Option<String>,
    succeeded: usize,
    failed: usize,
}

impl<O: Write, E: Write> Runner<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color, filter: None, succeeded: 0, failed: 0 }
    }

    /// Only run scenarios whose name contains `filter`.
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Runs one scenario. Returns `Ok(None)` when the filter skipped it.
    pub fn run(&mut self, name: &str, scenario: Scenario) -> io::Result<Option<bool>> {
        if let Some(f) = &self.filter {
            if !name.contains(f.as_str()) {
                debug!(scenario = name, "skipped by filter");
                return Ok(None);
            }
        }

        let run = self.paint(ANSI_BOLD_GREEN, "[ RUN         ]");
        writeln!(self.out, "{run} {name}")?;

        let mut case = Case::default();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| scenario(&mut case)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(scenario = name, error = %e, "scenario aborted"),
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                case.record(FailureKind::Panic, msg, None);
            }
        }

        for f in case.failures() {
            let what = match f.kind {
                FailureKind::Check => "Check failed",
                FailureKind::Assertion => "Assertion failed",
                FailureKind::Panic => "Panicked",
            };
            match f.location {
                Some(loc) => writeln!(self.err, "{}:{}: {what}: {}", loc.file(), loc.line(), f.expr)?,
                None => writeln!(self.err, "{name}: {what}: {}", f.expr)?,
            }
            debug!(scenario = name, kind = ?f.kind, expr = %f.expr, "scenario failure");
        }

        let passed = case.passed();
        if passed {
            self.succeeded += 1;
            let ok = self.paint(ANSI_BOLD_GREEN, "[          OK ]");
            writeln!(self.out, "{ok} {name}\n")?;
        } else {
            self.failed += 1;
            let bad = self.paint(ANSI_BOLD_RED, "[     FAILURE ]");
            writeln!(self.out, "{bad} {name}\n")?;
        }
        Ok(Some(passed))
    }

    pub fn summary(&mut self) -> io::Result<()> {
        writeln!(self.out, "===== Summary =====")?;
        writeln!(self.out, "Tests run: ........ {}", self.succeeded + self.failed)?;
        writeln!(self.out, "Tests succeeded: .. {}", self.succeeded)?;
        writeln!(self.out, "Tests failed: ..... {}", self.failed)?;
        self.out.flush()
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 { 0 } else { 1 }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color { format!("{code}{text}{ANSI_CLEAR}") } else { text.to_string() }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
