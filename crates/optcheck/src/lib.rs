//! optcheck: runs the `Opt<T>` contract scenarios and reports per-scenario results.

pub mod cases;
pub mod logger;
pub mod runner;

pub use runner::{Case, CaseError, Runner, Scenario};

/// Runs every scenario in [`cases::ALL`] through `runner`.
pub fn run_all<O: std::io::Write, E: std::io::Write>(runner: &mut Runner<O, E>) -> std::io::Result<()> {
    for (name, scenario) in cases::ALL {
        runner.run(name, *scenario)?;
    }
    runner.summary()
}
