//! The seam between the launcher and the language engine.
//!
//! The launcher never evaluates code itself. It hands init actions and
//! exactly one terminal action to an [`Evaluator`] in a fixed order, then
//! waits once for the evaluator to drain its background work.

use crate::config::Script;
use thiserror::Error;

/// A failure reported by the evaluator. `status` becomes the process exit code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("evaluator exited with status {status}")]
pub struct EvalFailure {
    pub status: i32,
}

/// Result of handing one action to the evaluator.
pub type EvalResult = std::result::Result<(), EvalFailure>;

/// An engine capable of running the resolved plan.
pub trait Evaluator {
    /// Run an init action. Expression scripts print non-nil results.
    fn evaluate(&mut self, script: &Script) -> EvalResult;

    /// Call `-main` in `namespace` with `args`.
    fn run_main(&mut self, namespace: &str, args: &[String]) -> EvalResult;

    /// Run a script with `args` bound as its command-line arguments.
    fn run_script(&mut self, script: &Script, args: &[String]) -> EvalResult;

    /// Hand control to the interactive REPL.
    fn run_repl(&mut self, args: &[String]) -> EvalResult;

    /// Block until all background work scheduled by earlier actions is done.
    fn drain(&mut self) -> EvalResult;

    /// Version of the bundled language runtime, shown in the REPL banner.
    fn runtime_version(&self) -> Option<String> {
        None
    }
}
