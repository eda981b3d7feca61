use crate::config::Script;
use crate::evaluator::{EvalFailure, EvalResult, Evaluator};

/// One call observed by [`RecordingEvaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Evaluate(Script),
    Main(String, Vec<String>),
    Script(Script, Vec<String>),
    Repl(Vec<String>),
    Drain,
}

/// Evaluator that records every call and fails on request.
#[derive(Debug, Default)]
pub(crate) struct RecordingEvaluator {
    pub calls: Vec<Call>,
    /// Fail the call at this position (0-based) with `fail_status`.
    pub fail_at: Option<usize>,
    pub fail_status: i32,
    pub drain_status: Option<i32>,
    pub version: Option<String>,
}

impl RecordingEvaluator {
    pub(crate) fn failing_at(index: usize, status: i32) -> Self {
        Self {
            fail_at: Some(index),
            fail_status: status,
            ..Self::default()
        }
    }

    fn record(&mut self, call: Call) -> EvalResult {
        let index = self.calls.len();
        self.calls.push(call);
        match self.fail_at {
            Some(fail_at) if fail_at == index => Err(EvalFailure {
                status: self.fail_status,
            }),
            _ => Ok(()),
        }
    }
}

impl Evaluator for RecordingEvaluator {
    fn evaluate(&mut self, script: &Script) -> EvalResult {
        self.record(Call::Evaluate(script.clone()))
    }

    fn run_main(&mut self, namespace: &str, args: &[String]) -> EvalResult {
        self.record(Call::Main(namespace.to_string(), args.to_vec()))
    }

    fn run_script(&mut self, script: &Script, args: &[String]) -> EvalResult {
        self.record(Call::Script(script.clone(), args.to_vec()))
    }

    fn run_repl(&mut self, args: &[String]) -> EvalResult {
        self.record(Call::Repl(args.to_vec()))
    }

    fn drain(&mut self) -> EvalResult {
        self.record(Call::Drain)?;
        match self.drain_status {
            Some(status) => Err(EvalFailure { status }),
            None => Ok(()),
        }
    }

    fn runtime_version(&self) -> Option<String> {
        self.version.clone()
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
