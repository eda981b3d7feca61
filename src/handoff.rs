//! JSON-lines hand-off to an external engine.
//!
//! The binary ships no language engine. Instead every action is written to
//! stdout as one JSON object per line, preceded by the resolved
//! configuration, for an engine process to consume in order.

use crate::config::{Config, Script};
use crate::error::{LaunchError, Result};
use crate::evaluator::{EvalFailure, EvalResult, Evaluator};
use crate::exit_codes;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

#[derive(Serialize)]
struct Event<'a, T: ?Sized> {
    event: &'a str,
    payload: &'a T,
}

/// Evaluator that serializes each action as a JSON line.
pub struct JsonHandoff<W: Write> {
    out: W,
}

impl<W: Write> JsonHandoff<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit the resolved configuration. Call once, before running the plan.
    pub fn announce(&mut self, config: &Config) -> Result<()> {
        self.emit("config", config).map_err(|err| LaunchError::Io {
            context: "failed to write configuration".to_string(),
            source: err,
        })
    }

    fn emit<T: Serialize + ?Sized>(&mut self, event: &str, payload: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &Event { event, payload })?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    fn send<T: Serialize + ?Sized>(&mut self, event: &str, payload: &T) -> EvalResult {
        self.emit(event, payload).map_err(|err| {
            tracing::error!("failed to hand off {} event: {}", event, err);
            EvalFailure {
                status: exit_codes::USER_ERROR,
            }
        })
    }
}

impl<W: Write> Evaluator for JsonHandoff<W> {
    fn evaluate(&mut self, script: &Script) -> EvalResult {
        self.send("eval", script)
    }

    fn run_main(&mut self, namespace: &str, args: &[String]) -> EvalResult {
        self.send("main", &json!({ "namespace": namespace, "args": args }))
    }

    fn run_script(&mut self, script: &Script, args: &[String]) -> EvalResult {
        self.send("script", &json!({ "script": script, "args": args }))
    }

    fn run_repl(&mut self, args: &[String]) -> EvalResult {
        self.send("repl", &json!({ "args": args }))
    }

    fn drain(&mut self) -> EvalResult {
        self.send("drain", &json!({}))
    }
}
