//! Execution plan selection and hand-off.
//!
//! After the configuration is final, all init actions run in command-line
//! order, then exactly one terminal action runs, then the evaluator is
//! drained once.

use crate::config::{Config, Script};
use crate::error::{LaunchError, Result};
use crate::evaluator::Evaluator;
use crate::text;
use std::io::{Read, Write};


/// Argument that makes the script source come from standard input.
pub const STDIN_SCRIPT: &str = "-";

/// The single main operation performed after the init actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction<'a> {
    /// Call `-main` in a namespace.
    Main {
        namespace: &'a str,
        args: &'a [String],
    },
    /// Run a script file or resource.
    Script { path: &'a str, args: &'a [String] },
    /// Run all of standard input as a script.
    Stdin { args: &'a [String] },
    /// Start the interactive REPL.
    Repl { args: &'a [String] },
}

impl<'a> TerminalAction<'a> {
    /// Choose the terminal action. Priority: main namespace, then a script
    /// (unless a REPL was requested), then the REPL if one was requested.
    /// `None` means the init actions were all there was to do.
    pub fn select(config: &'a Config) -> Option<Self> {
        if let Some(namespace) = config.main_ns.as_deref() {
            return Some(TerminalAction::Main {
                namespace,
                args: &config.rest_args,
            });
        }

        if config.repl {
            return Some(TerminalAction::Repl {
                args: &config.rest_args,
            });
        }

        let (first, args) = config.rest_args.split_first()?;
        Some(if first == STDIN_SCRIPT {
            TerminalAction::Stdin { args }
        } else {
            TerminalAction::Script { path: first, args }
        })
    }
}

/// Run the plan described by `config` against `evaluator`.
///
/// An init action failure stops everything with that failure's status. The
/// evaluator is drained exactly once after the terminal action; a terminal
/// failure takes precedence over a drain failure.
pub fn run<E, R, W>(config: &Config, evaluator: &mut E, stdin: &mut R, out: &mut W) -> Result<()>
where
    E: Evaluator + ?Sized,
    R: Read,
    W: Write,
{
    for (index, script) in config.init_actions.iter().enumerate() {
        tracing::debug!(index, ?script, "running init action");
        evaluator.evaluate(script)?;
    }

    let terminal = run_terminal(config, evaluator, stdin, out);
    let drained = evaluator.drain().map_err(LaunchError::from);
    terminal.and(drained)
}

fn run_terminal<E, R, W>(config: &Config, evaluator: &mut E, stdin: &mut R, out: &mut W) -> Result<()>
where
    E: Evaluator + ?Sized,
    R: Read,
    W: Write,
{
    let Some(action) = TerminalAction::select(config) else {
        tracing::debug!("no terminal action requested");
        return Ok(());
    };
    tracing::debug!(?action, "running terminal action");

    match action {
        TerminalAction::Main { namespace, args } => evaluator.run_main(namespace, args)?,
        TerminalAction::Script { path, args } => {
            evaluator.run_script(&Script::path(path), args)?
        }
        TerminalAction::Stdin { args } => {
            let mut source = String::new();
            stdin
                .read_to_string(&mut source)
                .map_err(|err| LaunchError::Io {
                    context: "failed to read standard input".to_string(),
                    source: err,
                })?;
            evaluator.run_script(&Script::text(source), args)?
        }
        TerminalAction::Repl { args } => {
            if !config.quiet {
                let version = evaluator.runtime_version();
                text::write_banner(out, version.as_deref())
                    .and_then(|()| out.flush())
                    .map_err(|err| LaunchError::Io {
                        context: "failed to write banner".to_string(),
                        source: err,
                    })?;
            }
            evaluator.run_repl(args)?
        }
    }

    Ok(())
}
