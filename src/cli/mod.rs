//! CLI argument parsing for planck.
//!
//! Uses clap derive macros for the option grammar. clap only ever sees the
//! tokens before the passthrough split computed by [`boundary`]; the rest are
//! forwarded untouched.

pub mod boundary;

use crate::config::{CheckedArrays, Optimizations, Script};
use crate::error::Result;
use crate::text::OPERATION_HELP;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::borrow::Cow;
use std::ffi::OsStr;

/// Planck: a stand-alone ClojureScript REPL.
#[derive(Parser, Debug)]
#[command(name = "planck")]
#[command(version, about, long_about = None)]
#[command(override_usage = "planck [init-opt*] [main-opt] [arg*]")]
#[command(after_help = OPERATION_HELP)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct Cli {
    /// Print this help message and exit.
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Show legal info (licenses and copyrights).
    #[arg(short = 'l', long)]
    pub legal: bool,

    /// Emit verbose diagnostic output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Load a file or resource.
    #[arg(short = 'i', long = "init", value_name = "PATH", action = ArgAction::Append, allow_hyphen_values = true)]
    pub init: Vec<String>,

    /// Evaluate expressions in string; print non-nil values.
    #[arg(short = 'e', long = "eval", value_name = "EXPR", action = ArgAction::Append, allow_hyphen_values = true)]
    pub eval: Vec<String>,

    /// Use colon-delimited cp for source directories and JARs.
    #[arg(short = 'c', long, value_name = "CP", allow_hyphen_values = true)]
    pub classpath: Option<String>,

    /// Use comma-separated list of dependencies to look for in the local Maven repository.
    #[arg(short = 'D', long, value_name = "DEPS")]
    pub dependencies: Option<String>,

    /// Path to the local Maven repository; defaults to ~/.m2/repository.
    #[arg(short = 'L', long, value_name = "PATH", allow_hyphen_values = true)]
    pub local_repo: Option<String>,

    /// Create and use .planck_cache dir for cache.
    #[arg(short = 'K', long, conflicts_with = "cache")]
    pub auto_cache: bool,

    /// If dir exists at path, use it for cache.
    #[arg(short = 'k', long, value_name = "PATH", allow_hyphen_values = true)]
    pub cache: Option<String>,

    /// Set the color theme.
    #[arg(short = 't', long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable line editing / VT100 terminal control.
    #[arg(short = 'd', long)]
    pub dumb_terminal: bool,

    /// Enable socket REPL where X is port or IP:port.
    #[arg(short = 'n', long, value_name = "X")]
    pub socket_repl: Option<String>,

    /// Generate static dispatch function calls.
    #[arg(short = 's', long)]
    pub static_fns: bool,

    /// Set *assert* to false to remove asserts.
    #[arg(short = 'a', long)]
    pub elide_asserts: bool,

    /// Closure compiler level applied to source loaded from namespaces.
    #[arg(short = 'O', long, value_enum, value_name = "LEVEL")]
    pub optimizations: Option<Optimizations>,

    /// Enables checked arrays.
    #[arg(short = 'A', long, value_enum, value_name = "MODE")]
    pub checked_arrays: Option<CheckedArrays>,

    /// Dump bundled source files to the given directory.
    #[arg(short = 'S', long, value_name = "PATH", allow_hyphen_values = true)]
    pub dump_sdk: Option<String>,

    /// Emit compiled JavaScript (development).
    #[arg(short = 'j', long, hide = true)]
    pub javascript: bool,

    /// Output directory for compiled JavaScript (development).
    #[arg(long, value_name = "PATH", hide = true, allow_hyphen_values = true)]
    pub out: Option<String>,

    /// Call the -main function from a namespace with args.
    #[arg(short = 'm', long = "main", value_name = "NS", conflicts_with = "repl", allow_hyphen_values = true)]
    pub main_ns: Option<String>,

    /// Run a repl.
    #[arg(short = 'r', long)]
    pub repl: bool,
}

/// Result of parsing the launcher's own options.
#[derive(Debug)]
pub struct ParsedArgs {
    pub cli: Cli,

    /// `--init` and `--eval` actions in command-line order.
    pub init_actions: Vec<Script>,

    /// Tokens forwarded to the main operation.
    pub rest_args: Vec<String>,
}

/// Parse a full argument vector (program name first).
///
/// Only the tokens before the passthrough split reach clap; option errors,
/// help, and version requests come back as `LaunchError::Cli`. Passthrough
/// tokens are never interpreted, so a non-UTF-8 one is forwarded lossily
/// instead of failing the launch.
pub fn parse<S: AsRef<OsStr>>(argv: &[S]) -> Result<ParsedArgs> {
    let tokens: Vec<Cow<'_, str>> = argv.iter().map(|arg| arg.as_ref().to_string_lossy()).collect();
    let split = boundary::split(&tokens);
    tracing::trace!(?split, "computed argument split");

    let options = argv[..split.options_end]
        .iter()
        .enumerate()
        .filter(|(index, _)| !split.stray.contains(index))
        .map(|(_, arg)| arg.as_ref().to_os_string());
    let matches = Cli::command().try_get_matches_from(options)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let rest_args = split
        .stray
        .iter()
        .map(|&index| &tokens[index])
        .chain(&tokens[split.rest_start..])
        .map(|arg| arg.to_string())
        .collect();

    let init_actions = ordered_init_actions(&matches);
    debug_assert_eq!(init_actions.len(), cli.init.len() + cli.eval.len());

    Ok(ParsedArgs {
        cli,
        init_actions,
        rest_args,
    })
}

/// One-line usage summary for error reports.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Interleave `--init` and `--eval` values by their position on the command line.
fn ordered_init_actions(matches: &ArgMatches) -> Vec<Script> {
    let mut indexed: Vec<(usize, Script)> = Vec::new();
    indexed.extend(indexed_values(matches, "init").map(|(i, v)| (i, Script::path(v))));
    indexed.extend(indexed_values(matches, "eval").map(|(i, v)| (i, Script::expression(v))));
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, script)| script).collect()
}

fn indexed_values<'a>(
    matches: &'a ArgMatches,
    id: &str,
) -> impl Iterator<Item = (usize, String)> + 'a {
    let indices = matches.indices_of(id).into_iter().flatten();
    let values = matches.get_many::<String>(id).into_iter().flatten();
    indices.zip(values.cloned())
}
