//! Fixed user-facing text: help epilogue, legal notice, and REPL banner.

use std::io::{self, Write};

/// Launcher version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shown after the generated option list in `--help`.
pub const OPERATION_HELP: &str = "\
With no options or args, runs an interactive Read-Eval-Print Loop.

main options:
  path                     Run a script from a file or resource
  -                        Run a script from standard input

operation:
  - Enters the cljs.user namespace
  - Binds planck.core/*command-line-args* to a seq of strings containing
    command line args that appear after any main option
  - Runs all init options in order
  - Calls a -main function or runs a repl or script if requested

The init options may be repeated and mixed freely, but must appear before
any main option.

Paths may be absolute or relative in the filesystem.

A comprehensive User Guide for Planck can be found at http://planck-repl.org";

const LEGAL: &str = "\
Planck
Copyright (c) 2015-2026 Mike Fikes and Contributors

Distributed under the Eclipse Public License either version 1.0 or (at your
option) any later version.

ClojureScript
Copyright (c) Rich Hickey. All rights reserved.

Distributed under the Eclipse Public License 1.0.";

/// Write the `--legal` notice.
pub fn write_legal(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", LEGAL)
}

/// Write the REPL banner. `runtime_version` is the bundled ClojureScript
/// version reported by the evaluator, if it knows it.
pub fn write_banner(out: &mut impl Write, runtime_version: Option<&str>) -> io::Result<()> {
    writeln!(out, "Planck {}", VERSION)?;
    writeln!(out, "ClojureScript {}", runtime_version.unwrap_or("(Unknown)"))?;
    writeln!(out, "    Docs: (doc function-name-here)")?;
    writeln!(out, "          (find-doc \"part-of-name-here\")")?;
    writeln!(out, "  Source: (source function-name-here)")?;
    writeln!(out, "    Exit: Control+D or :cljs/quit or exit or quit")?;
    writeln!(out, " Results: Stored in vars *1, *2, *3, an exception in *e")?;
    writeln!(out)
}
