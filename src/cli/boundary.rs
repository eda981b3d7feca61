//! Passthrough boundary detection.
//!
//! The option parser cannot tell a bare script path from an option value, so
//! the boundary between launcher options and the script's own arguments is
//! computed here first. Everything at or after the boundary is forwarded
//! verbatim and never parsed as a launcher option.

/// Short options that take a value.
pub const VALUE_SHORTS: &[char] = &['i', 'e', 'm', 'c', 'n', 'k', 't', 'S', 'A', 'O', 'D', 'L'];

/// Long options that take a value.
pub const VALUE_LONGS: &[&str] = &[
    "init",
    "eval",
    "main",
    "classpath",
    "socket-repl",
    "cache",
    "theme",
    "dump-sdk",
    "checked-arrays",
    "optimizations",
    "dependencies",
    "local-repo",
    "out",
];

/// Where option parsing stops and passthrough arguments begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSplit {
    /// Index of the first script path or `-`, or `argc` if there is none.
    pub boundary: usize,

    /// Tokens in `1..options_end` are parsed as launcher options.
    pub options_end: usize,

    /// Tokens in `rest_start..` are passthrough arguments.
    pub rest_start: usize,

    /// Bare tokens before `options_end` that no option consumed. They are
    /// withheld from the parser and lead the passthrough arguments.
    pub stray: Vec<usize>,
}

/// Index of the first `-` or non-option token not consumed as an option value.
///
/// A bare token is consumed when the token before it is a short option (or a
/// clump of them) whose last character takes a value, or a value-taking long
/// option written without `=`. Only the preceding token is inspected, so a
/// clump such as `-ifoo bar` also marks `bar` as consumed.
pub fn passthrough_boundary<S: AsRef<str>>(argv: &[S]) -> usize {
    for i in 1..argv.len() {
        let token = argv[i].as_ref();
        if token == "-" {
            return i;
        }
        if !token.starts_with('-') && !takes_next_as_value(argv[i - 1].as_ref()) {
            return i;
        }
    }
    argv.len()
}

fn takes_next_as_value(prev: &str) -> bool {
    if let Some(long) = prev.strip_prefix("--") {
        return !long.contains('=') && VALUE_LONGS.contains(&long);
    }
    prev.len() > 1
        && prev.starts_with('-')
        && prev.chars().last().is_some_and(|c| VALUE_SHORTS.contains(&c))
}

/// Compute the full split of `argv`.
///
/// Option parsing additionally stops right after the first main option
/// (`-r`/`--repl`, `-m NS`/`--main NS`) or at a `--` terminator: init options
/// must precede main options, and whatever follows belongs to the main
/// operation.
pub fn split<S: AsRef<str>>(argv: &[S]) -> ArgSplit {
    let boundary = passthrough_boundary(argv);
    let mut stray = Vec::new();
    let mut i = 1;

    while i < boundary {
        let token = argv[i].as_ref();
        i += 1;

        if token == "--" {
            return ArgSplit {
                boundary,
                options_end: i - 1,
                rest_start: i,
                stray,
            };
        }

        if let Some(long) = token.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            let takes_value = !inline_value && VALUE_LONGS.contains(&name);
            if takes_value {
                i += 1;
            }
            if name == "repl" || name == "main" {
                return cut_at(boundary, i, stray);
            }
            continue;
        }

        let Some(clump) = token.strip_prefix('-') else {
            // Left behind by the last-letter heuristic, e.g. `-tdark script.cljs`.
            stray.push(i - 1);
            continue;
        };
        // The whole clump reaches the parser, so `-rm ns` still reports the conflict.
        let mut main_seen = false;
        let mut chars = clump.chars().peekable();
        while let Some(c) = chars.next() {
            main_seen |= c == 'r' || c == 'm';
            if VALUE_SHORTS.contains(&c) {
                if chars.peek().is_none() {
                    i += 1;
                }
                break;
            }
        }
        if main_seen {
            return cut_at(boundary, i, stray);
        }
    }

    ArgSplit {
        boundary,
        options_end: boundary,
        rest_start: boundary,
        stray,
    }
}

fn cut_at(boundary: usize, index: usize, stray: Vec<usize>) -> ArgSplit {
    let end = index.min(boundary);
    ArgSplit {
        boundary,
        options_end: end,
        rest_start: end,
        stray,
    }
}
