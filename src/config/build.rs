//! Building a Config from parsed arguments and the startup environment.

use super::model::Config;
use super::types::*;
use crate::classpath;
use crate::cli::{Cli, ParsedArgs};
use crate::deps;
use crate::env::LaunchEnv;
use crate::error::Result;
use crate::paths;
use std::path::PathBuf;

impl Config {
    /// Build the configuration.
    ///
    /// Resolution warnings (unusable cache directory, unparsable socket
    /// address, no repository root for dependencies) are logged and the
    /// affected setting is left disabled. Malformed dependency coordinates
    /// are usage errors.
    pub fn build(parsed: ParsedArgs, env: &LaunchEnv) -> Result<Self> {
        let ParsedArgs {
            cli,
            init_actions,
            rest_args,
        } = parsed;

        let explicit = explicit_classpath(&cli, env)?;
        let src_paths = classpath::resolve(&explicit, env.classpath.as_deref(), &env.cwd);

        let theme = if cli.dumb_terminal {
            DUMB_THEME.to_string()
        } else {
            cli.theme.clone().unwrap_or_else(|| DEFAULT_THEME.to_string())
        };

        // With nothing else to do, run a REPL.
        let repl = cli.repl
            || (init_actions.is_empty() && cli.main_ns.is_none() && rest_args.is_empty());

        let config = Config {
            verbose: cli.verbose,
            quiet: cli.quiet,
            dumb_terminal: cli.dumb_terminal,
            is_tty: env.stdin_is_tty,
            theme,
            static_fns: cli.static_fns,
            elide_asserts: cli.elide_asserts,
            optimizations: cli.optimizations.unwrap_or_default(),
            checked_arrays: cli.checked_arrays.unwrap_or_default(),
            javascript: cli.javascript,
            cache_path: cache_path(&cli, env),
            out_path: cli.out.as_deref().map(|out| paths::qualify_dir(&env.cwd, out)),
            dump_sdk: cli.dump_sdk.as_deref().map(|dir| paths::qualify_dir(&env.cwd, dir)),
            src_paths,
            socket_repl: socket_repl(&cli),
            init_actions,
            main_ns: cli.main_ns,
            repl,
            rest_args,
        };

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Explicit classpath followed by the dependency fragment.
fn explicit_classpath(cli: &Cli, env: &LaunchEnv) -> Result<String> {
    let mut parts: Vec<String> = cli.classpath.iter().cloned().collect();

    if let Some(list) = cli.dependencies.as_deref() {
        // Coordinates are validated even when no repository can be located.
        let coordinates = deps::parse_list(list)?;
        match repository_root(cli, env) {
            Some(root) => {
                tracing::debug!(root = %root.display(), "resolving dependencies");
                parts.push(deps::fragment(&coordinates, &root));
            }
            None => tracing::warn!(
                "cannot resolve dependencies: HOME is not set and no --local-repo was given"
            ),
        }
    }

    Ok(parts.join(":"))
}

fn repository_root(cli: &Cli, env: &LaunchEnv) -> Option<PathBuf> {
    match cli.local_repo.as_deref() {
        Some(repo) => Some(paths::qualify(&env.cwd, repo)),
        None => deps::default_repository(env.home.as_deref()),
    }
}

fn cache_path(cli: &Cli, env: &LaunchEnv) -> Option<PathBuf> {
    if cli.auto_cache {
        return Some(paths::qualify_dir(&env.cwd, AUTO_CACHE_DIR));
    }

    let path = cli.cache.as_deref()?;
    let dir = paths::qualify_dir(&env.cwd, path);
    if dir.is_dir() {
        Some(dir)
    } else {
        tracing::warn!("cache directory {} does not exist; caching disabled", dir.display());
        None
    }
}

fn socket_repl(cli: &Cli) -> Option<SocketEndpoint> {
    let addr = cli.socket_repl.as_deref()?;
    let endpoint = SocketEndpoint::parse(addr);
    if endpoint.is_none() {
        tracing::warn!(
            "could not parse socket REPL address '{}': expected PORT or HOST:PORT",
            addr
        );
    }
    endpoint
}
