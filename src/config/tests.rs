//! Tests for configuration building.

use crate::cli;
use crate::config::{CheckedArrays, Config, Optimizations, Script, SocketEndpoint, SourceKind};
use crate::env::LaunchEnv;
use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn test_env() -> LaunchEnv {
    LaunchEnv {
        cwd: PathBuf::from("/work"),
        classpath: None,
        home: Some(PathBuf::from("/home/tester")),
        stdin_is_tty: true,
    }
}

fn build(args: &[&str], env: &LaunchEnv) -> Result<Config> {
    let mut argv = vec!["planck"];
    argv.extend_from_slice(args);
    Config::build(cli::parse(&argv)?, env)
}

fn src_path_strings(config: &Config) -> Vec<String> {
    config
        .src_paths
        .iter()
        .map(|entry| entry.path.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(!config.verbose);
    assert!(!config.quiet);
    assert!(!config.repl);
    assert_eq!(config.theme, "light");
    assert_eq!(config.optimizations, Optimizations::None);
    assert_eq!(config.checked_arrays, CheckedArrays::Off);
    assert!(config.cache_path.is_none());
    assert!(config.src_paths.is_empty());
    assert!(config.init_actions.is_empty());
}

#[test]
fn test_no_arguments_selects_repl() {
    let config = build(&[], &test_env()).unwrap();
    assert!(config.repl);
    assert!(config.main_ns.is_none());
    assert!(config.rest_args.is_empty());
    assert!(config.is_tty);
}

#[test]
fn test_explicit_repl_is_idempotent_with_default() {
    let config = build(&["-r"], &test_env()).unwrap();
    assert!(config.repl);
}

#[test]
fn test_eval_only_does_not_select_repl() {
    let config = build(&["-e", "(+ 1 2)"], &test_env()).unwrap();
    assert!(!config.repl);
    assert_eq!(config.init_actions, vec![Script::expression("(+ 1 2)")]);
}

#[test]
fn test_init_eval_and_script_arguments() {
    let config = build(
        &["-i", "a.cljs", "-e", "(+ 1 2)", "script.cljs", "x", "y"],
        &test_env(),
    )
    .unwrap();

    assert_eq!(
        config.init_actions,
        vec![Script::path("a.cljs"), Script::expression("(+ 1 2)")]
    );
    assert_eq!(config.rest_args, vec!["script.cljs", "x", "y"]);
    assert!(!config.repl);
}

#[test]
fn test_flags_and_enums() {
    let config = build(
        &["-v", "-q", "-s", "-a", "-O", "whitespace", "-A", "error", "-t", "dark"],
        &test_env(),
    )
    .unwrap();

    assert!(config.verbose);
    assert!(config.quiet);
    assert!(config.static_fns);
    assert!(config.elide_asserts);
    assert_eq!(config.optimizations, Optimizations::Whitespace);
    assert_eq!(config.checked_arrays, CheckedArrays::Error);
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_dumb_terminal_forces_dumb_theme() {
    let config = build(&["-t", "dark", "-d"], &test_env()).unwrap();
    assert!(config.dumb_terminal);
    assert_eq!(config.theme, "dumb");
}

#[test]
fn test_cache_conflict_is_usage_error() {
    for args in [&["-k", "/tmp", "-K"][..], &["-K", "-k", "/tmp"][..]] {
        let err = build(args, &test_env()).unwrap_err();
        assert!(matches!(err, LaunchError::Cli(_)));
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_auto_cache_uses_working_directory() {
    let config = build(&["-K"], &test_env()).unwrap();
    assert_eq!(config.cache_path, Some(PathBuf::from("/work/.planck_cache/")));
}

#[test]
fn test_existing_cache_directory_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let cache = temp_dir.path().to_string_lossy().into_owned();

    let config = build(&["-k", cache.as_str()], &test_env()).unwrap();
    let expected = format!("{}/", cache.trim_end_matches('/'));
    assert_eq!(config.cache_path, Some(PathBuf::from(expected)));
}

#[test]
fn test_missing_cache_directory_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent").to_string_lossy().into_owned();

    let config = build(&["-k", missing.as_str()], &test_env()).unwrap();
    assert!(config.cache_path.is_none());
}

#[test]
fn test_socket_repl_forms() {
    let config = build(&["-n", "9999"], &test_env()).unwrap();
    assert_eq!(
        config.socket_repl,
        Some(SocketEndpoint {
            host: "localhost".to_string(),
            port: 9999
        })
    );

    let config = build(&["-n", "127.0.0.1:5555"], &test_env()).unwrap();
    assert_eq!(
        config.socket_repl,
        Some(SocketEndpoint {
            host: "127.0.0.1".to_string(),
            port: 5555
        })
    );
}

#[test]
fn test_bad_socket_repl_is_not_fatal() {
    for addr in ["nope", "host:", ":9999", "host:99999", "0"] {
        let config = build(&["-n", addr], &test_env()).unwrap();
        assert!(config.socket_repl.is_none(), "accepted {:?}", addr);
    }
}

#[test]
fn test_classpath_entries_are_typed_and_absolute() {
    let config = build(&["-c", "/a/src:/b/lib.jar"], &test_env()).unwrap();

    assert_eq!(src_path_strings(&config), vec!["/a/src/", "/b/lib.jar"]);
    assert_eq!(config.src_paths[0].kind, SourceKind::Directory);
    assert_eq!(config.src_paths[1].kind, SourceKind::Archive);
    assert!(config.src_paths.iter().all(|entry| !entry.denylisted));
}

#[test]
fn test_relative_classpath_is_qualified() {
    let config = build(&["-c", "src:lib/dep.jar"], &test_env()).unwrap();
    assert_eq!(src_path_strings(&config), vec!["/work/src/", "/work/lib/dep.jar"]);
}

#[test]
fn test_environment_classpath_never_merges() {
    let mut env = test_env();
    env.classpath = Some("/env/src:/env/lib.jar".to_string());

    let config = build(&["-c", "/explicit"], &env).unwrap();
    assert_eq!(src_path_strings(&config), vec!["/explicit/"]);

    let config = build(&[], &env).unwrap();
    assert_eq!(src_path_strings(&config), vec!["/env/src/", "/env/lib.jar"]);
}

#[test]
fn test_dependencies_follow_explicit_classpath() {
    let config = build(
        &["-c", "src", "-D", "org.foo/bar:1.2.3,org.baz:2.0", "-L", "/repo"],
        &test_env(),
    )
    .unwrap();

    assert_eq!(
        src_path_strings(&config),
        vec![
            "/work/src/",
            "/repo/org/foo/bar/1.2.3/bar-1.2.3.jar",
            "/repo/org/baz/baz/2.0/baz-2.0.jar",
        ]
    );
}

#[test]
fn test_dependencies_default_to_home_repository() {
    let config = build(&["-D", "org.foo:1.2.3"], &test_env()).unwrap();
    assert_eq!(
        src_path_strings(&config),
        vec!["/home/tester/.m2/repository/org/foo/foo/1.2.3/foo-1.2.3.jar"]
    );
}

#[test]
fn test_dependencies_block_environment_classpath() {
    let mut env = test_env();
    env.classpath = Some("/env/src".to_string());

    let config = build(&["-D", "org.foo:1.0"], &env).unwrap();
    assert_eq!(
        src_path_strings(&config),
        vec!["/home/tester/.m2/repository/org/foo/foo/1.0/foo-1.0.jar"]
    );
}

#[test]
fn test_unresolvable_home_drops_dependencies() {
    let mut env = test_env();
    env.home = None;

    let config = build(&["-c", "/a", "-D", "org.foo:1.0"], &env).unwrap();
    assert_eq!(src_path_strings(&config), vec!["/a/"]);
}

#[test]
fn test_malformed_dependency_is_usage_error() {
    let err = build(&["-D", "not-a-coordinate"], &test_env()).unwrap_err();
    assert!(matches!(err, LaunchError::Usage(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_development_flags() {
    assert!(!build(&[], &test_env()).unwrap().javascript);

    let config = build(&["-j", "script.cljs"], &test_env()).unwrap();
    assert!(config.javascript);
    assert_eq!(config.rest_args, vec!["script.cljs"]);

    assert!(build(&["--javascript"], &test_env()).unwrap().javascript);
}

#[test]
fn test_output_and_sdk_directories() {
    let config = build(&["--out", "out", "-S", "/sdk"], &test_env()).unwrap();
    assert_eq!(config.out_path.as_deref(), Some(Path::new("/work/out/")));
    assert_eq!(config.dump_sdk.as_deref(), Some(Path::new("/sdk/")));
}

#[test]
fn test_main_namespace_with_arguments() {
    let config = build(&["-m", "foo.core", "a", "-v"], &test_env()).unwrap();
    assert_eq!(config.main_ns.as_deref(), Some("foo.core"));
    assert_eq!(config.rest_args, vec!["a", "-v"]);
    assert!(!config.repl);
    assert!(!config.verbose);
}

#[test]
fn test_config_serializes_tagged_variants() {
    let config = build(&["-c", "/a/lib.jar", "-e", "1"], &test_env()).unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["src_paths"][0]["kind"], "archive");
    assert_eq!(json["init_actions"][0]["source"]["kind"], "text");
    assert_eq!(json["init_actions"][0]["expression"], true);
    assert_eq!(json["optimizations"], "none");
}
