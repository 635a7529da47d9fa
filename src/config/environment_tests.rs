//! Tests for environment discovery

use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn resolve_all(shell: &str) -> Option<PathBuf> {
    Some(PathBuf::from("/usr/bin").join(shell_short_name(shell)))
}

#[test]
fn test_discovers_full_environment() {
    let env = Environment::from_lookup(
        vars(&[("OPENAI_API_KEY", "sk-test"), ("SHELL", "/bin/zsh")]),
        "linux",
        resolve_all,
    )
    .unwrap();

    assert_eq!(env.api_key, "sk-test");
    assert_eq!(env.shell_name, "zsh");
    assert_eq!(env.shell_interpreter, PathBuf::from("/usr/bin/zsh"));
    assert_eq!(env.operating_system, "linux");
}

#[test]
fn test_missing_api_key() {
    let result = Environment::from_lookup(vars(&[("SHELL", "/bin/bash")]), "linux", resolve_all);
    assert_eq!(result, Err(ConfigError::MissingApiKey));
}

#[test]
fn test_blank_api_key_counts_as_missing() {
    let result = Environment::from_lookup(
        vars(&[("OPENAI_API_KEY", "   "), ("SHELL", "/bin/bash")]),
        "linux",
        resolve_all,
    );
    assert_eq!(result, Err(ConfigError::MissingApiKey));
}

#[test]
fn test_missing_shell() {
    let result =
        Environment::from_lookup(vars(&[("OPENAI_API_KEY", "sk-test")]), "linux", resolve_all);
    assert_eq!(result, Err(ConfigError::MissingShell));
}

#[test]
fn test_unknown_os() {
    let result = Environment::from_lookup(
        vars(&[("OPENAI_API_KEY", "sk-test"), ("SHELL", "/bin/bash")]),
        "",
        resolve_all,
    );
    assert_eq!(result, Err(ConfigError::UnknownOs));
}

#[test]
fn test_api_key_checked_before_shell() {
    let result = Environment::from_lookup(vars(&[]), "linux", resolve_all);
    assert_eq!(result, Err(ConfigError::MissingApiKey));
}

#[test]
fn test_unresolvable_interpreter() {
    let result = Environment::from_lookup(
        vars(&[("OPENAI_API_KEY", "sk-test"), ("SHELL", "nosuchshell")]),
        "linux",
        |_| None,
    );
    assert_eq!(
        result,
        Err(ConfigError::InterpreterNotFound {
            shell: "nosuchshell".to_string()
        })
    );
}

#[test]
fn test_debug_hides_api_key() {
    let env = Environment::from_lookup(
        vars(&[("OPENAI_API_KEY", "sk-secret"), ("SHELL", "bash")]),
        "linux",
        resolve_all,
    )
    .unwrap();

    let debug_output = format!("{:?}", env);
    assert!(debug_output.contains("bash"));
    assert!(!debug_output.contains("sk-secret"));
}

#[test]
fn test_shell_short_name() {
    assert_eq!(shell_short_name("/bin/bash"), "bash");
    assert_eq!(shell_short_name("fish"), "fish");
    assert_eq!(shell_short_name("/usr/local/bin/nu"), "nu");
}
