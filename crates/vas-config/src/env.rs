use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure while expanding placeholders in the raw config text
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// Variable is unset and the placeholder has no default
    #[error("environment variable not found: `{0}`")]
    Missing(String),

    /// Placeholder refers to something other than `env.NAME`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.NAME }}` or `{{ env.NAME | default("value") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` falls back to `x` when `VAR` is unset.
/// Comment lines are copied through untouched so a commented-out secret
/// never has to be present in the environment.
pub fn expand_env(input: &str) -> Result<String, EnvError> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, EnvError> {
    let mut expanded = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        expanded.push_str(&line[last_end..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        last_end = whole.end();
    }

    expanded.push_str(&line[last_end..]);
    Ok(expanded)
}

fn resolve(captures: &Captures<'_>) -> Result<String, EnvError> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let default = captures.get(2).map(|m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|name| !name.is_empty() && !name.contains('.')) else {
        return Err(EnvError::UnsupportedScope(key.to_owned()));
    };

    match (std::env::var(name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(EnvError::Missing(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[server]\nlisten_address = \"127.0.0.1:3000\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_set_variable() {
        temp_env::with_var("VAS_TEST_LISTEN", Some("0.0.0.0:8080"), || {
            let result = expand_env("listen_address = \"{{ env.VAS_TEST_LISTEN }}\"").unwrap();
            assert_eq!(result, "listen_address = \"0.0.0.0:8080\"");
        });
    }

    #[test]
    fn expands_several_variables_across_lines() {
        let vars = [("VAS_TEST_A", Some("a")), ("VAS_TEST_B", Some("b"))];
        temp_env::with_vars(vars, || {
            let raw = "x = \"{{ env.VAS_TEST_A }}-{{env.VAS_TEST_B}}\"\ny = \"{{ env.VAS_TEST_B }}\"";
            let result = expand_env(raw).unwrap();
            assert_eq!(result, "x = \"a-b\"\ny = \"b\"");
        });
    }

    #[test]
    fn missing_variable_is_an_error() {
        temp_env::with_var_unset("VAS_TEST_MISSING", || {
            let err = expand_env("x = \"{{ env.VAS_TEST_MISSING }}\"").unwrap_err();
            assert_eq!(err, EnvError::Missing("VAS_TEST_MISSING".to_owned()));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("VAS_TEST_FILTER", || {
            let result = expand_env("f = \"{{ env.VAS_TEST_FILTER | default(\"debug\") }}\"").unwrap();
            assert_eq!(result, "f = \"debug\"");
        });

        temp_env::with_var("VAS_TEST_FILTER", Some("warn"), || {
            let result = expand_env("f = \"{{ env.VAS_TEST_FILTER | default(\"debug\") }}\"").unwrap();
            assert_eq!(result, "f = \"warn\"");
        });
    }

    #[test]
    fn empty_default_is_allowed() {
        temp_env::with_var_unset("VAS_TEST_EMPTY", || {
            let result = expand_env("f = \"{{ env.VAS_TEST_EMPTY | default(\"\") }}\"").unwrap();
            assert_eq!(result, "f = \"\"");
        });
    }

    #[test]
    fn other_scopes_are_rejected() {
        let err = expand_env("x = \"{{ secrets.TOKEN }}\"").unwrap_err();
        assert_eq!(err, EnvError::UnsupportedScope("secrets.TOKEN".to_owned()));

        let err = expand_env("x = \"{{ env.A.B }}\"").unwrap_err();
        assert_eq!(err, EnvError::UnsupportedScope("env.A.B".to_owned()));
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_vars([("VAS_TEST_SET", Some("v")), ("VAS_TEST_UNSET", None::<&str>)], || {
            let input = "  # old = \"{{ env.VAS_TEST_UNSET }}\"\nnew = \"{{ env.VAS_TEST_SET }}\"";
            let result = expand_env(input).unwrap();
            assert_eq!(result, "  # old = \"{{ env.VAS_TEST_UNSET }}\"\nnew = \"v\"");
        });
    }
}
