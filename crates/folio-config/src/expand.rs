//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// Only `${...}` spans are expanded. Any other `$` is kept literally so
/// footers and titles can contain dollar signs, and an unclosed `${` is
/// kept as written.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_braced(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` span.
fn expand_braced(span: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(span, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_title_unchanged() {
        let result = expand_env("Project Docs", "site.title").unwrap();
        assert_eq!(result, "Project Docs");
    }

    #[test]
    fn test_expand_footer_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("FOLIO_TEST_FOOTER_ORG", "Acme");
        }
        let result = expand_env("(c) ${FOLIO_TEST_FOOTER_ORG}", "site.footer").unwrap();
        assert_eq!(result, "(c) Acme");
        unsafe {
            std::env::remove_var("FOLIO_TEST_FOOTER_ORG");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FOLIO_TEST_UNSET_YEAR");
        }
        let result = expand_env("${FOLIO_TEST_UNSET_YEAR:-2024}", "site.footer").unwrap();
        assert_eq!(result, "2024");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FOLIO_TEST_MISSING");
        }
        let err = expand_env("${FOLIO_TEST_MISSING}", "site.title").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_TEST_MISSING"));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("Costs $5", "site.footer").unwrap();
        assert_eq!(result, "Costs $5");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FOLIO_TEST_UNSET_PRICE_YEAR");
        }
        let result =
            expand_env("Costs $5 ${FOLIO_TEST_UNSET_PRICE_YEAR:-2024} $HOME", "site.footer")
                .unwrap();
        assert_eq!(result, "Costs $5 2024 $HOME");
    }

    #[test]
    fn test_unclosed_brace_kept() {
        let result = expand_env("Price ${oops", "site.footer").unwrap();
        assert_eq!(result, "Price ${oops");
    }
}
