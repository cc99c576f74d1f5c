use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::domain::entities::DEFAULT_PAGE_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page size requested for the owned projects listing
    pub page_limit: u32,
    /// Select the first fetched project when nothing is selected yet
    pub auto_select_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            auto_select_first: false,
        }
    }
}

impl Config {
    /// Read settings from the process environment
    ///
    /// Does not touch `.env`; see `from_dotenv`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load `.env` from the working directory into the process environment,
    /// then read settings from it
    ///
    /// Meant for an application's entry point, not for library callers.
    pub fn from_dotenv() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page_limit = parse_or(
            "PROJECTS_PAGE_LIMIT",
            lookup("PROJECTS_PAGE_LIMIT").as_deref(),
            defaults.page_limit,
        );

        Self {
            page_limit: if page_limit == 0 {
                tracing::warn!("PROJECTS_PAGE_LIMIT must be positive, using default");
                defaults.page_limit
            } else {
                page_limit
            },
            auto_select_first: parse_or(
                "PROJECTS_AUTO_SELECT_FIRST",
                lookup("PROJECTS_AUTO_SELECT_FIRST").as_deref(),
                defaults.auto_select_first,
            ),
        }
    }
}

/// Parse an optional raw value, falling back to `default` when it is
/// missing or malformed
fn parse_or<T>(name: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
{
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = raw, default = %default, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn from_lookup_reads_both_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROJECTS_PAGE_LIMIT", "12"),
            ("PROJECTS_AUTO_SELECT_FIRST", "true"),
        ]));
        assert_eq!(
            config,
            Config {
                page_limit: 12,
                auto_select_first: true,
            }
        );
    }

    #[test]
    fn from_lookup_missing_vars_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn from_lookup_zero_page_limit_falls_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROJECTS_PAGE_LIMIT", "0"),
            ("PROJECTS_AUTO_SELECT_FIRST", "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn from_env_reads_process_environment() {
        // Only this test sets these variables
        env::set_var("PROJECTS_PAGE_LIMIT", "0");
        env::set_var("PROJECTS_AUTO_SELECT_FIRST", "not-a-bool");
        let malformed = Config::from_env();

        env::set_var("PROJECTS_PAGE_LIMIT", "25");
        env::set_var("PROJECTS_AUTO_SELECT_FIRST", "true");
        let valid = Config::from_env();
        let with_dotenv = Config::from_dotenv();

        env::remove_var("PROJECTS_PAGE_LIMIT");
        env::remove_var("PROJECTS_AUTO_SELECT_FIRST");

        assert_eq!(malformed, Config::default());
        assert_eq!(valid.page_limit, 25);
        assert!(valid.auto_select_first);
        assert_eq!(with_dotenv, valid);
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.page_limit, 7);
        assert!(!config.auto_select_first);
    }

    #[test]
    fn parse_or_missing_uses_default() {
        assert_eq!(parse_or("X", None, 7u32), 7);
    }

    #[test]
    fn parse_or_valid_value() {
        assert_eq!(parse_or("X", Some(" 25 "), 7u32), 25);
        assert!(parse_or("X", Some("true"), false));
    }

    #[test]
    fn parse_or_malformed_uses_default() {
        assert_eq!(parse_or("X", Some("lots"), 7u32), 7);
        assert!(!parse_or("X", Some("yes please"), false));
    }
}
