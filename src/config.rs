//! Logging configuration read from the environment.
//!
//! Values may come from the process environment or from a `.env` file
//! loaded by the binary before [`Config::from_env`] runs. The library
//! functions themselves read no configuration.

/// Environment variable holding a `tracing` filter directive.
pub const LOG_VAR: &str = "NATSORT_LOG";
/// Filter used when neither `NATSORT_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "natsort_ls=warn";

/// Settings for the `natsort-ls` binary that are not passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive for the log subscriber.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. `NATSORT_LOG` takes precedence
    /// over `RUST_LOG`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_filter: get(LOG_VAR)
                .or_else(|| get("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(config_from(&[(LOG_VAR, "  ")]).log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn natsort_log_overrides_rust_log() {
        let config = config_from(&[("RUST_LOG", "info"), (LOG_VAR, "natsort_ls=debug")]);
        assert_eq!(config.log_filter, "natsort_ls=debug");
        assert_eq!(config_from(&[("RUST_LOG", "info")]).log_filter, "info");
    }
}
