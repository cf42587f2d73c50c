//! Run configuration.

use honeycomb_lexicon::LoadMode;
use honeycomb_search::FinderOptions;

use crate::error::{Error, Result};

/// Environment variable selecting the dictionary load mode.
pub const DICT_MODE_VAR: &str = "HONEYCOMB_DICT_MODE";

/// Environment variable capping trace length.
pub const MAX_WORD_LEN_VAR: &str = "HONEYCOMB_MAX_WORD_LEN";

/// Environment variable holding the tracing filter.
pub const LOG_VAR: &str = "HONEYCOMB_LOG";

/// Filter used when neither `HONEYCOMB_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// What to do with dictionary words outside 'A'..='Z'
    pub dict_mode: LoadMode,

    /// Longest word to trace
    pub max_word_len: Option<usize>,
}

impl SearchConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DICT_MODE_VAR) {
            config.dict_mode = value.parse().map_err(|_| Error::Config {
                key: DICT_MODE_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(MAX_WORD_LEN_VAR).filter(|v| !v.trim().is_empty()) {
            let len = value.trim().parse::<usize>().map_err(|_| Error::Config {
                key: MAX_WORD_LEN_VAR,
                value: value.clone(),
            })?;
            config.max_word_len = Some(len);
        }

        Ok(config)
    }

    /// Search options derived from this config.
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions {
            max_word_len: self.max_word_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = SearchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.dict_mode, LoadMode::Skip);
        assert_eq!(config.max_word_len, None);
    }

    #[test]
    fn reads_overrides() {
        let config = SearchConfig::from_lookup(lookup(&[
            (DICT_MODE_VAR, "strict"),
            (MAX_WORD_LEN_VAR, "6"),
        ]))
        .unwrap();
        assert_eq!(config.dict_mode, LoadMode::Strict);
        assert_eq!(config.finder_options().max_word_len, Some(6));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SearchConfig::from_lookup(lookup(&[(DICT_MODE_VAR, "loose")])),
            Err(Error::Config { key: DICT_MODE_VAR, .. })
        ));
        assert!(matches!(
            SearchConfig::from_lookup(lookup(&[(MAX_WORD_LEN_VAR, "-1")])),
            Err(Error::Config { key: MAX_WORD_LEN_VAR, .. })
        ));
    }
}
