use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::env;

const MAX_ELEMENTS_VAR: &str = "AVL_INDEX_MAX_ELEMENTS";

/// Settings for bulk-loading keys.
///
/// Missing fields take their default values when deserializing.
///
/// # Examples
/// ```
/// use avl_index::Config;
///
/// let config = Config::default();
/// assert_eq!(config.max_elements, 100);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of values accepted from a single input.
    pub max_elements: usize,
}

impl Config {
    /// Builds a configuration from the defaults, overridden by `AVL_INDEX_MAX_ELEMENTS` if it is
    /// set.
    ///
    /// # Errors
    ///
    /// Fails with `Error::InvalidConfig` if the variable is set to something other than a
    /// non-negative integer.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        if let Ok(value) = env::var(MAX_ELEMENTS_VAR) {
            config.max_elements = parse_max_elements(&value)?;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { max_elements: 100 }
    }
}

fn parse_max_elements(value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        var: MAX_ELEMENTS_VAR,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_max_elements, Config};
    use crate::error::Error;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_tokens() {
        assert_tokens(
            &Config { max_elements: 250 },
            &[
                Token::Struct { name: "Config", len: 1 },
                Token::Str("max_elements"),
                Token::U64(250),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_missing_field_uses_default() {
        assert_de_tokens(
            &Config::default(),
            &[Token::Struct { name: "Config", len: 0 }, Token::StructEnd],
        );
    }

    #[test]
    fn test_parse_max_elements() {
        assert_eq!(parse_max_elements(" 42 ").unwrap(), 42);
        match parse_max_elements("many") {
            Err(Error::InvalidConfig { var, value }) => {
                assert_eq!(var, "AVL_INDEX_MAX_ELEMENTS");
                assert_eq!(value, "many");
            },
            _ => panic!("expected an invalid config error"),
        }
    }
}
