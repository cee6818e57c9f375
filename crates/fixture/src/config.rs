use std::{fmt, str::FromStr};

use thiserror::Error;

/// The keyword, if any, that opens a fixture declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Declaration {
    /// `name_results = [`
    #[default]
    None,
    /// `var name_results = [`
    Var,
    /// `let name_results = [`
    Let,
    /// `const name_results = [`
    Const,
}

impl Declaration {
    /// Returns the keyword, or `None` for a bare assignment.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Var => Some("var"),
            Self::Let => Some("let"),
            Self::Const => Some("const"),
        }
    }

    /// Returns the declaration matching `keyword`, if it is one.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(Self::Var),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("none"))
    }
}

impl FromStr for Declaration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            other => Self::from_keyword(other).ok_or_else(|| ConfigError::Declaration {
                value: other.to_owned(),
            }),
        }
    }
}

/// Settings for rendering fixtures.
///
/// Numeric precision and the decimation rule are fixed; only the textual
/// wrapper around the records is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    declaration: Declaration,
    suffix: String,
}

/// Errors that can occur when validating a fixture config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("suffix `{suffix}` must contain only ASCII letters, digits, and underscores")]
    Suffix { suffix: String },

    #[error("unknown declaration `{value}`, expected none, var, let, or const")]
    Declaration { value: String },
}

impl Config {
    /// Suffix appended to each fixture name unless configured otherwise.
    pub const DEFAULT_SUFFIX: &'static str = "_results";

    /// Creates a new config with a validated suffix.
    ///
    /// # Errors
    ///
    /// Returns an error if `suffix` contains anything other than ASCII letters,
    /// digits, and underscores. An empty suffix is allowed.
    pub fn new(declaration: Declaration, suffix: impl Into<String>) -> Result<Self, ConfigError> {
        let suffix = suffix.into();

        if !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::Suffix { suffix });
        }

        Ok(Self {
            declaration,
            suffix,
        })
    }

    /// Returns the same config with a different declaration keyword.
    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = declaration;
        self
    }

    /// Returns the declaration keyword.
    #[must_use]
    pub fn declaration(&self) -> Declaration {
        self.declaration
    }

    /// Returns the suffix appended to each fixture name.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the variable name a fixture is written under.
    #[must_use]
    pub fn fixture_name(&self, name: &str) -> String {
        format!("{name}{}", self.suffix)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            declaration: Declaration::None,
            suffix: Self::DEFAULT_SUFFIX.to_owned(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    declaration: Declaration,
    #[serde(default = "default_suffix")]
    suffix: String,
}

#[cfg(feature = "serde")]
fn default_suffix() -> String {
    Config::DEFAULT_SUFFIX.to_owned()
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.declaration, raw.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bare_results() {
        let config = Config::default();

        assert_eq!(config.declaration(), Declaration::None);
        assert_eq!(config.suffix(), "_results");
        assert_eq!(config.fixture_name("tcbtdb"), "tcbtdb_results");
    }

    #[test]
    fn rejects_non_identifier_suffix() {
        assert_eq!(
            Config::new(Declaration::Var, "-out"),
            Err(ConfigError::Suffix {
                suffix: "-out".to_owned()
            })
        );
        assert!(Config::new(Declaration::Var, "").is_ok());
    }

    #[test]
    fn declarations_parse_from_keywords() {
        assert_eq!("none".parse(), Ok(Declaration::None));
        assert_eq!("var".parse(), Ok(Declaration::Var));
        assert_eq!("const".parse(), Ok(Declaration::Const));
        assert!("static".parse::<Declaration>().is_err());

        assert_eq!(Declaration::Let.to_string(), "let");
        assert_eq!(Declaration::None.to_string(), "none");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_toml() {
        let config: Config = toml::from_str(
            r#"
            declaration = "var"
            suffix = "_expected"
            "#,
        )
        .unwrap();

        assert_eq!(config.declaration(), Declaration::Var);
        assert_eq!(config.fixture_name("pr00"), "pr00_expected");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_is_validated() {
        assert!(toml::from_str::<Config>(r#"suffix = "a b""#).is_err());
        assert!(toml::from_str::<Config>(r#"declaration = "static""#).is_err());
        assert!(toml::from_str::<Config>(r#"precision = 17"#).is_err());
    }
}
