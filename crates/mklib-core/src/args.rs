//! Command-line tokenizing and typed flag access
//!
//! Tokens starting with `-` or `--` become flags (`--key` or `--key=value`),
//! everything else is kept as a positional argument in order. Flags with an
//! empty key (a bare `-` or `--`) are dropped.

use clap::ValueEnum;
use std::collections::HashMap;
use thiserror::Error;

/// Value of a single flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Presence-only flag (`--yes`)
    Bool(bool),
    /// Flag with an explicit value (`--pm=bun`)
    Str(String),
}

impl FlagValue {
    fn kind(&self) -> &'static str {
        match self {
            FlagValue::Bool(_) => "boolean",
            FlagValue::Str(_) => "string",
        }
    }
}

/// Errors raised by the typed flag accessors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
    #[error("missing required flag --{flag}")]
    Missing { flag: String },

    #[error("flag --{flag} must be a {expected}, got {found}")]
    WrongType {
        flag: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value '{value}' for --{flag} (expected one of: {})", .allowed.join(", "))]
    NotAllowed {
        flag: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Parsed flags, keyed by name. Later occurrences overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    values: HashMap<String, FlagValue>,
}

impl Flags {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.values.get(name)
    }

    /// Required boolean flag
    pub fn bool(&self, name: &str) -> Result<bool, FlagError> {
        self.bool_opt(name)?
            .ok_or_else(|| FlagError::Missing { flag: name.to_string() })
    }

    /// Boolean flag, `default` when absent
    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, FlagError> {
        Ok(self.bool_opt(name)?.unwrap_or(default))
    }

    /// Required string flag
    pub fn string(&self, name: &str) -> Result<&str, FlagError> {
        self.string_opt(name)?
            .ok_or_else(|| FlagError::Missing { flag: name.to_string() })
    }

    /// String flag, `default` when absent
    pub fn string_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, FlagError> {
        Ok(self.string_opt(name)?.unwrap_or(default))
    }

    /// Required string flag restricted to the variants of `T`.
    /// Fails when the value is not one of them.
    pub fn one_of<T: ValueEnum>(&self, name: &str) -> Result<T, FlagError> {
        let value = self.string(name)?;
        <T as ValueEnum>::from_str(value, false).map_err(|_| FlagError::NotAllowed {
            flag: name.to_string(),
            value: value.to_string(),
            allowed: allowed_values::<T>(),
        })
    }

    /// String flag restricted to the variants of `T`.
    /// Returns `default` when the flag is absent or its value is not a variant.
    pub fn one_of_or<T: ValueEnum>(&self, name: &str, default: T) -> Result<T, FlagError> {
        Ok(self
            .string_opt(name)?
            .and_then(|value| <T as ValueEnum>::from_str(value, false).ok())
            .unwrap_or(default))
    }

    fn bool_opt(&self, name: &str) -> Result<Option<bool>, FlagError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(FlagValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FlagError::WrongType {
                flag: name.to_string(),
                expected: "boolean",
                found: other.kind(),
            }),
        }
    }

    fn string_opt(&self, name: &str) -> Result<Option<&str>, FlagError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(FlagValue::Str(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FlagError::WrongType {
                flag: name.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }
}

/// Identifiers accepted for a `ValueEnum` type
pub fn allowed_values<T: ValueEnum>() -> Vec<String> {
    T::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect()
}

/// Split raw tokens into flags and positional arguments
pub fn parse_args<I, S>(tokens: I) -> (Flags, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut flags = Flags::default();
    let mut positionals = Vec::new();

    for token in tokens {
        let token: String = token.into();

        let body = if let Some(rest) = token.strip_prefix("--") {
            rest
        } else if let Some(rest) = token.strip_prefix('-') {
            rest
        } else {
            positionals.push(token);
            continue;
        };

        // Everything after the first '=' is the value, further '=' included
        let (key, value) = match body.split_once('=') {
            Some((key, value)) => (key, FlagValue::Str(value.to_string())),
            None => (body, FlagValue::Bool(true)),
        };

        if key.is_empty() {
            continue;
        }

        flags.values.insert(key.to_string(), value);
    }

    (flags, positionals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    enum Color {
        Red,
        Green,
    }

    #[test]
    fn test_plain_tokens_are_positionals() {
        let (flags, positionals) = parse_args(["my-lib", "other", "third"]);
        assert!(flags.is_empty());
        assert_eq!(positionals, vec!["my-lib", "other", "third"]);
    }

    #[test]
    fn test_long_and_short_flags() {
        let (flags, positionals) = parse_args(["--y", "-p=pnpm", "name"]);
        assert_eq!(flags.get("y"), Some(&FlagValue::Bool(true)));
        assert_eq!(flags.get("p"), Some(&FlagValue::Str("pnpm".to_string())));
        assert_eq!(positionals, vec!["name"]);
    }

    #[test]
    fn test_empty_key_is_discarded() {
        let (flags, positionals) = parse_args(["--", "-", "--=value", "-=x", "lib"]);
        assert!(flags.is_empty());
        assert_eq!(positionals, vec!["lib"]);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let (flags, _) = parse_args(["--p=npm", "--p=yarn"]);
        assert_eq!(flags.string("p"), Ok("yarn"));

        let (flags, _) = parse_args(["--y=no", "-y"]);
        assert_eq!(flags.bool("y"), Ok(true));
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let (flags, _) = parse_args(["--a=b=c"]);
        assert_eq!(flags.string("a"), Ok("b=c"));
    }

    #[test]
    fn test_empty_value_is_a_string() {
        let (flags, _) = parse_args(["--name="]);
        assert_eq!(flags.string("name"), Ok(""));
    }

    #[test]
    fn test_required_accessors() {
        let (flags, _) = parse_args(["--y", "--p=bun"]);

        assert_eq!(flags.bool("y"), Ok(true));
        assert_eq!(
            flags.bool("missing"),
            Err(FlagError::Missing {
                flag: "missing".to_string()
            })
        );
        assert_eq!(
            flags.string("y"),
            Err(FlagError::WrongType {
                flag: "y".to_string(),
                expected: "string",
                found: "boolean",
            })
        );
        assert!(matches!(
            flags.bool("p"),
            Err(FlagError::WrongType { .. })
        ));
    }

    #[test]
    fn test_default_accessors() {
        let (flags, _) = parse_args(["--p=bun", "--y"]);

        assert_eq!(flags.bool_or("missing", false), Ok(false));
        assert_eq!(flags.string_or("missing", "fallback"), Ok("fallback"));
        assert_eq!(flags.string_or("p", "fallback"), Ok("bun"));
        // A present value of the wrong type still fails
        assert!(flags.bool_or("p", false).is_err());
        assert!(flags.string_or("y", "x").is_err());
    }

    #[test]
    fn test_one_of_rejects_unknown_values() {
        let (flags, _) = parse_args(["--color=green", "--other=blue"]);

        assert_eq!(flags.one_of::<Color>("color"), Ok(Color::Green));

        let err = flags.one_of::<Color>("other").unwrap_err();
        assert_eq!(
            err,
            FlagError::NotAllowed {
                flag: "other".to_string(),
                value: "blue".to_string(),
                allowed: vec!["red".to_string(), "green".to_string()],
            }
        );
        assert!(err.to_string().contains("red, green"));
    }

    #[test]
    fn test_one_of_or_substitutes_default() {
        let (flags, _) = parse_args(["--color=green", "--other=blue", "--flag"]);

        assert_eq!(flags.one_of_or("color", Color::Red), Ok(Color::Green));
        assert_eq!(flags.one_of_or("other", Color::Red), Ok(Color::Red));
        assert_eq!(flags.one_of_or("missing", Color::Green), Ok(Color::Green));
        assert!(flags.one_of_or("flag", Color::Red).is_err());
    }
}
