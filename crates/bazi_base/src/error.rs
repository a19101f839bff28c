//! Error types for chart resolution and configuration loading.

use thiserror::Error;

/// Errors from resolving a birth moment into a chart.
///
/// Everything downstream of a resolved chart is total over the closed
/// enumerations, so these are the only ways a calculation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// A sexagenary name did not decompose into one stem and one branch.
    #[error("cannot parse sexagenary name {0:?}")]
    Parse(String),
    /// A solar term label is not one of the 24 recognized terms.
    #[error("unrecognized solar term {0:?}")]
    Lookup(String),
    /// Birth input outside the accepted ranges.
    #[error("invalid birth input: {0}")]
    InvalidInput(&'static str),
    /// The calendar collaborator could not describe the requested date.
    #[error("calendar unavailable: {0}")]
    Calendar(String),
}

/// Errors from loading TOML configuration or calendar fixture files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for the expected shape.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_quotes_input() {
        let e = BaziError::Parse("Giáp".into());
        assert_eq!(e.to_string(), "cannot parse sexagenary name \"Giáp\"");
    }

    #[test]
    fn lookup_error_quotes_input() {
        let e = BaziError::Lookup("Mùa xuân".into());
        assert!(e.to_string().contains("Mùa xuân"));
    }

    #[test]
    fn toml_error_converts() {
        let err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let e: ConfigError = err.into();
        assert!(e.to_string().starts_with("TOML error"));
    }
}
