/// Errors that can occur while validating a parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No path/query boundary character configured
    EmptyUrlSeps,
    /// Key/value separator is the same character as the pair separator
    EqualSepIsQuerySep(char),
    /// Key/value separator is also listed as a path/query boundary
    EqualSepIsUrlSep(char),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyUrlSeps => f.write_str("At least one url separator is required"),
            Self::EqualSepIsQuerySep(c) => {
                write!(f, "Equal separator '{c}' collides with the query separator")
            }
            Self::EqualSepIsUrlSep(c) => {
                write!(f, "Equal separator '{c}' collides with a url separator")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Result type for configuration operations
pub type Result<T> = core::result::Result<T, ConfigError>;
