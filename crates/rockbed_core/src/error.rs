use std::fmt;

/// Error returned when a dimension name is not one of the seven known axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDimensionError {
    pub input: String,
}

impl fmt::Display for ParseDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dimension {:?}", self.input)
    }
}

impl std::error::Error for ParseDimensionError {}
