//! Playing styles that gate harmonization and variations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretlabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Pop,
    Folk,
    Jazz,
    Blues,
}

impl Style {
    pub const ALL: [Style; 4] = [Self::Pop, Self::Folk, Self::Jazz, Self::Blues];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Folk => "Folk",
            Self::Jazz => "Jazz",
            Self::Blues => "Blues",
        }
    }

    /// Pop and Folk stay on triads and get the add9 color.
    pub fn is_triadic(self) -> bool {
        matches!(self, Self::Pop | Self::Folk)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = FretlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pop" | "pop/folk" => Ok(Self::Pop),
            "folk" => Ok(Self::Folk),
            "jazz" => Ok(Self::Jazz),
            "blues" => Ok(Self::Blues),
            _ => Err(FretlabError::UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Jazz".parse::<Style>().unwrap(), Style::Jazz);
        assert_eq!("pop/folk".parse::<Style>().unwrap(), Style::Pop);
        assert_eq!(
            "metal".parse::<Style>(),
            Err(FretlabError::UnknownStyle("metal".to_string()))
        );
    }

    #[test]
    fn test_triadic_gate() {
        assert!(Style::Pop.is_triadic());
        assert!(Style::Folk.is_triadic());
        assert!(!Style::Jazz.is_triadic());
        assert!(!Style::Blues.is_triadic());
    }
}
