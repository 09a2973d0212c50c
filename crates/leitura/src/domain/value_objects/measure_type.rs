//! MeasureType - Classification of a meter reading

use serde::{Deserialize, Serialize};

/// Kind of utility meter a reading was taken from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeasureType {
    Water,
    Gas,
}

impl std::fmt::Display for MeasureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasureType::Water => write!(f, "WATER"),
            MeasureType::Gas => write!(f, "GAS"),
        }
    }
}

impl std::str::FromStr for MeasureType {
    type Err = String;

    /// Exact match only; the upload boundary is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WATER" => Ok(MeasureType::Water),
            "GAS" => Ok(MeasureType::Gas),
            _ => Err(format!("Unknown measure type: {}", s)),
        }
    }
}

impl MeasureType {
    /// Case-insensitive parse used for the list query filter.
    pub fn from_query(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "WATER" => Ok(MeasureType::Water),
            "GAS" => Ok(MeasureType::Gas),
            _ => Err(format!("Unknown measure type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(MeasureType::from_str("WATER"), Ok(MeasureType::Water));
        assert_eq!(MeasureType::from_str("GAS"), Ok(MeasureType::Gas));
        assert!(MeasureType::from_str("water").is_err());
        assert!(MeasureType::from_str("Gas").is_err());
        assert!(MeasureType::from_str("OIL").is_err());
    }

    #[test]
    fn test_from_query_ignores_case() {
        assert_eq!(MeasureType::from_query("water"), Ok(MeasureType::Water));
        assert_eq!(MeasureType::from_query("Gas"), Ok(MeasureType::Gas));
        assert_eq!(MeasureType::from_query("WATER"), Ok(MeasureType::Water));
        assert!(MeasureType::from_query("OIL").is_err());
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(MeasureType::Water.to_string(), "WATER");
        assert_eq!(MeasureType::Gas.to_string(), "GAS");
    }
}
