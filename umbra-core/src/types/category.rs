use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Annotation categories tracked per sequence.
///
/// The serialized identifiers double as store-document keys and match the
/// upstream feature vocabulary (coiled coil, disordered region, transmembrane
/// segment, signal peptide, chain/family, domain signature match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CC")]
    CoiledCoil,
    #[serde(rename = "IDP")]
    Disorder,
    #[serde(rename = "TM")]
    Transmembrane,
    #[serde(rename = "SP")]
    SignalPeptide,
    #[serde(rename = "CHAINS")]
    Family,
    #[serde(rename = "DOMAINS")]
    Domain,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CoiledCoil,
        Category::Disorder,
        Category::Transmembrane,
        Category::SignalPeptide,
        Category::Family,
        Category::Domain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CoiledCoil => "CC",
            Category::Disorder => "IDP",
            Category::Transmembrane => "TM",
            Category::SignalPeptide => "SP",
            Category::Family => "CHAINS",
            Category::Domain => "DOMAINS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CC" => Ok(Category::CoiledCoil),
            "IDP" => Ok(Category::Disorder),
            "TM" => Ok(Category::Transmembrane),
            "SP" => Ok(Category::SignalPeptide),
            "CHAINS" => Ok(Category::Family),
            "DOMAINS" => Ok(Category::Domain),
            other => Err(format!("unknown annotation category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("XYZ".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_store_keys() {
        assert_eq!(
            serde_json::to_string(&Category::Disorder).unwrap(),
            "\"IDP\""
        );
        let parsed: Category = serde_json::from_str("\"DOMAINS\"").unwrap();
        assert_eq!(parsed, Category::Domain);
    }
}
