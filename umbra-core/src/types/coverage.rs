use serde::{Deserialize, Serialize};

/// Per-category annotation coverage of one sequence, in percent of length.
///
/// A category the sequence was never annotated with is NaN, serialized as
/// JSON `null`; absence and measured zero coverage stay distinguishable
/// across a store round-trip. `full` is the aggregate coverage over the
/// pooled informative categories and defaults to zero, never NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRecord {
    #[serde(with = "nan_as_null")]
    pub coiled_coil: f64,
    #[serde(with = "nan_as_null")]
    pub disorder: f64,
    #[serde(with = "nan_as_null")]
    pub domains: f64,
    /// Domain coverage with placeholder labels excluded
    #[serde(with = "nan_as_null")]
    pub domains_informative: f64,
    #[serde(with = "nan_as_null")]
    pub families: f64,
    pub full: f64,
}

impl Default for CoverageRecord {
    fn default() -> Self {
        Self {
            coiled_coil: f64::NAN,
            disorder: f64::NAN,
            domains: f64::NAN,
            domains_informative: f64::NAN,
            families: f64::NAN,
            full: 0.0,
        }
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
