use umbra_core::DigestConfig;

/// Label substrings marking an uninformative annotation call.
///
/// Matching is case-sensitive substring containment, so `"nknown"` catches
/// both `"Unknown"` and `"unknown"` spellings in upstream labels.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn matches(&self, label: &str) -> bool {
        self.patterns.iter().any(|pattern| label.contains(pattern))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::from(&DigestConfig::default())
    }
}

impl From<&DigestConfig> for IgnorePatterns {
    fn from(config: &DigestConfig) -> Self {
        Self::new(config.ignore_patterns.clone())
    }
}

impl From<&[&str]> for IgnorePatterns {
    fn from(patterns: &[&str]) -> Self {
        Self::new(patterns.iter().map(|p| p.to_string()).collect())
    }
}
