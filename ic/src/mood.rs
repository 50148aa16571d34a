//! Mood catalog parsed from the `custom-moods` setting

use tracing::debug;

/// Ordered list of selectable mood labels
///
/// Built once from a comma-separated string. Entries are trimmed, empty
/// entries are dropped, order and duplicates are kept as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodCatalog {
    labels: Vec<String>,
}

impl MoodCatalog {
    /// Parse a comma-separated list of mood labels
    pub fn parse(raw: &str) -> Self {
        debug!(%raw, "MoodCatalog::parse: called");
        let labels: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();
        debug!(count = labels.len(), "MoodCatalog::parse: parsed labels");
        Self { labels }
    }

    /// Labels in configuration order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether `label` is one of the catalog entries (exact match)
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Indices of labels containing `filter`, case-insensitive
    ///
    /// An empty filter matches every label.
    pub fn matching(&self, filter: &str) -> Vec<usize> {
        let needle = filter.to_lowercase();
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}
