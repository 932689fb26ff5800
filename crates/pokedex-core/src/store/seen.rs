use std::collections::HashSet;

/// Names already classified (matched or rejected) under the current
/// filter criteria.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    names: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record `name`. Returns `true` if it was not seen before.
    pub fn mark(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Extend<String> for SeenSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_reports_novelty() {
        let mut seen = SeenSet::new();
        assert!(seen.mark("ditto"));
        assert!(!seen.mark("ditto"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn extend_and_clear() {
        let mut seen = SeenSet::new();
        seen.extend(["a".to_string(), "b".to_string()]);
        assert!(seen.contains("a") && seen.contains("b"));

        seen.clear();
        assert!(seen.is_empty());
    }
}
