//! Test fixtures

/// `count` distinct titles sharing a prefix
pub fn numbered_titles(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}-{}", prefix, i)).collect()
}

/// Convert string literals into owned titles
pub fn titles(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
