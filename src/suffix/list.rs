use std::collections::HashSet;

/// In-memory view of the cached public suffix list.
///
/// Entries are stored with their labels reversed (`co.uk` as `uk.co`), the
/// same form as the on-disk marker files, so suffix candidates built while
/// scanning a hostname can be tested with a single hash lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    entries: HashSet<String>,
}

impl SuffixSet {
    pub(crate) fn new(entries: HashSet<String>) -> Self {
        Self { entries }
    }

    /// Membership test for a reversed-label suffix candidate.
    pub fn contains(&self, reversed: &str) -> bool {
        self.entries.contains(reversed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl SuffixSet {
    /// Build a set from normal-order suffixes (`co.uk`, not `uk.co`).
    pub(crate) fn for_tests(suffixes: &[&str]) -> Self {
        Self {
            entries: suffixes.iter().map(|s| reverse_labels(s)).collect(),
        }
    }
}

/// Registrable root domain of `hostname`: the longest known public suffix
/// plus one label. Empty string when the hostname is itself a bare public
/// suffix or no suffix matches at all.
pub fn root_domain(hostname: &str, suffixes: &SuffixSet) -> String {
    let host = hostname.trim_matches('.');
    if host.is_empty() {
        return String::new();
    }

    let labels: Vec<&str> = host.split('.').collect();
    let mut reversed: Vec<&str> = labels.iter().rev().copied().collect();

    // Longest candidate first: the full name, then with the leftmost label
    // removed, down to the last label alone.
    for stripped in 0..labels.len() {
        if suffixes.contains(&reversed.join(".")) {
            if stripped == 0 {
                // The whole name is a public suffix; nothing registrable below it.
                return String::new();
            }
            return labels[stripped - 1..].join(".");
        }
        reversed.pop();
    }
    String::new()
}

/// Parse one line of the public suffix list into its reversed stored form.
/// Blank lines and comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('/') {
        return None;
    }
    let line = line.strip_prefix("*.").unwrap_or(line);
    let line = line.strip_prefix('!').unwrap_or(line);
    if line.is_empty() {
        return None;
    }
    Some(reverse_labels(line))
}

pub(crate) fn reverse_labels(name: &str) -> String {
    let mut labels: Vec<&str> = name.split('.').collect();
    labels.reverse();
    labels.join(".")
}
