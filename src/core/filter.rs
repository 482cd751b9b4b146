//! Name filtering applied to every entry a traversal visits.

use super::SearchRequest;

/// Case-insensitive include/exclude substring predicate for entry names.
///
/// The needles are stored pre-folded, so `matches` only folds the candidate
/// name. Pure and total: no filesystem access, no error conditions.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    include: String,
    exclude: String,
}

impl NameFilter {
    pub fn new(include: &str, exclude: &str) -> Self {
        Self {
            include: include.trim().to_lowercase(),
            exclude: exclude.trim().to_lowercase(),
        }
    }

    /// The request's needles are folded at construction, so they are taken
    /// as-is here.
    pub fn from_request(request: &SearchRequest) -> Self {
        Self {
            include: request.include.clone(),
            exclude: request.exclude.clone(),
        }
    }

    /// True iff the folded name contains the include needle and, when an
    /// exclude needle is set, does not contain the exclude needle.
    ///
    /// An empty include needle matches every name; an empty exclude needle
    /// excludes nothing.
    pub fn matches(&self, name: &str) -> bool {
        let folded = name.to_lowercase();
        folded.contains(&self.include)
            && (self.exclude.is_empty() || !folded.contains(&self.exclude))
    }
}
