//! Shared query parameter types for API handlers.

/// Query parameters for `GET /notes` (`?search=`).
///
/// Built from the raw key/value pairs so a repeated or unknown key never
/// rejects the request; the first `search` value wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Self { search }
    }
}
