use serde::Deserialize;

/// Candidate selection configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Let ranges match prerelease versions
    pub include_prerelease: bool,
    /// Accept reference names such as `v1.2.3` by dropping one leading `v` or `V`
    pub strip_v_prefix: bool,
    pub order: SortOrder,
}

/// Order of the selected candidates
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}
