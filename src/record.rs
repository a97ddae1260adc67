use serde::{Deserialize, Serialize};

use crate::config::Config;

/// The single result of one extraction run.
///
/// Populated once by the extractor and handed unmodified to the exporters.
/// JSON field names are camelCase to keep the exported document stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    /// HTTP status reason phrase of the fetch response (e.g. "OK")
    pub http_message: String,

    /// Text of the first nickname element
    pub user_name: String,

    /// Repo element texts, filtered to those containing the fixed substring
    pub repository_name: Vec<String>,

    /// Text of the 3rd repo element
    pub the_third_repositories_name: String,

    /// First three href attribute values found anywhere in the document
    pub first_three_hrefs: Vec<String>,

    /// Href of the anchor whose visible text is "Overview"
    pub overview_link: String,

    /// First three image source attribute values
    pub first_three_image_sources: Vec<String>,

    /// Document title text
    pub title: String,

    /// Own text of the pinned-item stargazers anchor
    pub star_count: String,
}

impl Default for ExtractedRecord {
    /// Every field starts empty except `overview_link`, whose documented
    /// fallback is the literal "not found".
    fn default() -> Self {
        Self {
            http_message: String::new(),
            user_name: String::new(),
            repository_name: Vec::new(),
            the_third_repositories_name: String::new(),
            first_three_hrefs: Vec::new(),
            overview_link: Config::OVERVIEW_FALLBACK.to_string(),
            first_three_image_sources: Vec::new(),
            title: String::new(),
            star_count: String::new(),
        }
    }
}
