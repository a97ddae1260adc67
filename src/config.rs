// Global configuration constants - single source of truth

pub struct Config;

impl Config {
    // Target page and output files
    pub const TARGET_URL: &'static str = "https://github.com/skrapeit";
    pub const CSV_OUT: &'static str = "test.csv";
    pub const JSON_OUT: &'static str = "test.json";

    // HTTP/Network config
    pub const USER_AGENT: &'static str = "ProfileScrape/0.1";
    pub const TIMEOUT_SECS: u64 = 20;
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const MAX_REDIRECTS: usize = 5;

    // Selector rules
    pub const NICKNAME_SELECTOR: &'static str = ".h-card .p-nickname";
    pub const REPO_SELECTOR: &'static str = "span.repo";
    pub const REPO_FILTER: &'static str = "skrape";
    pub const THIRD_REPO_INDEX: usize = 2;
    pub const IMAGE_SELECTOR: &'static str = "img";
    pub const HREF_SELECTOR: &'static str = "[href]";
    pub const TITLE_SELECTOR: &'static str = "title";
    pub const OVERVIEW_LINK_TEXT: &'static str = "Overview";
    pub const OVERVIEW_FALLBACK: &'static str = "not found";
    pub const MAX_LIST_ITEMS: usize = 3;

    // Star-count nesting: container div, 2nd paragraph inside it, then the
    // stargazers anchor. Encodes a specific page layout; misses are expected.
    pub const PINNED_ITEM_SELECTOR: &'static str = "div.pinned-item-list-item";
    pub const PINNED_PARAGRAPH_SELECTOR: &'static str = "p";
    pub const PINNED_PARAGRAPH_INDEX: usize = 1;
    pub const STARGAZERS_ANCHOR_SELECTOR: &'static str =
        r#"a.pinned-item-meta.Link--muted[href="/skrapeit/skrape.it/stargazers"]"#;
}
