use std::env;

/// Process-wide site settings read once at startup and handed to the
/// listing services by the composition root.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute site url including the relative path, e.g. `https://forum.example.com/community`.
    pub url: String,
    /// Mount prefix without trailing slash, `""` when served from the root.
    pub relative_path: String,
    pub home_page_title: Option<String>,
    /// Listing served at `/`.
    pub home_page_route: String,
    pub disable_rss: bool,
    pub default_topics_per_page: u32,
    pub max_topics_per_page: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4567".to_string(),
            relative_path: String::new(),
            home_page_title: None,
            home_page_route: "recent".to_string(),
            disable_rss: false,
            default_topics_per_page: 20,
            max_topics_per_page: 100,
        }
    }
}

impl SiteConfig {
    fn parse_count(key: &str, default: &str) -> u32 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u32>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    fn parse_flag(value: &str) -> bool {
        matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    }

    /// Strips trailing slashes and guarantees a leading one for non-empty paths.
    pub fn normalize_relative_path(raw: &str) -> String {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Load site configuration from environment variables
    pub fn from_env() -> Self {
        let relative_path =
            Self::normalize_relative_path(&env::var("RELATIVE_PATH").unwrap_or_default());

        let url = env::var("SITE_URL")
            .expect("SITE_URL must be set")
            .trim_end_matches('/')
            .to_string();

        let home_page_title = env::var("HOME_PAGE_TITLE")
            .ok()
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty());

        let home_page_route = env::var("HOME_PAGE_ROUTE")
            .ok()
            .map(|route| route.trim().trim_matches('/').to_string())
            .filter(|route| !route.is_empty())
            .unwrap_or_else(|| "recent".to_string());

        let disable_rss = env::var("FEEDS_DISABLE_RSS")
            .map(|value| Self::parse_flag(&value))
            .unwrap_or(false);

        let default_topics_per_page = Self::parse_count("DEFAULT_TOPICS_PER_PAGE", "20");
        let max_topics_per_page = Self::parse_count("MAX_TOPICS_PER_PAGE", "100");

        if default_topics_per_page == 0 || max_topics_per_page == 0 {
            panic!("DEFAULT_TOPICS_PER_PAGE and MAX_TOPICS_PER_PAGE must be positive");
        }

        Self {
            url,
            relative_path,
            home_page_title,
            home_page_route,
            disable_rss,
            default_topics_per_page,
            max_topics_per_page,
        }
    }
}
