use crate::auth::application::domain::entities::Requester;
use crate::shared::config::SiteConfig;
use crate::topic_list::application::domain::RssFeed;

/// Feed link for the listing. Logged-in readers get a private link carrying
/// their uid and feed token.
pub fn build_rss_feed(
    site: &SiteConfig,
    page_name: &str,
    requester: Requester,
    feed_token: Option<&str>,
) -> RssFeed {
    if site.disable_rss {
        return RssFeed {
            disable_rss: true,
            url: None,
        };
    }

    let mut url = format!("{}/{}.rss", site.relative_path, page_name);
    if requester.is_logged_in() {
        url.push_str(&format!(
            "?uid={}&token={}",
            requester.uid,
            feed_token.unwrap_or_default()
        ));
    }

    RssFeed {
        disable_rss: false,
        url: Some(url),
    }
}
