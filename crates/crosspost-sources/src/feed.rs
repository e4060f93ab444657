//! RSS/Atom feed client.

use reqwest::Client;
use tracing::debug;

use crate::{FeedEntry, SourceError};

/// Fetches and parses syndication feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
}

impl FeedClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Fetch `feed_url` and return its entries in document order.
    ///
    /// Feeds list their newest entry first; callers that want oldest-first
    /// must reverse.
    pub async fn entries(&self, feed_url: &str) -> Result<Vec<FeedEntry>, SourceError> {
        let response = self.http.get(feed_url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::from_response(response).await);
        }

        let bytes = response.bytes().await?;
        let entries = parse_entries(&bytes)?;
        debug!(feed_url, count = entries.len(), "parsed feed");

        Ok(entries)
    }
}

/// Parse an RSS, Atom or JSON feed document into entries.
pub(crate) fn parse_entries(document: &[u8]) -> Result<Vec<FeedEntry>, SourceError> {
    let feed =
        feed_rs::parser::parse(document).map_err(|e| SourceError::FeedParse(e.to_string()))?;

    Ok(feed.entries.into_iter().map(FeedEntry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNTITLED_ENTRY;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Blog</title>
    <link>https://blog.example.com</link>
    <description>Posts</description>
    <item>
      <title>Newest</title>
      <link>https://blog.example.com/newest</link>
      <guid isPermaLink="false">newest-guid</guid>
      <description>&lt;p&gt;Fresh &lt;em&gt;news&lt;/em&gt;&lt;/p&gt;</description>
    </item>
    <item>
      <title>Older</title>
      <guid isPermaLink="false">older-guid</guid>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Blog</title>
  <id>urn:uuid:feed</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:uuid:entry-1</id>
    <link href="https://atom.example.com/1"/>
    <updated>2024-01-01T00:00:00Z</updated>
    <summary>Short summary</summary>
  </entry>
</feed>"#;

    const ATOM_MANY_LINKS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Blogger</title>
  <id>tag:blogger.com,1999:blog-1</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Post</title>
    <id>tag:blogger.com,1999:blog-1.post-2</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <link rel="replies" type="application/atom+xml" href="https://b.example.com/feeds/1/comments/default"/>
    <link rel="edit" type="application/atom+xml" href="https://www.blogger.com/feeds/1/posts/default/2"/>
    <link rel="alternate" type="text/html" href="https://b.example.com/2024/01/post.html"/>
  </entry>
  <entry>
    <title>Only a self link</title>
    <id>tag:blogger.com,1999:blog-1.post-3</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <link rel="self" href="https://b.example.com/feeds/posts/3"/>
  </entry>
</feed>"#;

    #[test]
    fn rss_entries_keep_document_order() {
        let entries = parse_entries(RSS.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Newest");
        assert_eq!(entries[0].identifier, "https://blog.example.com/newest");
        assert_eq!(entries[0].plain_description(), "Fresh news");
        assert_eq!(entries[1].title, "Older");
    }

    #[test]
    fn entry_without_link_is_identified_by_id() {
        let entries = parse_entries(RSS.as_bytes()).unwrap();

        assert_eq!(entries[1].link, None);
        assert_eq!(entries[1].identifier, "older-guid");
    }

    #[test]
    fn atom_entries_are_parsed() {
        let entries = parse_entries(ATOM.as_bytes()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].identifier, "https://atom.example.com/1");
        assert_eq!(entries[0].summary.as_deref(), Some("Short summary"));
        assert_ne!(entries[0].title, UNTITLED_ENTRY);
    }

    #[test]
    fn atom_entry_uses_alternate_link() {
        let entries = parse_entries(ATOM_MANY_LINKS.as_bytes()).unwrap();

        assert_eq!(
            entries[0].identifier,
            "https://b.example.com/2024/01/post.html"
        );
        assert_eq!(
            entries[0].link.as_deref(),
            Some("https://b.example.com/2024/01/post.html")
        );
    }

    #[test]
    fn atom_entry_without_alternate_falls_back_to_first_link() {
        let entries = parse_entries(ATOM_MANY_LINKS.as_bytes()).unwrap();

        assert_eq!(entries[1].identifier, "https://b.example.com/feeds/posts/3");
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_entries(b"this is not a feed").unwrap_err();
        assert!(matches!(err, SourceError::FeedParse(_)));
    }

    #[tokio::test]
    async fn entries_fetches_over_http() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RSS))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(Client::new());
        let entries = client
            .entries(&format!("{}/feed.xml", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn missing_feed_is_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(Client::new());
        let err = client
            .entries(&format!("{}/feed.xml", mock_server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Status { status: 404, .. }));
    }
}
