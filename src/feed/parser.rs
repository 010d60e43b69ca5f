use chrono::{DateTime, Utc};
use feed_rs::parser;

/// One syndicated post extracted from the feed.
///
/// Records are immutable once constructed: downstream stages reorder and
/// truncate collections of articles but never rewrite a field. Nothing is
/// persisted — articles live for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Entry title, `"Untitled"` when the feed omits it.
    pub title: String,
    /// Absolute URL of the post, empty when the feed omits it.
    pub link: String,
    /// Publication instant. Entries with a missing or unparseable date get
    /// `DateTime::UNIX_EPOCH` so they deterministically sort last under the
    /// recency ranking.
    pub published: DateTime<Utc>,
    /// Raw description blob from the entry, embedded markup and all.
    pub description: String,
    /// Reserved engagement metric, always 0 (see [`extract_engagement`]).
    pub engagement: u32,
}

/// Parses feed XML into articles, preserving source order.
///
/// Never fails: a structurally malformed document is logged and yields an
/// empty vector, which the renderer turns into its "no articles" state.
/// Per-entry defaults: missing title → `"Untitled"`, missing link → `""`,
/// missing description → `""`.
pub fn parse_articles(xml: &str) -> Vec<Article> {
    let feed = match parser::parse(xml.as_bytes()) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed feed document, treating as empty");
            return Vec::new();
        }
    };

    feed.entries
        .into_iter()
        .map(|entry| {
            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();
            let published = entry
                .published
                .or(entry.updated)
                .unwrap_or(DateTime::UNIX_EPOCH);
            let description = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default();
            let engagement = extract_engagement(&description);

            Article {
                title,
                link,
                published,
                description,
                engagement,
            }
        })
        .collect()
}

/// Engagement placeholder.
///
/// Medium's RSS does not carry clap counts, and no secondary metrics source
/// is consulted, so every article currently scores 0.
fn extract_engagement(_description: &str) -> u32 {
    0
}
