//! HTML card rendering.
//!
//! Turns ranked articles into the markup the host page displays: one
//! `blog-post` card per article, or a `blog-error` block when there is
//! nothing to show. All feed-supplied text is escaped on the way in.

use chrono::{DateTime, Utc};

use crate::feed::Article;
use crate::util::{escape_attr, escape_html};

/// Formats a publication instant the way the cards display it,
/// e.g. `"Jan 5, 2024"`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Renders at most `limit` articles as concatenated card markup, in the
/// order given.
pub fn render_cards(articles: &[Article], limit: usize) -> String {
    articles.iter().take(limit).map(render_card).collect()
}

fn render_card(article: &Article) -> String {
    format!(
        r#"<div class="blog-post">
  <h3>{title}</h3>
  <div class="blog-post-meta">
    <span><i class="fa fa-calendar"></i> {date}</span>
  </div>
  <div class="blog-post-link">
    <a href="{link}" target="_blank" rel="noopener noreferrer">Read Article</a>
  </div>
</div>
"#,
        title = escape_html(&article.title),
        date = format_date(&article.published),
        link = escape_attr(&article.link),
    )
}

/// Placeholder written when the feed parses to zero articles.
pub fn no_articles_html() -> String {
    r#"<div class="blog-error">No articles found. Please check back soon!</div>"#.to_string()
}

/// Fallback card written when the feed cannot be fetched at all. Points the
/// reader at the profile page instead.
pub fn fallback_html(profile_url: &str) -> String {
    format!(
        r#"<div class="blog-error">
  <p>Unable to load articles at the moment.</p>
  <p>Visit my <a href="{url}" target="_blank" rel="noopener noreferrer">Medium profile</a> directly.</p>
</div>
"#,
        url = escape_attr(profile_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn article(title: &str, link: &str) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
            published: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            description: String::new(),
            engagement: 0,
        }
    }

    fn card_count(markup: &str) -> usize {
        markup.matches(r#"<div class="blog-post">"#).count()
    }

    #[test]
    fn test_format_date_short_month_no_zero_padding() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 5, 2024");

        let date = Utc.with_ymd_and_hms(2023, 12, 28, 23, 59, 0).unwrap();
        assert_eq!(format_date(&date), "Dec 28, 2023");
    }

    #[test]
    fn test_card_contains_title_date_and_cta() {
        let markup = render_cards(&[article("My Post", "https://example.com/p")], 6);

        assert!(markup.contains("<h3>My Post</h3>"));
        assert!(markup.contains("Jan 5, 2024"));
        assert!(markup.contains(
            r#"<a href="https://example.com/p" target="_blank" rel="noopener noreferrer">Read Article</a>"#
        ));
    }

    #[test]
    fn test_title_markup_is_escaped() {
        let markup = render_cards(&[article("<script>alert(1)</script>", "")], 6);

        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_link_attribute_is_escaped() {
        let markup = render_cards(
            &[article("t", r#"https://example.com/"><script>x</script>"#)],
            6,
        );

        assert!(!markup.contains(r#"href="https://example.com/">"#));
        assert!(markup.contains("https://example.com/&quot;&gt;"));
    }

    #[test]
    fn test_limit_truncates_and_keeps_order() {
        let articles: Vec<Article> = (0..10)
            .map(|i| article(&format!("post-{i}"), ""))
            .collect();

        let markup = render_cards(&articles, 6);
        assert_eq!(card_count(&markup), 6);
        assert!(markup.contains("post-0"));
        assert!(markup.contains("post-5"));
        assert!(!markup.contains("post-6"));

        // Ranked order preserved in output
        let first = markup.find("post-0").unwrap();
        let last = markup.find("post-5").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_no_articles_message() {
        assert_eq!(
            no_articles_html(),
            r#"<div class="blog-error">No articles found. Please check back soon!</div>"#
        );
    }

    #[test]
    fn test_fallback_links_to_profile() {
        let markup = fallback_html("https://medium.com/@chemicalstan15");

        assert!(markup.contains("Unable to load articles at the moment."));
        assert!(markup.contains(r#"href="https://medium.com/@chemicalstan15""#));
        assert!(markup.contains(r#"rel="noopener noreferrer""#));
    }

    proptest! {
        /// Output card count is min(N, limit) for any input size.
        #[test]
        fn prop_card_count_is_min_of_len_and_limit(n in 0usize..20, limit in 0usize..10) {
            let articles: Vec<Article> = (0..n)
                .map(|i| article(&format!("post-{i}"), ""))
                .collect();

            let markup = render_cards(&articles, limit);
            prop_assert_eq!(card_count(&markup), n.min(limit));
        }
    }
}
