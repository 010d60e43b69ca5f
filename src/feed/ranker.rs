use super::parser::Article;

/// Orders articles most-recent-first.
///
/// Uses the standard library's stable sort, so entries with identical
/// timestamps keep their relative source order.
pub fn rank_articles(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.published.cmp(&a.published));
    articles
}
