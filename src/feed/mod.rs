//! Feed retrieval, parsing, and ranking.
//!
//! This module provides the first three stages of the pipeline:
//!
//! - **Fetching**: One-shot HTTP retrieval of the feed through a CORS relay
//! - **Parsing**: Convert RSS/Atom XML into structured article data
//! - **Ranking**: Order articles most-recent-first
//!
//! # Architecture
//!
//! The module is organized into three submodules:
//!
//! - [`fetcher`] - HTTP fetching via the relay, with a bounded timeout
//! - [`parser`] - Low-level feed parsing using the `feed-rs` crate
//! - [`ranker`] - Stable recency sort over parsed articles

mod fetcher;
mod parser;
mod ranker;

pub use fetcher::{fetch_feed, request_url, FetchError};
pub use parser::{parse_articles, Article};
pub use ranker::rank_articles;
