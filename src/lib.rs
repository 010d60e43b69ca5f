//! A one-shot feed-to-cards pipeline.
//!
//! Fetches a Medium RSS feed through a public CORS relay, parses it into
//! [`Article`](feed::Article) records, ranks them by recency, and renders
//! the newest few as HTML cards into a display surface.
//!
//! The stages compose strictly in sequence — fetch, parse, rank, render —
//! and every failure path resolves to a rendered fallback rather than an
//! error escaping the pipeline. See [`pipeline::FeedPipeline`].

pub mod config;
pub mod display;
pub mod feed;
pub mod pipeline;
pub mod render;
pub mod util;

pub use config::Config;
pub use display::{DirectoryDisplay, DisplayContext, MemoryDisplay};
pub use pipeline::{FeedPipeline, RunOutcome};
