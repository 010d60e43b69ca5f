//! The one-shot fetch → parse → rank → render sequence.
//!
//! [`FeedPipeline::run`] walks the stages strictly in order and always
//! terminates in a rendered state: cards, a "no articles" placeholder, a
//! fetch-failure fallback, or a logged no-op when the target surface does
//! not exist. Feed-level failures never escape as errors.

use anyhow::Result;

use crate::config::Config;
use crate::display::DisplayContext;
use crate::feed::{fetch_feed, parse_articles, rank_articles};
use crate::render;

/// Terminal state of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Cards were written; carries the number actually rendered.
    Rendered(usize),
    /// Feed was empty or unparseable; the placeholder message was written.
    NoArticles,
    /// Transport failed; the profile-link fallback card was written.
    FetchFailed,
    /// No surface with the configured id exists; nothing was written.
    MissingSurface,
}

/// One-shot feed pipeline bound to a display context.
///
/// Not re-entrant by construction: `run` takes `&mut self` and the binary
/// invokes it exactly once per process.
pub struct FeedPipeline<D: DisplayContext> {
    config: Config,
    client: reqwest::Client,
    display: D,
}

impl<D: DisplayContext> FeedPipeline<D> {
    pub fn new(config: Config, display: D) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            display,
        }
    }

    /// Consumes the pipeline and hands back the display context, e.g. to
    /// inspect what was rendered.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Runs the pipeline once.
    ///
    /// The returned `Err` is reserved for the display context rejecting a
    /// write — an environment failure, not a feed failure. Everything the
    /// feed can do wrong maps to a [`RunOutcome`].
    pub async fn run(&mut self) -> Result<RunOutcome> {
        // Resolve the surface before touching the network: with nowhere to
        // render there is nothing to fetch.
        let Some(surface) = self.display.find_surface(&self.config.surface_id) else {
            tracing::warn!(
                surface = %self.config.surface_id,
                "Display surface not found, skipping render"
            );
            return Ok(RunOutcome::MissingSurface);
        };

        tracing::debug!(feed = %self.config.feed_url, "Fetching feed");
        let xml = match fetch_feed(&self.client, &self.config).await {
            Ok(xml) => xml,
            Err(e) => {
                tracing::error!(error = %e, feed = %self.config.feed_url, "Feed fetch failed");
                let fallback = render::fallback_html(&self.config.profile_url);
                self.display.set_content(&surface, &fallback)?;
                return Ok(RunOutcome::FetchFailed);
            }
        };

        let articles = parse_articles(&xml);
        if articles.is_empty() {
            self.display
                .set_content(&surface, &render::no_articles_html())?;
            return Ok(RunOutcome::NoArticles);
        }

        let ranked = rank_articles(articles);
        let markup = render::render_cards(&ranked, self.config.display_limit);
        let rendered = ranked.len().min(self.config.display_limit);
        self.display.set_content(&surface, &markup)?;

        tracing::info!(
            rendered = rendered,
            total = ranked.len(),
            "Rendered article cards"
        );
        Ok(RunOutcome::Rendered(rendered))
    }
}
