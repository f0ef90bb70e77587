//! Subcommand definitions and their handlers.
//!
//! Handlers return the rendered output as a `String` so `main` owns stdout.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use rewear_core::assistant::{self, FaqEntry};
use rewear_core::browse::{self, BrowsePage, BrowseTab, MatchedItem};
use rewear_core::fit::{compute_fit_match, FitMatch, MeasurementProfile};
use rewear_core::query::{
    FilterCriteria, RawCriteria, SortKey, DEFAULT_MAX_COINS, DEFAULT_MIN_COINS,
};
use rewear_core::simulation;
use rewear_core::Item;
use rewear_store::CatalogStore;

use crate::error::CliResult;

// ---------------------------------------------------------------------------
// Argument definitions
// ---------------------------------------------------------------------------

/// Browse and search the ReWear clothing-swap catalog.
#[derive(Debug, Parser)]
#[command(name = "rewear", version, about = "Browse the ReWear clothing-swap catalog")]
pub struct Cli {
    /// Catalog JSON file (overrides REWEAR_CATALOG_PATH)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter and sort the catalog
    Browse(BrowseArgs),

    /// Show one item with its fit badge and related items
    Item {
        /// Item id, e.g. item_1
        id: String,
    },

    /// Ask the help desk assistant a question
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Search the frequently asked questions
    Faq {
        /// Search text; omit to list every entry
        query: Option<String>,
    },
}

/// Browse filters. Unrecognised selector values are treated as "All".
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Text matched against title, description and tags
    #[arg(long, short)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub size: Option<String>,

    #[arg(long)]
    pub condition: Option<String>,

    /// Accepted but currently not applied to results
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MIN_COINS)]
    pub min_coins: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_COINS)]
    pub max_coins: u32,

    /// newest, oldest, price-asc, price-desc or popularity
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// all, perfect-fit, trending or recent
    #[arg(long, default_value = "all")]
    pub view: String,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            size: None,
            condition: None,
            gender: None,
            min_coins: DEFAULT_MIN_COINS,
            max_coins: DEFAULT_MAX_COINS,
            sort: "newest".to_string(),
            view: "all".to_string(),
        }
    }
}

impl BrowseArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(&RawCriteria {
            search: self.search.clone(),
            category: self.category.clone(),
            size: self.size.clone(),
            condition: self.condition.clone(),
            gender: self.gender.clone(),
            min_coins: Some(self.min_coins),
            max_coins: Some(self.max_coins),
        })
    }

    pub fn tab(&self) -> BrowseTab {
        BrowseTab::from_str_value(self.view.trim()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unknown view, showing all items");
            BrowseTab::All
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn browse(
    store: &CatalogStore,
    viewer: &MeasurementProfile,
    args: &BrowseArgs,
    json: bool,
) -> CliResult<String> {
    let sort = SortKey::from_str_lenient(&args.sort);
    let results = store.query(&args.criteria(), sort);
    let shown = browse::tab_view(&results, args.tab(), viewer);
    let page = browse::first_page(&shown, viewer);

    if json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }
    Ok(render_page(&page))
}

#[derive(Debug, Serialize)]
struct ItemDetail<'a> {
    item: &'a Item,
    fit: FitMatch,
    related: Vec<Item>,
}

pub fn item(
    store: &CatalogStore,
    viewer: &MeasurementProfile,
    id: &str,
    json: bool,
) -> CliResult<String> {
    let item = store.get(id)?;
    let detail = ItemDetail {
        item,
        fit: compute_fit_match(item, viewer),
        related: store.related(id)?,
    };

    if json {
        return Ok(serde_json::to_string_pretty(&detail)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", render_line(item, &detail.fit));
    let _ = writeln!(out, "  {}", item.description);
    if !item.tags.is_empty() {
        let _ = writeln!(out, "  tags: {}", item.tags.join(", "));
    }
    let _ = writeln!(
        out,
        "  listed by {} on {}",
        item.uploader.name,
        item.uploaded_at.format("%Y-%m-%d")
    );
    if !detail.related.is_empty() {
        let _ = writeln!(out, "Related:");
        for related in &detail.related {
            let _ = writeln!(
                out,
                "  {} ({}, {} coins)",
                related.title, related.id, related.wear_coins
            );
        }
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
struct AssistantReply<'a> {
    message: &'a str,
    reply: &'static str,
}

/// Ask the assistant, waiting out the simulated typing delay.
/// Returns `None` if `cancel` fires before the reply arrives.
pub async fn ask(
    message: &str,
    cancel: &CancellationToken,
    json: bool,
) -> CliResult<Option<String>> {
    let reply = if message.trim().is_empty() {
        Some(assistant::fallback_reply(0))
    } else {
        simulation::assistant_reply(message, cancel).await
    };

    let Some(reply) = reply else {
        tracing::info!("Assistant reply cancelled");
        return Ok(None);
    };

    if json {
        let body = serde_json::to_string_pretty(&AssistantReply { message, reply })?;
        return Ok(Some(body));
    }
    Ok(Some(format!("{reply}\n")))
}

pub fn faq(query: Option<&str>, json: bool) -> CliResult<String> {
    let hits: Vec<&FaqEntry> = assistant::search_faq(query.unwrap_or_default());

    if json {
        return Ok(serde_json::to_string_pretty(&hits)?);
    }

    let mut out = String::new();
    for entry in hits {
        let _ = writeln!(out, "Q: {}", entry.question);
        let _ = writeln!(out, "A: {}\n", entry.answer);
    }
    if out.is_empty() {
        out.push_str("No matching questions.\n");
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn render_line(item: &Item, fit: &FitMatch) -> String {
    let availability = if item.is_available { "" } else { " [swapped]" };
    format!(
        "{:<10} {:<32} {:<10} {:>4} {:<9} {:>3} coins  {:>3}% {}{}",
        item.id,
        item.title,
        item.category.as_str(),
        item.size.label(),
        item.condition.as_str(),
        item.wear_coins,
        fit.percentage,
        fit.label.as_str(),
        availability,
    )
}

fn render_page(page: &BrowsePage) -> String {
    if page.items.is_empty() {
        return "No items match your filters.\n".to_string();
    }

    let mut out = String::new();
    for MatchedItem { item, fit } in &page.items {
        let _ = writeln!(out, "{}", render_line(item, fit));
    }
    let _ = writeln!(out, "Showing {} of {} results", page.items.len(), page.total);
    if page.has_more {
        let _ = writeln!(out, "More results available; narrow your filters to see them.");
    }
    out
}
