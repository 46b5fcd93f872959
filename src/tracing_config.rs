//! Tracing configuration.
//!
//! The engine only ever emits `trace!`/`debug!` events (classifier fallbacks,
//! combinator evaluation, realm initialisation). Applications that want to
//! see them call [`init_tracing`] once at startup. Three output formats are
//! selected by `TYPEIS_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`
//! - `json`: one JSON object per span or event
//!
//! ```bash
//! TYPEIS_LOG=trace TYPEIS_LOG_FORMAT=tree my-app
//! TYPEIS_LOG="typeis_core=trace,typeis_value=debug" my-app
//! ```
//!
//! Nothing is installed unless `TYPEIS_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Filter directives, e.g. `trace` or `typeis_core=trace`.
pub const LOG_ENV: &str = "TYPEIS_LOG";
/// Output format: `text`, `tree` or `json`.
pub const LOG_FORMAT_ENV: &str = "TYPEIS_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// `TYPEIS_LOG` wins over `RUST_LOG` when both are set.
fn build_filter(directives: Option<String>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::builder().parse_lossy(directives),
        None => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when tracing was not requested or a global subscriber is
/// already installed.
pub fn init_tracing() -> bool {
    let directives = std::env::var(LOG_ENV).ok();
    if directives.is_none() && std::env::var("RUST_LOG").is_err() {
        return false;
    }

    let filter = build_filter(directives);
    let installed = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    installed.is_ok()
}
