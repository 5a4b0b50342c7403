//! Renderer module
//!
//! Renders search hits and tag listings as text, json or jsonl

use colored::Colorize;
use serde::Serialize;

use crate::core::model::{SearchHit, TagCount};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for command output
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a search listing
    pub fn render_hits(&self, hits: &[SearchHit]) -> String {
        match self.format {
            OutputFormat::Text => render_hits_text(hits),
            OutputFormat::Json => render_json(hits),
            OutputFormat::Jsonl => render_jsonl(hits),
        }
    }

    /// Render a tag listing
    pub fn render_tags(&self, tags: &[TagCount]) -> String {
        match self.format {
            OutputFormat::Text if tags.is_empty() => "No tags found.".to_string(),
            OutputFormat::Text => tags
                .iter()
                .map(|t| format!("{} ({})", t.tag.bold(), t.count))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => render_json(tags),
            OutputFormat::Jsonl => render_jsonl(tags),
        }
    }
}

fn render_hits_text(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No entries matched the given tags.".to_string();
    }

    let mut output = String::from("Search results:\n\n");
    for hit in hits {
        output.push_str(&format!("{}: {}\n", hit.index.to_string().cyan(), hit.date));
    }
    let noun = if hits.len() == 1 { "result" } else { "results" };
    output.push_str(&format!(
        "\n{} {}. Use --open with the index to open one of the files.",
        hits.len(),
        noun
    ));
    output
}

fn render_json<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}

fn render_jsonl<T: Serialize>(items: &[T]) -> String {
    items
        .iter()
        .filter_map(|item| serde_json::to_string(item).ok())
        .collect::<Vec<_>>()
        .join("\n")
}
