use serde::Serialize;

use crate::model::catalog::{PortfolioEntry, Service};
use crate::model::todo::{TodoRecord, TodoStats};
use crate::ops::search::{PortfolioHit, TodoHit};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// createdAt formatted with the configured date format
    pub created_at: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Serialize)]
pub struct PortfolioListJson {
    pub filter: String,
    pub entries: Vec<&'static PortfolioEntry>,
}

#[derive(Serialize)]
pub struct SearchResultsJson {
    pub todos: Vec<TodoHitJson>,
    pub portfolio: Vec<PortfolioHitJson>,
}

#[derive(Serialize)]
pub struct TodoHitJson {
    pub id: u64,
    pub text: String,
}

#[derive(Serialize)]
pub struct PortfolioHitJson {
    pub id: u32,
    pub title: String,
    pub field: String,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: String,
}

#[derive(Serialize)]
pub struct VisitsJson {
    pub visits: u64,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn todo_to_json(record: &TodoRecord, date_format: &str) -> TodoJson {
    TodoJson {
        id: record.id,
        text: record.text.clone(),
        completed: record.completed,
        created_at: record.created_at.format(date_format).to_string(),
    }
}

pub fn stats_to_json(stats: TodoStats) -> StatsJson {
    StatsJson {
        total: stats.total,
        completed: stats.completed,
        pending: stats.pending(),
    }
}

pub fn todo_hit_to_json(hit: &TodoHit) -> TodoHitJson {
    TodoHitJson {
        id: hit.record.id,
        text: hit.record.text.clone(),
    }
}

pub fn portfolio_hit_to_json(hit: &PortfolioHit) -> PortfolioHitJson {
    PortfolioHitJson {
        id: hit.entry.id,
        title: hit.entry.title.to_string(),
        field: hit.field.name().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_todo_line(record: &TodoRecord, date_format: &str) -> String {
    let check = if record.completed { 'x' } else { ' ' };
    format!(
        "[{}] {} {}  ({})",
        check,
        record.id,
        record.text,
        record.created_at.format(date_format)
    )
}

pub fn format_stats(stats: TodoStats) -> String {
    format!(
        "{} total, {} completed, {} pending",
        stats.total,
        stats.completed,
        stats.pending()
    )
}

/// Format a portfolio entry as a two-line card
pub fn format_portfolio_entry(entry: &PortfolioEntry) -> Vec<String> {
    vec![
        format!("{} {} [{}]", entry.id, entry.title, entry.category.name().to_uppercase()),
        format!("  {}", entry.description),
    ]
}

pub fn format_service(service: &Service) -> Vec<String> {
    vec![
        format!("{} {} [{}]", service.icon, service.title, service.category.name()),
        format!("  {}", service.description),
    ]
}
