use std::ops::Range;

use regex::Regex;

use crate::model::catalog::{CATALOG, PortfolioEntry};
use crate::model::todo::TodoRecord;

/// Which field of a record or catalog entry matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Text,
    Title,
    Description,
}

impl MatchField {
    pub fn name(self) -> &'static str {
        match self {
            MatchField::Text => "text",
            MatchField::Title => "title",
            MatchField::Description => "description",
        }
    }
}

/// A search hit on a todo record
#[derive(Debug, Clone)]
pub struct TodoHit<'a> {
    pub record: &'a TodoRecord,
    pub spans: Vec<Range<usize>>,
}

/// A search hit on a portfolio entry
#[derive(Debug, Clone)]
pub struct PortfolioHit {
    pub entry: &'static PortfolioEntry,
    pub field: MatchField,
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search todo text, preserving list order.
pub fn search_todos<'a>(re: &Regex, records: &'a [TodoRecord]) -> Vec<TodoHit<'a>> {
    records
        .iter()
        .filter_map(|record| {
            let spans = find_matches(re, &record.text);
            if spans.is_empty() {
                None
            } else {
                Some(TodoHit { record, spans })
            }
        })
        .collect()
}

/// Search portfolio titles and descriptions, in catalog order.
/// An entry matching on both fields produces two hits.
pub fn search_portfolio(re: &Regex) -> Vec<PortfolioHit> {
    let mut hits = Vec::new();
    for entry in &CATALOG {
        for (field, text) in [
            (MatchField::Title, entry.title),
            (MatchField::Description, entry.description),
        ] {
            let spans = find_matches(re, text);
            if !spans.is_empty() {
                hits.push(PortfolioHit { entry, field, spans });
            }
        }
    }
    hits
}
