//! Table rendering for comparison results
//!
//! This module provides:
//! - The column model shared by both projections
//! - Markdown table output for pull-request bodies
//! - Boxed plain-text output for terminal display

mod markdown;
mod text;

pub use markdown::to_markdown;
pub use text::to_text_table;

use crate::domain::{CompareEntry, DependencyCategory, PackageManifest};

/// Plain-text cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

type CellRender = Box<dyn Fn(&CompareEntry) -> String>;

/// One output column: a name, alignment tokens for both projections, and a
/// pair of cell renderers (rich Markdown cell, plain cell)
pub struct Column {
    name: String,
    /// Markdown alignment token for the layout row
    layout: &'static str,
    /// Plain-text alignment
    align: Align,
    render: CellRender,
    simple_render: CellRender,
}

impl Column {
    fn new(
        name: impl Into<String>,
        layout: &'static str,
        render: CellRender,
        align: Align,
        simple_render: CellRender,
    ) -> Self {
        Self {
            name: name.into(),
            layout,
            align,
            render,
            simple_render,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &'static str {
        self.layout
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Markdown cell for an entry
    pub fn render(&self, entry: &CompareEntry) -> String {
        (self.render)(entry)
    }

    /// Plain-text cell for an entry
    pub fn simple(&self, entry: &CompareEntry) -> String {
        (self.simple_render)(entry)
    }
}

/// Derives the column set for a batch of entries
///
/// The three fixed columns always come first. A category column appears only
/// when the root manifest declares the category non-empty and at least one
/// entry is declared in it; category columns keep the manifest enumeration
/// order.
pub fn make_columns(root: &PackageManifest, entries: &[CompareEntry]) -> Vec<Column> {
    let mut columns = vec![
        Column::new(
            "Name",
            ":---- ",
            Box::new(|e: &CompareEntry| {
                if e.homepage.is_empty() {
                    e.name.clone()
                } else {
                    format!("[{}]({})", e.name, e.homepage)
                }
            }),
            Align::Left,
            Box::new(|e: &CompareEntry| e.name.clone()),
        ),
        Column::new(
            "Updating",
            ":--------:",
            Box::new(|e: &CompareEntry| {
                if e.repository.is_empty() {
                    e.range_wanted()
                } else {
                    format!("[{}]({})", e.range_wanted(), e.diff_wanted_url())
                }
            }),
            Align::Center,
            Box::new(|e: &CompareEntry| e.range_wanted()),
        ),
        Column::new(
            "Latest",
            ":------:",
            Box::new(|e: &CompareEntry| {
                if e.repository.is_empty() {
                    format!("v{}", e.latest)
                } else {
                    format!("[v{}]({})", e.latest, e.diff_latest_url())
                }
            }),
            Align::Center,
            Box::new(|e: &CompareEntry| format!("v{}", e.latest)),
        ),
    ];

    for category in DependencyCategory::all() {
        let declared = root.category(*category);
        if declared.is_empty() || !entries.iter().any(|e| declared.contains_key(&e.name)) {
            continue;
        }
        let marker = |declared: std::collections::BTreeSet<String>| {
            Box::new(move |e: &CompareEntry| {
                if declared.contains(&e.name) {
                    "*".to_string()
                } else {
                    " ".to_string()
                }
            }) as CellRender
        };
        let names: std::collections::BTreeSet<String> = declared.keys().cloned().collect();
        columns.push(Column::new(
            category.key(),
            ":-:",
            marker(names.clone()),
            Align::Center,
            marker(names),
        ));
    }

    columns
}
