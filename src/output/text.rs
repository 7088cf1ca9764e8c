//! Boxed plain-text table output
//!
//! Fixed-width table for terminal display: `=` double rules top and bottom,
//! `-` single rules between rows, `|` column separators, one space of
//! padding on each side of a cell. Output is deterministic for identical
//! input so it can be diffed or snapshot-tested.

use super::{make_columns, Align, Column};
use crate::domain::{CompareEntry, PackageManifest};

const PADDING: usize = 1;

fn cell_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = cell_width(text);
    if len >= width {
        return text.to_string();
    }
    let fill = width - len;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

fn format_row(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().zip(aligns.iter()))
        .map(|(cell, (width, align))| {
            format!("{0}{1}{0}", " ".repeat(PADDING), pad(cell, *width, *align))
        })
        .collect();
    padded.join("|")
}

/// Renders the plain-text projection of a comparison batch
pub fn to_text_table(root: &PackageManifest, entries: &[CompareEntry]) -> String {
    let columns = make_columns(root, entries);

    let header: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
    let body: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| columns.iter().map(|c| c.simple(entry)).collect())
        .collect();

    // Column content widths: widest of header and every cell
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, _)| {
            body.iter()
                .map(|row| cell_width(&row[i]))
                .chain(std::iter::once(cell_width(&header[i])))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let aligns: Vec<Align> = columns.iter().map(Column::align).collect();

    let total_width: usize =
        widths.iter().map(|w| w + 2 * PADDING).sum::<usize>() + columns.len().saturating_sub(1);
    let border = "=".repeat(total_width);
    let rule = "-".repeat(total_width);

    let mut lines = vec![border.clone(), format_row(&header, &widths, &aligns)];
    for row in &body {
        lines.push(rule.clone());
        lines.push(format_row(row, &widths, &aligns));
    }
    lines.push(border);
    lines.join("\n")
}
