//! Turning user input into a category.
//!
//! The core only commits categories; deciding whether an input names a known
//! category, picks one by number, or introduces a new one happens here.

use anyhow::{Result, bail};
use tl_core::{Category, DayLog};

/// Resolves `input` against the day's known categories.
///
/// Accepts a category name (case-insensitive) or a 1-based number into the
/// known list. A name the day has not seen is only accepted with `allow_new`.
pub fn resolve_category(log: &DayLog, input: &str, allow_new: bool) -> Result<Category> {
    let input = input.trim();
    let known = log.categories();

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| known.get(index));
        return match picked {
            Some(category) => Ok(category.clone()),
            None => bail!(
                "no category number {input}; choose 1-{} ({})",
                known.len(),
                numbered(known)
            ),
        };
    }

    let category = Category::new(input)?;
    if log.knows_category(&category) || allow_new {
        return Ok(category);
    }
    bail!(
        "unknown category {category}; known: {}. Pass --new to add it",
        numbered(known)
    )
}

/// Renders categories as `[1]BREAK [2]OTHER ...`.
pub fn numbered(categories: &[Category]) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| format!("[{}]{category}", i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}
