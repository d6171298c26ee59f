//! MDX rendering of the derived document.

use crate::config::{DocumentConfig, LinkTable};
use crate::models::{Category, SelectionState};

const NONE_SELECTED: &str = "_None selected_";

/// Render the derived document for a saved selection.
///
/// Example output (Main has one linked item, the other sections are empty):
/// ```text
/// ---
/// title: Selected Agents
/// description: A checklist of selected agents
/// icon: book
/// ---
///
/// These are the agents you have selected. [Return to the checklist app to make changes](http://localhost:8501)
///
/// ## Main Tasks
///
/// - [Patient interactive chat](http://127.0.0.1:3005/)
///
/// ## Deployment Tasks
///
/// _None selected_
///
/// ## Additional Tasks
///
/// _None selected_
///
/// _Last updated: 2026-10-19 09:30:00_
/// ```
pub fn render_document(
    selection: &SelectionState,
    links: &LinkTable,
    config: &DocumentConfig,
    timestamp: &str,
) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("title: {}\n", config.title));
    output.push_str(&format!("description: {}\n", config.description));
    output.push_str(&format!("icon: {}\n", config.icon));
    output.push_str("---\n\n");
    output.push_str(&format!(
        "These are the agents you have selected. [Return to the checklist app to make changes]({})\n",
        config.app_url
    ));

    for category in Category::ALL {
        output.push_str(&format!("\n## {}\n\n", category.heading()));
        output.push_str(&render_section(category, selection.get(category), links));
        output.push('\n');
    }

    output.push_str(&format!("\n_Last updated: {}_", timestamp));
    output
}

/// Bullet lines for one category, or the placeholder when nothing is selected.
fn render_section(category: Category, items: &[String], links: &LinkTable) -> String {
    if items.is_empty() {
        return NONE_SELECTED.to_string();
    }

    items
        .iter()
        .map(|item| bullet(category, item, links))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet(category: Category, item: &str, links: &LinkTable) -> String {
    // Only Main items are ever linked.
    match (category, links.url_for(item)) {
        (Category::Main, Some(url)) => format!("- [{}]({})", item, url),
        _ => format!("- {}", item),
    }
}
