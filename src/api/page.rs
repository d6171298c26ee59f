//! HTML rendering of the checklist form.

use crate::models::{Catalog, SelectionState, ToggleKey};

const HEADING: &str = "Select Your Tasks";
const INFO: &str = "Select some tasks then click Save. Uncheck to clear selections.";

/// Render the checklist page with each checkbox checked per `selection`.
///
/// `saved` is the success banner to show after a completed save.
pub fn render_page(catalog: &Catalog, selection: &SelectionState, saved: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", HEADING));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h2>{}</h2>\n", HEADING));
    html.push_str(&format!("<p class=\"info\">{}</p>\n", INFO));
    html.push_str("<form method=\"post\" action=\"/save\">\n");

    for definition in catalog.iter() {
        let category = definition.category;
        html.push_str(&format!("<h4>{}</h4>\n", category.heading()));
        for label in &definition.labels {
            let key = ToggleKey::new(category, label.as_str());
            let checked = if selection.is_checked(category, label) {
                " checked"
            } else {
                ""
            };
            html.push_str(&format!(
                "<label><input type=\"checkbox\" name=\"{}\"{}> {}</label><br>\n",
                escape(&key.to_string()),
                checked,
                escape(label)
            ));
        }
    }

    html.push_str("<hr>\n<button type=\"submit\">💾 Save</button>\n</form>\n");

    if let Some(message) = saved {
        html.push_str(&format!("<p class=\"success\">{}</p>\n", escape(message)));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
