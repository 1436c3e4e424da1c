//! HTML for the actions column

use crate::config::ActionSpec;
use crate::config::ButtonDef;

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Returns `true` if the button has something to show.
///
/// Buttons with neither an icon nor a non-blank label are not rendered.
pub fn is_renderable(button: &ButtonDef) -> bool {
    has_svg(button) || has_text(button)
}

fn has_svg(button: &ButtonDef) -> bool {
    button.svg.as_deref().is_some_and(|s| !s.is_empty())
}

fn has_text(button: &ButtonDef) -> bool {
    button.text.as_deref().is_some_and(|t| !t.trim().is_empty())
}

/// Renders one button, or `None` if it has nothing to show.
pub fn render_button(button: &ButtonDef) -> Option<String> {
    let svg = button.svg.as_deref().filter(|_| has_svg(button));
    let text = button.text.as_deref().filter(|_| has_text(button));

    let kind = match (svg.is_some(), text.is_some()) {
        (true, true) => "icon-label-btn",
        (true, false) => "icon-btn",
        (false, true) => "text-btn",
        (false, false) => return None,
    };
    let class = format!("row-action-btn {} {}", kind, button.class_name.as_deref().unwrap_or(""));
    let title_attr = if button.title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_html(&button.title))
    };
    let label = text
        .map(|t| format!("<span class=\"btn-label\">{}</span>", escape_html(t)))
        .unwrap_or_default();
    let content = match svg {
        Some(svg) => format!("{svg}{label}"),
        None => label,
    };
    let aria = [Some(button.title.as_str()), text]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(button.id.as_str());

    Some(format!(
        "<button class=\"{}\" data-action=\"{}\" aria-label=\"{}\"{}>{}</button>",
        class.trim(),
        escape_html(&button.id),
        escape_html(aria),
        title_attr,
        content
    ))
}

/// Renders the contents of one action cell.
pub fn render_actions(spec: &ActionSpec) -> String {
    let buttons: Vec<String> = spec.buttons.iter().filter_map(render_button).collect();
    format!(
        "<div class=\"actions-wrap {}\">{}</div>",
        spec.direction.as_str(),
        buttons.join("\n")
    )
}
