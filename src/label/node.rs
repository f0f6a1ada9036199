//! HTML-table labels for state nodes.
//!
//! A state renders as up to three stacked rows: the enter-action row, the
//! centered upper-cased state name, and the exit-action row. Tooling
//! pattern-matches this markup, so it must stay byte-for-byte stable.

use super::{format_enter_label, format_exit_label};
use crate::core::StateSpec;

/// Separator placed between table rows.
pub const ROW_SEPARATOR: &str = "\n";

const TABLE_OPEN: &str = r#"<table BORDER="0" CELLBORDER="1">"#;
const TABLE_CLOSE: &str = "</table>";
const ACTION_FONT: &str = r#"<FONT FACE="Arial:italic" POINT-SIZE="10" COLOR="gray20">"#;

/// Build the label markup for a state.
///
/// The result is the bare `<table>` element; DOT output wraps it in `<` `>`.
/// With `hide_enter_exit` only the name row remains.
///
/// ```rust
/// use statechart_render::core::StateSpec;
/// use statechart_render::label::node_label;
///
/// let label = node_label(&StateSpec::new("single").on_enter(["foo"]), true);
///
/// assert_eq!(
///     label,
///     r#"<table BORDER="0" CELLBORDER="1"><tr><td BORDER="0" ALIGN="CENTER">SINGLE</td></tr></table>"#
/// );
/// ```
pub fn node_label(state: &StateSpec, hide_enter_exit: bool) -> String {
    let mut rows = Vec::with_capacity(3);

    if !hide_enter_exit {
        if let Some(text) = format_enter_label(&state.enter) {
            rows.push(action_row("B", "LEFT", &text));
        }
    }

    rows.push(format!(
        r#"<tr><td BORDER="0" ALIGN="CENTER">{}</td></tr>"#,
        htmlize::escape_attribute(state.id.to_uppercase())
    ));

    if !hide_enter_exit {
        if let Some(text) = format_exit_label(&state.exit) {
            rows.push(action_row("T", "RIGHT", &text));
        }
    }

    format!("{TABLE_OPEN}{}{TABLE_CLOSE}", rows.join(ROW_SEPARATOR))
}

fn action_row(sides: &str, align: &str, text: &str) -> String {
    format!(
        r#"<tr><td SIDES="{sides}" ALIGN="{align}" COLOR="gray40">{ACTION_FONT}{}</FONT></td></tr>"#,
        htmlize::escape_attribute(text)
    )
}
