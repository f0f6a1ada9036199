//! Label formatting for chart nodes and edges.
//!
//! Every function here is pure and total: empty or missing inputs omit
//! the corresponding segment instead of failing, so the same specs always
//! produce the same text.

mod node;

pub use node::{node_label, ROW_SEPARATOR};

use crate::core::Guard;

const ENTER_PREFIX: &str = "enter state action: ";
const EXIT_PREFIX: &str = "exit state action: ";

/// Format the enter-action row of a state, e.g. `enter state action: foo, bar`.
///
/// Returns `None` when there are no actions.
///
/// ```rust
/// use statechart_render::label::format_enter_label;
///
/// assert_eq!(
///     format_enter_label(&["foo", "bar"]).as_deref(),
///     Some("enter state action: foo, bar")
/// );
/// assert_eq!(format_enter_label::<&str>(&[]), None);
/// ```
pub fn format_enter_label<S: AsRef<str>>(names: &[S]) -> Option<String> {
    prefixed_list(ENTER_PREFIX, names)
}

/// Format the exit-action row of a state, e.g. `exit state action: baz, quux`.
///
/// Returns `None` when there are no actions.
pub fn format_exit_label<S: AsRef<str>>(names: &[S]) -> Option<String> {
    prefixed_list(EXIT_PREFIX, names)
}

fn prefixed_list<S: AsRef<str>>(prefix: &str, names: &[S]) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    Some(format!("{prefix}{}", join(names, ", ")))
}

/// Flatten guards into one bracketed list.
///
/// Groups contribute their members in order without nested brackets, at
/// any depth. No guards yields an empty string.
///
/// ```rust
/// use statechart_render::core::Guard;
/// use statechart_render::label::format_guard_suffix;
///
/// let guards = vec![Guard::from(vec!["g1", "g2"]), Guard::from("g3")];
///
/// assert_eq!(format_guard_suffix(&guards), "[g1, g2, g3]");
/// assert_eq!(format_guard_suffix(&[]), "");
/// ```
pub fn format_guard_suffix(guards: &[Guard]) -> String {
    let mut names = Vec::new();
    for guard in guards {
        guard.collect_names(&mut names);
    }

    if names.is_empty() {
        String::new()
    } else {
        format!("[{}]", names.join(", "))
    }
}

/// Format one transition row: `event [guards] / before... after...`.
///
/// The guard suffix is placed verbatim between single spaces and the
/// callback segment is dropped when both callback lists are empty.
/// Trailing whitespace is trimmed, so an unguarded transition keeps a
/// double space before its callbacks.
///
/// ```rust
/// use statechart_render::label::format_edge_label;
///
/// assert_eq!(
///     format_edge_label("y", "", &["y_before"], &["y_after"]),
///     "y  / y_before y_after"
/// );
/// assert_eq!(
///     format_edge_label::<&str>("x", "[xa_guard]", &[], &[]),
///     "x [xa_guard]"
/// );
/// ```
pub fn format_edge_label<S: AsRef<str>>(
    event: &str,
    guard_suffix: &str,
    before: &[S],
    after: &[S],
) -> String {
    let callbacks = format_callbacks(before, after);
    let label = format!("{event} {guard_suffix} {callbacks}");
    label.trim_end().to_string()
}

fn format_callbacks<S: AsRef<str>>(before: &[S], after: &[S]) -> String {
    if before.is_empty() && after.is_empty() {
        return String::new();
    }

    let names: Vec<&str> = before
        .iter()
        .chain(after.iter())
        .map(AsRef::as_ref)
        .collect();
    format!("/ {}", names.join(" "))
}

fn join<S: AsRef<str>>(names: &[S], separator: &str) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}
