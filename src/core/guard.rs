//! Guard expressions attached to transitions.
//!
//! A transition lists its guards in order. Each entry is either a single
//! guard name or a group of guards that must all hold; separate entries are
//! alternatives. Charts only display the names, so the grouping is kept
//! for fidelity but flattened when rendered.

use serde::{Deserialize, Serialize};

/// A named guard or a group of guards.
///
/// Deserializes from a JSON string (`"ready?"`) or a JSON array of guards
/// (`["a", ["b", "c"]]`), nested to any depth.
///
/// # Example
///
/// ```rust
/// use statechart_render::core::Guard;
///
/// let guard = Guard::group([Guard::name("g1"), Guard::name("g2")]);
///
/// assert_eq!(guard.names(), vec!["g1", "g2"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Guard {
    /// A single named predicate.
    Name(String),

    /// Guards that must all hold together.
    Group(Vec<Guard>),
}

impl Guard {
    /// Create a named guard.
    pub fn name(name: impl Into<String>) -> Self {
        Guard::Name(name.into())
    }

    /// Create a guard group.
    pub fn group(guards: impl IntoIterator<Item = Guard>) -> Self {
        Guard::Group(guards.into_iter().collect())
    }

    /// All guard names in declared order, depth-first.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    pub(crate) fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Guard::Name(name) => out.push(name),
            Guard::Group(guards) => {
                for guard in guards {
                    guard.collect_names(out);
                }
            }
        }
    }
}

impl From<&str> for Guard {
    fn from(name: &str) -> Self {
        Guard::name(name)
    }
}

impl From<String> for Guard {
    fn from(name: String) -> Self {
        Guard::Name(name)
    }
}

impl<G: Into<Guard>> From<Vec<G>> for Guard {
    fn from(guards: Vec<G>) -> Self {
        Guard::Group(guards.into_iter().map(Into::into).collect())
    }
}
