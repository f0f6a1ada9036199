//! Translation from machine definitions to chart graphs.
//!
//! - `aggregate` collapses transition specs into one edge per state pair
//! - `build` turns states and edges into a labelled [`Graph`]
//! - `validate` reports every structural problem of a definition at once

mod aggregate;
mod build;
mod error;
mod model;
mod validate;

pub use aggregate::{aggregate, Edge};
pub use build::{build, edge_label, EDGE_ROW_SEPARATOR};
pub use error::{Endpoint, GraphError, GraphResult};
pub use model::{Graph, GraphEdge, Node, NodeId};
pub use validate::validate;
