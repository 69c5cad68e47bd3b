pub mod attrs;
pub mod traverse;

mod types;

pub use crate::types::{Id, Node, NodeId};
