//! In-memory ordered index backed by a red-black tree. Nodes keep a
//! link to their parent, and every missing child is a black sentinel node,
//! so that rebalancing after insert and remove never special cases an
//! empty slot.

mod config;
mod depth;
mod error;
mod iter;
mod node;
mod print;
mod rbt;

pub use crate::config::Config;
pub use crate::depth::Depth;
pub use crate::error::RbtError;
pub use crate::iter::{Iter, Walk};
pub use crate::node::NodeRef;
pub use crate::print::render;
pub use crate::rbt::{Rbt, Stats};

#[cfg(test)]
mod print_test;
