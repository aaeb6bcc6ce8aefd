//! A minimal JSON front end for embedding: parse a complete JSON text into
//! an owned node tree, then navigate it read-only.
//!
//! One call to [`parse`] builds a [`Tree`] holding every node of the
//! document in a single arena; [`NodeId`]s index into that arena and the
//! query API ([`Tree::kind`], [`Tree::number`], [`Tree::string`],
//! [`Tree::array_element`], [`Tree::object_element`], [`Tree::object_key`])
//! reads it without mutation or allocation. Dropping the tree releases
//! everything in one pass.
//!
//! There is no encoder, no streaming input, and no schema layer; the crate
//! is `no_std` + `alloc`.
//!
//! ```
//! use jsontree::Kind;
//!
//! let tree = jsontree::parse(r#"{"door": "oak", "hinges": [1, 2, 3]}"#)?;
//! let root = tree.root();
//! assert_eq!(tree.kind(root), Kind::Object);
//!
//! let hinges = tree.member(root, "hinges").unwrap();
//! assert_eq!(tree.child_count(hinges), 3);
//! let first = tree.array_element(hinges, 0).unwrap();
//! assert_eq!(tree.number(first), Some(1.0));
//! # Ok::<(), jsontree::ParseError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod node;
mod parser;
mod tree;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use node::{Kind, NodeId};
pub use parser::parse;
pub use tree::{Children, Tree};
