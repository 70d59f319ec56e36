//! # RV SDF Library
//!
//! Minimal element-node layer used to build scene-description fragments
//! for the model controller plugin.
//!
//! # Module Structure
//!
//! - [`attributes`] - Insertion-ordered attribute map
//! - [`element`] - `Element` trait and rendered `Node` tree
//! - [`error`] - Markup rendering errors
//! - [`joint`] - Joint handle referenced by motors
//! - [`number`] - Canonical number formatting
//! - [`writer`] - XML serialisation
//!
//! # Example
//!
//! ```rust
//! use rv_sdf::{Element, Node};
//!
//! let node = Node::new("rv:pid").with_child(Node::new("rv:p").with_body("1.000000"));
//! assert_eq!(node.to_xml().unwrap(), "<rv:pid><rv:p>1.000000</rv:p></rv:pid>");
//! ```

#![deny(missing_docs)]

pub mod attributes;
pub mod element;
pub mod error;
pub mod joint;
pub mod number;
pub mod writer;

pub use crate::attributes::Attributes;
pub use crate::element::{Element, Node};
pub use crate::error::{SdfError, SdfResult};
pub use crate::joint::Joint;
pub use crate::number::{namespaced, number_format};
