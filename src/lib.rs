#![forbid(unsafe_code)]

//! Tolerant streaming tag-soup parser with DOM-like tree access and
//! queries.
//!
//! [`Document::parse`] turns loose, possibly broken markup into a node
//! tree without ever failing; queries in the style of the classic DOM
//! lookup methods run either over the whole document or scoped to a
//! subtree.
//!
//! ```rust
//! use tagtree::Document;
//!
//! let doc = Document::parse(r#"<ul><li class="item">One</li></ul>"#);
//! let item = doc.get_elements_by_class_name("item")[0];
//! assert_eq!(doc.text_content(item), "One");
//! ```

mod access;
mod document;
mod error;
mod htmlelements;
mod htmlvalue;
mod parse;
mod query;
mod serializer;
mod tag;
mod tokenizer;
mod valueaccess;

pub use document::{Document, Node};
pub use error::Error;
pub use htmlvalue::{Attribute, Element, Text, Value, ValueType};
pub use query::Subtree;
