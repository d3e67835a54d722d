//! Document tree + HTML serialization.
//! Templates build a `Node` tree; `html` turns it into markup for the host page.

pub mod html;
pub mod node;

pub use html::{standalone_page, to_html};
pub use node::{Element, Node};
