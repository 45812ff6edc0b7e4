//! Building element trees from the value graph
//!
//! Each `Builder::build` call walks one root value depth-first:
//!
//! - fields located outside of the body are skipped,
//! - structures become elements with one child per producing field (and vanish without any),
//! - lists become a wrapper element with one item element each, or sibling elements if flattened,
//! - scalars become text leaves or attributes of the enclosing element,
//! - maps fail the build.
//!
//! The finished tree can be handed to any `Sink`, e.g. the `quick-xml` serializer adaptor.

mod core;
mod sink;

pub use self::{
	core::{
		build_tree,
		build_xml,
		BuildOptions,
		Builder,
	},
	sink::Sink,
};
