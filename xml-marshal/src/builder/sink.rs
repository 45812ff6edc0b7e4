use crate::{
	node::XmlNode,
	Result,
};

/// Consumer of a finished element tree (usually an XML serializer).
pub trait Sink {
	/// Take the root element of a build
	fn accept(&mut self, node: XmlNode) -> Result<()>;
}

/// Collect built trees
impl Sink for Vec<XmlNode> {
	fn accept(&mut self, node: XmlNode) -> Result<()> {
		self.push(node);
		Ok(())
	}
}

/// Keep the last built tree
impl Sink for Option<XmlNode> {
	fn accept(&mut self, node: XmlNode) -> Result<()> {
		*self = Some(node);
		Ok(())
	}
}

impl<S: Sink + ?Sized> Sink for &mut S {
	fn accept(&mut self, node: XmlNode) -> Result<()> {
		(**self).accept(node)
	}
}
