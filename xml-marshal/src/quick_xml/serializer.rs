use crate::{
	builder::{
		build_tree,
		Sink,
	},
	node::XmlNode,
	traits::ToValue,
	Result,
};
use quick_xml::events::{
	BytesDecl,
	BytesEnd,
	BytesStart,
	BytesText,
	Event,
};
use std::io;

/// How built trees are written out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
	/// Start documents with `<?xml version="1.0" encoding="UTF-8"?>`
	pub declaration: bool,
	/// Write children grouped by name in sorted name order instead of insertion order
	pub sorted: bool,
}

fn write_to_string(node: &XmlNode, options: SerializeOptions) -> Result<String> {
	let mut buf = Vec::new();
	let mut writer = quick_xml::Writer::new(&mut buf);
	Serializer::with_options(&mut writer, options).serialize_document(node)?;
	Ok(String::from_utf8(buf)?)
}

/// Serialize a single element tree in memory
pub fn serialize_node(node: &XmlNode) -> Result<String> {
	write_to_string(node, SerializeOptions::default())
}

/// Serialize element into full document (with XML declaration) in memory
pub fn serialize_document(node: &XmlNode) -> Result<String> {
	write_to_string(node, SerializeOptions {
		declaration: true,
		..SerializeOptions::default()
	})
}

/// Build the tree for `params` and serialize it; empty if there is no body content.
pub fn build_document<T: ToValue + ?Sized>(params: &T) -> Result<String> {
	match build_tree(params)? {
		Some(root) => serialize_node(&root),
		None => Ok(String::new()),
	}
}

/// Serializer adaptor for `quick_xml::Writer`
pub struct Serializer<'w, W: io::Write> {
	writer: &'w mut quick_xml::Writer<W>,
	options: SerializeOptions,
}

impl<'w, W: io::Write> Serializer<'w, W> {
	/// New adaptor using the writer
	pub fn new(writer: &'w mut quick_xml::Writer<W>) -> Self {
		Self::with_options(writer, SerializeOptions::default())
	}

	/// New adaptor using the writer and options
	pub fn with_options(writer: &'w mut quick_xml::Writer<W>, options: SerializeOptions) -> Self {
		Self { writer, options }
	}

	/// Serialize full document from root element
	pub fn serialize_document(&mut self, node: &XmlNode) -> Result<()> {
		if self.options.declaration {
			self.writer
				.write_event(Event::Decl(BytesDecl::new(b"1.0", Some(b"UTF-8"), None)))?;
		}
		self.serialize_node(node)
	}

	/// Serialize single element
	pub fn serialize_node(&mut self, node: &XmlNode) -> Result<()> {
		let mut start = BytesStart::owned_name(node.name.as_bytes().to_vec());
		for (key, value) in &node.attributes {
			start.push_attribute((key.as_str(), value.as_str()));
		}
		self.writer.write_event(Event::Start(start))?;

		if let Some(text) = &node.text {
			self.writer
				.write_event(Event::Text(BytesText::from_plain_str(text)))?;
		} else if self.options.sorted {
			let mut children: Vec<&XmlNode> = node.children.iter().collect();
			// stable: same-named children keep their order
			children.sort_by(|a, b| a.name.cmp(&b.name));
			for child in children {
				self.serialize_node(child)?;
			}
		} else {
			for child in &node.children {
				self.serialize_node(child)?;
			}
		}

		self.writer
			.write_event(Event::End(BytesEnd::owned(node.name.as_bytes().to_vec())))?;
		Ok(())
	}
}

impl<W: io::Write> Sink for Serializer<'_, W> {
	fn accept(&mut self, node: XmlNode) -> Result<()> {
		self.serialize_document(&node)
	}
}
