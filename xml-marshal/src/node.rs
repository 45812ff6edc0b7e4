//! Intermediate XML element tree

/// Element of the built tree.
///
/// The builder never mixes text and children: a node is either a text leaf or a container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
	/// Qualified element name
	pub name: String,
	/// Attributes in insertion order
	pub attributes: Vec<(String, String)>,
	/// Child elements in insertion order
	pub children: Vec<XmlNode>,
	/// Text content of a leaf
	pub text: Option<String>,
}

impl XmlNode {
	/// Empty element
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Text leaf
	pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: Some(text.into()),
			..Self::default()
		}
	}

	/// Append a child element
	pub fn add_child(&mut self, child: XmlNode) {
		self.children.push(child);
	}

	/// Append an attribute
	pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.attributes.push((key.into(), value.into()));
	}

	/// Value of the first attribute with the given key
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// All children with the given name, in insertion order
	pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
		self.children.iter().filter(move |c| c.name == name)
	}

	/// First child with the given name
	pub fn child(&self, name: &str) -> Option<&XmlNode> {
		self.children.iter().find(|c| c.name == name)
	}

	/// Whether this is a text leaf
	pub fn is_text(&self) -> bool {
		self.text.is_some()
	}
}
