use crate::{
	builder::Sink,
	descriptor::{
		FieldDescriptor,
		ShapeKind,
	},
	errors::BuildError,
	node::XmlNode,
	traits::{
		Structure,
		ToValue,
	},
	value::{
		Scalar,
		Value,
	},
};
use std::collections::BTreeMap;
use tracing::{
	debug,
	trace,
	warn,
};

/// Item element name of non-flattened lists without `location_name_list`
const DEFAULT_LIST_MEMBER: &str = "member";

/// Limits for a single build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
	/// Maximum nesting of structures and lists
	pub max_depth: usize,
}

impl BuildOptions {
	/// Default for `max_depth`
	pub const DEFAULT_MAX_DEPTH: usize = 64;

	/// Set `max_depth`
	pub const fn max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}

impl Default for BuildOptions {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}
}

/// Node kind of a present value, resolved once per field
enum Node<'v, 'a> {
	Structure(&'a dyn Structure),
	List(&'v [Value<'a>]),
	Scalar(&'v Scalar<'a>),
}

/// The explicit `type` override wins over the shape of the value.
fn resolve<'v, 'a>(
	value: &'v Value<'a>,
	descriptor: &FieldDescriptor,
) -> Result<Option<Node<'v, 'a>>, BuildError> {
	let node = match (descriptor.kind, value) {
		(_, Value::Absent) => return Ok(None),
		(Some(ShapeKind::Map), _) | (None, Value::Map { .. }) => {
			return Err(BuildError::unsupported_container(descriptor.name()));
		},
		(None, Value::Structure(s)) | (Some(ShapeKind::Structure), Value::Structure(s)) => {
			Node::Structure(*s)
		},
		(None, Value::List(items)) | (Some(ShapeKind::List), Value::List(items)) => Node::List(items),
		(None, Value::Scalar(s)) => Node::Scalar(s),
		(Some(expected), other) => {
			return Err(BuildError::shape_mismatch(descriptor.name(), expected, other.kind_name()));
		},
	};
	Ok(Some(node))
}

/// Builds the element tree for one root value at a time.
///
/// A builder can be reused; each `build` starts with a fresh tree and namespace table.
#[derive(Debug, Default)]
pub struct Builder {
	options: BuildOptions,
	namespaces: BTreeMap<&'static str, &'static str>,
	depth: usize,
}

impl Builder {
	/// Builder with default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder with custom options
	pub fn with_options(options: BuildOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Active options
	pub fn options(&self) -> &BuildOptions {
		&self.options
	}

	/// Prefixed namespaces declared during the last build (prefix -> URI)
	pub fn namespaces(&self) -> &BTreeMap<&'static str, &'static str> {
		&self.namespaces
	}

	/// Build the tree for `params`.
	///
	/// Returns `None` if nothing in `params` belongs to the document body.
	pub fn build<T: ToValue + ?Sized>(&mut self, params: &T) -> Result<Option<XmlNode>, BuildError> {
		self.namespaces.clear();
		self.depth = 0;

		let value = params.to_value();
		debug!(kind = value.kind_name(), "building XML body");

		let mut root = XmlNode::default();
		self.build_value(&value, &mut root, &FieldDescriptor::EMPTY)?;
		Ok(root.children.into_iter().next())
	}

	/// Build the tree for `params` and hand it to `sink`; nothing is handed over if the tree is
	/// empty.
	pub fn build_xml<T: ToValue + ?Sized, S: Sink + ?Sized>(
		&mut self,
		params: &T,
		sink: &mut S,
	) -> crate::Result<()> {
		if let Some(root) = self.build(params)? {
			sink.accept(root)?;
		}
		Ok(())
	}

	fn build_value(
		&mut self,
		value: &Value<'_>,
		current: &mut XmlNode,
		descriptor: &FieldDescriptor,
	) -> Result<(), BuildError> {
		if !descriptor.is_body() {
			trace!(field = descriptor.name(), location = ?descriptor.location, "skipping non-body field");
			return Ok(());
		}

		match resolve(value, descriptor)? {
			None => Ok(()),
			Some(Node::Structure(structure)) => {
				let descriptor = descriptor.with_traits(&structure.shape_traits());
				self.nested(|b| b.build_structure(structure, current, &descriptor))
			},
			Some(Node::List(items)) => self.nested(|b| b.build_list(items, current, descriptor)),
			Some(Node::Scalar(scalar)) => self.build_scalar(scalar, current, descriptor),
		}
	}

	fn nested(
		&mut self,
		build: impl FnOnce(&mut Self) -> Result<(), BuildError>,
	) -> Result<(), BuildError> {
		let limit = self.options.max_depth;
		if self.depth >= limit {
			warn!(limit, "value nesting exceeds depth limit");
			return Err(BuildError::DepthLimitExceeded { limit });
		}
		self.depth += 1;
		let result = build(self);
		self.depth -= 1;
		result
	}

	fn build_structure(
		&mut self,
		structure: &dyn Structure,
		current: &mut XmlNode,
		descriptor: &FieldDescriptor,
	) -> Result<(), BuildError> {
		if let Some(payload) = descriptor.payload {
			let member = structure.member(payload).ok_or(BuildError::UnknownPayloadMember {
				shape: structure.shape_name(),
				payload,
			})?;
			trace!(shape = structure.shape_name(), payload, "unwrapping payload");
			let promoted = member.descriptor.or_named(member.name);
			return self.build_value(&member.value, current, &promoted);
		}

		let name = descriptor.location_name.unwrap_or_else(|| structure.shape_name());
		let mut element = XmlNode::new(name);

		if let Some(uri) = descriptor.xml_uri.filter(|uri| !uri.is_empty()) {
			match descriptor.xml_prefix.filter(|prefix| !prefix.is_empty()) {
				Some(prefix) => {
					self.namespaces.insert(prefix, uri);
					element.add_attribute(format!("xmlns:{}", prefix), uri);
				},
				None => element.add_attribute("xmlns", uri),
			}
		}
		let declarations = element.attributes.len();

		for member in structure.members() {
			if !member.exported {
				trace!(shape = structure.shape_name(), field = member.name, "skipping hidden field");
				continue;
			}
			let descriptor = member.descriptor.or_named(member.name);
			self.build_value(&member.value, &mut element, &descriptor)?;
		}

		if element.children.is_empty() && element.attributes.len() == declarations {
			trace!(element = name, "eliding structure without body content");
			return Ok(());
		}
		current.add_child(element);
		Ok(())
	}

	fn build_list(
		&mut self,
		items: &[Value<'_>],
		current: &mut XmlNode,
		descriptor: &FieldDescriptor,
	) -> Result<(), BuildError> {
		let name = element_name(descriptor, "list")?;

		if descriptor.flattened {
			let item = FieldDescriptor::new().named(name);
			for value in items {
				self.build_value(value, current, &item)?;
			}
		} else {
			let member = descriptor
				.location_name_list
				.filter(|member| !member.is_empty())
				.unwrap_or(DEFAULT_LIST_MEMBER);
			let item = FieldDescriptor::new().named(member);
			let mut list = XmlNode::new(name);
			for value in items {
				self.build_value(value, &mut list, &item)?;
			}
			current.add_child(list);
		}
		Ok(())
	}

	fn build_scalar(
		&mut self,
		scalar: &Scalar<'_>,
		current: &mut XmlNode,
		descriptor: &FieldDescriptor,
	) -> Result<(), BuildError> {
		let name = element_name(descriptor, "scalar")?;
		let text = match scalar {
			Scalar::Unsupported { type_name, value } => {
				return Err(BuildError::unsupported_scalar(name, *type_name, value));
			},
			supported => supported.to_text().unwrap_or_default(),
		};

		if descriptor.xml_attribute {
			current.add_attribute(name, text);
		} else {
			current.add_child(XmlNode::leaf(name, text));
		}
		Ok(())
	}
}

// Only a root value can arrive here without a name.
fn element_name(descriptor: &FieldDescriptor, kind: &'static str) -> Result<&'static str, BuildError> {
	descriptor
		.location_name
		.filter(|name| !name.is_empty())
		.ok_or(BuildError::UnnamedRoot { kind })
}

/// Build the tree for `params` with default options.
pub fn build_tree<T: ToValue + ?Sized>(params: &T) -> Result<Option<XmlNode>, BuildError> {
	Builder::new().build(params)
}

/// Build the tree for `params` with default options and hand it to `sink`.
///
/// At most one element is handed over; nothing at all if `params` has no body content.
pub fn build_xml<T: ToValue + ?Sized, S: Sink + ?Sized>(params: &T, sink: &mut S) -> crate::Result<()> {
	Builder::new().build_xml(params, sink)
}
