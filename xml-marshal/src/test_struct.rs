use crate::{
	Blob,
	Member,
	Structure,
	ToValue,
	Value,
};
use chrono::{
	DateTime,
	FixedOffset,
	TimeZone,
	Utc,
};
use std::collections::HashMap;

pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

#[derive(crate::Structure)]
#[derive(Clone, PartialEq, Debug)]
#[xml_marshal(crate = "crate")]
pub struct Simple {
	#[xml_marshal(location_name = "Name")]
	pub name: String,
	#[xml_marshal(location_name = "Tag", flattened)]
	pub tags: Vec<String>,
}

impl Simple {
	pub const TEST_DOCUMENT: &'static str = "<Simple><Name>x</Name><Tag>a</Tag><Tag>b</Tag></Simple>";

	pub fn example() -> Self {
		Self {
			name: "x".into(),
			tags: vec!["a".into(), "b".into()],
		}
	}
}

#[derive(crate::Structure)]
#[derive(Clone, PartialEq, Debug)]
#[xml_marshal(crate = "crate")]
pub struct Tagging {
	#[xml_marshal(location_name = "TagSet", location_name_list = "Tag")]
	pub tag_set: Vec<Tag>,
}

impl Tagging {
	pub const TEST_DOCUMENT: &'static str = "<Tagging><TagSet>\
		<Tag><Key>env</Key><Value>prod</Value></Tag>\
		<Tag><Key>color</Key><Value>blue</Value></Tag>\
		</TagSet></Tagging>";

	pub fn example() -> Self {
		Self {
			tag_set: vec![
				Tag {
					key: "env".into(),
					value: "prod".into(),
				},
				Tag {
					key: "color".into(),
					value: "blue".into(),
				},
			],
		}
	}
}

#[derive(crate::Structure)]
#[derive(Clone, PartialEq, Debug)]
#[xml_marshal(crate = "crate")]
pub struct Tag {
	#[xml_marshal(location_name = "Key")]
	pub key: String,
	#[xml_marshal(location_name = "Value")]
	pub value: String,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Listing {
	#[xml_marshal(location_name = "Values")]
	pub values: Vec<i32>,
	#[xml_marshal(location_name = "Empty")]
	pub empty: Option<Vec<i32>>,
	#[xml_marshal(location_name = "Missing")]
	pub missing: Option<Vec<i32>>,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Matrix {
	#[xml_marshal(location_name = "Rows")]
	pub rows: Vec<Vec<i64>>,
}

/// Request with members spread over the whole message
#[derive(crate::Structure)]
#[xml_marshal(crate = "crate", location_name = "PutObjectInput")]
pub struct Mixed {
	#[xml_marshal(location = "uri", location_name = "Bucket")]
	pub bucket: String,
	#[xml_marshal(location = "header", location_name = "x-amz-acl")]
	pub acl: Option<String>,
	#[xml_marshal(location = "headers", location_name = "x-amz-meta-")]
	pub metadata: Option<HashMap<String, String>>,
	#[xml_marshal(location = "body", location_name = "Key")]
	pub key: Option<String>,
}

impl Mixed {
	pub fn example() -> Self {
		let mut metadata = HashMap::new();
		metadata.insert("owner".to_owned(), "me".to_owned());
		Self {
			bucket: "photos".into(),
			acl: Some("private".into()),
			metadata: Some(metadata),
			key: Some("photo.png".into()),
		}
	}
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct HeadersOnly {
	#[xml_marshal(location = "header", location_name = "x-token")]
	pub token: String,
	#[xml_marshal(location = "querystring", location_name = "marker")]
	pub marker: Option<String>,
}

#[derive(crate::Structure)]
#[derive(Default)]
#[xml_marshal(crate = "crate")]
pub struct Outer {
	#[xml_marshal(location_name = "Label")]
	pub label: Option<String>,
	#[xml_marshal(location_name = "Inner")]
	pub inner: Option<Inner>,
}

#[derive(crate::Structure)]
#[derive(Default)]
#[xml_marshal(crate = "crate")]
pub struct Inner {
	#[xml_marshal(location_name = "Value")]
	pub value: Option<String>,
}

#[derive(crate::Structure)]
#[derive(Clone, PartialEq, Debug)]
#[xml_marshal(crate = "crate", payload = "configuration")]
pub struct CreateBucketInput {
	#[xml_marshal(location = "uri", location_name = "Bucket")]
	pub bucket: String,
	#[xml_marshal(location_name = "CreateBucketConfiguration", xml_uri = "http://s3.amazonaws.com/doc/2006-03-01/")]
	pub configuration: Option<CreateBucketConfiguration>,
}

impl CreateBucketInput {
	pub const TEST_DOCUMENT: &'static str = "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
		<LocationConstraint>eu-west-1</LocationConstraint>\
		</CreateBucketConfiguration>";

	pub fn example() -> Self {
		Self {
			bucket: "photos".into(),
			configuration: Some(CreateBucketConfiguration {
				location_constraint: Some("eu-west-1".into()),
			}),
		}
	}
}

#[derive(crate::Structure)]
#[derive(Clone, PartialEq, Debug)]
#[xml_marshal(crate = "crate")]
pub struct CreateBucketConfiguration {
	#[xml_marshal(location_name = "LocationConstraint")]
	pub location_constraint: Option<String>,
}

/// Holds the payload member directly, without unwrapping
#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct PayloadHolder {
	#[xml_marshal(location_name = "CreateBucketConfiguration", xml_uri = "http://s3.amazonaws.com/doc/2006-03-01/")]
	pub configuration: Option<CreateBucketConfiguration>,
}

/// Hand-written schema whose payload trait points nowhere
pub struct BrokenPayload;

impl Structure for BrokenPayload {
	fn shape_name(&self) -> &'static str {
		"BrokenPayload"
	}

	fn shape_traits(&self) -> crate::ShapeTraits {
		crate::ShapeTraits {
			payload: Some("Missing"),
			..crate::ShapeTraits::EMPTY
		}
	}

	fn members(&self) -> Vec<Member<'_>> {
		Vec::new()
	}
}

impl ToValue for BrokenPayload {
	fn to_value(&self) -> Value<'_> {
		Value::Structure(self)
	}
}

#[derive(crate::Structure)]
#[xml_marshal(
	crate = "crate",
	location_name = "Grantee",
	xml_prefix = "xsi",
	xml_uri = "http://www.w3.org/2001/XMLSchema-instance"
)]
pub struct Grantee {
	#[xml_marshal(location_name = "xsi:type", xml_attribute)]
	pub kind: String,
	#[xml_marshal(location_name = "ID")]
	pub id: Option<String>,
	// `pub(crate)` is not exported: part of the schema but never encoded
	#[xml_marshal(location_name = "DisplayName")]
	pub(crate) display_name: Option<String>,
}

impl Grantee {
	pub const TEST_DOCUMENT: &'static str = "<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:type=\"CanonicalUser\">\
		<ID>abc</ID></Grantee>";

	pub fn example() -> Self {
		Self {
			kind: "CanonicalUser".into(),
			id: Some("abc".into()),
			display_name: Some("hidden".into()),
		}
	}
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Scalars {
	#[xml_marshal(location_name = "Str")]
	pub text: String,
	#[xml_marshal(location_name = "Blob")]
	pub blob: Blob,
	#[xml_marshal(location_name = "Bool")]
	pub flag: bool,
	#[xml_marshal(location_name = "Int")]
	pub int: i64,
	#[xml_marshal(location_name = "Small")]
	pub small: i8,
	#[xml_marshal(location_name = "Big")]
	pub big: i128,
	#[xml_marshal(location_name = "Float")]
	pub float: f64,
	#[xml_marshal(location_name = "Float32")]
	pub float32: f32,
	#[xml_marshal(location_name = "Time")]
	pub time: DateTime<Utc>,
}

impl Scalars {
	pub fn example() -> Self {
		Self {
			text: "x & y".into(),
			blob: Blob(b"hi".to_vec()),
			flag: true,
			int: -42,
			small: 7,
			big: -42,
			float: 2.5,
			float32: 0.25,
			time: Utc.with_ymd_and_hms(2021, 3, 4, 15, 0, 0).unwrap(),
		}
	}
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Unnamed {
	pub plain: String,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct WithMap {
	#[xml_marshal(location_name = "Name")]
	pub name: Option<String>,
	#[xml_marshal(location_name = "Metadata")]
	pub metadata: Option<HashMap<String, String>>,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Forced {
	#[xml_marshal(location_name = "AsMap", type = "map")]
	pub as_map: Option<Vec<String>>,
	#[xml_marshal(location_name = "AsStructure", type = "structure")]
	pub as_structure: Option<String>,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct WithUnsigned {
	#[xml_marshal(location_name = "Size")]
	pub size: u64,
}

#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Event {
	#[xml_marshal(location_name = "At")]
	pub at: DateTime<FixedOffset>,
}

/// Self-similar structure of arbitrary depth
#[derive(crate::Structure)]
#[xml_marshal(crate = "crate")]
pub struct Chain {
	#[xml_marshal(location_name = "Level")]
	pub level: i32,
	#[xml_marshal(location_name = "Next")]
	pub next: Option<Box<Chain>>,
}

impl Chain {
	pub fn of_depth(depth: i32) -> Self {
		let mut chain = Self {
			level: depth,
			next: None,
		};
		for level in (1..depth).rev() {
			chain = Self {
				level,
				next: Some(Box::new(chain)),
			};
		}
		chain
	}
}
