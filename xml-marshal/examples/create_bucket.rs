// use `cargo run -p xml-marshal --example create_bucket` to run from git repository base directory

use xml_marshal::{quick_xml::build_document, Structure};

/// request body of a bucket creation
#[derive(Structure)]
#[xml_marshal(xml_uri = "http://s3.amazonaws.com/doc/2006-03-01/")]
pub struct CreateBucketConfiguration {
	#[xml_marshal(location_name = "LocationConstraint")]
	pub location_constraint: Option<String>,
}

/// request parameters; only the payload ends up in the body
#[derive(Structure)]
#[xml_marshal(payload = "configuration")]
pub struct CreateBucketInput {
	#[xml_marshal(location = "uri", location_name = "Bucket")]
	pub bucket: String,
	#[xml_marshal(location = "header", location_name = "x-amz-acl")]
	pub acl: Option<String>,
	#[xml_marshal(location_name = "CreateBucketConfiguration")]
	pub configuration: Option<CreateBucketConfiguration>,
}

fn main() {
	let input = CreateBucketInput {
		bucket: "photos".into(),
		acl: Some("private".into()),
		configuration: Some(CreateBucketConfiguration {
			location_constraint: Some("eu-west-1".into()),
		}),
	};

	eprintln!("Generating XML output...");

	// print request body
	println!("{}", build_document(&input).unwrap());
}
