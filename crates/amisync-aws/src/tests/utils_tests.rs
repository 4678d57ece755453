//! AWS CLI helper tests

use crate::traits::{ImageQuery, ImageRecord};
use crate::utils;

#[test]
fn test_describe_images_args_public_query() {
    let query = ImageQuery::public("126027368216", "gravitational-teleport-ami-oss-14.2.0");
    let args = utils::describe_images_args("us-east-1", &query);

    assert_eq!(
        args,
        vec![
            "ec2",
            "describe-images",
            "--region",
            "us-east-1",
            "--owners",
            "126027368216",
            "--filters",
            "Name=name,Values=gravitational-teleport-ami-oss-14.2.0",
            "Name=is-public,Values=true",
            "--output",
            "json",
        ]
    );
}

#[test]
fn test_describe_images_args_without_public_filter() {
    let query = ImageQuery {
        owner: "self".to_string(),
        name: "gravitational-teleport-ami-ent-14.2.0".to_string(),
        public_only: false,
    };
    let args = utils::describe_images_args("eu-west-1", &query);
    assert!(!args.iter().any(|a| a.starts_with("Name=is-public")));
}

#[test]
fn test_parse_describe_images() {
    let output = br#"{
        "Images": [
            {
                "ImageId": "ami-0123456789abcdef0",
                "Name": "gravitational-teleport-ami-oss-14.2.0",
                "Public": true,
                "State": "available"
            },
            { "Name": "gravitational-teleport-ami-oss-14.2.0" }
        ]
    }"#;

    let images = utils::parse_describe_images(output).unwrap();
    assert_eq!(
        images,
        vec![
            ImageRecord::new(
                "ami-0123456789abcdef0",
                "gravitational-teleport-ami-oss-14.2.0"
            ),
            ImageRecord {
                image_id: None,
                name: Some("gravitational-teleport-ami-oss-14.2.0".to_string()),
            },
        ]
    );
}

#[test]
fn test_parse_describe_images_empty() {
    assert!(utils::parse_describe_images(br#"{"Images": []}"#)
        .unwrap()
        .is_empty());
    assert!(utils::parse_describe_images(b"{}").unwrap().is_empty());
}

#[test]
fn test_parse_describe_images_rejects_garbage() {
    assert!(utils::parse_describe_images(b"An error occurred").is_err());
}

#[test]
fn test_first_stderr_line() {
    let stderr = b"\n  An error occurred (AuthFailure) when calling DescribeImages\nmore\n";
    assert_eq!(
        utils::first_stderr_line(stderr),
        "An error occurred (AuthFailure) when calling DescribeImages"
    );
    assert_eq!(utils::first_stderr_line(b""), "no error output");
}
