use serde::{Deserialize, Serialize};

use super::xml;
use crate::errors::{ApiError, ApiErrorResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedError {
    code: String,
    message: String,
    resource: String,
    request_id: String,
}

fn parse_error_body(body: &str) -> ParsedError {
    let document = body
        .strip_prefix(xml::HEADER)
        .expect("missing XML declaration");
    quick_xml::de::from_str(document).expect("malformed error body")
}

#[test]
fn test_header_prepended() {
    #[derive(Serialize)]
    struct ListAllMyBucketsResult {
        owner: &'static str,
    }

    let s = xml::to_string(&ListAllMyBucketsResult { owner: "test" }).unwrap();
    assert!(s.starts_with(xml::HEADER));
    assert!(s.ends_with("</ListAllMyBucketsResult>"));
}

#[test]
fn test_error_envelope_shape() {
    let err = ApiError::NoSuchBucket.to();
    let res = ApiErrorResponse::from(
        err,
        "/my-bucket/my-key".to_owned(),
        "1234567890123456789".to_owned(),
    );
    let s = xml::to_string(&res).unwrap();
    assert!(s.starts_with(xml::HEADER));
    assert!(s[xml::HEADER.len()..].starts_with("<Error>"));

    let parsed = parse_error_body(&s);
    assert_eq!(parsed.code, "NoSuchBucket");
    assert_eq!(parsed.message, "The specified bucket does not exist");
    assert_eq!(parsed.resource, "/my-bucket/my-key");
    assert_eq!(parsed.request_id, "1234567890123456789");
}

#[test]
fn test_resource_path_is_escaped() {
    let resource = r#"/my-bucket/<key>&"name"'s"#;
    let res = ApiErrorResponse::from(
        ApiError::AccessDenied.to(),
        resource.to_owned(),
        "1".to_owned(),
    );
    let s = xml::to_string(&res).unwrap();
    // The raw markup must not leak into the document structure.
    assert!(!s.contains("<key>"));

    let parsed = parse_error_body(&s);
    assert_eq!(parsed.resource, resource);
}

#[test]
fn test_message_is_escaped() {
    let res = ApiErrorResponse::from(
        ApiError::InvalidRequest.to_with_err("got <unexpected> & more"),
        "/".to_owned(),
        "1".to_owned(),
    );
    let s = xml::to_string(&res).unwrap();
    let parsed = parse_error_body(&s);
    assert_eq!(parsed.message, "Invalid Request (got <unexpected> & more)");
}
