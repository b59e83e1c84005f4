// Standard S3 HTTP response constants
pub const AMZ_REQUEST_ID: &str = "x-amz-request-id";

// Signature V4 related constants.
pub const AMZ_CONTENT_SHA256: &str = "x-amz-content-sha256";
pub const AMZ_DATE: &str = "x-amz-date";
