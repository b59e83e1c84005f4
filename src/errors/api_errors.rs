use actix_web::http::StatusCode;
use serde::Serialize;

#[derive(Debug)]
pub struct GenericApiError {
    pub code: &'static str,
    pub description: String,
    pub http_status_code: StatusCode,
}

#[derive(Debug)]
pub struct GenericApiErrorConst {
    pub code: &'static str,
    pub description: &'static str,
    pub http_status_code: StatusCode,
}

/// REST error envelope returned to clients, matching the S3 error-response
/// contract: an `Error` root with `Code`, `Message`, `Resource` and
/// `RequestId` children.
#[derive(Debug, Serialize)]
#[serde(rename = "Error", rename_all = "PascalCase")]
pub struct ApiErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub resource: String,
    pub request_id: String,
}

impl ApiErrorResponse {
    pub fn from(err: GenericApiError, resource: String, request_id: String) -> Self {
        ApiErrorResponse {
            code: err.code,
            message: err.description,
            resource,
            request_id,
        }
    }
}

/// S3 Error codes, non exhaustive list.
/// Refer: http://docs.aws.amazon.com/AmazonS3/latest/API/ErrorResponses.html
#[non_exhaustive]
#[derive(Debug, Copy, Clone)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum ApiError {
    None,
    AccessDenied,
    AuthHeaderEmpty,
    AuthorizationHeaderMalformed,
    BadDigest,
    BucketAlreadyExists,
    BucketAlreadyOwnedByYou,
    BucketNotEmpty,
    ContentSHA256Mismatch,
    EntityTooSmall,
    EntityTooLarge,
    ExpiredPresignRequest,
    IncompleteBody,
    InternalError,
    InvalidAccessKeyID,
    InvalidBucketName,
    InvalidCopyDest,
    InvalidCopySource,
    InvalidDigest,
    InvalidMaxKeys,
    InvalidMaxParts,
    InvalidMaxUploads,
    InvalidPart,
    InvalidPartNumberMarker,
    InvalidPartOrder,
    InvalidRange,
    InvalidRequest,
    KeyTooLongError,
    MalformedDate,
    MalformedPOSTRequest,
    MalformedXML,
    MethodNotAllowed,
    MissingContentLength,
    MissingContentMD5,
    MissingDateHeader,
    MissingFields,
    NoSuchBucket,
    NoSuchBucketPolicy,
    NoSuchCORSConfiguration,
    NoSuchKey,
    NoSuchLifecycleConfiguration,
    NoSuchUpload,
    NotImplemented,
    PreconditionFailed,
    RequestTimeTooSkewed,
    SignatureDoesNotMatch,
    SignatureVersionNotSupported,
    SlowDown,
    UnsignedHeaders,
    // Add new error codes here.
}

impl ApiError {
    pub fn to_with_err(&self, err: &str) -> GenericApiError {
        self.value().to(Some(err))
    }

    pub fn to(&self) -> GenericApiError {
        self.value().to(None)
    }
}

impl GenericApiErrorConst {
    const fn new(
        code: &'static str,
        description: &'static str,
        http_status_code: StatusCode,
    ) -> Self {
        GenericApiErrorConst {
            code,
            description,
            http_status_code,
        }
    }

    fn to(&self, err: Option<&str>) -> GenericApiError {
        let description = match err {
            Some(err) => format!("{} ({})", self.description, err),
            None => self.description.to_owned(),
        };
        GenericApiError {
            code: self.code,
            description,
            http_status_code: self.http_status_code,
        }
    }
}

impl ApiError {
    pub fn value(&self) -> &'static GenericApiErrorConst {
        match *self {
            ApiError::None => &INTERNAL_ERROR,
            ApiError::AccessDenied => &ACCESS_DENIED,
            ApiError::AuthHeaderEmpty => &AUTH_HEADER_EMPTY,
            ApiError::AuthorizationHeaderMalformed => &AUTHORIZATION_HEADER_MALFORMED,
            ApiError::BadDigest => &BAD_DIGEST,
            ApiError::BucketAlreadyExists => &BUCKET_ALREADY_EXISTS,
            ApiError::BucketAlreadyOwnedByYou => &BUCKET_ALREADY_OWNED_BY_YOU,
            ApiError::BucketNotEmpty => &BUCKET_NOT_EMPTY,
            ApiError::ContentSHA256Mismatch => &CONTENT_SHA256_MISMATCH,
            ApiError::EntityTooSmall => &ENTITY_TOO_SMALL,
            ApiError::EntityTooLarge => &ENTITY_TOO_LARGE,
            ApiError::ExpiredPresignRequest => &EXPIRED_PRESIGN_REQUEST,
            ApiError::IncompleteBody => &INCOMPLETE_BODY,
            ApiError::InternalError => &INTERNAL_ERROR,
            ApiError::InvalidAccessKeyID => &INVALID_ACCESS_KEY_ID,
            ApiError::InvalidBucketName => &INVALID_BUCKET_NAME,
            ApiError::InvalidCopyDest => &INVALID_COPY_DEST,
            ApiError::InvalidCopySource => &INVALID_COPY_SOURCE,
            ApiError::InvalidDigest => &INVALID_DIGEST,
            ApiError::InvalidMaxKeys => &INVALID_MAX_KEYS,
            ApiError::InvalidMaxParts => &INVALID_MAX_PARTS,
            ApiError::InvalidMaxUploads => &INVALID_MAX_UPLOADS,
            ApiError::InvalidPart => &INVALID_PART,
            ApiError::InvalidPartNumberMarker => &INVALID_PART_NUMBER_MARKER,
            ApiError::InvalidPartOrder => &INVALID_PART_ORDER,
            ApiError::InvalidRange => &INVALID_RANGE,
            ApiError::InvalidRequest => &INVALID_REQUEST,
            ApiError::KeyTooLongError => &KEY_TOO_LONG_ERROR,
            ApiError::MalformedDate => &MALFORMED_DATE,
            ApiError::MalformedPOSTRequest => &MALFORMED_POSTREQUEST,
            ApiError::MalformedXML => &MALFORMED_XML,
            ApiError::MethodNotAllowed => &METHOD_NOT_ALLOWED,
            ApiError::MissingContentLength => &MISSING_CONTENT_LENGTH,
            ApiError::MissingContentMD5 => &MISSING_CONTENT_MD5,
            ApiError::MissingDateHeader => &MISSING_DATE_HEADER,
            ApiError::MissingFields => &MISSING_FIELDS,
            ApiError::NoSuchBucket => &NO_SUCH_BUCKET,
            ApiError::NoSuchBucketPolicy => &NO_SUCH_BUCKET_POLICY,
            ApiError::NoSuchCORSConfiguration => &NO_SUCH_CORS_CONFIGURATION,
            ApiError::NoSuchKey => &NO_SUCH_KEY,
            ApiError::NoSuchLifecycleConfiguration => &NO_SUCH_LIFECYCLE_CONFIGURATION,
            ApiError::NoSuchUpload => &NO_SUCH_UPLOAD,
            ApiError::NotImplemented => &NOT_IMPLEMENTED,
            ApiError::PreconditionFailed => &PRECONDITION_FAILED,
            ApiError::RequestTimeTooSkewed => &REQUEST_TIME_TOO_SKEWED,
            ApiError::SignatureDoesNotMatch => &SIGNATURE_DOES_NOT_MATCH,
            ApiError::SignatureVersionNotSupported => &SIGNATURE_VERSION_NOT_SUPPORTED,
            ApiError::SlowDown => &SLOW_DOWN,
            ApiError::UnsignedHeaders => &UNSIGNED_HEADERS,
        }
    }
}

const ACCESS_DENIED: GenericApiErrorConst =
    GenericApiErrorConst::new("AccessDenied", "Access Denied.", StatusCode::FORBIDDEN);
const AUTH_HEADER_EMPTY: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Authorization header is invalid -- one and only one ' ' (space) required.",
    StatusCode::BAD_REQUEST,
);
const AUTHORIZATION_HEADER_MALFORMED: GenericApiErrorConst = GenericApiErrorConst::new(
    "AuthorizationHeaderMalformed",
    "The authorization header is malformed.",
    StatusCode::BAD_REQUEST,
);
const BAD_DIGEST: GenericApiErrorConst = GenericApiErrorConst::new(
    "BadDigest",
    "The Content-Md5 you specified did not match what we received.",
    StatusCode::BAD_REQUEST,
);
const BUCKET_ALREADY_EXISTS: GenericApiErrorConst = GenericApiErrorConst::new(
    "BucketAlreadyExists",
    "The requested bucket name is not available. The bucket namespace is shared by all users of the system. Please select a different name and try again.",
    StatusCode::CONFLICT,
);
const BUCKET_ALREADY_OWNED_BY_YOU: GenericApiErrorConst = GenericApiErrorConst::new(
    "BucketAlreadyOwnedByYou",
    "Your previous request to create the named bucket succeeded and you already own it.",
    StatusCode::CONFLICT,
);
const BUCKET_NOT_EMPTY: GenericApiErrorConst = GenericApiErrorConst::new(
    "BucketNotEmpty",
    "The bucket you tried to delete is not empty",
    StatusCode::CONFLICT,
);
const CONTENT_SHA256_MISMATCH: GenericApiErrorConst = GenericApiErrorConst::new(
    "XAmzContentSHA256Mismatch",
    "The provided 'x-amz-content-sha256' header does not match what was computed.",
    StatusCode::BAD_REQUEST,
);
const ENTITY_TOO_SMALL: GenericApiErrorConst = GenericApiErrorConst::new(
    "EntityTooSmall",
    "Your proposed upload is smaller than the minimum allowed object size.",
    StatusCode::BAD_REQUEST,
);
const ENTITY_TOO_LARGE: GenericApiErrorConst = GenericApiErrorConst::new(
    "EntityTooLarge",
    "Your proposed upload exceeds the maximum allowed object size.",
    StatusCode::BAD_REQUEST,
);
const EXPIRED_PRESIGN_REQUEST: GenericApiErrorConst =
    GenericApiErrorConst::new("AccessDenied", "Request has expired", StatusCode::FORBIDDEN);
const INCOMPLETE_BODY: GenericApiErrorConst = GenericApiErrorConst::new(
    "IncompleteBody",
    "You did not provide the number of bytes specified by the Content-Length HTTP header.",
    StatusCode::BAD_REQUEST,
);
const INTERNAL_ERROR: GenericApiErrorConst = GenericApiErrorConst::new(
    "InternalError",
    "We encountered an internal error, please try again.",
    StatusCode::INTERNAL_SERVER_ERROR,
);
const INVALID_ACCESS_KEY_ID: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidAccessKeyId",
    "The Access Key Id you provided does not exist in our records.",
    StatusCode::FORBIDDEN,
);
const INVALID_BUCKET_NAME: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidBucketName",
    "The specified bucket is not valid.",
    StatusCode::BAD_REQUEST,
);
const INVALID_COPY_DEST: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidRequest",
    "This copy request is illegal because it is trying to copy an object to itself without changing the object's metadata, storage class, website redirect location or encryption attributes.",
    StatusCode::BAD_REQUEST,
);
const INVALID_COPY_SOURCE: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Copy Source must mention the source bucket and key: sourcebucket/sourcekey.",
    StatusCode::BAD_REQUEST,
);
const INVALID_DIGEST: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidDigest",
    "The Content-Md5 you specified is not valid.",
    StatusCode::BAD_REQUEST,
);
const INVALID_MAX_KEYS: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Argument maxKeys must be an integer between 0 and 2147483647",
    StatusCode::BAD_REQUEST,
);
const INVALID_MAX_PARTS: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Argument max-parts must be an integer between 0 and 2147483647",
    StatusCode::BAD_REQUEST,
);
const INVALID_MAX_UPLOADS: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Argument max-uploads must be an integer between 0 and 2147483647",
    StatusCode::BAD_REQUEST,
);
const INVALID_PART: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidPart",
    "One or more of the specified parts could not be found.  The part may not have been uploaded, or the specified entity tag may not match the part's entity tag.",
    StatusCode::BAD_REQUEST,
);
const INVALID_PART_NUMBER_MARKER: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidArgument",
    "Argument partNumberMarker must be an integer.",
    StatusCode::BAD_REQUEST,
);
const INVALID_PART_ORDER: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidPartOrder",
    "The list of parts was not in ascending order. The parts list must be specified in order by part number.",
    StatusCode::BAD_REQUEST,
);
const INVALID_RANGE: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidRange",
    "The requested range is not satisfiable",
    StatusCode::RANGE_NOT_SATISFIABLE,
);
const INVALID_REQUEST: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidRequest",
    "Invalid Request",
    StatusCode::BAD_REQUEST,
);
const KEY_TOO_LONG_ERROR: GenericApiErrorConst = GenericApiErrorConst::new(
    "KeyTooLongError",
    "Your key is too long",
    StatusCode::BAD_REQUEST,
);
const MALFORMED_DATE: GenericApiErrorConst = GenericApiErrorConst::new(
    "MalformedDate",
    "Invalid date format header, expected to be in ISO8601, RFC1123 or RFC1123Z time format.",
    StatusCode::BAD_REQUEST,
);
const MALFORMED_POSTREQUEST: GenericApiErrorConst = GenericApiErrorConst::new(
    "MalformedPOSTRequest",
    "The body of your POST request is not well-formed multipart/form-data.",
    StatusCode::BAD_REQUEST,
);
const MALFORMED_XML: GenericApiErrorConst = GenericApiErrorConst::new(
    "MalformedXML",
    "The XML you provided was not well-formed or did not validate against our published schema.",
    StatusCode::BAD_REQUEST,
);
const METHOD_NOT_ALLOWED: GenericApiErrorConst = GenericApiErrorConst::new(
    "MethodNotAllowed",
    "The specified method is not allowed against this resource.",
    StatusCode::METHOD_NOT_ALLOWED,
);
const MISSING_CONTENT_LENGTH: GenericApiErrorConst = GenericApiErrorConst::new(
    "MissingContentLength",
    "You must provide the Content-Length HTTP header.",
    StatusCode::LENGTH_REQUIRED,
);
const MISSING_CONTENT_MD5: GenericApiErrorConst = GenericApiErrorConst::new(
    "MissingContentMD5",
    "Missing required header for this request: Content-Md5.",
    StatusCode::BAD_REQUEST,
);
const MISSING_DATE_HEADER: GenericApiErrorConst = GenericApiErrorConst::new(
    "AccessDenied",
    "AWS authentication requires a valid Date or x-amz-date header",
    StatusCode::BAD_REQUEST,
);
const MISSING_FIELDS: GenericApiErrorConst = GenericApiErrorConst::new(
    "MissingFields",
    "Missing fields in request.",
    StatusCode::BAD_REQUEST,
);
const NO_SUCH_BUCKET: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchBucket",
    "The specified bucket does not exist",
    StatusCode::NOT_FOUND,
);
const NO_SUCH_BUCKET_POLICY: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchBucketPolicy",
    "The bucket policy does not exist",
    StatusCode::NOT_FOUND,
);
const NO_SUCH_CORS_CONFIGURATION: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchCORSConfiguration",
    "The CORS configuration does not exist",
    StatusCode::NOT_FOUND,
);
const NO_SUCH_KEY: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchKey",
    "The specified key does not exist.",
    StatusCode::NOT_FOUND,
);
const NO_SUCH_LIFECYCLE_CONFIGURATION: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchLifecycleConfiguration",
    "The lifecycle configuration does not exist",
    StatusCode::NOT_FOUND,
);
const NO_SUCH_UPLOAD: GenericApiErrorConst = GenericApiErrorConst::new(
    "NoSuchUpload",
    "The specified multipart upload does not exist. The upload ID may be invalid, or the upload may have been aborted or completed.",
    StatusCode::NOT_FOUND,
);
const NOT_IMPLEMENTED: GenericApiErrorConst = GenericApiErrorConst::new(
    "NotImplemented",
    "A header you provided implies functionality that is not implemented",
    StatusCode::NOT_IMPLEMENTED,
);
const PRECONDITION_FAILED: GenericApiErrorConst = GenericApiErrorConst::new(
    "PreconditionFailed",
    "At least one of the pre-conditions you specified did not hold",
    StatusCode::PRECONDITION_FAILED,
);
const REQUEST_TIME_TOO_SKEWED: GenericApiErrorConst = GenericApiErrorConst::new(
    "RequestTimeTooSkewed",
    "The difference between the request time and the server's time is too large.",
    StatusCode::FORBIDDEN,
);
const SIGNATURE_DOES_NOT_MATCH: GenericApiErrorConst = GenericApiErrorConst::new(
    "SignatureDoesNotMatch",
    "The request signature we calculated does not match the signature you provided. Check your key and signing method.",
    StatusCode::FORBIDDEN,
);
const SIGNATURE_VERSION_NOT_SUPPORTED: GenericApiErrorConst = GenericApiErrorConst::new(
    "InvalidRequest",
    "The authorization mechanism you have provided is not supported. Please use AWS4-HMAC-SHA256.",
    StatusCode::BAD_REQUEST,
);
const SLOW_DOWN: GenericApiErrorConst = GenericApiErrorConst::new(
    "SlowDown",
    "Resource requested is unreadable, please reduce your request rate",
    StatusCode::SERVICE_UNAVAILABLE,
);
const UNSIGNED_HEADERS: GenericApiErrorConst = GenericApiErrorConst::new(
    "AccessDenied",
    "There were headers present in the request which were not signed",
    StatusCode::BAD_REQUEST,
);
