use actix_http::body::{AnyBody, BodySize};
use actix_web::body::MessageBody;
use actix_web::http::{header, HeaderName, HeaderValue, StatusCode};
use actix_web::{HttpRequest, HttpResponse, Responder};
use log::trace;
use serde::Serialize;

use super::*;
use crate::errors;

/// The single chokepoint all handlers funnel responses through: common
/// headers, content framing and the status line are set here and nowhere
/// else. Each value belongs to exactly one request/response exchange.
pub struct ApiResponse<B = AnyBody> {
    res: HttpResponse<B>,
}

impl<B: MessageBody> ApiResponse<B> {
    pub fn new(status: StatusCode, body: B, mime: Option<mime::Mime>) -> Self {
        let size = body.size();
        let mut res = HttpResponse::with_body(status, body);
        let headers = res.headers_mut();
        if let Some(mime) = mime {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime.as_ref()).unwrap(),
            );
        }
        match size {
            BodySize::Empty => {
                headers.insert(header::CONTENT_LENGTH, HeaderValue::from(0));
            }
            BodySize::Sized(size) => {
                headers.insert(header::CONTENT_LENGTH, HeaderValue::from(size));
            }
            _ => {}
        }
        let mut res = ApiResponse { res };
        res.set_common_headers();
        res
    }

    pub fn set_common_headers(&mut self) {
        let headers = self.res.headers_mut();
        headers.insert(
            HeaderName::from_static(AMZ_REQUEST_ID),
            HeaderValue::from_str(&gen_request_id()).unwrap(),
        );
        headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    }

    pub fn into_inner(self) -> HttpResponse<B> {
        self.res
    }
}

impl ApiResponse<AnyBody> {
    pub fn ok() -> Self {
        Self::new(StatusCode::OK, AnyBody::None, None)
    }

    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, AnyBody::None, None)
    }

    pub fn error(err: errors::GenericApiError) -> Self {
        Self::new(err.http_status_code, AnyBody::None, None)
    }

    fn with_payload(status: StatusCode, body: String, mime: mime::Mime) -> Self {
        trace!("status {} {}: {}", status.as_u16(), mime, body);
        Self::new(status, AnyBody::from(body), Some(mime))
    }

    pub fn success_xml<T>(status: StatusCode, data: &T) -> Self
    where
        T: ?Sized + Serialize,
    {
        let body = crate::serde::xml::to_string(data).unwrap_or_else(|_| String::new());
        Self::with_payload(status, body, "application/xml".parse().unwrap())
    }

    pub fn success_json<T>(data: &T) -> Self
    where
        T: ?Sized + Serialize,
    {
        let body = serde_json::to_string(data).unwrap_or_else(|_| String::new());
        Self::with_payload(StatusCode::OK, body, mime::APPLICATION_JSON)
    }

    pub fn error_xml(err: errors::GenericApiError, req: &HttpRequest) -> Self {
        let code = err.code;
        let status_code = err.http_status_code;
        let err_res =
            errors::ApiErrorResponse::from(err, req.path().to_owned(), gen_request_id());
        let body = crate::serde::xml::to_string(&err_res).unwrap_or_else(|_| String::new());
        let mut res = Self::with_payload(status_code, body, "application/xml".parse().unwrap());
        if code == "SlowDown" {
            // Indicate user-agents to retry the request after 120 seconds.
            // https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Retry-After
            res.res
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("120"));
        }
        res
    }

    pub fn error_json(err: errors::GenericApiError, req: &HttpRequest) -> Self {
        let status_code = err.http_status_code;
        let err_res =
            errors::ApiErrorResponse::from(err, req.path().to_owned(), gen_request_id());
        let body = serde_json::to_string(&err_res).unwrap_or_else(|_| String::new());
        Self::with_payload(status_code, body, mime::APPLICATION_JSON)
    }
}

impl Responder for ApiResponse {
    #[inline]
    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        self.res
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::errors::ApiError;

    fn body_bytes(res: HttpResponse<AnyBody>) -> bytes::Bytes {
        let res: actix_http::Response<AnyBody> = res.into();
        match res.into_body() {
            AnyBody::Bytes(bytes) => bytes,
            _ => bytes::Bytes::new(),
        }
    }

    #[test]
    fn test_no_content_framing() {
        let res = ApiResponse::no_content().into_inner();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.headers().get(header::CONTENT_TYPE).is_none());
        assert!(res.headers().get(header::CONTENT_LENGTH).is_none());
        assert!(res.headers().get(AMZ_REQUEST_ID).is_some());
        assert_eq!(
            res.headers()
                .get(header::ACCEPT_RANGES)
                .unwrap()
                .to_str()
                .unwrap(),
            "bytes"
        );
    }

    #[test]
    fn test_error_xml_status_and_envelope() {
        let req = TestRequest::with_uri("/my-bucket/my-key").to_http_request();
        let res = ApiResponse::error_xml(ApiError::NoSuchBucket.to(), &req).into_inner();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/xml"
        );
        let length: usize = res
            .headers()
            .get(header::CONTENT_LENGTH)
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();

        let body = body_bytes(res);
        assert_eq!(length, body.len());
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.starts_with(crate::serde::xml::HEADER));
        assert!(body.contains("<Code>NoSuchBucket</Code>"));
        assert!(body.contains("<Message>The specified bucket does not exist</Message>"));
        assert!(body.contains("<Resource>/my-bucket/my-key</Resource>"));
    }

    #[test]
    fn test_error_without_body() {
        let res = ApiResponse::error(ApiError::AccessDenied.to()).into_inner();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(res.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_slow_down_sets_retry_after() {
        let req = TestRequest::with_uri("/busy-bucket").to_http_request();
        let res = ApiResponse::error_xml(ApiError::SlowDown.to(), &req).into_inner();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            res.headers()
                .get(header::RETRY_AFTER)
                .unwrap()
                .to_str()
                .unwrap(),
            "120"
        );
    }

    #[test]
    fn test_success_xml_content_length() {
        #[derive(Serialize)]
        struct LocationConstraint {
            location: &'static str,
        }

        let res = ApiResponse::success_xml(
            StatusCode::OK,
            &LocationConstraint {
                location: "us-east-1",
            },
        )
        .into_inner();
        assert_eq!(res.status(), StatusCode::OK);
        let length: usize = res
            .headers()
            .get(header::CONTENT_LENGTH)
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let body = body_bytes(res);
        assert_eq!(length, body.len());
        assert!(body.starts_with(crate::serde::xml::HEADER.as_bytes()));
    }

    #[test]
    fn test_responses_get_distinct_request_ids() {
        let a = ApiResponse::no_content().into_inner();
        let b = ApiResponse::no_content().into_inner();
        assert_ne!(
            a.headers().get(AMZ_REQUEST_ID).unwrap(),
            b.headers().get(AMZ_REQUEST_ID).unwrap()
        );
    }
}
