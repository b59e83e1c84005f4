use actix_http::body::Body;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpRequest};
use log::info;

use crate::errors::ApiError;
use crate::http::ApiResponse;

// If none of the http routes match respond with MethodNotAllowed.
pub async fn not_found_handler(req: HttpRequest) -> ApiResponse {
    info!("unsupported {} {}", req.method(), req.uri());
    ApiResponse::error_xml(ApiError::MethodNotAllowed.to(), &req)
}

// Configure server http handler.
pub fn configure_server_handler() -> App<
    impl actix_service::ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<Body>,
        Error = Error,
        InitError = (),
    >,
    Body,
> {
    App::new().default_service(web::route().to(not_found_handler))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use actix_web::test::TestRequest;

    use super::*;

    #[actix_rt::test]
    async fn test_not_found_handler() {
        let req = TestRequest::with_uri("/unknown")
            .method(Method::PATCH)
            .to_http_request();
        let res = not_found_handler(req).await.into_inner();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

        let res: actix_http::Response<actix_http::body::AnyBody> = res.into();
        let body = match res.into_body() {
            actix_http::body::AnyBody::Bytes(bytes) => bytes,
            _ => panic!("expected a sized body"),
        };
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("<Code>MethodNotAllowed</Code>"));
        assert!(body.contains("<Resource>/unknown</Resource>"));
    }

    #[actix_rt::test]
    async fn test_unmatched_route_falls_back() {
        let app = actix_web::test::init_service(configure_server_handler()).await;
        let req = TestRequest::with_uri("/unknown")
            .method(Method::PATCH)
            .to_request();
        let res = actix_web::test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = actix_web::test::read_body(res).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("<Code>MethodNotAllowed</Code>"));
    }
}
