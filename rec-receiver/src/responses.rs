use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct _DefaultResponse {
    pub error: bool,
    pub message: String,
}

pub type ResponseBody = BoxBody<Bytes, hyper::Error>;

pub struct ResponseBuilder;

impl ResponseBuilder {
    fn _full(
        status: StatusCode,
        content_type: &'static str,
        body: impl Into<Bytes>,
    ) -> Response<ResponseBody> {
        let mut response = Response::new(BoxBody::new(
            Full::new(body.into()).map_err(|_| unreachable!()),
        ));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        response
    }

    pub fn json<T>(status: StatusCode, body: T) -> Response<ResponseBody>
    where
        T: Serialize,
    {
        Self::_full(
            status,
            "application/json",
            serde_json::to_string(&body).expect("JSON serialization should never fail"),
        )
    }

    /// A bare text body, as expected by the recorder firmware.
    pub fn text<S>(status: StatusCode, text: S) -> Response<ResponseBody>
    where
        S: Into<String>,
    {
        Self::_full(status, "text/html; charset=utf-8", text.into())
    }

    pub fn empty(status: StatusCode) -> Response<ResponseBody> {
        let mut response = Response::new(BoxBody::new(Empty::new().map_err(|_| unreachable!())));
        *response.status_mut() = status;
        response
    }

    pub fn message<S>(status: StatusCode, message: S) -> Response<ResponseBody>
    where
        S: Into<String>,
    {
        Self::json(
            status,
            _DefaultResponse {
                error: status.is_client_error() || status.is_server_error(),
                message: message.into(),
            },
        )
    }

    pub fn default(status: StatusCode) -> Response<ResponseBody> {
        Self::message(
            status,
            status.canonical_reason().unwrap_or("Unknown status"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_body() {
        let response = ResponseBuilder::text(StatusCode::BAD_REQUEST, "No file part");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "No file part");
    }

    #[tokio::test]
    async fn test_default_message() {
        let response = ResponseBuilder::default(StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice::<serde_json::Value>(&body).unwrap();
        assert_eq!(value["error"], true);
        assert_eq!(value["message"], "Not Found");
    }

    #[tokio::test]
    async fn test_empty_body() {
        let response = ResponseBuilder::empty(StatusCode::NO_CONTENT);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
