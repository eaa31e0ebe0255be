use std::sync::Arc;

use async_trait::async_trait;
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};

use crate::app::App;
use crate::responses::{ResponseBody, ResponseBuilder};
use crate::routes::abc::Service;

pub struct HealthCheckService;

#[async_trait]
impl Service for HealthCheckService {
    fn route(&self) -> &'static str {
        "/health-check"
    }

    async fn serve(&self, _: Arc<App>, request: Request<Incoming>) -> Response<ResponseBody> {
        if request.method() == Method::GET || request.method() == Method::HEAD {
            ResponseBuilder::empty(StatusCode::NO_CONTENT)
        } else {
            ResponseBuilder::default(StatusCode::METHOD_NOT_ALLOWED)
        }
    }
}
