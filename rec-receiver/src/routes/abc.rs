use std::sync::Arc;

use async_trait::async_trait;
use hyper::body::Incoming;
use hyper::{Request, Response};

use crate::app::App;
use crate::responses::ResponseBody;

#[async_trait]
pub trait Service: Send + Sync {
    fn route(&self) -> &'static str;
    async fn serve(&self, app: Arc<App>, request: Request<Incoming>) -> Response<ResponseBody>;
}
