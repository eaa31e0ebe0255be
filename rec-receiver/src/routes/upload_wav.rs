use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, Response, StatusCode};
use log::{debug, error, info, warn};

use crate::app::App;
use crate::responses::{ResponseBody, ResponseBuilder};
use crate::routes::abc::Service;
use crate::upload::UploadForm;

pub const FILE_FIELD: &str = "file";

/// `recording_<YYYYMMDD_HHMMSS>.wav`. Uploads received within the same second
/// map to the same name; the later one overwrites the earlier.
pub fn recording_filename<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("recording_%Y%m%d_%H%M%S.wav").to_string()
}

pub struct UploadWavService;

#[async_trait]
impl Service for UploadWavService {
    fn route(&self) -> &'static str {
        "/upload_wav"
    }

    async fn serve(&self, app: Arc<App>, request: Request<Incoming>) -> Response<ResponseBody> {
        if request.method() != Method::POST {
            return ResponseBuilder::default(StatusCode::METHOD_NOT_ALLOWED);
        }

        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = request.into_body().into_data_stream();

        let form = match UploadForm::parse(content_type.as_deref(), body).await {
            Ok(form) => form,
            Err(e) => {
                warn!("Malformed multipart body: {e}");
                UploadForm::default()
            }
        };

        let Some(file) = form.file(FILE_FIELD) else {
            return ResponseBuilder::text(StatusCode::BAD_REQUEST, "No file part");
        };

        if file.filename().is_empty() {
            return ResponseBuilder::text(StatusCode::BAD_REQUEST, "No selected file");
        }

        debug!(
            "Upload {:?} ({}, {} bytes)",
            file.filename(),
            file.content_type().unwrap_or("no content type"),
            file.data().len()
        );

        let path = app
            .upload_directory()
            .join(recording_filename(&Local::now()));
        if let Err(e) = file.save(&path).await {
            error!("Unable to save {}: {e}", path.display());
            return ResponseBuilder::default(StatusCode::INTERNAL_SERVER_ERROR);
        }

        info!("Saved file: {}", path.display());
        ResponseBuilder::text(StatusCode::OK, "File uploaded successfully")
    }
}
