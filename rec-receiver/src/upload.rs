use std::collections::HashMap;
use std::error::Error;
use std::io;
use std::path::Path;

use futures_util::stream::Stream;
use hyper::body::Bytes;
use log::debug;
use tokio::fs;

/// A file submitted through a `multipart/form-data` part carrying a `filename`.
#[derive(Debug)]
pub struct FilePart {
    _filename: String,
    _content_type: Option<String>,
    _data: Bytes,
}

impl FilePart {
    /// The client-supplied filename. May be empty when a form was submitted
    /// without selecting a file.
    pub fn filename(&self) -> &str {
        &self._filename
    }

    pub fn content_type(&self) -> Option<&str> {
        self._content_type.as_deref()
    }

    pub fn data(&self) -> &[u8] {
        &self._data
    }

    /// Write the raw bytes to `path`, replacing any existing file.
    pub async fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, &self._data).await
    }
}

/// File parts of a request body, keyed by field name. Only the first file of
/// each field is kept. Plain (non-file) form fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    _files: HashMap<String, FilePart>,
}

impl UploadForm {
    /// Parse a request body. Bodies that are not `multipart/form-data` produce an
    /// empty form; a malformed multipart body is an error.
    pub async fn parse<S, O, E>(content_type: Option<&str>, body: S) -> Result<Self, multer::Error>
    where
        S: Stream<Item = Result<O, E>> + Send + 'static,
        O: Into<Bytes> + 'static,
        E: Into<Box<dyn Error + Send + Sync>> + 'static,
    {
        let mut form = Self::default();

        let boundary = match content_type.map(multer::parse_boundary) {
            Some(Ok(boundary)) => boundary,
            _ => {
                debug!("Not a multipart body (Content-Type: {content_type:?})");
                return Ok(form);
            }
        };

        let mut multipart = multer::Multipart::new(body, boundary);
        while let Some(field) = multipart.next_field().await? {
            let (Some(name), Some(filename)) = (field.name(), field.file_name()) else {
                continue;
            };

            if form._files.contains_key(name) {
                continue;
            }

            let name = name.to_string();
            let filename = filename.to_string();
            let content_type = field.content_type().map(ToString::to_string);
            let data = field.bytes().await?;
            debug!("Received file part {name:?} ({filename:?}, {} bytes)", data.len());

            form._files.insert(
                name,
                FilePart {
                    _filename: filename,
                    _content_type: content_type,
                    _data: data,
                },
            );
        }

        Ok(form)
    }

    pub fn file(&self, field: &str) -> Option<&FilePart> {
        self._files.get(field)
    }
}
