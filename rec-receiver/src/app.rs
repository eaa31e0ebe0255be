use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::{future, io};

use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use log::{debug, error, info};
use tokio::net::TcpListener;
use tokio::{fs, signal, task};

use crate::configuration::Configuration;
use crate::responses::{ResponseBody, ResponseBuilder};
use crate::routes::abc::Service;
use crate::routes::health_check::HealthCheckService;
use crate::routes::upload_wav::UploadWavService;

pub struct App {
    _config: Arc<Configuration>,
    _services: HashMap<String, Arc<dyn Service>>,
}

impl App {
    pub fn new(config: Arc<Configuration>) -> Arc<Self> {
        let mut services = HashMap::new();

        for service in [
            Arc::new(HealthCheckService {}) as Arc<dyn Service>,
            Arc::new(UploadWavService {}) as Arc<dyn Service>,
        ] {
            services.insert(service.route().to_string(), service);
        }

        Arc::new(Self {
            _config: config,
            _services: services,
        })
    }

    pub fn upload_directory(&self) -> &Path {
        &self._config.upload_directory
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn prepare(&self) -> io::Result<()> {
        fs::create_dir_all(self.upload_directory()).await?;
        debug!("Upload directory: {}", self.upload_directory().display());
        Ok(())
    }

    /// Route a request to its registered service.
    pub async fn handle(self: &Arc<Self>, request: Request<Incoming>) -> Response<ResponseBody> {
        let path = request.uri().path().to_string();
        let method = request.method().clone();

        let response = match self._services.get(&path) {
            Some(service) => service.serve(self.clone(), request).await,
            None => ResponseBuilder::default(StatusCode::NOT_FOUND),
        };

        debug!("[{} {}] {}", method, path, response.status());
        response
    }

    /// Accept connections on `listener` until `shutdown` completes.
    pub async fn serve<F>(
        self: &Arc<Self>,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn Error + Send + Sync>>
    where
        F: Future,
    {
        info!("Listening on {}", listener.local_addr()?);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down");
                    break;
                }
                accepted = listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(pair) => pair,
                        Err(e) => {
                            error!("Failed to accept connection: {e}");
                            continue;
                        }
                    };
                    debug!("New connection {peer}");

                    let ptr = self.clone();
                    let service = service_fn(move |request: Request<Incoming>| {
                        let ptr = ptr.clone();
                        async move { Ok::<Response<ResponseBody>, hyper::Error>(ptr.handle(request).await) }
                    });

                    // Spawn a tokio task to serve multiple connections concurrently
                    task::spawn(async move {
                        if let Err(err) = Builder::new(TokioExecutor::new())
                            .serve_connection(TokioIo::new(stream), service)
                            .await
                        {
                            error!("Error serving connection from {peer}: {err}");
                        }
                    });
                }
            }
        }

        Ok(())
    }

    pub async fn run(self: &Arc<Self>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.prepare().await?;

        let listener = TcpListener::bind(self._config.socket_addr()).await?;
        self.serve(listener, async {
            match signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal"),
                Err(e) => {
                    error!("Unable to listen for Ctrl+C: {e}");
                    future::pending::<()>().await;
                }
            }
        })
        .await
    }
}
