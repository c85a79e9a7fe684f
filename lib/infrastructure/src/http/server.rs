use actix_cors::Cors;
use actix_web::*;
use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct HttpServerConfig {
    pub port: u16,
}

impl HttpServerConfig {
    //CORS is wide open: the API is consumed from arbitrary browser origins
    //and carries no credentials
    pub async fn run_server<F>(&self, configure: F) -> anyhow::Result<()>
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let http_server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(tracing_actix_web::TracingLogger::default())
                .configure(configure.clone())
        })
        .bind(("0.0.0.0", self.port))?;

        tracing::info!("HTTP server listening on port {}", self.port);

        http_server
            .run()
            .await
            .with_context(|| format!("Error starting HTTP server on port {}", self.port))
    }
}
