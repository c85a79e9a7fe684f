use settings::Settings;

mod api;
mod calculator;
mod core;
mod settings;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings
        .monitoring
        .init()
        .expect("Error initializing monitoring");

    tracing::info!("Starting HTTP server");

    settings
        .http_server
        .run_server(api::configure)
        .await
        .expect("HTTP server execution failed");
}
