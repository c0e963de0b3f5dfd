use std::process::ExitCode;

use env_logger::Env;
use medi_diabetes_server::{load_model, router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::default();
    // no model, no form
    let model = match load_model(&config) {
        Ok(model) => model,
        Err(e) => {
            log::error!("cannot start without a working model: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = router(AppState { model });
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("cannot bind {}: {e}", config.addr);
            return ExitCode::FAILURE;
        }
    };
    log::info!("medi_diabetes_server listening on http://{}", config.addr);
    if let Err(e) = axum::serve(listener, app).await {
        log::error!("server stopped: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
