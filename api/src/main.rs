use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    let args = Args::parse();

    init_logging(&args);

    let state = state(Arc::new(args)).await?;
    let addr = format!("0.0.0.0:{}", state.args.server.port);
    let router = router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("BiteBot API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_logging(args: &Args) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if args.server.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
