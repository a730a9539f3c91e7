use lambda_runtime::{service_fn, Error};
use nhl_team_schedule::handler::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    lambda_runtime::run(service_fn(handler)).await
}
