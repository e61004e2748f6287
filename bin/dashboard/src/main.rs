use dashboard::{run, ErasedError};
use smartroom::{Config, Reconciler};

use log::info;
use tokio::io::BufReader;
use tokio::signal::unix::{signal, SignalKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    info!("dashboard version {VERSION}");

    let config = Config::from_env()?;
    let reconciler = Reconciler::new(config.reference()?);
    info!("subscribing to {}", config.node);

    let mut sigterm = signal(SignalKind::terminate())?;
    let shutdown = async move {
        tokio::select! {
            _ = sigterm.recv() => info!("got SIGTERM, exiting..."),
            _ = tokio::signal::ctrl_c() => info!("interrupted, exiting..."),
        }
    };

    run(
        reconciler,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        shutdown,
    )
    .await
}
