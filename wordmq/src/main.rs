mod config;
mod queue;
mod server;
#[cfg(test)]
mod tests;

use std::io::Write;
use std::sync::Arc;

use env_logger::Builder;

use crate::queue::consumer::{self, StdoutSink};
use crate::queue::WordQueue;

/// The own result type where the error part is an async friendly error.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand of a boxed Send, Sync error.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

fn setup_logger() {
    let mut builder = Builder::from_default_env();

    builder
        .format_timestamp_millis()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - [{:5}] {}:{} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or_default(),
                record.line().unwrap_or_default(),
                record.args()
            )
        })
        .init();
}

#[tokio::main]
pub async fn main() -> Result<()> {
    setup_logger();

    let cli_config = config::cli();

    let config = config::parse_config(&cli_config.config_file_path)?;

    let queue = Arc::new(WordQueue::new());

    consumer::start(queue.clone(), StdoutSink);

    server::start(&config.network.listen, queue).await?;

    Ok(())
}
