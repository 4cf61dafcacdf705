use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UdpSocket;

pub type Result<T> = std::result::Result<T, Error>;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// WordMQ feeder client.
///
/// Reads whitespace separated words from standard input and sends each one
/// as a UDP datagram to a WordMQ server.
#[derive(Parser)]
#[command(name = "wordmq-client", version, about = "Sends words from stdin to a WordMQ server")]
struct Cli {
    /// Number of words to send before exiting; reads until EOF if absent
    #[arg(short, long, value_name = "N")]
    count: Option<u64>,

    /// Address of the WordMQ server
    #[arg(short, long, value_name = "ADDR", default_value = "127.0.0.1:10000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(&cli.server).await?;

    match cli.count {
        Some(count) => info!("Accepting {} input words", count),
        None => info!("Accepting input words until EOF"),
    }

    let mut remaining = cli.count;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    'input: while let Some(line) = lines.next_line().await? {
        for word in line.split_whitespace() {
            if remaining == Some(0) {
                break 'input;
            }

            socket.send(word.as_bytes()).await?;

            if let Some(count) = remaining.as_mut() {
                *count -= 1;

                if *count == 0 {
                    break 'input;
                }
            }
        }
    }

    Ok(())
}
