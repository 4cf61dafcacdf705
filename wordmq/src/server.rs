use std::sync::Arc;

use log::{debug, info};
use tokio::net::UdpSocket;
use tokio::signal;

use crate::queue::WordQueue;
use crate::Result;

/// A word datagram is at most this long, longer payloads are truncated on
/// receive. Matches the fixed buffer of the feeder client.
const MAX_WORD_LENGTH: usize = 256;

/// Binds the UDP socket and runs the receive loop until a SIGINT arrives.
pub(crate) async fn start(listen: &str, queue: Arc<WordQueue>) -> Result<()> {
    let socket = UdpSocket::bind(listen).await?;

    info!("Listening for words on {}", socket.local_addr()?);

    receive_loop(socket, queue).await
}

/// Appends one word per received datagram. On shutdown it drains the queue,
/// so every word accepted before the signal is printed before the process
/// exits.
pub(crate) async fn receive_loop(socket: UdpSocket, queue: Arc<WordQueue>) -> Result<()> {
    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut buf = [0u8; MAX_WORD_LENGTH];

    loop {
        tokio::select! {
            received = socket.recv_from(&mut buf) => {
                let (len, peer) = received?;

                debug!("Received {} bytes from {}", len, peer);

                queue.append(decode_word(&buf[..len]));
            }
            _ = &mut shutdown => {
                break;
            }
        }
    }

    info!("Shutting down, draining queued words");

    queue.drain().await;

    Ok(())
}

/// C-style senders include the terminating NUL in the payload, everything
/// from the first NUL on is dropped. Invalid UTF-8 is replaced, not
/// rejected.
fn decode_word(payload: &[u8]) -> String {
    let end = payload.iter().position(|b| *b == 0).unwrap_or(payload.len());

    String::from_utf8_lossy(&payload[..end]).into_owned()
}
