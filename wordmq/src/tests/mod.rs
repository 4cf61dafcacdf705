use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::queue::consumer::{self, WordSink};
use crate::queue::WordQueue;
use crate::server;

/// Test sink, forwards every word to an unbounded channel so the test can
/// assert on what the consumer processed.
struct ChannelSink(mpsc::UnboundedSender<String>);

impl WordSink for ChannelSink {
    fn handle(&mut self, word: &str) {
        self.0.send(word.to_string()).unwrap();
    }
}

fn start_consumer(queue: Arc<WordQueue>) -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    consumer::start(queue, ChannelSink(tx));

    rx
}

#[tokio::test]
async fn consumer_handles_words_in_append_order() {
    let queue = Arc::new(WordQueue::new());
    let mut words = start_consumer(queue.clone());

    queue.append("alpha".to_string());
    queue.append("beta".to_string());

    assert_eq!(words.recv().await, Some("alpha".to_string()));
    assert_eq!(words.recv().await, Some("beta".to_string()));
}

#[tokio::test]
async fn drain_returns_after_the_consumer_caught_up() {
    let queue = Arc::new(WordQueue::new());

    for i in 0..10 {
        queue.append(format!("word-{i}"));
    }

    let mut words = start_consumer(queue.clone());

    timeout(Duration::from_secs(1), queue.drain()).await.unwrap();

    let mut seen = vec![];
    while let Ok(word) = words.try_recv() {
        seen.push(word);
    }

    let expected = (0..10).map(|i| format!("word-{i}")).collect::<Vec<_>>();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn listener_feeds_received_datagrams_to_the_consumer() {
    let queue = Arc::new(WordQueue::new());
    let mut words = start_consumer(queue.clone());

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let server_addr = socket.local_addr().unwrap();

    tokio::spawn({
        let queue = queue.clone();

        async move {
            let _ = server::receive_loop(socket, queue).await;
        }
    });

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.connect(server_addr).await.unwrap();

    // The NUL terminator mimics the C feeder, it must not end up in the
    // printed word.
    client.send(b"hello\0").await.unwrap();
    client.send(b"world\0").await.unwrap();

    let first = timeout(Duration::from_secs(1), words.recv()).await.unwrap();
    let second = timeout(Duration::from_secs(1), words.recv()).await.unwrap();

    assert_eq!(first, Some("hello".to_string()));
    assert_eq!(second, Some("world".to_string()));
}
