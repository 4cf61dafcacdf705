use std::sync::Arc;

use log::info;
use tokio::task::JoinHandle;

use crate::queue::WordQueue;

/// The action the consumer performs on every word taken from the queue.
pub trait WordSink: Send + 'static {
    fn handle(&mut self, word: &str);
}

/// Sink of the server process, writes every word to standard output.
pub struct StdoutSink;

impl WordSink for StdoutSink {
    fn handle(&mut self, word: &str) {
        println!("{word}");
    }
}

/// Starts the single consumer task: take the oldest word, hand it to the
/// sink, report progress, forever.
///
/// There is no stop signal into the loop. At shutdown the listener drains
/// the queue and the process exits with the consumer still blocked in
/// `take`, which is fine since it holds no other resources.
pub fn start(queue: Arc<WordQueue>, mut sink: impl WordSink) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Print loop starting");

        loop {
            let word = queue.take().await;

            // The sink may block on I/O, it runs with the queue lock
            // released.
            sink.handle(&word);

            queue.note_progress();
        }
    })
}
