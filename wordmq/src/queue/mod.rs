pub mod consumer;

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::Notify;

/// Unbounded FIFO of words shared between the datagram listener and the
/// single print consumer.
///
/// Two separate notifications are kept on purpose: `data_ready` wakes the
/// consumer waiting on an empty queue, `progress` wakes a [`drain`] caller
/// every time the consumer finished with one word. Folding them into one
/// would allow a wakeup to get lost while the queue goes
/// empty → non-empty → empty under a draining caller.
///
/// [`drain`]: WordQueue::drain
pub struct WordQueue {
    words: Mutex<VecDeque<String>>,
    data_ready: Notify,
    progress: Notify,
}

impl WordQueue {
    pub fn new() -> Self {
        WordQueue {
            words: Mutex::new(VecDeque::new()),
            data_ready: Notify::new(),
            progress: Notify::new(),
        }
    }

    /// Appends a word to the tail of the queue and wakes the consumer if it
    /// waits for data.
    ///
    /// Never suspends on queue state and cannot fail. The caller hands over
    /// an owned string, so all allocation happened before the lock is
    /// touched.
    pub fn append(&self, word: String) {
        self.words.lock().unwrap().push_back(word);

        self.data_ready.notify_one();
    }

    /// Removes and returns the oldest word. If the queue is empty, the
    /// caller is suspended until an `append` happens.
    ///
    /// Single consumer contract: concurrent `take` calls would race for the
    /// same `data_ready` notification.
    pub async fn take(&self) -> String {
        loop {
            // Register for the wakeup before checking emptiness, an append
            // landing in between would be lost otherwise.
            let data_ready = self.data_ready.notified();

            if let Some(word) = self.words.lock().unwrap().pop_front() {
                return word;
            }

            data_ready.await;
        }
    }

    /// Suspends the caller until the queue is observed empty. Used by the
    /// listener at shutdown to let the consumer catch up before the process
    /// exits.
    ///
    /// Progress is rechecked every time the consumer reports a consumed
    /// word via [`note_progress`](WordQueue::note_progress).
    pub async fn drain(&self) {
        loop {
            let progress = self.progress.notified();

            if self.words.lock().unwrap().is_empty() {
                return;
            }

            // Nudge the consumer in case it still waits while words are
            // queued; its take loop rechecks emptiness anyway.
            self.data_ready.notify_one();

            progress.await;
        }
    }

    /// Called by the consumer after it finished processing one word, so a
    /// pending `drain` can recheck emptiness.
    pub fn note_progress(&self) {
        self.progress.notify_one();
    }
}

impl Default for WordQueue {
    fn default() -> Self {
        WordQueue::new()
    }
}
