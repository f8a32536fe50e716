use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use super::ports::{PostFuture, PostSink};
use super::types::{CollagePost, PostAck};

/// A post accepted by the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub ack: PostAck,
    pub post: CollagePost,
}

/// In-memory post sink.
///
/// Keeps every post for the lifetime of the process; nothing is persisted.
/// An optional delay stands in for network latency.
#[derive(Debug, Clone, Default)]
pub struct PostJournal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
    delay: Duration,
}

impl PostJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            entries: Arc::default(),
            delay,
        }
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        lock_entries(&self.entries).clone()
    }

    pub fn len(&self) -> usize {
        lock_entries(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_entries(&self.entries).is_empty()
    }
}

fn lock_entries(entries: &Mutex<Vec<JournalEntry>>) -> MutexGuard<'_, Vec<JournalEntry>> {
    entries
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl PostSink for PostJournal {
    fn post(&self, post: CollagePost) -> PostFuture {
        let entries = Arc::clone(&self.entries);
        let delay = self.delay;

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let ack = PostAck::new();
            info!(
                event = "core.journal.post_recorded",
                post_id = %ack.post_id,
                images = post.collage_image.images().count(),
                story_len = post.story.len()
            );
            lock_entries(&entries).push(JournalEntry {
                ack: ack.clone(),
                post,
            });
            Ok(ack)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::CollageDraft;
    use crate::collage::types::ImageRef;

    #[tokio::test]
    async fn test_journal_records_posts() {
        let journal = PostJournal::new();
        let mut draft = CollageDraft::new();
        draft.select_image(1, ImageRef::new("b").unwrap()).unwrap();
        draft.set_note("rainy week");

        let ack = journal.post(draft.to_post()).await.unwrap();

        let entries = journal.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ack, ack);
        assert_eq!(entries[0].post.story, "rainy week");
    }

    #[tokio::test]
    async fn test_journal_delay_is_applied() {
        let journal = PostJournal::with_delay(Duration::from_millis(20));
        let started = std::time::Instant::now();

        journal.post(CollageDraft::new().to_post()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(journal.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let journal = PostJournal::new();
        let handle = journal.clone();

        handle.post(CollageDraft::new().to_post()).await.unwrap();

        assert!(!journal.is_empty());
    }
}
