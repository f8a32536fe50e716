use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

use super::session::{SelectedPhoto, UploadFuture, UploadReceipt, UploadSink};

/// In-memory upload sink. Thrown photos are only remembered, never stored.
#[derive(Debug, Clone, Default)]
pub struct UploadBin {
    thrown: Arc<Mutex<Vec<SelectedPhoto>>>,
    delay: Duration,
}

impl UploadBin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            thrown: Arc::default(),
            delay,
        }
    }

    pub fn len(&self) -> usize {
        self.thrown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UploadSink for UploadBin {
    fn upload(&self, photo: SelectedPhoto) -> UploadFuture {
        let thrown = Arc::clone(&self.thrown);
        let delay = self.delay;

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let receipt = UploadReceipt::new();
            info!(
                event = "core.throw.photo_received",
                upload_id = %receipt.upload_id,
                size_bytes = photo.size_bytes
            );
            thrown
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(photo);
            Ok(receipt)
        })
    }
}
