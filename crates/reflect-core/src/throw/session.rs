use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::collage::NavigationSink;
use crate::screens::Screen;

use super::errors::ThrowError;

const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "ico", "svg",
];

/// A local image chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedPhoto {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl SelectedPhoto {
    /// Accept `path` if it is an existing file with an image extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThrowError> {
        let path = path.as_ref();

        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if !is_image {
            return Err(ThrowError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }

        let metadata = std::fs::metadata(path).map_err(|_| ThrowError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        if !metadata.is_file() {
            return Err(ThrowError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }
}

/// Receipt returned by an upload sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub upload_id: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadReceipt {
    pub fn new() -> Self {
        Self {
            upload_id: Uuid::new_v4(),
            uploaded_at: Utc::now(),
        }
    }
}

impl Default for UploadReceipt {
    fn default() -> Self {
        Self::new()
    }
}

pub type UploadFuture = BoxFuture<'static, Result<UploadReceipt, ThrowError>>;

/// External operation that takes a thrown photo.
pub trait UploadSink: Send + Sync {
    fn upload(&self, photo: SelectedPhoto) -> UploadFuture;
}

/// Read-only snapshot of the throw screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrowView {
    pub title: &'static str,
    pub prompt: &'static str,
    pub selection: Option<SelectedPhoto>,
    pub uploading: bool,
    pub action_label: &'static str,
}

/// One throw screen: at most one selected photo and at most one upload.
pub struct ThrowSession {
    selected: Option<SelectedPhoto>,
    pending: Option<JoinHandle<Result<UploadReceipt, ThrowError>>>,
    sink: Arc<dyn UploadSink>,
    navigation: Arc<dyn NavigationSink>,
}

impl ThrowSession {
    pub fn new(sink: Arc<dyn UploadSink>, navigation: Arc<dyn NavigationSink>) -> Self {
        Self {
            selected: None,
            pending: None,
            sink,
            navigation,
        }
    }

    pub fn selected(&self) -> Option<&SelectedPhoto> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.pending.is_some()
    }

    /// Select the photo to throw, replacing any earlier selection.
    ///
    /// Ignored while an upload is running so the running upload and the
    /// selection never disagree.
    pub fn select_file(&mut self, path: impl AsRef<Path>) -> Result<&SelectedPhoto, ThrowError> {
        let photo = SelectedPhoto::from_path(path)?;
        if self.is_uploading() {
            warn!(
                event = "core.throw.select_ignored",
                path = %photo.path.display()
            );
        } else {
            info!(
                event = "core.throw.file_selected",
                path = %photo.path.display(),
                size_bytes = photo.size_bytes
            );
            self.selected = Some(photo);
        }
        self.selected.as_ref().ok_or(ThrowError::NoFileSelected)
    }

    /// Start uploading the selected photo.
    ///
    /// Returns `Ok(false)` when an upload is already running; nothing new is
    /// started. Must run inside a Tokio runtime.
    pub fn start_upload(&mut self) -> Result<bool, ThrowError> {
        if self.is_uploading() {
            return Ok(false);
        }
        let photo = self.selected.clone().ok_or(ThrowError::NoFileSelected)?;

        let runtime =
            tokio::runtime::Handle::try_current().map_err(|e| ThrowError::UploadFailed {
                message: e.to_string(),
            })?;

        info!(
            event = "core.throw.upload_started",
            path = %photo.path.display()
        );
        self.pending = Some(runtime.spawn(self.sink.upload(photo)));
        Ok(true)
    }

    /// Wait for the running upload.
    ///
    /// On success the selection is cleared and the user is sent to the
    /// landing screen. On failure the selection is kept for another try.
    pub async fn finish_upload(&mut self) -> Result<UploadReceipt, ThrowError> {
        let handle = self.pending.take().ok_or(ThrowError::NoUploadPending)?;

        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(ThrowError::UploadFailed {
                message: e.to_string(),
            }),
        };

        match result {
            Ok(receipt) => {
                info!(
                    event = "core.throw.upload_completed",
                    upload_id = %receipt.upload_id
                );
                self.selected = None;
                self.navigation.navigate(Screen::Landing);
                Ok(receipt)
            }
            Err(e) => {
                error!(event = "core.throw.upload_failed", error = %e);
                Err(match e {
                    ThrowError::UploadFailed { .. } => e,
                    other => ThrowError::UploadFailed {
                        message: other.to_string(),
                    },
                })
            }
        }
    }

    /// Start the upload and wait for it.
    pub async fn upload(&mut self) -> Result<UploadReceipt, ThrowError> {
        self.start_upload()?;
        self.finish_upload().await
    }

    /// Leave the throw screen without uploading.
    pub fn back(&self) {
        self.navigation.navigate(Screen::Landing);
    }

    pub fn view(&self) -> ThrowView {
        ThrowView {
            title: "Throw",
            prompt: "Throw away an unwanted image, and let others embrace it.",
            selection: self.selected.clone(),
            uploading: self.is_uploading(),
            action_label: if self.is_uploading() {
                "Uploading..."
            } else if self.selected.is_some() {
                "Upload Photo"
            } else {
                "Click or drag an image here to upload"
            },
        }
    }
}
