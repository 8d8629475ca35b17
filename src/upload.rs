//! Session-scoped staging area for uploaded documents.
//!
//! Uploads sit in the queue until they are submitted as draft nodes or
//! discarded. Nothing here touches disk: an upload that is never submitted
//! disappears with the session.

use crate::error::UploadError;

/// A file staged by a user, identified by filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// Filename as given by the uploader. Unique within the queue.
    pub filename: String,
    /// Raw bytes of the document.
    pub data: Vec<u8>,
}

impl PendingUpload {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// Staged uploads awaiting submission, in staging order.
#[derive(Debug, Default)]
pub struct UploadQueue {
    pending: Vec<PendingUpload>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an upload. Returns `false` (and drops the upload) when the
    /// filename is already staged.
    pub fn stage(&mut self, upload: PendingUpload) -> bool {
        if self.pending.iter().any(|p| p.filename == upload.filename) {
            return false;
        }
        self.pending.push(upload);
        true
    }

    /// Remove a staged upload by filename.
    pub fn discard(&mut self, filename: &str) -> Result<PendingUpload, UploadError> {
        let pos = self
            .pending
            .iter()
            .position(|p| p.filename == filename)
            .ok_or_else(|| UploadError::NotFound {
                filename: filename.to_string(),
            })?;
        Ok(self.pending.remove(pos))
    }

    /// The oldest staged upload, if any.
    pub fn peek(&self) -> Option<&PendingUpload> {
        self.pending.first()
    }

    /// Take the oldest staged upload out of the queue.
    pub fn pop_front(&mut self) -> Option<PendingUpload> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// All staged uploads in staging order.
    pub fn list(&self) -> &[PendingUpload] {
        &self.pending
    }

    /// Number of staged uploads.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
