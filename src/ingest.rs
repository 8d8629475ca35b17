//! Upload submission pipeline.
//!
//! Orchestrates: staged upload → structure extraction → draft node → store.
//! Ids are assigned up front from the store's allocator, and every submitted
//! node starts life as an unreviewed draft.

use crate::error::StoreError;
use crate::extract::{self, Extraction};
use crate::node::{KnowledgeNode, NodeId, NodeStatus};
use crate::store::NodeStore;
use crate::upload::{PendingUpload, UploadQueue};

/// Configuration for draft node creation.
pub struct IngestConfig {
    /// Author attributed to every submitted draft.
    pub author: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            author: "User Master".into(),
        }
    }
}

/// Build the draft node for a staged upload, without storing it.
///
/// The content is a fixed review banner naming the file and either its
/// extracted concepts or, when none were found, the filename stem.
pub fn draft_node(id: NodeId, upload: &PendingUpload, author: &str) -> KnowledgeNode {
    let Extraction {
        title,
        concepts,
        relations,
    } = extract::extract(&upload.filename, &upload.data);

    let summary = if concepts.is_empty() {
        extract::file_stem(&upload.filename).to_string()
    } else {
        concepts.join(", ")
    };

    KnowledgeNode {
        id,
        content: format!(
            "New Draft: {} uploaded for review. Key concepts extracted: {summary}.",
            upload.filename
        ),
        status: NodeStatus::Draft,
        author: author.to_string(),
        validator: None,
        title,
        concepts,
        relations,
    }
}

/// Submit a single upload as a draft node.
pub fn submit_upload(
    store: &mut NodeStore,
    upload: &PendingUpload,
    config: &IngestConfig,
) -> Result<NodeId, StoreError> {
    let node = draft_node(store.next_id(), upload, &config.author);
    let id = node.id;
    store.create(node)?;
    tracing::info!(
        filename = %upload.filename,
        id = id.get(),
        "Submitted upload as draft node"
    );
    Ok(id)
}

/// Submit every staged upload, front to back.
///
/// Stops at the first store failure: the failed upload and everything
/// staged behind it stay in the queue for a later attempt. Returns the ids
/// of the nodes created.
pub fn submit_all(
    store: &mut NodeStore,
    queue: &mut UploadQueue,
    config: &IngestConfig,
) -> Result<Vec<NodeId>, StoreError> {
    let mut created = Vec::new();
    while let Some(upload) = queue.peek() {
        let id = submit_upload(store, upload, config)?;
        queue.pop_front();
        created.push(id);
    }
    Ok(created)
}
