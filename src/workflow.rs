//! Validation workflow: the review queue and the draft → validated step.
//!
//! Approval is the only legal status transition. It records who validated
//! the node and persists through the store before reporting success.

use crate::error::WorkflowError;
use crate::node::{KnowledgeNode, NodeId, NodeStatus};
use crate::store::NodeStore;

/// All draft nodes awaiting review, in store order.
pub fn pending_review(store: &NodeStore) -> Vec<&KnowledgeNode> {
    store
        .list()
        .iter()
        .filter(|n| n.status == NodeStatus::Draft)
        .collect()
}

/// Promote a draft node to validated, attributing the given validator.
///
/// Fails when the id is unknown or the node already passed review; the
/// store is left untouched in both cases. Returns the updated node.
pub fn approve(
    store: &mut NodeStore,
    id: NodeId,
    validator: &str,
) -> Result<KnowledgeNode, WorkflowError> {
    let node = store
        .get(id)
        .ok_or(WorkflowError::NotFound { id: id.get() })?;
    if node.is_validated() {
        return Err(WorkflowError::AlreadyValidated { id: id.get() });
    }

    let mut updated = node.clone();
    updated.status = NodeStatus::Validated;
    updated.validator = Some(validator.to_string());
    store.update(updated.clone())?;

    tracing::info!(id = id.get(), validator, "Node validated");
    Ok(updated)
}
