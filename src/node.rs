//! Core node types for the per-ankh knowledge base.
//!
//! Every unit of knowledge is a [`KnowledgeNode`]: a short piece of content
//! with provenance (author, validator) and the structure pulled out of the
//! source document (title, concepts, relations). Nodes move through the
//! review lifecycle tracked by [`NodeStatus`].

use serde::{Deserialize, Serialize};

/// Unique identifier for a knowledge node.
///
/// Ids are small positive integers assigned in creation order. The store is
/// the only component that hands out fresh ids; everything else treats them
/// as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a `NodeId` from a raw `u64`.
    pub fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Review state of a node in the validation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Freshly contributed, awaiting review.
    Draft,
    /// Approved by a validator and part of the trusted layer.
    Validated,
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeStatus::Draft => write!(f, "Draft"),
            NodeStatus::Validated => write!(f, "Validated"),
        }
    }
}

/// A directed, labeled reference from a node to some target.
///
/// Targets are free-form strings rather than node ids: a relation may point
/// at a concept or title that has no node of its own yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// What the relation points at (a title, a concept, or a `node-N` key).
    pub target: String,
    /// Label describing the relationship.
    pub relation: String,
}

/// A single unit of knowledge with provenance and extracted structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    /// Unique identifier, assigned by the store at creation.
    pub id: NodeId,
    /// The knowledge itself, as prose.
    pub content: String,
    /// Where the node stands in the review lifecycle.
    pub status: NodeStatus,
    /// Who contributed the node.
    pub author: String,
    /// Who approved it. `None` until the node passes review.
    pub validator: Option<String>,
    /// Short display title, usually the first line of the source document.
    pub title: String,
    /// Key concepts extracted from the source document.
    pub concepts: Vec<String>,
    /// Outgoing links extracted from the source document.
    pub relations: Vec<Relation>,
}

impl KnowledgeNode {
    /// Whether this node has passed review.
    pub fn is_validated(&self) -> bool {
        self.status == NodeStatus::Validated
    }

    /// First `max_chars` characters of the content, for list views.
    pub fn snippet(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: u64, content: &str) -> KnowledgeNode {
        KnowledgeNode {
            id: NodeId::new(id),
            content: content.into(),
            status: NodeStatus::Draft,
            author: "User Master".into(),
            validator: None,
            title: "Test".into(),
            concepts: vec![],
            relations: vec![],
        }
    }

    #[test]
    fn node_id_display_matches_graph_key_format() {
        assert_eq!(NodeId::new(7).to_string(), "node-7");
    }

    #[test]
    fn node_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
    }

    #[test]
    fn status_display() {
        assert_eq!(NodeStatus::Draft.to_string(), "Draft");
        assert_eq!(NodeStatus::Validated.to_string(), "Validated");
    }

    #[test]
    fn snippet_truncates_long_content() {
        let node = draft(1, "abcdefghij");
        assert_eq!(node.snippet(4), "abcd");
        assert_eq!(node.snippet(100), "abcdefghij");
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let node = draft(1, "héllo wörld");
        // Counts characters, not bytes.
        assert_eq!(node.snippet(5), "héllo");
    }

    #[test]
    fn node_serializes_with_plain_field_names() {
        let node = draft(3, "some content");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["status"], "Draft");
        assert!(value["validator"].is_null());
    }

    #[test]
    fn node_round_trips_through_json() {
        let mut node = draft(2, "content");
        node.status = NodeStatus::Validated;
        node.validator = Some("Igor".into());
        node.relations.push(Relation {
            target: "node-1".into(),
            relation: "relates to".into(),
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: KnowledgeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, node.id);
        assert_eq!(back.status, NodeStatus::Validated);
        assert_eq!(back.validator.as_deref(), Some("Igor"));
        assert_eq!(back.relations.len(), 1);
    }
}
