//! Canned query answering over the node set.
//!
//! This is a stand-in, not a retrieval system: one substring rule maps to
//! one known node, and everything else gets a fixed placeholder. There is
//! no embedding, indexing, or ranking here and none is implied. The
//! [`QueryResponder`] trait is the seam where a real retriever would plug
//! in without touching callers.

use crate::node::{NodeId, NodeStatus};
use crate::store::NodeStore;

/// Literal substrings routed to the grounded answer. Case-sensitive.
const KNOWN_PATTERNS: [&str; 2] = ["LNN", "Liquid Neural Network"];

/// Placeholder returned for every query outside the known patterns.
pub const UNVALIDATED_PLACEHOLDER: &str = "I found this unvalidated content that might be \
     relevant: 'The best deployment environment is Replit for low-cost PoC hosting.'";

/// Trust trail attached to a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub node_id: NodeId,
    pub status: NodeStatus,
    pub author: String,
    pub validator: Option<String>,
}

/// Outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Content backed by a stored node, with its trust trail.
    Grounded {
        content: String,
        provenance: Provenance,
    },
    /// The fixed unvalidated-draft placeholder.
    Placeholder,
}

impl Answer {
    /// The response text, whichever arm it came from.
    pub fn content(&self) -> &str {
        match self {
            Answer::Grounded { content, .. } => content,
            Answer::Placeholder => UNVALIDATED_PLACEHOLDER,
        }
    }
}

/// Maps free-text queries to answers against the current store.
pub trait QueryResponder {
    fn answer(&self, store: &NodeStore, query: &str) -> Answer;
}

/// The canned responder: substring match against a fixed pattern list,
/// answering from the first stored node.
#[derive(Debug, Default)]
pub struct KeywordResponder;

impl QueryResponder for KeywordResponder {
    fn answer(&self, store: &NodeStore, query: &str) -> Answer {
        if KNOWN_PATTERNS.iter().any(|p| query.contains(p)) {
            // Store order puts the matching seed node first. An empty
            // store degrades to the placeholder rather than panicking.
            if let Some(node) = store.list().first() {
                return Answer::Grounded {
                    content: node.content.clone(),
                    provenance: Provenance {
                        node_id: node.id,
                        status: node.status,
                        author: node.author.clone(),
                        validator: node.validator.clone(),
                    },
                };
            }
        }
        Answer::Placeholder
    }
}
