//! Graph projection: node and edge lists for an external renderer.
//!
//! The projection is recomputed from store state on every request and never
//! persisted. Explicit relations become edges as-is; a store with no
//! relations at all gets a chain through the nodes in store order, so the
//! picture stays non-trivial before anyone has entered a relation.
//!
//! Layout, physics, and interactivity are the renderer's business. This
//! module only fixes the data contract: keys, labels, tooltips, and the
//! two status-derived visual scalars (color and size).

use serde::{Deserialize, Serialize};

use crate::node::KnowledgeNode;

/// Fill color for a validated vertex.
pub const VALIDATED_COLOR: &str = "#00CC66";
/// Fill color for a draft vertex.
pub const DRAFT_COLOR: &str = "#FFCC00";
/// Vertex size for a validated node.
pub const VALIDATED_SIZE: u32 = 15;
/// Vertex size for a draft node.
pub const DRAFT_SIZE: u32 = 10;
/// Stroke color shared by every edge.
pub const EDGE_COLOR: &str = "#AAAAAA";
/// Label marking synthetic chain edges.
pub const CHAIN_LABEL: &str = "related";

/// A renderable vertex derived from one knowledge node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Vertex key: the node's `node-N` reference.
    pub id: String,
    /// Display label: the node title, verbatim.
    pub label: String,
    /// Hover metadata.
    pub tooltip: NodeTooltip,
    /// Fill color derived from status.
    pub color: String,
    /// Vertex size derived from status.
    pub size: u32,
}

/// Hover metadata for a vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTooltip {
    pub title: String,
    /// Status in upper case, e.g. `VALIDATED`.
    pub status: String,
    pub author: String,
    /// Validator identity, or the string `None` when unset.
    pub validator: String,
    /// Concepts joined with `, `.
    pub concepts: String,
    pub content: String,
}

/// A renderable edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source vertex key (`node-N`).
    pub source: String,
    /// Target reference: a raw relation target or a vertex key. Never
    /// checked against the node set; dangling targets are the renderer's
    /// to draw as free-floating labels.
    pub target: String,
    /// Edge label.
    pub label: String,
    /// Edge weight; renderers double it as stroke width.
    pub weight: u32,
    /// Stroke color, the same for every edge.
    pub color: String,
}

/// Full render contract: vertices plus edges, both ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphProjection {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Project a node list into the render contract.
pub fn project(nodes: &[KnowledgeNode]) -> GraphProjection {
    let mut edges: Vec<GraphEdge> = Vec::new();
    for node in nodes {
        for rel in &node.relations {
            edges.push(GraphEdge {
                source: node.id.to_string(),
                target: rel.target.clone(),
                label: rel.relation.clone(),
                weight: 1,
                color: EDGE_COLOR.to_string(),
            });
        }
    }

    // Chain fallback: consecutive store-order pairs, labeled so synthetic
    // edges are distinguishable from entered relations.
    if edges.is_empty() && nodes.len() > 1 {
        for pair in nodes.windows(2) {
            edges.push(GraphEdge {
                source: pair[0].id.to_string(),
                target: pair[1].id.to_string(),
                label: CHAIN_LABEL.to_string(),
                weight: 1,
                color: EDGE_COLOR.to_string(),
            });
        }
    }

    GraphProjection {
        nodes: nodes.iter().map(project_node).collect(),
        edges,
    }
}

fn project_node(node: &KnowledgeNode) -> GraphNode {
    let (color, size) = if node.is_validated() {
        (VALIDATED_COLOR, VALIDATED_SIZE)
    } else {
        (DRAFT_COLOR, DRAFT_SIZE)
    };
    GraphNode {
        id: node.id.to_string(),
        label: node.title.clone(),
        tooltip: NodeTooltip {
            title: node.title.clone(),
            status: node.status.to_string().to_uppercase(),
            author: node.author.clone(),
            validator: node
                .validator
                .clone()
                .unwrap_or_else(|| "None".to_string()),
            concepts: node.concepts.join(", "),
            content: node.content.clone(),
        },
        color: color.to_string(),
        size,
    }
}
