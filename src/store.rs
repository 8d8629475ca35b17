//! Node store: the authoritative in-memory collection plus its disk mirror.
//!
//! A store opens from a seed list and, when a data directory is configured,
//! merges in every node file found there. Mutations go to memory first and
//! are mirrored to one JSON file per node before the call returns. There is
//! no log and no locking; the files are a best-effort mirror, and memory
//! wins until the next open.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::node::{KnowledgeNode, NodeId};

/// File name a node is persisted under.
pub fn node_file_name(id: NodeId) -> String {
    format!("node_{}.json", id.get())
}

/// Owns the node collection for the lifetime of a session.
pub struct NodeStore {
    dir: Option<PathBuf>,
    nodes: Vec<KnowledgeNode>,
}

impl NodeStore {
    /// Open a store from a seed list, merging in persisted nodes.
    ///
    /// With `dir = None` the store is memory-only and nothing ever touches
    /// disk. Otherwise the directory is created if missing and scanned for
    /// `*.json` node files. Files that fail to read or parse are skipped
    /// with a warning; a persisted id that collides with an already loaded
    /// node is skipped the same way, keeping ids unique.
    pub fn open(dir: Option<PathBuf>, seeds: Vec<KnowledgeNode>) -> Result<Self, StoreError> {
        let mut nodes = seeds;

        if let Some(dir) = &dir {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::Io { source: e })?;
            for node in load_dir(dir)? {
                if nodes.iter().any(|n| n.id == node.id) {
                    tracing::warn!(
                        id = node.id.get(),
                        "Skipping persisted node shadowed by an existing id"
                    );
                    continue;
                }
                nodes.push(node);
            }
        }

        Ok(Self { dir, nodes })
    }

    /// Append a new node and mirror it to disk.
    ///
    /// A persistence failure rolls the in-memory append back, so the id
    /// stays free for a retry.
    pub fn create(&mut self, node: KnowledgeNode) -> Result<(), StoreError> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(StoreError::Duplicate { id: node.id.get() });
        }
        self.nodes.push(node);
        let pos = self.nodes.len() - 1;
        if let Err(e) = self.write_node(&self.nodes[pos]) {
            self.nodes.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace an existing node by id and rewrite its file.
    ///
    /// A persistence failure restores the previous in-memory state.
    pub fn update(&mut self, node: KnowledgeNode) -> Result<(), StoreError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == node.id)
            .ok_or(StoreError::NotFound { id: node.id.get() })?;
        let prev = std::mem::replace(&mut self.nodes[pos], node);
        if let Err(e) = self.write_node(&self.nodes[pos]) {
            self.nodes[pos] = prev;
            return Err(e);
        }
        Ok(())
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&KnowledgeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All nodes in insertion order: seeds first, then persisted nodes in
    /// ascending id order, then anything created this session.
    pub fn list(&self) -> &[KnowledgeNode] {
        &self.nodes
    }

    /// Number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of validated nodes.
    pub fn validated_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_validated()).count()
    }

    /// Number of draft nodes.
    pub fn draft_count(&self) -> usize {
        self.nodes.len() - self.validated_count()
    }

    /// Next free id: one past the current count, advanced while taken.
    ///
    /// With a contiguous id range this is exactly `count + 1`; the advance
    /// only matters when a divergent disk layout left holes.
    pub fn next_id(&self) -> NodeId {
        let mut raw = self.nodes.len() as u64 + 1;
        while self.nodes.iter().any(|n| n.id.get() == raw) {
            raw += 1;
        }
        NodeId::new(raw)
    }

    /// The configured data directory, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn write_node(&self, node: &KnowledgeNode) -> Result<(), StoreError> {
        if let Some(dir) = &self.dir {
            let json =
                serde_json::to_string_pretty(node).map_err(|e| StoreError::Serialization {
                    message: format!("serialize node {}: {e}", node.id.get()),
                })?;
            std::fs::write(dir.join(node_file_name(node.id)), json)
                .map_err(|e| StoreError::Io { source: e })?;
        }
        Ok(())
    }
}

/// Read every parsable node file in the directory, ascending by id.
fn load_dir(dir: &Path) -> Result<Vec<KnowledgeNode>, StoreError> {
    let mut loaded = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| StoreError::Io { source: e })?;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        if !is_json {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<KnowledgeNode>(&data) {
                Ok(node) => loaded.push(node),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Skipping unparsable node file: {e}");
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "Skipping unreadable node file: {e}");
            }
        }
    }
    // Directory iteration order is platform-dependent; sort for a stable
    // list() order.
    loaded.sort_by_key(|n| n.id);
    Ok(loaded)
}
