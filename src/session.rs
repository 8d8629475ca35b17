//! Session facade: top-level API for one user session.
//!
//! A [`Session`] owns the node store and the upload staging queue for its
//! lifetime: construct it at session start, route every action through it,
//! drop it at session end. Actions are synchronous and run to completion
//! before the next one starts; there is no background work anywhere.

use std::path::{Path, PathBuf};

use crate::error::AnkhResult;
use crate::graph::{self, GraphProjection};
use crate::ingest::{self, IngestConfig};
use crate::node::{KnowledgeNode, NodeId};
use crate::query::{Answer, KeywordResponder, QueryResponder};
use crate::seeds;
use crate::store::NodeStore;
use crate::upload::{PendingUpload, UploadQueue};
use crate::workflow;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Data directory for node persistence. `None` for memory-only mode.
    pub data_dir: Option<PathBuf>,
    /// Author attributed to drafts submitted in this session.
    pub author: String,
    /// Whether to load the bundled seed pack. Off mainly for tests that
    /// want an empty store.
    pub load_seeds: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            author: "User Master".into(),
            load_seeds: true,
        }
    }
}

/// One user session over the knowledge base.
pub struct Session {
    config: SessionConfig,
    store: NodeStore,
    uploads: UploadQueue,
    responder: Box<dyn QueryResponder>,
}

impl Session {
    /// Start a session: bundled seeds plus whatever the data directory
    /// holds.
    pub fn new(config: SessionConfig) -> AnkhResult<Self> {
        let seeds = if config.load_seeds {
            seeds::bundled_nodes()
        } else {
            Vec::new()
        };
        tracing::info!(
            seed_count = seeds.len(),
            persistent = config.data_dir.is_some(),
            "starting per-ankh session"
        );
        let store = NodeStore::open(config.data_dir.clone(), seeds)?;
        Ok(Self {
            config,
            store,
            uploads: UploadQueue::new(),
            responder: Box::new(KeywordResponder),
        })
    }

    /// Swap the query responder, e.g. for a real retriever or a test
    /// double.
    pub fn with_responder(mut self, responder: Box<dyn QueryResponder>) -> Self {
        self.responder = responder;
        self
    }

    /// Stage an upload for later submission. Returns `false` when the
    /// filename is already staged.
    pub fn stage_upload(&mut self, upload: PendingUpload) -> bool {
        self.uploads.stage(upload)
    }

    /// All staged uploads in staging order.
    pub fn pending_uploads(&self) -> &[PendingUpload] {
        self.uploads.list()
    }

    /// Remove a staged upload by filename.
    pub fn discard_upload(&mut self, filename: &str) -> AnkhResult<PendingUpload> {
        Ok(self.uploads.discard(filename)?)
    }

    /// Submit every staged upload as draft nodes, front to back.
    pub fn submit_all(&mut self) -> AnkhResult<Vec<NodeId>> {
        let config = IngestConfig {
            author: self.config.author.clone(),
        };
        Ok(ingest::submit_all(&mut self.store, &mut self.uploads, &config)?)
    }

    /// Draft nodes awaiting review, in store order.
    pub fn pending_review(&self) -> Vec<&KnowledgeNode> {
        workflow::pending_review(&self.store)
    }

    /// Promote a draft node to validated.
    pub fn approve(&mut self, id: NodeId, validator: &str) -> AnkhResult<KnowledgeNode> {
        Ok(workflow::approve(&mut self.store, id, validator)?)
    }

    /// Answer a free-text query through the configured responder.
    pub fn query(&self, text: &str) -> Answer {
        self.responder.answer(&self.store, text)
    }

    /// Project the current node set into the render contract.
    pub fn graph(&self) -> GraphProjection {
        graph::project(self.store.list())
    }

    /// All nodes in store order.
    pub fn nodes(&self) -> &[KnowledgeNode] {
        self.store.list()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&KnowledgeNode> {
        self.store.get(id)
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The configured data directory, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.store.data_dir()
    }

    /// Summary counts for status displays.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_nodes: self.store.len(),
            validated_nodes: self.store.validated_count(),
            draft_nodes: self.store.draft_count(),
            staged_uploads: self.uploads.len(),
            persistent: self.config.data_dir.is_some(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("nodes", &self.store.len())
            .field("staged", &self.uploads.len())
            .finish()
    }
}

/// Summary of session state.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub total_nodes: usize,
    pub validated_nodes: usize,
    pub draft_nodes: usize,
    pub staged_uploads: usize,
    pub persistent: bool,
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "per-ankh session info")?;
        writeln!(f, "  nodes:       {}", self.total_nodes)?;
        writeln!(f, "  validated:   {}", self.validated_nodes)?;
        writeln!(f, "  drafts:      {}", self.draft_nodes)?;
        writeln!(f, "  staged:      {}", self.staged_uploads)?;
        writeln!(f, "  persistent:  {}", self.persistent)?;
        Ok(())
    }
}
