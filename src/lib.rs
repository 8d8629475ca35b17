//! # per-ankh
//!
//! A knowledge-base session engine for a trust-validated sharing workflow:
//! documents are staged, submitted as draft nodes, reviewed by a validator,
//! and projected as a graph for rendering.
//!
//! ## Architecture
//!
//! - **Node model** (`node`): ids, statuses, relations, the node record
//! - **Store** (`store`): seed + disk merge, one JSON file per node
//! - **Extraction** (`extract`): line-prefix scan of markdown uploads
//! - **Ingestion** (`upload`, `ingest`): staging queue and submission
//! - **Workflow** (`workflow`): the draft → validated transition
//! - **Projection** (`graph`): node/edge lists for an external renderer
//! - **Query** (`query`): canned substring responder behind a narrow trait
//!
//! ## Library usage
//!
//! ```no_run
//! use per_ankh::session::{Session, SessionConfig};
//! use per_ankh::upload::PendingUpload;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! session.stage_upload(PendingUpload::new("note.md", b"My Note\n- graphs".to_vec()));
//! let ids = session.submit_all().unwrap();
//! session.approve(ids[0], "Igor").unwrap();
//! ```

pub mod error;
pub mod extract;
pub mod graph;
pub mod ingest;
pub mod node;
pub mod query;
pub mod seeds;
pub mod session;
pub mod store;
pub mod upload;
pub mod workflow;
