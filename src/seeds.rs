//! Bundled seed pack: starter knowledge for new sessions.
//!
//! The seed pack is a TOML-defined bundle of knowledge nodes compiled into
//! the binary. Every session starts from its nodes; persisted nodes are
//! merged in on top when a data directory is configured.

use serde::Deserialize;

use crate::error::SeedError;
use crate::node::KnowledgeNode;

const CORPORATE_TOML: &str = include_str!("../data/seeds/corporate.toml");

/// A parsed seed pack.
#[derive(Debug, Clone)]
pub struct SeedPack {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub nodes: Vec<KnowledgeNode>,
}

// ── TOML deserialization helpers ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SeedToml {
    seed: SeedMeta,
    #[serde(default)]
    nodes: Vec<KnowledgeNode>,
}

#[derive(Debug, Deserialize)]
struct SeedMeta {
    id: String,
    name: String,
    version: String,
    description: String,
}

fn parse_seed_toml(toml_str: &str) -> Result<SeedPack, SeedError> {
    let parsed: SeedToml = toml::from_str(toml_str).map_err(|e| SeedError::Parse {
        message: e.to_string(),
    })?;
    Ok(SeedPack {
        id: parsed.seed.id,
        name: parsed.seed.name,
        version: parsed.seed.version,
        description: parsed.seed.description,
        nodes: parsed.nodes,
    })
}

/// The seed pack bundled into the binary.
pub fn bundled_pack() -> Result<SeedPack, SeedError> {
    parse_seed_toml(CORPORATE_TOML)
}

/// The seed nodes every fresh session starts with.
///
/// A parse failure of the bundled pack is logged and yields an empty list
/// rather than aborting session startup.
pub fn bundled_nodes() -> Vec<KnowledgeNode> {
    match parse_seed_toml(CORPORATE_TOML) {
        Ok(pack) => pack.nodes,
        Err(e) => {
            tracing::warn!("Failed to parse bundled seed pack: {e}");
            Vec::new()
        }
    }
}
