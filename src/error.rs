//! Rich diagnostic error types for the per-ankh engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes, help text, and source chains so users
//! know exactly what went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the per-ankh engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, source chains) through to
/// the user.
#[derive(Debug, Error, Diagnostic)]
pub enum AnkhError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Seed(#[from] SeedError),
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("node not found: id {id}")]
    #[diagnostic(
        code(ankh::store::not_found),
        help("No node with this id exists in the store. List nodes to see which ids are taken.")
    )]
    NotFound { id: u64 },

    #[error("duplicate node id: {id}")]
    #[diagnostic(
        code(ankh::store::duplicate),
        help(
            "A node with this id already exists. Ids come from the store's \
             allocator; constructing one by hand risks collisions like this."
        )
    )]
    Duplicate { id: u64 },

    #[error("I/O error: {source}")]
    #[diagnostic(
        code(ankh::store::io),
        help(
            "A filesystem operation failed. Check that the data directory exists, \
             has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(ankh::store::serde),
        help(
            "Failed to serialize or deserialize a node file. \
             This usually means the stored format has changed between versions. \
             Remove or repair the offending file in the data directory."
        )
    )]
    Serialization { message: String },
}

// ---------------------------------------------------------------------------
// Workflow errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum WorkflowError {
    #[error("node not found: id {id}")]
    #[diagnostic(
        code(ankh::workflow::not_found),
        help("No node with this id exists. Check the review queue for valid draft ids.")
    )]
    NotFound { id: u64 },

    #[error("node {id} is already validated")]
    #[diagnostic(
        code(ankh::workflow::already_validated),
        help(
            "Approval applies to draft nodes only. This node already carries a \
             validator attribution, which a second approval would overwrite."
        )
    )]
    AlreadyValidated { id: u64 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum UploadError {
    #[error("no staged upload named {filename:?}")]
    #[diagnostic(
        code(ankh::upload::not_found),
        help("Nothing with this filename is staged. List pending uploads to see what is.")
    )]
    NotFound { filename: String },

    /// Reserved for future format validation of staged payloads.
    #[error("malformed upload {filename:?}: {message}")]
    #[diagnostic(
        code(ankh::upload::malformed),
        help("The staged payload could not be interpreted. Re-export the document and stage it again.")
    )]
    Malformed { filename: String, message: String },
}

// ---------------------------------------------------------------------------
// Seed errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SeedError {
    #[error("seed pack parse error: {message}")]
    #[diagnostic(
        code(ankh::seeds::parse),
        help(
            "The bundled seed pack failed to parse. This indicates a build \
             problem with the shipped TOML data. File a bug report."
        )
    )]
    Parse { message: String },
}

/// Convenience alias for functions returning per-ankh results.
pub type AnkhResult<T> = std::result::Result<T, AnkhError>;
