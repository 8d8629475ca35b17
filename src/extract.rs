//! Structure extraction from staged documents.
//!
//! Markdown files get a line-oriented scan for a title, key concepts, and
//! outgoing relations. Every other format falls back to a bare title taken
//! from the filename. Extraction never fails: a document that matches none
//! of the markers simply yields empty fields.

use crate::node::Relation;

/// Prefix marking a concept line.
const CONCEPT_PREFIX: &str = "- ";
/// Substring marking a relation line.
const RELATION_MARKER: &str = "relates to:";
/// Label attached to every extracted relation.
const RELATION_LABEL: &str = "relates to";

/// Structure pulled out of a staged document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// First line of the document, or the filename stem as fallback.
    pub title: String,
    /// One entry per `- ` bullet line, trimmed.
    pub concepts: Vec<String>,
    /// One entry per line containing `relates to:` exactly once.
    pub relations: Vec<Relation>,
}

/// Extract title, concepts, and relations from a staged document.
///
/// Only filenames ending in `.md` (exact case) get the markdown scan; any
/// other filename yields the stem as title with no concepts or relations.
pub fn extract(filename: &str, data: &[u8]) -> Extraction {
    if filename.ends_with(".md") {
        extract_markdown(filename, data)
    } else {
        Extraction {
            title: file_stem(filename).to_string(),
            ..Default::default()
        }
    }
}

fn extract_markdown(filename: &str, data: &[u8]) -> Extraction {
    let text = String::from_utf8_lossy(data);

    // First line verbatim, blank or not. The stem fallback applies only to
    // a document with no lines at all.
    let title = match text.lines().next() {
        Some(line) => line.to_string(),
        None => file_stem(filename).to_string(),
    };

    let concepts = text
        .lines()
        .filter_map(|line| line.strip_prefix(CONCEPT_PREFIX))
        .map(|rest| rest.trim().to_string())
        .collect();

    let mut relations = Vec::new();
    for line in text.lines() {
        let parts: Vec<&str> = line.split(RELATION_MARKER).collect();
        // Exactly one marker occurrence. Lines with several are ambiguous
        // and contribute nothing.
        if parts.len() == 2 {
            relations.push(Relation {
                target: parts[1].trim().to_string(),
                relation: RELATION_LABEL.to_string(),
            });
        }
    }

    Extraction {
        title,
        concepts,
        relations,
    }
}

/// Filename with everything from the first dot onward removed.
pub fn file_stem(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}
