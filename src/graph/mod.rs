//! ID registry and reference resolution.
//!
//! OME documents link objects by string ID: an `AnnotationRef` inside an
//! image names an annotation declared elsewhere in the document. The store
//! registers every ID-bearing object and queues every reference as it is
//! written; [`ObjectRegistry::resolve`] then reports which references have
//! no registered target. Links stay ID-valued in the model: resolution
//! validates the graph, it does not rewrite it.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A queued cross-reference awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReference {
    /// ID of the object holding the reference
    pub source: String,
    /// ID the reference points at
    pub target: String,
    /// Reference element name (`AnnotationRef`, `ImageRef`, ...)
    pub kind: String,
}

impl fmt::Display for PendingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.source, self.target)
    }
}

/// A duplicate ID registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateId {
    /// The ID registered more than once
    pub id: String,
    /// Object kind of the later registration
    pub kind: String,
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Number of references that landed on a registered ID
    pub resolved: usize,
    /// References whose target is not registered
    pub unresolved: Vec<PendingReference>,
    /// IDs registered more than once
    pub duplicates: Vec<DuplicateId>,
}

impl Resolution {
    /// Whether every reference resolved and no ID was duplicated.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty() && self.duplicates.is_empty()
    }

    /// Number of references that failed to resolve.
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resolved, {} unresolved, {} duplicate IDs",
            self.resolved,
            self.unresolved.len(),
            self.duplicates.len()
        )
    }
}

/// Tracks every registered object ID and every queued reference.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    /// id -> object kind of the latest registration
    ids: HashMap<String, String>,
    duplicates: Vec<DuplicateId>,
    pending: Vec<PendingReference>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ID-bearing object. Re-registering an ID is recorded as a
    /// duplicate; the later registration wins.
    pub fn register(&mut self, id: &str, kind: &str) {
        if id.is_empty() {
            return;
        }
        if let Some(previous) = self.ids.insert(id.to_string(), kind.to_string()) {
            warn!("duplicate ID registered: {id} ({previous}, now {kind})");
            self.duplicates.push(DuplicateId {
                id: id.to_string(),
                kind: kind.to_string(),
            });
        } else {
            debug!("registered {kind} {id}");
        }
    }

    /// Queue a reference from `source` to `target` for later resolution.
    pub fn add_reference(&mut self, source: &str, target: &str, kind: &str) {
        self.pending.push(PendingReference {
            source: source.to_string(),
            target: target.to_string(),
            kind: kind.to_string(),
        });
    }

    /// Whether an ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Object kind registered under an ID.
    pub fn kind_of(&self, id: &str) -> Option<&str> {
        self.ids.get(id).map(String::as_str)
    }

    /// Number of registered IDs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no IDs are registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of queued references.
    pub fn reference_count(&self) -> usize {
        self.pending.len()
    }

    /// Check every queued reference against the registered IDs.
    ///
    /// Non-destructive and idempotent: the queue is kept, so a later pass
    /// over a grown registry can resolve references that failed earlier.
    pub fn resolve(&self) -> Resolution {
        let mut resolution = Resolution {
            duplicates: self.duplicates.clone(),
            ..Resolution::default()
        };
        for reference in &self.pending {
            if self.ids.contains_key(&reference.target) {
                resolution.resolved += 1;
            } else {
                resolution.unresolved.push(reference.clone());
            }
        }
        if !resolution.is_clean() {
            warn!("reference resolution: {resolution}");
        }
        resolution
    }

    /// Drop all registrations and queued references.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.duplicates.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_clean_graph() {
        let mut registry = ObjectRegistry::new();
        registry.register("Image:0", "Image");
        registry.register("Annotation:0", "Annotation");
        registry.add_reference("Image:0", "Annotation:0", "AnnotationRef");

        let resolution = registry.resolve();
        assert!(resolution.is_clean());
        assert_eq!(resolution.resolved, 1);
        assert_eq!(resolution.unresolved_count(), 0);
    }

    #[test]
    fn test_resolve_reports_dangling_reference() {
        let mut registry = ObjectRegistry::new();
        registry.register("Image:0", "Image");
        registry.add_reference("Image:0", "ROI:7", "ROIRef");

        let resolution = registry.resolve();
        assert_eq!(resolution.unresolved_count(), 1);
        assert_eq!(resolution.unresolved[0].target, "ROI:7");
        assert_eq!(resolution.unresolved[0].kind, "ROIRef");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut registry = ObjectRegistry::new();
        registry.register("Image:0", "Image");
        registry.add_reference("Image:0", "ROI:0", "ROIRef");

        let first = registry.resolve();
        let second = registry.resolve();
        assert_eq!(first.unresolved, second.unresolved);
        assert_eq!(first.resolved, second.resolved);
    }

    #[test]
    fn test_late_registration_resolves_earlier_reference() {
        let mut registry = ObjectRegistry::new();
        registry.add_reference("Image:0", "ROI:0", "ROIRef");
        assert_eq!(registry.resolve().unresolved_count(), 1);

        registry.register("ROI:0", "ROI");
        assert_eq!(registry.resolve().unresolved_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_are_recorded() {
        let mut registry = ObjectRegistry::new();
        registry.register("Image:0", "Image");
        registry.register("Image:0", "Image");

        let resolution = registry.resolve();
        assert!(!resolution.is_clean());
        assert_eq!(resolution.duplicates.len(), 1);
        assert_eq!(resolution.duplicates[0].id, "Image:0");
        // the map still holds a single entry
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let mut registry = ObjectRegistry::new();
        registry.register("", "Image");
        assert!(registry.is_empty());
    }
}
