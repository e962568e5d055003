//! Structured annotations.
//!
//! Annotations are typed values attached to any ID-bearing object through
//! `AnnotationRef` links. All kinds share identity and provenance fields;
//! the kind-specific payload is the [`AnnotationValue`] variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The document-level annotation block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredAnnotations {
    /// All annotations in the document, in declaration order
    pub annotations: Vec<Annotation>,
}

impl StructuredAnnotations {
    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Look up an annotation by ID.
    pub fn by_id(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }
}

/// A single structured annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation ID (`Annotation:n`)
    pub id: String,
    /// Namespace qualifying the meaning of the value
    pub namespace: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Experimenter who created the annotation
    pub annotator: Option<String>,
    /// The typed payload
    pub value: AnnotationValue,
    /// Annotations attached to this annotation
    pub annotation_refs: Vec<String>,
}

impl Annotation {
    /// Create an annotation with the given ID and payload.
    pub fn new(id: impl Into<String>, value: AnnotationValue) -> Self {
        Self {
            id: id.into(),
            value,
            ..Self::default()
        }
    }

    /// Schema element name of this annotation's kind.
    pub fn element_name(&self) -> &'static str {
        self.value.element_name()
    }
}

/// Typed payload of an annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum AnnotationValue {
    /// A boolean flag
    Boolean(bool),
    /// A free-text comment
    Comment(String),
    /// A floating-point value
    Double(f64),
    /// An integer value
    Long(i64),
    /// A tag word
    Tag(String),
    /// An ontology term
    Term(String),
    /// A timestamp
    Timestamp(DateTime<Utc>),
    /// A block of opaque XML, stored verbatim
    Xml(String),
    /// An ordered list of key/value pairs
    Map(Vec<MapPair>),
    /// A file attachment descriptor
    File(BinaryFile),
}

impl Default for AnnotationValue {
    fn default() -> Self {
        AnnotationValue::Comment(String::new())
    }
}

impl AnnotationValue {
    /// Schema element name of this annotation kind.
    pub fn element_name(&self) -> &'static str {
        match self {
            AnnotationValue::Boolean(_) => "BooleanAnnotation",
            AnnotationValue::Comment(_) => "CommentAnnotation",
            AnnotationValue::Double(_) => "DoubleAnnotation",
            AnnotationValue::Long(_) => "LongAnnotation",
            AnnotationValue::Tag(_) => "TagAnnotation",
            AnnotationValue::Term(_) => "TermAnnotation",
            AnnotationValue::Timestamp(_) => "TimestampAnnotation",
            AnnotationValue::Xml(_) => "XMLAnnotation",
            AnnotationValue::Map(_) => "MapAnnotation",
            AnnotationValue::File(_) => "FileAnnotation",
        }
    }
}

/// One key/value pair of a map annotation. Keys may repeat; order is
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPair {
    /// Pair key
    pub key: String,
    /// Pair value
    pub value: String,
}

impl MapPair {
    /// Create a pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Descriptor of a file attached through a file annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinaryFile {
    /// File name
    pub file_name: String,
    /// File size in bytes
    pub size: u64,
    /// MIME type of the content
    pub mime_type: Option<String>,
}
