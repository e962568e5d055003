//! Accessors for structured annotations.
//!
//! An annotation slot's kind is established by the
//! `set_<kind>_annotation_id` setter; value accessors are checked and leave
//! a slot of a different kind untouched. Identity and provenance fields are
//! shared by every kind.

use chrono::{DateTime, Utc};

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{Annotation, AnnotationValue, BinaryFile, MapPair};

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn annotation(&self, annotation_index: usize) -> Option<&Annotation> {
        self.root.structured_annotations.annotations.get(annotation_index)
    }

    fn annotation_mut(&mut self, annotation_index: usize) -> &mut Annotation {
        vivify(
            &mut self.root.structured_annotations.annotations,
            annotation_index,
        )
    }

    fn set_annotation_kind(&mut self, id: &str, annotation_index: usize, value: AnnotationValue) {
        let annotation = self.annotation_mut(annotation_index);
        annotation.id = id.to_string();
        // establishing a different kind replaces the old payload
        if std::mem::discriminant(&annotation.value) != std::mem::discriminant(&value) {
            annotation.value = value;
        }
        self.registry.register(id, "Annotation");
    }

    // -- shared fields --------------------------------------------------

    /// Annotation ID.
    pub fn annotation_id(&self, annotation_index: usize) -> Option<&str> {
        self.annotation(annotation_index)
            .map(|annotation| annotation.id.as_str())
    }

    /// Schema element name of the annotation kind at the slot.
    pub fn annotation_kind(&self, annotation_index: usize) -> Option<&'static str> {
        self.annotation(annotation_index)
            .map(|annotation| annotation.element_name())
    }

    /// Annotation namespace.
    pub fn annotation_namespace(&self, annotation_index: usize) -> Option<&str> {
        self.annotation(annotation_index)?.namespace.as_deref()
    }

    /// Set the annotation namespace.
    pub fn set_annotation_namespace(
        &mut self,
        namespace: impl Into<String>,
        annotation_index: usize,
    ) {
        self.annotation_mut(annotation_index).namespace = Some(namespace.into());
    }

    /// Annotation description.
    pub fn annotation_description(&self, annotation_index: usize) -> Option<&str> {
        self.annotation(annotation_index)?.description.as_deref()
    }

    /// Set the annotation description.
    pub fn set_annotation_description(
        &mut self,
        description: impl Into<String>,
        annotation_index: usize,
    ) {
        self.annotation_mut(annotation_index).description = Some(description.into());
    }

    /// Experimenter who created the annotation.
    pub fn annotation_annotator(&self, annotation_index: usize) -> Option<&str> {
        self.annotation(annotation_index)?.annotator.as_deref()
    }

    /// Set the annotator.
    pub fn set_annotation_annotator(
        &mut self,
        annotator: impl Into<String>,
        annotation_index: usize,
    ) {
        self.annotation_mut(annotation_index).annotator = Some(annotator.into());
    }

    /// Annotation linked to this annotation at `annotation_ref_index`.
    pub fn annotation_annotation_ref(
        &self,
        annotation_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.annotation(annotation_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to this annotation.
    pub fn set_annotation_annotation_ref(
        &mut self,
        target: &str,
        annotation_index: usize,
        annotation_ref_index: usize,
    ) {
        let annotation = self.annotation_mut(annotation_index);
        set_ref(&mut annotation.annotation_refs, annotation_ref_index, target);
        let source = source_id(&annotation.id, "Annotation", annotation_index);
        self.registry.add_reference(&source, target, "AnnotationRef");
    }

    // -- Boolean --------------------------------------------------------

    /// Declare the slot to be a boolean annotation and set its ID.
    pub fn set_boolean_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Boolean(false));
    }

    /// Boolean payload, when the slot holds a boolean annotation.
    pub fn boolean_annotation_value(&self, annotation_index: usize) -> Option<bool> {
        match self.annotation(annotation_index)?.value {
            AnnotationValue::Boolean(value) => Some(value),
            _ => None,
        }
    }

    /// Set the boolean payload. No-op unless the slot holds a boolean
    /// annotation.
    pub fn set_boolean_annotation_value(&mut self, value: bool, annotation_index: usize) {
        if let AnnotationValue::Boolean(payload) = &mut self.annotation_mut(annotation_index).value
        {
            *payload = value;
        }
    }

    // -- Comment --------------------------------------------------------

    /// Declare the slot to be a comment annotation and set its ID.
    pub fn set_comment_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Comment(String::new()));
    }

    /// Comment payload, when the slot holds a comment annotation.
    pub fn comment_annotation_value(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::Comment(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Set the comment payload. No-op unless the slot holds a comment
    /// annotation.
    pub fn set_comment_annotation_value(
        &mut self,
        value: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Comment(payload) = &mut self.annotation_mut(annotation_index).value
        {
            *payload = value.into();
        }
    }

    // -- Double ---------------------------------------------------------

    /// Declare the slot to be a double annotation and set its ID.
    pub fn set_double_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Double(0.0));
    }

    /// Floating-point payload, when the slot holds a double annotation.
    pub fn double_annotation_value(&self, annotation_index: usize) -> Option<f64> {
        match self.annotation(annotation_index)?.value {
            AnnotationValue::Double(value) => Some(value),
            _ => None,
        }
    }

    /// Set the floating-point payload. No-op unless the slot holds a double
    /// annotation.
    pub fn set_double_annotation_value(&mut self, value: f64, annotation_index: usize) {
        if let AnnotationValue::Double(payload) = &mut self.annotation_mut(annotation_index).value
        {
            *payload = value;
        }
    }

    // -- Long -----------------------------------------------------------

    /// Declare the slot to be a long annotation and set its ID.
    pub fn set_long_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Long(0));
    }

    /// Integer payload, when the slot holds a long annotation.
    pub fn long_annotation_value(&self, annotation_index: usize) -> Option<i64> {
        match self.annotation(annotation_index)?.value {
            AnnotationValue::Long(value) => Some(value),
            _ => None,
        }
    }

    /// Set the integer payload. No-op unless the slot holds a long
    /// annotation.
    pub fn set_long_annotation_value(&mut self, value: i64, annotation_index: usize) {
        if let AnnotationValue::Long(payload) = &mut self.annotation_mut(annotation_index).value {
            *payload = value;
        }
    }

    // -- Tag ------------------------------------------------------------

    /// Declare the slot to be a tag annotation and set its ID.
    pub fn set_tag_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Tag(String::new()));
    }

    /// Tag payload, when the slot holds a tag annotation.
    pub fn tag_annotation_value(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::Tag(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Set the tag payload. No-op unless the slot holds a tag annotation.
    pub fn set_tag_annotation_value(
        &mut self,
        value: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Tag(payload) = &mut self.annotation_mut(annotation_index).value {
            *payload = value.into();
        }
    }

    // -- Term -----------------------------------------------------------

    /// Declare the slot to be a term annotation and set its ID.
    pub fn set_term_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Term(String::new()));
    }

    /// Ontology term payload, when the slot holds a term annotation.
    pub fn term_annotation_value(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::Term(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Set the ontology term payload. No-op unless the slot holds a term
    /// annotation.
    pub fn set_term_annotation_value(
        &mut self,
        value: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Term(payload) = &mut self.annotation_mut(annotation_index).value {
            *payload = value.into();
        }
    }

    // -- Timestamp ------------------------------------------------------

    /// Declare the slot to be a timestamp annotation and set its ID.
    pub fn set_timestamp_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(
            id,
            annotation_index,
            AnnotationValue::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
        );
    }

    /// Timestamp payload, when the slot holds a timestamp annotation.
    pub fn timestamp_annotation_value(&self, annotation_index: usize) -> Option<DateTime<Utc>> {
        match self.annotation(annotation_index)?.value {
            AnnotationValue::Timestamp(value) => Some(value),
            _ => None,
        }
    }

    /// Set the timestamp payload. No-op unless the slot holds a timestamp
    /// annotation.
    pub fn set_timestamp_annotation_value(
        &mut self,
        value: DateTime<Utc>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Timestamp(payload) =
            &mut self.annotation_mut(annotation_index).value
        {
            *payload = value;
        }
    }

    // -- XML ------------------------------------------------------------

    /// Declare the slot to be an XML annotation and set its ID.
    pub fn set_xml_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Xml(String::new()));
    }

    /// Verbatim XML payload, when the slot holds an XML annotation.
    pub fn xml_annotation_value(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::Xml(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Set the verbatim XML payload. No-op unless the slot holds an XML
    /// annotation.
    pub fn set_xml_annotation_value(
        &mut self,
        value: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Xml(payload) = &mut self.annotation_mut(annotation_index).value {
            *payload = value.into();
        }
    }

    // -- Map ------------------------------------------------------------

    /// Declare the slot to be a map annotation and set its ID.
    pub fn set_map_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(id, annotation_index, AnnotationValue::Map(Vec::new()));
    }

    /// Key/value pairs, when the slot holds a map annotation.
    pub fn map_annotation_value(&self, annotation_index: usize) -> Option<&[MapPair]> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::Map(pairs) => Some(pairs.as_slice()),
            _ => None,
        }
    }

    /// Replace the key/value pairs. No-op unless the slot holds a map
    /// annotation.
    pub fn set_map_annotation_value(&mut self, pairs: Vec<MapPair>, annotation_index: usize) {
        if let AnnotationValue::Map(payload) = &mut self.annotation_mut(annotation_index).value {
            *payload = pairs;
        }
    }

    /// Append one key/value pair. No-op unless the slot holds a map
    /// annotation.
    pub fn add_map_annotation_pair(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::Map(payload) = &mut self.annotation_mut(annotation_index).value {
            payload.push(MapPair::new(key, value));
        }
    }

    // -- File -----------------------------------------------------------

    /// Declare the slot to be a file annotation and set its ID.
    pub fn set_file_annotation_id(&mut self, id: &str, annotation_index: usize) {
        self.set_annotation_kind(
            id,
            annotation_index,
            AnnotationValue::File(BinaryFile::default()),
        );
    }

    /// Attached file name, when the slot holds a file annotation.
    pub fn file_annotation_file_name(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::File(file) => Some(file.file_name.as_str()),
            _ => None,
        }
    }

    /// Set the attached file name. No-op unless the slot holds a file
    /// annotation.
    pub fn set_file_annotation_file_name(
        &mut self,
        file_name: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::File(file) = &mut self.annotation_mut(annotation_index).value {
            file.file_name = file_name.into();
        }
    }

    /// Attached file size, when the slot holds a file annotation.
    pub fn file_annotation_size(&self, annotation_index: usize) -> Option<u64> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::File(file) => Some(file.size),
            _ => None,
        }
    }

    /// Set the attached file size. No-op unless the slot holds a file
    /// annotation.
    pub fn set_file_annotation_size(&mut self, size: u64, annotation_index: usize) {
        if let AnnotationValue::File(file) = &mut self.annotation_mut(annotation_index).value {
            file.size = size;
        }
    }

    /// Attached file MIME type, when the slot holds a file annotation.
    pub fn file_annotation_mime_type(&self, annotation_index: usize) -> Option<&str> {
        match &self.annotation(annotation_index)?.value {
            AnnotationValue::File(file) => file.mime_type.as_deref(),
            _ => None,
        }
    }

    /// Set the attached file MIME type. No-op unless the slot holds a file
    /// annotation.
    pub fn set_file_annotation_mime_type(
        &mut self,
        mime_type: impl Into<String>,
        annotation_index: usize,
    ) {
        if let AnnotationValue::File(file) = &mut self.annotation_mut(annotation_index).value {
            file.mime_type = Some(mime_type.into());
        }
    }
}
