//! OME-XML reading and writing.
//!
//! Both directions are written directly against the fixed 2016-06 schema
//! using `quick-xml` pull events; there is no generic binding layer. The
//! reader is tolerant of namespace prefixes and unknown elements, the
//! writer always emits the canonical namespaced form.

mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use reader::{read_document, read_document_str};
pub use writer::{write_document, write_document_to};

use crate::primitives::InvalidToken;

/// Namespace of the OME 2016-06 schema.
pub const OME_NAMESPACE: &str = "http://www.openmicroscopy.org/Schemas/OME/2016-06";

/// XML Schema instance namespace, used for `xsi:schemaLocation`.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Canonical schema location hint written on the root element.
pub const SCHEMA_LOCATION: &str =
    "http://www.openmicroscopy.org/Schemas/OME/2016-06 http://www.openmicroscopy.org/Schemas/OME/2016-06/ome.xsd";

/// Errors raised while reading or writing OME-XML.
#[derive(Debug, thiserror::Error)]
pub enum OmeXmlError {
    /// XML syntax error
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error from the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-UTF-8 content
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A mandatory attribute is absent
    #[error("missing required attribute {attribute} on <{element}>")]
    MissingAttribute {
        /// Element the attribute belongs to
        element: String,
        /// The absent attribute
        attribute: String,
    },

    /// An attribute value failed to parse
    #[error("invalid value for {attribute}: {message}")]
    InvalidValue {
        /// The attribute holding the bad value
        attribute: String,
        /// What went wrong
        message: String,
    },

    /// An enumeration or unit token outside the schema vocabulary
    #[error(transparent)]
    InvalidToken(#[from] InvalidToken),

    /// The document's root element is not `OME`
    #[error("unexpected root element <{0}>, expected <OME>")]
    UnexpectedRoot(String),

    /// The document ended inside an open element
    #[error("unexpected end of document")]
    UnexpectedEof,
}
