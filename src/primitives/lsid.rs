//! Canonical ID construction.
//!
//! OME objects are addressed by string IDs of the form `Kind:index` (or
//! `Kind:index:index` for nested objects). Documents that need globally
//! unique IDs use UUID URNs instead; both forms are legal wherever the
//! schema asks for an ID.

use std::fmt::Display;

use uuid::Uuid;

/// Format a one-level canonical ID, e.g. `lsid("Image", 0)` → `"Image:0"`.
pub fn lsid(kind: &str, index: impl Display) -> String {
    format!("{kind}:{index}")
}

/// Format a two-level canonical ID, e.g. `"Pixels:0:0"`.
pub fn lsid2(kind: &str, outer: impl Display, inner: impl Display) -> String {
    format!("{kind}:{outer}:{inner}")
}

/// Format a three-level canonical ID, e.g. `"WellSample:0:1:2"`.
pub fn lsid3(
    kind: &str,
    outer: impl Display,
    middle: impl Display,
    inner: impl Display,
) -> String {
    format!("{kind}:{outer}:{middle}:{inner}")
}

/// Generate a fresh UUID URN, e.g. for `OME@UUID` or `TiffData/UUID`.
pub fn new_uuid_urn() -> String {
    format!("urn:uuid:{}", Uuid::new_v4())
}
