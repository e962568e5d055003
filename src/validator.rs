//! Document-level validation.
//!
//! Checks go beyond what parsing enforces: the link graph must resolve,
//! IDs must be unique and non-empty, plane and channel indices must fit the
//! declared pixel geometry, wells must fit the declared plate grid.
//!
//! ## Usage
//!
//! ```rust
//! use omexml::store::OmeXmlMetadata;
//! use omexml::validator::validate_store;
//!
//! let mut store = OmeXmlMetadata::new();
//! store.set_image_id("Image:0", 0);
//! store.set_pixels_id("Pixels:0", 0);
//! let report = validate_store(&store);
//! println!("{report}");
//! assert!(report.passed());
//! ```

use std::fmt;

use crate::store::OmeXmlMetadata;

/// Outcome of a single validation check.
#[derive(Debug, Clone)]
pub enum CheckStatus {
    /// The check passed
    Ok,
    /// The check passed with a caveat
    Warning(String),
    /// The check failed
    Failed(String),
}

impl CheckStatus {
    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }
}

/// A named validation check with its outcome.
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Check name
    pub name: String,
    /// Check outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// All checks run against one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// The individual checks, in execution order
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Whether no check failed.
    pub fn passed(&self) -> bool {
        !self.checks.iter().any(|check| check.status.is_failed())
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    fn push(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            match &check.status {
                CheckStatus::Ok => writeln!(f, "  ok    {}", check.name)?,
                CheckStatus::Warning(message) => {
                    writeln!(f, "  warn  {}: {}", check.name, message)?
                }
                CheckStatus::Failed(message) => {
                    writeln!(f, "  FAIL  {}: {}", check.name, message)?
                }
            }
        }
        write!(
            f,
            "{} checks, {} failed, {} warnings",
            self.checks.len(),
            self.failure_count(),
            self.warning_count()
        )
    }
}

/// Run every document-level check against a store.
pub fn validate_store(store: &OmeXmlMetadata) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_references(store, &mut report);
    check_ids(store, &mut report);
    check_pixel_geometry(store, &mut report);
    check_plate_grid(store, &mut report);

    report
}

fn check_references(store: &OmeXmlMetadata, report: &mut ValidationReport) {
    let resolution = store.resolve_references();
    if resolution.unresolved.is_empty() {
        report.push(ValidationCheck::ok("reference resolution"));
    } else {
        let mut preview = resolution
            .unresolved
            .iter()
            .take(5)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if resolution.unresolved.len() > 5 {
            preview.push_str(", ...");
        }
        report.push(ValidationCheck::failed(
            "reference resolution",
            format!(
                "{} dangling reference(s): {preview}",
                resolution.unresolved.len()
            ),
        ));
    }

    if resolution.duplicates.is_empty() {
        report.push(ValidationCheck::ok("ID uniqueness"));
    } else {
        let ids = resolution
            .duplicates
            .iter()
            .take(5)
            .map(|d| d.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        report.push(ValidationCheck::failed(
            "ID uniqueness",
            format!("{} duplicate ID(s): {ids}", resolution.duplicates.len()),
        ));
    }
}

fn check_ids(store: &OmeXmlMetadata, report: &mut ValidationReport) {
    let root = store.root();
    let mut missing = Vec::new();
    for (index, image) in root.images.iter().enumerate() {
        if image.id.is_empty() {
            missing.push(format!("image #{index}"));
        }
        if image.pixels.id.is_empty() {
            missing.push(format!("pixels of image #{index}"));
        }
    }
    for (index, roi) in root.rois.iter().enumerate() {
        if roi.id.is_empty() {
            missing.push(format!("ROI #{index}"));
        }
    }
    for (index, annotation) in root.structured_annotations.annotations.iter().enumerate() {
        if annotation.id.is_empty() {
            missing.push(format!("annotation #{index}"));
        }
    }
    if missing.is_empty() {
        report.push(ValidationCheck::ok("mandatory IDs"));
    } else {
        report.push(ValidationCheck::failed(
            "mandatory IDs",
            format!("empty ID on {}", missing.join(", ")),
        ));
    }
}

fn check_pixel_geometry(store: &OmeXmlMetadata, report: &mut ValidationReport) {
    let mut problems = Vec::new();
    let mut warnings = Vec::new();
    for (index, image) in store.root().images.iter().enumerate() {
        let pixels = &image.pixels;
        if pixels.size_x == 0
            || pixels.size_y == 0
            || pixels.size_z == 0
            || pixels.size_c == 0
            || pixels.size_t == 0
        {
            problems.push(format!("image #{index} has a zero dimension"));
        }
        if pixels.channels.len() > pixels.size_c as usize {
            warnings.push(format!(
                "image #{index} declares {} channels for SizeC={}",
                pixels.channels.len(),
                pixels.size_c
            ));
        }
        for plane in &pixels.planes {
            if plane.the_z >= pixels.size_z
                || plane.the_c >= pixels.size_c
                || plane.the_t >= pixels.size_t
            {
                problems.push(format!(
                    "image #{index} plane ({}, {}, {}) outside ({}, {}, {})",
                    plane.the_z,
                    plane.the_c,
                    plane.the_t,
                    pixels.size_z,
                    pixels.size_c,
                    pixels.size_t
                ));
            }
        }
        if let Some(bits) = pixels.significant_bits {
            let storage_bits = pixels.pixel_type.bytes_per_pixel() as u32 * 8;
            if bits > storage_bits {
                problems.push(format!(
                    "image #{index} claims {bits} significant bits in a {storage_bits}-bit type"
                ));
            }
        }
    }
    if !problems.is_empty() {
        report.push(ValidationCheck::failed(
            "pixel geometry",
            problems.join("; "),
        ));
    } else if !warnings.is_empty() {
        report.push(ValidationCheck::warning(
            "pixel geometry",
            warnings.join("; "),
        ));
    } else {
        report.push(ValidationCheck::ok("pixel geometry"));
    }
}

fn check_plate_grid(store: &OmeXmlMetadata, report: &mut ValidationReport) {
    let mut problems = Vec::new();
    for (index, plate) in store.root().plates.iter().enumerate() {
        let (Some(rows), Some(columns)) = (plate.rows, plate.columns) else {
            continue;
        };
        for well in &plate.wells {
            if well.row >= rows || well.column >= columns {
                problems.push(format!(
                    "plate #{index} well ({}, {}) outside {}x{} grid",
                    well.row, well.column, rows, columns
                ));
            }
        }
    }
    if problems.is_empty() {
        report.push(ValidationCheck::ok("plate grid"));
    } else {
        report.push(ValidationCheck::failed("plate grid", problems.join("; ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_store_passes() {
        let mut store = OmeXmlMetadata::new();
        store.set_image_id("Image:0", 0);
        store.set_pixels_id("Pixels:0", 0);
        store.set_pixels_size_x(16, 0);
        store.set_pixels_size_y(16, 0);

        let report = validate_store(&store);
        assert!(report.passed(), "unexpected failures: {report}");
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_dangling_reference_fails() {
        let mut store = OmeXmlMetadata::new();
        store.set_image_id("Image:0", 0);
        store.set_pixels_id("Pixels:0", 0);
        store.set_image_roi_ref("ROI:99", 0, 0);

        let report = validate_store(&store);
        assert!(!report.passed());
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_plane_outside_geometry_fails() {
        let mut store = OmeXmlMetadata::new();
        store.set_image_id("Image:0", 0);
        store.set_pixels_id("Pixels:0", 0);
        store.set_pixels_size_z(5, 0);
        store.set_plane_the_z(7, 0, 0);

        let report = validate_store(&store);
        assert!(!report.passed());
    }

    #[test]
    fn test_excess_channels_warn() {
        let mut store = OmeXmlMetadata::new();
        store.set_image_id("Image:0", 0);
        store.set_pixels_id("Pixels:0", 0);
        store.set_pixels_size_c(1, 0);
        store.set_channel_id("Channel:0:0", 0, 0);
        store.set_channel_id("Channel:0:1", 0, 1);

        let report = validate_store(&store);
        assert!(report.passed());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_well_outside_grid_fails() {
        let mut store = OmeXmlMetadata::new();
        store.set_plate_id("Plate:0", 0);
        store.set_plate_rows(8, 0);
        store.set_plate_columns(12, 0);
        store.set_well_id("Well:0:0", 0, 0);
        store.set_well_row(9, 0, 0);

        let report = validate_store(&store);
        assert!(!report.passed());
    }

    #[test]
    fn test_empty_mandatory_id_fails() {
        let mut store = OmeXmlMetadata::new();
        store.set_image_name("unnamed", 0);

        let report = validate_store(&store);
        assert!(!report.passed());
    }
}
