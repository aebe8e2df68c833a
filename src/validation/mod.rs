//! Document validation for pantrack.
//!
//! Readers accept partial data: GPX and KML
//! keep unreadable coordinates as NaN. Validation is where such data is
//! surfaced, checking for:
//! - Structural integrity (identifier layout, non-empty paths)
//! - Data quality (finite coordinates, non-empty descriptions)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::ir::Document;

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a document and returns a report of all issues found.
pub fn validate_document(document: &Document, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    if document.is_empty() {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyDocument,
            "Document has no points and no paths",
            IssueContext::Document,
        ));
    }

    validate_points(document, &mut report);
    validate_paths(document, &mut report);

    report
}

fn validate_points(document: &Document, report: &mut ValidationReport) {
    for (id, point) in &document.points {
        let context = || IssueContext::Point(id.to_string());

        if !id.is_well_formed() {
            report.add(ValidationIssue::error(
                IssueCode::MalformedId,
                format!("Identifier '{}' is not in the generated layout", id),
                context(),
            ));
        }

        if !point.coords.is_finite() {
            report.add(ValidationIssue::warning(
                IssueCode::PointNotFinite,
                format!(
                    "Coordinates ({}, {}) are not finite",
                    point.coords.lon, point.coords.lat
                ),
                context(),
            ));
        }

        if point.desc.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyDescription,
                "Empty description",
                context(),
            ));
        }
    }
}

fn validate_paths(document: &Document, report: &mut ValidationReport) {
    for (id, path) in &document.paths {
        let context = || IssueContext::Path(id.to_string());

        if !id.is_well_formed() {
            report.add(ValidationIssue::error(
                IssueCode::MalformedId,
                format!("Identifier '{}' is not in the generated layout", id),
                context(),
            ));
        }

        if path.is_empty() {
            report.add(ValidationIssue::error(
                IssueCode::EmptyPath,
                "Path has no vertices",
                context(),
            ));
            continue;
        }

        let bad_vertices = path.coords().iter().filter(|c| !c.is_finite()).count();
        if bad_vertices > 0 {
            report.add(ValidationIssue::warning(
                IssueCode::PathVertexNotFinite,
                format!(
                    "{} of {} vertices are not finite",
                    bad_vertices,
                    path.len()
                ),
                context(),
            ));
        }
    }
}
