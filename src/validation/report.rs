//! Findings produced by checking a converted track document.
//!
//! A report is printed by `pantrack validate` as text, or serialized as the
//! `issues` array of its JSON output.

use std::fmt;

use serde::Serialize;

/// Everything found wrong with one document, in discovery order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Issues that break a document invariant.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Issues on storable but suspicious data, such as NaN coordinates.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// True when the document can be stored as is (warnings allowed).
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// True if any issue carries `code`.
    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Document OK: every point and path checks out");
        }

        writeln!(
            f,
            "Document has {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// One finding, tied to the point or path it concerns.
#[derive(Clone, Debug, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,

    pub code: IssueCode,

    /// Human-readable detail, e.g. the offending coordinates.
    pub message: String,

    pub context: IssueContext,
}

impl ValidationIssue {
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        context: IssueContext,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context,
        }
    }

    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Error, code, message, context)
    }

    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Warning, code, message, context)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// Whether an issue blocks `validate` (errors always, warnings under `--strict`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Suspicious but storable data.
    Warning,
    /// Data that breaks the document's invariants.
    Error,
}

/// Machine-readable kind of an issue; stable across releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    /// The document has neither points nor paths.
    EmptyDocument,
    /// A key does not follow the generated identifier layout.
    MalformedId,
    /// A point has a NaN or infinite coordinate.
    PointNotFinite,
    /// A point has an empty description.
    EmptyDescription,
    /// A path has no vertices.
    EmptyPath,
    /// A path has one or more NaN or infinite vertices.
    PathVertexNotFinite,
}

/// The feature an issue points at, by its identifier.
///
/// Serialized as `{"kind": "point", "id": "..."}`.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum IssueContext {
    Document,
    Point(String),
    Path(String),
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Document => write!(f, "document"),
            IssueContext::Point(id) => write!(f, "point {}", id),
            IssueContext::Path(id) => write!(f, "path {}", id),
        }
    }
}
