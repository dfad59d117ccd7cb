use ::common::{ConsistencyError, ModelError};
use serde::Serialize;
use tracing::info;

use crate::args::ResourceKind;
use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: &'static str,
    pub message: String,
}

impl From<&ModelError> for Issue {
    fn from(err: &ModelError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<&ConsistencyError> for Issue {
    fn from(err: &ConsistencyError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Outcome of decoding and checking one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub kind: &'static str,
    pub decoded: bool,
    pub consistency_checked: bool,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.decoded && self.issues.is_empty()
    }
}

pub fn validate_payload(kind: ResourceKind, payload: &str, consistency: bool) -> ValidationReport {
    let document = match Document::decode(kind, payload) {
        Ok(document) => document,
        Err(err) => {
            return ValidationReport {
                kind: kind.as_str(),
                decoded: false,
                consistency_checked: false,
                issues: vec![Issue::from(&err)],
            };
        }
    };

    let issues = if consistency {
        document
            .consistency_issues()
            .iter()
            .map(Issue::from)
            .collect()
    } else {
        Vec::new()
    };
    info!(
        kind = document.kind().as_str(),
        issues = issues.len(),
        "validated payload"
    );

    ValidationReport {
        kind: document.kind().as_str(),
        decoded: true,
        consistency_checked: consistency,
        issues,
    }
}

pub fn render_report(report: &ValidationReport) -> String {
    let header = match (report.decoded, report.issues.len()) {
        (false, _) => "invalid (not decodable)".to_string(),
        (true, 0) if report.consistency_checked => "ok (decoded and consistent)".to_string(),
        (true, 0) => "ok (decoded)".to_string(),
        (true, count) => format!("invalid ({count} issue(s))"),
    };
    let mut lines = vec![format!("{}: {header}", report.kind)];
    for issue in &report.issues {
        lines.push(format!("  [{}] {}", issue.code, issue.message));
    }
    lines.join("\n")
}
