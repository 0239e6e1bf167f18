use serde::{Deserialize, Serialize};

/// Per-field verdict in the backend's detail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Match,
    Mismatch,
}

/// One checked field and the backend's message about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDetail {
    pub field: String,
    pub status: FieldStatus,
    pub message: String,
}

/// One line of the regulatory compliance report, with its CFR citation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub item: String,
    pub compliant: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    pub citation: String,
}

impl ComplianceItem {
    /// The issue text, meaningful only for non-compliant entries. The
    /// backend sends an empty string for compliant ones.
    pub fn issue_text(&self) -> Option<&str> {
        if self.compliant {
            return None;
        }
        self.issue.as_deref().filter(|text| !text.is_empty())
    }
}

/// The backend's structured judgment of one submission. Immutable once
/// received; `details` and `complianceReport` preserve backend order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_match: bool,
    pub details: Vec<FieldDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_report: Option<Vec<ComplianceItem>>,
}
