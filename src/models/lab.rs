use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Completed,
    Pending,
}

impl LabStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LabStatus::Completed => "completed",
            LabStatus::Pending => "pending",
        }
    }
}

/// Where a measured value sits relative to its reference range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Normal,
    High,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabParameter {
    pub parameter: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: ParameterStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabResult {
    pub id: u32,
    pub test_name: String,
    pub test_date: NaiveDate,
    pub status: LabStatus,
    pub ordered_by: String,
    #[serde(default)]
    pub results: Vec<LabParameter>,
    pub report_url: String,
}

impl LabResult {
    pub fn is_completed(&self) -> bool {
        self.status == LabStatus::Completed
    }

    /// Parameters outside their reference range.
    pub fn flagged(&self) -> impl Iterator<Item = &LabParameter> {
        self.results
            .iter()
            .filter(|p| p.status != ParameterStatus::Normal)
    }
}

/// One sample of the hemoglobin trend chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    #[serde(rename = "Hemoglobin")]
    pub hemoglobin: f64,
}
