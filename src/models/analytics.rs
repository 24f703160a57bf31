//! Analytics view models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance::FeedKind;

/// Direction of change versus the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// Graph range toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
        }
    }
}

/// A single point on the attendance trend graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Headline analytics figure with its change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// Per-subject attendance with direction of change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub subject: String,
    pub attendance: u32,
    pub trend: Trend,
    pub change: String,
}

/// Recommendation shown at the bottom of the analytics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub kind: FeedKind,
}
