//! Attendance records and the summary rows shown next to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a single class session for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }
}

/// One attended (or missed) class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub subject: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AttendanceStatus,
    pub room: String,
    pub faculty: String,
}

/// History filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Absent,
    Late,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Present,
        StatusFilter::Absent,
        StatusFilter::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Present => "Present",
            StatusFilter::Absent => "Absent",
            StatusFilter::Late => "Late",
        }
    }

    /// Check whether a status passes this filter.
    pub fn matches(&self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Present => status == AttendanceStatus::Present,
            StatusFilter::Absent => status == AttendanceStatus::Absent,
            StatusFilter::Late => status == AttendanceStatus::Late,
        }
    }
}

/// Per-subject attendance tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStat {
    pub subject: String,
    pub present: u32,
    pub total: u32,
    pub percentage: u32,
}

/// One row of the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummaryDay {
    pub day: String,
    pub classes: u32,
    pub attended: u32,
    pub percentage: u32,
}

/// Where a class sits relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassStatus {
    Completed,
    Current,
    Upcoming,
}

impl ClassStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClassStatus::Completed => "Completed",
            ClassStatus::Current => "Now",
            ClassStatus::Upcoming => "Upcoming",
        }
    }
}

/// Entry in today's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub subject: String,
    pub room: String,
    pub status: ClassStatus,
}

/// Tone of a feed item (activity, insight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedKind {
    Success,
    Warning,
}

/// Recent activity feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub description: String,
    pub kind: FeedKind,
}
