//! Data models for users, attendance records, and analytics.

pub mod analytics;
pub mod attendance;
pub mod user;

pub use analytics::{Insight, Period, SubjectPerformance, Trend, TrendPoint, TrendStat};
pub use attendance::{
    Activity, AttendanceRecord, AttendanceStatus, ClassStatus, FeedKind, ScheduleEntry, StatusFilter, SubjectStat,
    WeeklySummaryDay,
};
pub use user::{ProfileField, ProfileSection, Role, User};
