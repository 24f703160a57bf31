//! Built-in demo data.
//!
//! Every table here is read-only; screens borrow or clone what they show.

use chrono::NaiveDate;

use crate::models::{
    Activity, AttendanceRecord, AttendanceStatus, ClassStatus, FeedKind, Insight, Period, ScheduleEntry,
    SubjectPerformance, SubjectStat, Trend, TrendPoint, User, WeeklySummaryDay,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Profile details attached to every mock login.
pub fn demo_profile() -> User {
    User {
        id: "1".to_string(),
        email: "john.doe@college.edu".to_string(),
        name: "John Doe".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        address: "123 College Street, University City".to_string(),
        student_id: "STU2024001".to_string(),
        department: "Computer Science".to_string(),
        year: "3rd Year".to_string(),
        ..Default::default()
    }
}

/// Attendance history for the demo student.
pub fn attendance_records() -> Vec<AttendanceRecord> {
    let rows = [
        (1, "Mathematics", date(2024, 1, 15), "9:00 AM", AttendanceStatus::Present, "Room 101", "Dr. Smith"),
        (2, "Physics", date(2024, 1, 15), "11:00 AM", AttendanceStatus::Present, "Lab 2", "Prof. Johnson"),
        (3, "Computer Science", date(2024, 1, 14), "2:00 PM", AttendanceStatus::Absent, "Room 205", "Dr. Wilson"),
        (4, "English", date(2024, 1, 14), "4:00 PM", AttendanceStatus::Present, "Room 301", "Ms. Davis"),
        (5, "Mathematics", date(2024, 1, 13), "9:00 AM", AttendanceStatus::Late, "Room 101", "Dr. Smith"),
    ];

    rows.into_iter()
        .map(|(id, subject, date, time, status, room, faculty)| AttendanceRecord {
            id,
            subject: subject.to_string(),
            date,
            time: time.to_string(),
            status,
            room: room.to_string(),
            faculty: faculty.to_string(),
        })
        .collect()
}

pub fn subject_stats() -> Vec<SubjectStat> {
    [
        ("Mathematics", 18, 20, 90),
        ("Physics", 16, 18, 89),
        ("Computer Science", 14, 17, 82),
        ("English", 19, 20, 95),
    ]
    .into_iter()
    .map(|(subject, present, total, percentage)| SubjectStat {
        subject: subject.to_string(),
        present,
        total,
        percentage,
    })
    .collect()
}

pub fn weekly_summary() -> Vec<WeeklySummaryDay> {
    [
        ("Monday", 4, 4, 100),
        ("Tuesday", 3, 3, 100),
        ("Wednesday", 4, 3, 75),
        ("Thursday", 3, 3, 100),
        ("Friday", 4, 4, 100),
    ]
    .into_iter()
    .map(|(day, classes, attended, percentage)| WeeklySummaryDay {
        day: day.to_string(),
        classes,
        attended,
        percentage,
    })
    .collect()
}

pub fn todays_schedule() -> Vec<ScheduleEntry> {
    [
        ("9:00 AM", "Mathematics", "Room 101", ClassStatus::Completed),
        ("11:00 AM", "Physics", "Lab 2", ClassStatus::Current),
        ("2:00 PM", "Computer Science", "Room 205", ClassStatus::Upcoming),
        ("4:00 PM", "English", "Room 301", ClassStatus::Upcoming),
    ]
    .into_iter()
    .map(|(time, subject, room, status)| ScheduleEntry {
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
        status,
    })
    .collect()
}

pub fn recent_activity() -> Vec<Activity> {
    [
        ("10:30 AM", "Marked present in Mathematics", FeedKind::Success),
        ("9:15 AM", "Marked present in Physics", FeedKind::Success),
        ("8:00 AM", "Missed Computer Science", FeedKind::Warning),
        ("Yesterday", "Completed Data Structures", FeedKind::Success),
    ]
    .into_iter()
    .map(|(time, description, kind)| Activity {
        time: time.to_string(),
        description: description.to_string(),
        kind,
    })
    .collect()
}

/// Attendance trend series for the selected period.
pub fn trend(period: Period) -> Vec<TrendPoint> {
    let points: &[((i32, u32, u32), f64)] = match period {
        Period::Week => &[
            ((2024, 1, 8), 85.0),
            ((2024, 1, 9), 90.0),
            ((2024, 1, 10), 78.0),
            ((2024, 1, 11), 92.0),
            ((2024, 1, 12), 88.0),
            ((2024, 1, 13), 95.0),
            ((2024, 1, 14), 82.0),
        ],
        Period::Month => &[
            ((2024, 1, 1), 88.0),
            ((2024, 2, 1), 85.0),
            ((2024, 3, 1), 92.0),
            ((2024, 4, 1), 87.0),
            ((2024, 5, 1), 90.0),
            ((2024, 6, 1), 84.0),
        ],
    };

    points
        .iter()
        .map(|&((y, m, d), value)| TrendPoint { date: date(y, m, d), value })
        .collect()
}

pub fn subject_performance() -> Vec<SubjectPerformance> {
    [
        ("Mathematics", 90, Trend::Up, "+5%"),
        ("Physics", 89, Trend::Up, "+2%"),
        ("Computer Science", 82, Trend::Down, "-3%"),
        ("English", 95, Trend::Up, "+8%"),
    ]
    .into_iter()
    .map(|(subject, attendance, trend, change)| SubjectPerformance {
        subject: subject.to_string(),
        attendance,
        trend,
        change: change.to_string(),
    })
    .collect()
}

pub fn insights() -> Vec<Insight> {
    [
        ("Great Progress!", "Your attendance has improved by 5% this week.", FeedKind::Success),
        (
            "Watch Computer Science",
            "Attendance dropped by 3%. Consider setting reminders.",
            FeedKind::Warning,
        ),
        (
            "Perfect Week Streak",
            "You've had 2 perfect attendance weeks in a row!",
            FeedKind::Success,
        ),
    ]
    .into_iter()
    .map(|(title, description, kind)| Insight {
        title: title.to_string(),
        description: description.to_string(),
        kind,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_lengths() {
        assert_eq!(trend(Period::Week).len(), 7);
        assert_eq!(trend(Period::Month).len(), 6);
    }

    #[test]
    fn test_attendance_records_are_dated() {
        let records = attendance_records();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.date != NaiveDate::default()));
    }

    #[test]
    fn test_subject_percentages_match_counts() {
        for stat in subject_stats() {
            let computed = (stat.present * 100 + stat.total / 2) / stat.total;
            assert!(computed.abs_diff(stat.percentage) <= 1, "{}", stat.subject);
        }
    }
}
