//! Role-specific dashboard and analytics content.
//!
//! Each role is a [`RoleView`] implementation. [`view_for`] dispatches with an
//! exhaustive match, so a new [`Role`] variant does not compile until it has
//! a view.

use crate::models::{Role, Trend, TrendStat};
use crate::routes::Route;

/// Icon hint for a stat card or action. The UI maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    TrendUp,
    Calendar,
    BookOpen,
    Alert,
    Users,
    Clock,
    QrCode,
    Camera,
    Gear,
}

/// Headline number on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub glyph: Glyph,
}

/// Shortcut button on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub route: Route,
    pub glyph: Glyph,
}

/// Optional blocks that only some roles see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    RecentActivity,
    TodaysSchedule,
}

/// Everything the home screen needs to know about a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardView {
    pub stats: &'static [StatCard],
    pub quick_actions: &'static [QuickAction],
    pub sections: &'static [Section],
}

impl DashboardView {
    pub fn shows(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

/// Header and headline figures of the analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: &'static [TrendStat],
    /// Per-subject attendance block, only meaningful for a single student.
    pub subject_performance: bool,
}

/// Content provider for one role.
pub trait RoleView {
    fn dashboard(&self) -> DashboardView;
    fn analytics(&self) -> AnalyticsView;
}

pub struct StudentView;
pub struct FacultyView;
pub struct AdminView;

const fn stat(label: &'static str, value: &'static str, glyph: Glyph) -> StatCard {
    StatCard { label, value, glyph }
}

const fn action(label: &'static str, route: Route, glyph: Glyph) -> QuickAction {
    QuickAction { label, route, glyph }
}

const fn up(label: &'static str, value: &'static str, change: &'static str) -> TrendStat {
    TrendStat {
        label,
        value,
        change,
        trend: Trend::Up,
    }
}

const STUDENT_STATS: &[StatCard] = &[
    stat("Attendance Rate", "87%", Glyph::TrendUp),
    stat("Classes Today", "4", Glyph::Calendar),
    stat("Total Classes", "156", Glyph::BookOpen),
    stat("Alerts", "2", Glyph::Alert),
];

const STUDENT_ACTIONS: &[QuickAction] = &[
    action("Mark Attendance", Route::AttendanceScan, Glyph::QrCode),
    action("View Schedule", Route::Attendance, Glyph::Calendar),
    action("Face Check-in", Route::AttendanceFace, Glyph::Camera),
];

const STUDENT_SECTIONS: &[Section] = &[Section::RecentActivity, Section::TodaysSchedule];

const STUDENT_ANALYTICS: &[TrendStat] = &[
    up("Overall Rate", "87%", "+3.2%"),
    up("This Week", "92%", "+5%"),
    up("Classes Attended", "156", "+8"),
    up("Perfect Days", "12", "+2"),
];

const FACULTY_STATS: &[StatCard] = &[
    stat("Active Classes", "8", Glyph::BookOpen),
    stat("Students", "240", Glyph::Users),
    stat("Avg Attendance", "82%", Glyph::TrendUp),
    stat("Sessions Today", "3", Glyph::Clock),
];

const FACULTY_ACTIONS: &[QuickAction] = &[
    action("Take Attendance", Route::Faculty, Glyph::QrCode),
    action("View Reports", Route::Analytics, Glyph::TrendUp),
    action("Manage Classes", Route::Faculty, Glyph::BookOpen),
];

const FACULTY_ANALYTICS: &[TrendStat] = &[
    up("Avg Attendance", "84%", "+2.5%"),
    up("Active Students", "240", "+12"),
    up("Classes This Week", "18", "+3"),
    up("Completion Rate", "96%", "+1.2%"),
];

const ADMIN_STATS: &[StatCard] = &[
    stat("Total Students", "1,250", Glyph::Users),
    stat("Active Faculty", "45", Glyph::Users),
    stat("Overall Rate", "84%", Glyph::TrendUp),
    stat("Live Sessions", "12", Glyph::Clock),
];

const ADMIN_ACTIONS: &[QuickAction] = &[
    action("Manage Users", Route::Admin, Glyph::Users),
    action("System Reports", Route::Analytics, Glyph::TrendUp),
    action("Settings", Route::Admin, Glyph::Gear),
];

const ADMIN_ANALYTICS: &[TrendStat] = &[
    up("Overall Attendance", "84%", "+1.8%"),
    up("Total Students", "1,250", "+45"),
    up("Active Faculty", "45", "+2"),
    up("System Uptime", "99.8%", "+0.1%"),
];

impl RoleView for StudentView {
    fn dashboard(&self) -> DashboardView {
        DashboardView {
            stats: STUDENT_STATS,
            quick_actions: STUDENT_ACTIONS,
            sections: STUDENT_SECTIONS,
        }
    }

    fn analytics(&self) -> AnalyticsView {
        AnalyticsView {
            title: "My Analytics",
            subtitle: "Track your attendance progress",
            stats: STUDENT_ANALYTICS,
            subject_performance: true,
        }
    }
}

impl RoleView for FacultyView {
    fn dashboard(&self) -> DashboardView {
        DashboardView {
            stats: FACULTY_STATS,
            quick_actions: FACULTY_ACTIONS,
            sections: &[],
        }
    }

    fn analytics(&self) -> AnalyticsView {
        AnalyticsView {
            title: "Class Analytics",
            subtitle: "Monitor your class performance",
            stats: FACULTY_ANALYTICS,
            subject_performance: false,
        }
    }
}

impl RoleView for AdminView {
    fn dashboard(&self) -> DashboardView {
        DashboardView {
            stats: ADMIN_STATS,
            quick_actions: ADMIN_ACTIONS,
            sections: &[],
        }
    }

    fn analytics(&self) -> AnalyticsView {
        AnalyticsView {
            title: "System Analytics",
            subtitle: "College-wide performance metrics",
            stats: ADMIN_ANALYTICS,
            subject_performance: false,
        }
    }
}

/// Pick the view for a role.
pub fn view_for(role: Role) -> &'static dyn RoleView {
    match role {
        Role::Student => &StudentView,
        Role::Faculty => &FacultyView,
        Role::Admin => &AdminView,
    }
}

pub fn dashboard_for(role: Role) -> DashboardView {
    view_for(role).dashboard()
}

pub fn analytics_for(role: Role) -> AnalyticsView {
    view_for(role).analytics()
}

/// Dashboard for a raw role string; unknown roles get the student view.
pub fn dashboard_for_str(role: &str) -> DashboardView {
    dashboard_for(Role::from_str_lossy(role))
}
