//! Named navigation routes.

use std::fmt;

/// Screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Login,
    Home,
    Attendance,
    Analytics,
    Profile,
    Admin,
    Faculty,
    AttendanceScan,
    AttendanceFace,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Home,
        Route::Attendance,
        Route::Analytics,
        Route::Profile,
        Route::Admin,
        Route::Faculty,
        Route::AttendanceScan,
        Route::AttendanceFace,
    ];

    /// Routes shown in the bottom tab bar.
    pub const TABS: [Route; 4] = [Route::Home, Route::Attendance, Route::Analytics, Route::Profile];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Home => "home",
            Route::Attendance => "attendance",
            Route::Analytics => "analytics",
            Route::Profile => "profile",
            Route::Admin => "admin",
            Route::Faculty => "faculty",
            Route::AttendanceScan => "attendance/scan",
            Route::AttendanceFace => "attendance/face",
        }
    }

    /// Get the display name for the route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Attendance => "Attendance",
            Route::Analytics => "Analytics",
            Route::Profile => "Profile",
            Route::Admin => "Admin",
            Route::Faculty => "Faculty",
            Route::AttendanceScan => "Scan QR Code",
            Route::AttendanceFace => "Face Recognition",
        }
    }

    /// Parse a path such as `/(tabs)/home` or `attendance/scan`.
    ///
    /// An empty path is the index route and resolves to `Home`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let trimmed = trimmed.strip_prefix("(tabs)").unwrap_or(trimmed).trim_start_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Home);
        }
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    pub fn is_tab(&self) -> bool {
        Route::TABS.contains(self)
    }

    /// Full-screen camera overlays hide the tab bar.
    pub fn is_checkin(&self) -> bool {
        matches!(self, Route::AttendanceScan | Route::AttendanceFace)
    }

    /// Resolve the route actually shown given the authentication state.
    pub fn guard(self, authenticated: bool) -> Route {
        match (self, authenticated) {
            (_, false) => Route::Login,
            (Route::Login, true) => Route::Home,
            (route, true) => route,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_back() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
            assert_eq!(Route::from_path(&route.to_string()), Some(route));
        }
    }

    #[test]
    fn test_tabs_group_prefix() {
        assert_eq!(Route::from_path("/(tabs)/home"), Some(Route::Home));
        assert_eq!(Route::from_path("/(tabs)"), Some(Route::Home));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/settings/privacy"), None);
    }

    #[test]
    fn test_guard_redirects() {
        for route in Route::ALL {
            assert_eq!(route.guard(false), Route::Login);
        }
        assert_eq!(Route::Login.guard(true), Route::Home);
        assert_eq!(Route::AttendanceFace.guard(true), Route::AttendanceFace);
    }

    #[test]
    fn test_admin_and_faculty_hidden_from_tabs() {
        assert!(!Route::Admin.is_tab());
        assert!(!Route::Faculty.is_tab());
        assert!(Route::Profile.is_tab());
    }
}
