//! User, role, and profile field types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Campus role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Faculty, Role::Admin];

    /// Lowercase identifier used in routes, config, and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }

    /// Get the display name for the role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role, treating anything unrecognised as a student.
    ///
    /// Matching is exact: `"Admin"` or `" faculty "` are students.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a role string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Signed-in user with profile details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub student_id: String,
    pub department: String,
    pub year: String,
}

impl User {
    /// Read a profile field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
            ProfileField::StudentId => &self.student_id,
            ProfileField::Department => &self.department,
            ProfileField::Year => &self.year,
        }
    }

    /// Mutable access to a profile field.
    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Address => &mut self.address,
            ProfileField::StudentId => &mut self.student_id,
            ProfileField::Department => &mut self.department,
            ProfileField::Year => &mut self.year,
        }
    }
}

/// Section a profile field is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    Personal,
    Academic,
}

impl ProfileSection {
    pub fn title(&self) -> &'static str {
        match self {
            ProfileSection::Personal => "Personal Information",
            ProfileSection::Academic => "Academic Information",
        }
    }

    /// Fields shown in this section, in display order.
    pub fn fields(&self) -> &'static [ProfileField] {
        match self {
            ProfileSection::Personal => &[
                ProfileField::Name,
                ProfileField::Email,
                ProfileField::Phone,
                ProfileField::Address,
            ],
            ProfileSection::Academic => &[ProfileField::StudentId, ProfileField::Department, ProfileField::Year],
        }
    }
}

/// Individually addressable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    StudentId,
    Department,
    Year,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Address,
        ProfileField::StudentId,
        ProfileField::Department,
        ProfileField::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Address => "Address",
            ProfileField::StudentId => "Student ID",
            ProfileField::Department => "Department",
            ProfileField::Year => "Year",
        }
    }

    /// Academic fields are assigned by the institution and cannot be edited.
    pub fn is_editable(&self) -> bool {
        self.section() == ProfileSection::Personal
    }

    pub fn section(&self) -> ProfileSection {
        match self {
            ProfileField::Name | ProfileField::Email | ProfileField::Phone | ProfileField::Address => {
                ProfileSection::Personal
            }
            ProfileField::StudentId | ProfileField::Department | ProfileField::Year => ProfileSection::Academic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known() {
        assert_eq!("faculty".parse::<Role>(), Ok(Role::Faculty));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_match_is_exact() {
        for input in ["Admin", "ADMIN", "FACULTY", "Faculty", " faculty ", "admin\n"] {
            assert_eq!(Role::from_str_lossy(input), Role::Student, "input {input:?}");
        }
    }

    #[test]
    fn test_role_lossy_falls_back_to_student() {
        for input in ["", "teacher", "root", "STUDENTS", "guest"] {
            assert_eq!(Role::from_str_lossy(input), Role::Student, "input {input:?}");
        }
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Faculty).unwrap();
        assert_eq!(json, "\"faculty\"");
    }

    #[test]
    fn test_field_access_covers_every_field() {
        let mut user = User::default();
        for (i, field) in ProfileField::ALL.iter().enumerate() {
            *user.field_mut(*field) = format!("value-{i}");
        }
        for (i, field) in ProfileField::ALL.iter().enumerate() {
            assert_eq!(user.field(*field), format!("value-{i}"));
        }
    }

    #[test]
    fn test_only_personal_fields_editable() {
        let editable: Vec<_> = ProfileField::ALL.iter().filter(|f| f.is_editable()).collect();
        assert_eq!(editable.len(), 4);
        assert!(!ProfileField::StudentId.is_editable());
        assert!(!ProfileField::Year.is_editable());
    }
}
