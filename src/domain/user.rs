// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Manager,
    Teacher,
    Student,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Manager, UserRole::Teacher, UserRole::Student];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            UserRole::Manager => "role-manager",
            UserRole::Teacher => "role-teacher",
            UserRole::Student => "role-student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UserStatus::Active => "user-status-active",
            UserStatus::Inactive => "user-status-inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// An institution member as listed on the manager's user screen.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_active: NaiveDate,
}

impl UserAccount {
    /// Case-insensitive match against name and email, used by the user
    /// screen's search box.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserAccount {
        UserAccount {
            id: UserId(1),
            name: "Amelia Torres".into(),
            email: "amelia.torres@northgate.edu".into(),
            role: UserRole::Teacher,
            status: UserStatus::Active,
            last_active: NaiveDate::from_ymd_opt(2025, 5, 28).unwrap(),
        }
    }

    #[test]
    fn matches_is_case_insensitive_over_name_and_email() {
        let user = sample_user();
        assert!(user.matches("amelia"));
        assert!(user.matches("TORRES"));
        assert!(user.matches("northgate.edu"));
        assert!(!user.matches("zoe"));
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert!(sample_user().matches(""));
    }

    #[test]
    fn toggled_status_flips_both_ways() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
    }
}
