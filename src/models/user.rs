use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Account role, as supplied by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID (uniqueness is the caller's concern)
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Age in years, any value accepted
    pub age: i64,
    /// Whether the user account is active
    pub is_active: bool,
    /// Whether the user holds the access permission
    pub has_permission: bool,
    pub role: Role,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        is_active: bool,
        has_permission: bool,
        role: Role,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            is_active,
            has_permission,
            role,
        }
    }
}

/// Status label derived from a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Underage,
    Suspended,
    Inactive,
    Admin,
    Moderator,
    User,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Underage => "underage",
            UserStatus::Suspended => "suspended",
            UserStatus::Inactive => "inactive",
            UserStatus::Admin => "admin",
            UserStatus::Moderator => "moderator",
            UserStatus::User => "user",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Role> for UserStatus {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => UserStatus::Admin,
            Role::Moderator => UserStatus::Moderator,
            Role::User => UserStatus::User,
        }
    }
}

/// A user record together with its derived status.
///
/// Serializes as the original record with an extra `status` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedUser {
    #[serde(flatten)]
    pub user: User,
    pub status: UserStatus,
}

/// Classify a user. First matching rule wins:
/// age <= 18, inactive account, missing permission, then the role itself.
pub fn determine_user_status(user: &User) -> UserStatus {
    if user.age <= 18 {
        return UserStatus::Underage;
    }
    if !user.is_active {
        return UserStatus::Suspended;
    }
    if !user.has_permission {
        return UserStatus::Inactive;
    }

    UserStatus::from(user.role)
}

/// Copy the user and attach its status. The input is left untouched.
pub fn process_user_data(user: &User) -> ProcessedUser {
    let status = determine_user_status(user);

    trace!(user_id = user.id, status = %status, "User classified");

    ProcessedUser {
        user: user.clone(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adult(role: Role) -> User {
        User::new(7, "Bob", "bob@example.com", 30, true, true, role)
    }

    #[test]
    fn test_underage_wins_over_everything() {
        for age in [-5, 0, 17, 18] {
            let user = User::new(1, "A", "a@x.com", age, false, false, Role::Admin);
            assert_eq!(determine_user_status(&user), UserStatus::Underage, "age {}", age);
        }
    }

    #[test]
    fn test_nineteen_is_not_underage() {
        let user = User::new(1, "A", "a@x.com", 19, true, true, Role::User);
        assert_eq!(determine_user_status(&user), UserStatus::User);
    }

    #[test]
    fn test_inactive_account_is_suspended() {
        let mut user = adult(Role::Admin);
        user.is_active = false;
        assert_eq!(determine_user_status(&user), UserStatus::Suspended);

        // Suspension takes precedence over a missing permission
        user.has_permission = false;
        assert_eq!(determine_user_status(&user), UserStatus::Suspended);
    }

    #[test]
    fn test_missing_permission_is_inactive() {
        let mut user = adult(Role::Moderator);
        user.has_permission = false;
        assert_eq!(determine_user_status(&user), UserStatus::Inactive);
    }

    #[test]
    fn test_role_mapping() {
        assert_eq!(determine_user_status(&adult(Role::Admin)), UserStatus::Admin);
        assert_eq!(determine_user_status(&adult(Role::Moderator)), UserStatus::Moderator);
        assert_eq!(determine_user_status(&adult(Role::User)), UserStatus::User);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(UserStatus::Underage.to_string(), "underage");
        assert_eq!(UserStatus::Suspended.as_str(), "suspended");
        assert_eq!(UserStatus::Inactive.as_str(), "inactive");
        assert_eq!(UserStatus::Moderator.to_string(), "moderator");
    }

    #[test]
    fn test_process_user_data_keeps_fields() {
        let user = adult(Role::Moderator);
        let processed = process_user_data(&user);

        assert_eq!(processed.user, user);
        assert_eq!(processed.status, determine_user_status(&user));
    }

    #[test]
    fn test_process_user_data_serialized_shape() {
        let input = serde_json::json!({
            "id": 1,
            "name": "A",
            "email": "a@x.com",
            "age": 17,
            "isActive": true,
            "hasPermission": true,
            "role": "admin"
        });
        let user: User = serde_json::from_value(input.clone()).unwrap();

        let output = serde_json::to_value(process_user_data(&user)).unwrap();

        let mut expected = input;
        expected["status"] = serde_json::json!("underage");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result: Result<User, _> = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "A",
            "email": "a@x.com",
            "age": 40,
            "isActive": true,
            "hasPermission": true,
            "role": "owner"
        }));
        assert!(result.is_err());
    }
}
