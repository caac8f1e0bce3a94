//! Roles and the static role → permission table.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::permission::Permission;

/// Account roles. Wire names are PascalCase (`SuperAdmin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

pub const ALL_ROLES: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::User];

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SuperAdmin",
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ROLES
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::CreateStory,
    Permission::EditOwnStory,
    Permission::DeleteOwnStory,
    Permission::ApproveStory,
    Permission::RejectStory,
    Permission::DeleteAnyStory,
    Permission::ViewPendingStories,
    Permission::CommentStory,
    Permission::ModerateComments,
    Permission::ViewUsers,
    Permission::EditUsers,
    Permission::DeleteUsers,
    Permission::ManageUserRoles,
    Permission::ManageSlides,
    Permission::ManageAds,
    Permission::ManageSettings,
    Permission::AccessDashboard,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::CreateStory,
    Permission::EditOwnStory,
    Permission::DeleteOwnStory,
    Permission::ApproveStory,
    Permission::RejectStory,
    Permission::ViewPendingStories,
    Permission::CommentStory,
    Permission::ModerateComments,
    Permission::ViewUsers,
    Permission::ManageSlides,
    Permission::ManageAds,
    Permission::AccessDashboard,
];

const USER_PERMISSIONS: &[Permission] = &[
    Permission::CreateStory,
    Permission::EditOwnStory,
    Permission::DeleteOwnStory,
    Permission::CommentStory,
];

/// Permissions granted by a single role.
pub const fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
        Role::User => USER_PERMISSIONS,
    }
}

impl Role {
    pub fn grants(self, permission: Permission) -> bool {
        role_permissions(self).contains(&permission)
    }
}
