//! Portal permissions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// Every permission the portal checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Permission {
    CreateStory,
    EditOwnStory,
    DeleteOwnStory,
    ApproveStory,
    RejectStory,
    DeleteAnyStory,
    ViewPendingStories,
    CommentStory,
    ModerateComments,
    ViewUsers,
    EditUsers,
    DeleteUsers,
    ManageUserRoles,
    ManageSlides,
    ManageAds,
    ManageSettings,
    AccessDashboard,
}

/// All permissions in declaration order.
pub const ALL_PERMISSIONS: [Permission; 17] = [
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

impl Permission {
    /// Wire name, e.g. `approve_story`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateStory => "create_story",
            Self::EditOwnStory => "edit_own_story",
            Self::DeleteOwnStory => "delete_own_story",
            Self::ApproveStory => "approve_story",
            Self::RejectStory => "reject_story",
            Self::DeleteAnyStory => "delete_any_story",
            Self::ViewPendingStories => "view_pending_stories",
            Self::CommentStory => "comment_story",
            Self::ModerateComments => "moderate_comments",
            Self::ViewUsers => "view_users",
            Self::EditUsers => "edit_users",
            Self::DeleteUsers => "delete_users",
            Self::ManageUserRoles => "manage_user_roles",
            Self::ManageSlides => "manage_slides",
            Self::ManageAds => "manage_ads",
            Self::ManageSettings => "manage_settings",
            Self::AccessDashboard => "access_dashboard",
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PERMISSIONS
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}
