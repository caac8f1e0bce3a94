//! Permission checks over the roles held by one account.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::permission::Permission;
use crate::role::{Role, role_permissions};

/// Landing path for Admin and SuperAdmin accounts.
pub const ADMIN_REDIRECT_PATH: &str = "/admin/dashboard";

/// Landing path for everyone else.
pub const DEFAULT_REDIRECT_PATH: &str = "/";

/// The known roles held by an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleSet {
    roles: BTreeSet<Role>,
}

impl RoleSet {
    /// Build from role names. Unknown names grant nothing and are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roles = BTreeSet::new();
        for name in names {
            match name.as_ref().parse::<Role>() {
                Ok(role) => {
                    roles.insert(role);
                }
                Err(e) => debug!(error = %e, "ignoring role"),
            }
        }
        Self { roles }
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    /// True if any held role grants `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.roles.iter().any(|r| r.grants(permission))
    }

    /// Union of the permissions of all held roles.
    pub fn permissions(&self) -> BTreeSet<Permission> {
        self.roles
            .iter()
            .flat_map(|&r| role_permissions(r).iter().copied())
            .collect()
    }

    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.contains(Role::SuperAdmin)
    }

    /// Holds User and neither of the admin roles.
    pub fn is_regular_user(&self) -> bool {
        self.contains(Role::User) && !self.is_admin() && !self.is_super_admin()
    }

    /// Where the account lands after signing in.
    pub fn redirect_path(&self) -> &'static str {
        if self.is_admin() || self.is_super_admin() {
            ADMIN_REDIRECT_PATH
        } else {
            DEFAULT_REDIRECT_PATH
        }
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

/// Check a permission name against role names.
///
/// Unknown role names and unknown permission names both yield `false`.
pub fn has_permission<I, S>(roles: I, permission: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match permission.parse::<Permission>() {
        Ok(p) => RoleSet::from_names(roles).has_permission(p),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_nothing() {
        let set = RoleSet::default();
        assert!(set.is_empty());
        assert!(!set.has_permission(Permission::CommentStory));
        assert!(set.permissions().is_empty());
        assert_eq!(set.redirect_path(), "/");
        assert!(!set.is_regular_user());
    }

    #[test]
    fn unknown_names_dropped() {
        let set = RoleSet::from_names(["Guest", "User", "admin"]);
        assert_eq!(set.roles().collect::<Vec<_>>(), vec![Role::User]);
    }

    #[test]
    fn union_across_roles() {
        let set = RoleSet::from_names(["User", "Admin"]);
        assert!(set.has_permission(Permission::ApproveStory));
        assert!(set.has_permission(Permission::CommentStory));
        assert!(!set.has_permission(Permission::ManageSettings));
        assert_eq!(set.permissions().len(), 12);
    }

    #[test]
    fn regular_user() {
        assert!(RoleSet::from_names(["User"]).is_regular_user());
        assert!(!RoleSet::from_names(["User", "Admin"]).is_regular_user());
        assert!(!RoleSet::from_names(["User", "SuperAdmin"]).is_regular_user());
    }

    #[test]
    fn admin_flags() {
        let set = RoleSet::from_names(["SuperAdmin"]);
        assert!(set.is_super_admin());
        assert!(!set.is_admin());
    }

    #[test]
    fn redirect_paths() {
        assert_eq!(RoleSet::from_names(["Admin"]).redirect_path(), ADMIN_REDIRECT_PATH);
        assert_eq!(
            RoleSet::from_names(["SuperAdmin"]).redirect_path(),
            ADMIN_REDIRECT_PATH
        );
        assert_eq!(RoleSet::from_names(["User"]).redirect_path(), DEFAULT_REDIRECT_PATH);
    }

    #[test]
    fn free_function() {
        assert!(has_permission(["User"], "comment_story"));
        assert!(!has_permission(["User"], "approve_story"));
        assert!(has_permission(vec!["User".to_string(), "Admin".to_string()], "approve_story"));
        assert!(!has_permission(["Admin"], "no_such_permission"));
        assert!(!has_permission(Vec::<String>::new(), "comment_story"));
    }

    #[test]
    fn from_iterator() {
        let set: RoleSet = [Role::Admin, Role::Admin].into_iter().collect();
        assert_eq!(set.roles().count(), 1);
    }
}
