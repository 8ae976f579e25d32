//! State and pure guard logic for admin-account and API-key management.

use std::collections::HashSet;

use yew::NodeRef;

use common::model::admin::AdminAccount;
use common::model::api_key::ApiKey;
use common::requests::CreateApiKeyResponse;

use crate::session::Session;

/// Destructive action awaiting typed confirmation in the modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteAdmin { id: i64, email: String },
    /// Grant or revoke the super-admin role.
    ChangeRole {
        id: i64,
        email: String,
        make_super: bool,
    },
    DeleteApiKey { id: i64, name: String },
}

impl ConfirmAction {
    /// The exact string the admin must type to arm the confirm button.
    pub fn expected_confirmation(&self) -> &str {
        match self {
            ConfirmAction::DeleteAdmin { email, .. } => email,
            ConfirmAction::ChangeRole { email, .. } => email,
            ConfirmAction::DeleteApiKey { name, .. } => name,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ConfirmAction::DeleteAdmin { email, .. } => {
                format!("Delete the admin account {email}? This cannot be undone.")
            }
            ConfirmAction::ChangeRole {
                email,
                make_super: true,
                ..
            } => format!("Grant super-admin rights to {email}?"),
            ConfirmAction::ChangeRole { email, .. } => {
                format!("Revoke super-admin rights from {email}?")
            }
            ConfirmAction::DeleteApiKey { name, .. } => {
                format!("Delete the API key \"{name}\"? Clients using it will stop working.")
            }
        }
    }
}

pub fn confirmation_matches(action: &ConfirmAction, typed: &str) -> bool {
    typed.trim() == action.expected_confirmation()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfProtectError {
    OwnAccountDeletion,
    OwnSuperAdminDemotion,
}

impl SelfProtectError {
    pub fn message(&self) -> &'static str {
        match self {
            SelfProtectError::OwnAccountDeletion => "You cannot delete your own account.",
            SelfProtectError::OwnSuperAdminDemotion => {
                "You cannot revoke your own super-admin role."
            }
        }
    }
}

/// Deleting the acting admin's own account is rejected before any call.
pub fn guard_self_deletion(acting_admin_id: i64, target_id: i64) -> Result<(), SelfProtectError> {
    if acting_admin_id == target_id {
        Err(SelfProtectError::OwnAccountDeletion)
    } else {
        Ok(())
    }
}

/// Revoking one's own super-admin flag is rejected before any call.
/// Granting the role (to anyone) is never self-protected.
pub fn guard_self_demotion(
    acting_admin_id: i64,
    target: &AdminAccount,
    make_super: bool,
) -> Result<(), SelfProtectError> {
    if !make_super && target.is_super_admin && target.id == acting_admin_id {
        Err(SelfProtectError::OwnSuperAdminDemotion)
    } else {
        Ok(())
    }
}

pub struct AdminsPage {
    pub session: Session,
    pub admins: Vec<AdminAccount>,
    pub api_keys: Vec<ApiKey>,
    pub loading: bool,

    pub new_email: String,
    pub new_name: String,
    pub new_super: bool,
    pub creating_admin: bool,

    pub new_key_name: String,
    pub scope_upload: bool,
    pub scope_download: bool,
    pub creating_key: bool,

    /// Creation response held only until the admin acknowledges having
    /// stored the secret. Dropped afterwards and never shown again.
    pub created_key: Option<CreateApiKeyResponse>,
    pub secret_sheet_ref: NodeRef,

    pub confirm: Option<ConfirmAction>,
    pub typed_confirmation: String,
    pub confirm_sheet_ref: NodeRef,

    pub admin_in_flight: HashSet<i64>,
    pub key_in_flight: HashSet<i64>,
}

impl AdminsPage {
    pub fn new(session: Session) -> Self {
        AdminsPage {
            session,
            admins: Vec::new(),
            api_keys: Vec::new(),
            loading: true,
            new_email: String::new(),
            new_name: String::new(),
            new_super: false,
            creating_admin: false,
            new_key_name: String::new(),
            scope_upload: true,
            scope_download: false,
            creating_key: false,
            created_key: None,
            secret_sheet_ref: NodeRef::default(),
            confirm: None,
            typed_confirmation: String::new(),
            confirm_sheet_ref: NodeRef::default(),
            admin_in_flight: HashSet::new(),
            key_in_flight: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(id: i64, is_super_admin: bool) -> AdminAccount {
        AdminAccount {
            id,
            email: format!("admin{id}@disclosure.example"),
            name: format!("Admin {id}"),
            is_active: true,
            is_super_admin,
            created_by: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_own_account_deletion_is_rejected() {
        assert_eq!(
            guard_self_deletion(7, 7),
            Err(SelfProtectError::OwnAccountDeletion)
        );
        assert_eq!(guard_self_deletion(7, 8), Ok(()));
    }

    #[test]
    fn test_own_demotion_is_rejected() {
        let me = admin(7, true);
        assert_eq!(
            guard_self_demotion(7, &me, false),
            Err(SelfProtectError::OwnSuperAdminDemotion)
        );
        // Someone else may demote me, and I may demote others.
        assert_eq!(guard_self_demotion(9, &me, false), Ok(()));
        let other = admin(8, true);
        assert_eq!(guard_self_demotion(7, &other, false), Ok(()));
    }

    #[test]
    fn test_promotion_is_never_self_protected() {
        let me = admin(7, false);
        assert_eq!(guard_self_demotion(7, &me, true), Ok(()));
    }

    #[test]
    fn test_typed_confirmation_must_match_exactly() {
        let action = ConfirmAction::DeleteAdmin {
            id: 8,
            email: "clerk@disclosure.example".into(),
        };
        assert!(confirmation_matches(&action, "clerk@disclosure.example"));
        assert!(confirmation_matches(&action, "  clerk@disclosure.example  "));
        assert!(!confirmation_matches(&action, "CLERK@disclosure.example"));
        assert!(!confirmation_matches(&action, ""));
    }
}
