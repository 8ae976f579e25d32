//! Update logic for admin-account and API-key management.
//!
//! Self-protection runs before anything leaves the browser: deleting your
//! own account or revoking your own super-admin role is refused locally.
//! Destructive actions go through the typed-confirmation sheet; toggles are
//! idempotent per-id operations with their own in-flight guards.

use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::api_key::ApiKeyScope;
use common::requests::{
    CreateAdminRequest, CreateApiKeyRequest, UpdateAdminRequest, UpdateApiKeyRequest,
};

use super::messages::Msg;
use super::state::{
    confirmation_matches, guard_self_deletion, guard_self_demotion, AdminsPage, ConfirmAction,
};
use crate::api::admin::AdminApi;
use crate::notify;
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

pub fn update(page: &mut AdminsPage, ctx: &Context<AdminsPage>, msg: Msg) -> bool {
    match msg {
        Msg::AdminsLoaded(admins) => {
            page.admins = admins;
            page.loading = false;
            true
        }
        Msg::KeysLoaded(api_keys) => {
            page.api_keys = api_keys;
            true
        }
        Msg::LoadFailed(err) => {
            page.loading = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not load admin data: {err}"));
            }
            true
        }

        Msg::NewEmail(value) => {
            page.new_email = value;
            true
        }
        Msg::NewName(value) => {
            page.new_name = value;
            true
        }
        Msg::ToggleNewSuper => {
            page.new_super = !page.new_super;
            true
        }
        Msg::CreateAdmin => {
            if page.creating_admin {
                return false;
            }
            let email = page.new_email.trim().to_string();
            let name = page.new_name.trim().to_string();
            if email.is_empty() || name.is_empty() {
                notify::error("Email and name are required.");
                return false;
            }
            if page
                .admins
                .iter()
                .any(|admin| admin.email.eq_ignore_ascii_case(&email))
            {
                notify::error("An admin with that email already exists.");
                return false;
            }
            page.creating_admin = true;
            let request = CreateAdminRequest {
                email,
                name,
                is_super_admin: page.new_super,
            };
            let api = AdminApi::new(page.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.create_admin(&request).await {
                    Ok(admin) => link.send_message(Msg::AdminCreated(admin)),
                    Err(err) => link.send_message(Msg::CreateAdminFailed(err)),
                }
            });
            true
        }
        Msg::AdminCreated(admin) => {
            page.creating_admin = false;
            page.admins.push(admin);
            page.new_email.clear();
            page.new_name.clear();
            page.new_super = false;
            notify::info("Admin account created.");
            true
        }
        Msg::CreateAdminFailed(err) => {
            page.creating_admin = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not create the admin: {err}"));
            }
            true
        }

        Msg::ToggleAdminActive(id) => {
            let Some(admin) = page.admins.iter().find(|a| a.id == id) else {
                return false;
            };
            let next_active = !admin.is_active;
            if !page.admin_in_flight.insert(id) {
                return false;
            }
            let request = UpdateAdminRequest {
                is_active: Some(next_active),
                ..Default::default()
            };
            send_admin_update(page, ctx, id, request);
            true
        }
        Msg::RequestRoleChange(id, make_super) => {
            let Some(admin) = page.admins.iter().find(|a| a.id == id) else {
                return false;
            };
            if let Err(err) = guard_self_demotion(page.session.admin_id, admin, make_super) {
                notify::error(err.message());
                return false;
            }
            let action = ConfirmAction::ChangeRole {
                id,
                email: admin.email.clone(),
                make_super,
            };
            open_confirm(page, action);
            true
        }
        Msg::RequestDeleteAdmin(id) => {
            let Some(admin) = page.admins.iter().find(|a| a.id == id) else {
                return false;
            };
            if let Err(err) = guard_self_deletion(page.session.admin_id, id) {
                notify::error(err.message());
                return false;
            }
            let action = ConfirmAction::DeleteAdmin {
                id,
                email: admin.email.clone(),
            };
            open_confirm(page, action);
            true
        }
        Msg::AdminUpdated(admin) => {
            page.admin_in_flight.remove(&admin.id);
            if let Some(row) = page.admins.iter_mut().find(|a| a.id == admin.id) {
                *row = admin;
            }
            true
        }
        Msg::AdminDeleted(id) => {
            page.admin_in_flight.remove(&id);
            page.admins.retain(|a| a.id != id);
            notify::info("Admin account deleted.");
            true
        }
        Msg::AdminActionFailed(id, err) => {
            page.admin_in_flight.remove(&id);
            if !err.is_unauthorized() {
                notify::error(&format!("Admin update failed: {err}"));
            }
            true
        }

        Msg::NewKeyName(value) => {
            page.new_key_name = value;
            true
        }
        Msg::ToggleScopeUpload => {
            page.scope_upload = !page.scope_upload;
            true
        }
        Msg::ToggleScopeDownload => {
            page.scope_download = !page.scope_download;
            true
        }
        Msg::CreateKey => {
            if page.creating_key {
                return false;
            }
            let name = page.new_key_name.trim().to_string();
            if name.is_empty() {
                notify::error("Give the key a name.");
                return false;
            }
            let mut scopes = Vec::new();
            if page.scope_upload {
                scopes.push(ApiKeyScope::Upload);
            }
            if page.scope_download {
                scopes.push(ApiKeyScope::Download);
            }
            if scopes.is_empty() {
                notify::error("Select at least one scope.");
                return false;
            }
            page.creating_key = true;
            let request = CreateApiKeyRequest { name, scopes };
            let api = AdminApi::new(page.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.create_api_key(&request).await {
                    Ok(created) => link.send_message(Msg::KeyCreated(created)),
                    Err(err) => link.send_message(Msg::CreateKeyFailed(err)),
                }
            });
            true
        }
        Msg::KeyCreated(created) => {
            page.creating_key = false;
            page.api_keys.push(created.api_key.clone());
            page.new_key_name.clear();
            // The secret is shown exactly once, in the reveal sheet.
            page.created_key = Some(created);
            open_top_sheet(page.secret_sheet_ref.clone());
            true
        }
        Msg::CreateKeyFailed(err) => {
            page.creating_key = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not create the key: {err}"));
            }
            true
        }
        Msg::CopySecret => {
            let Some(created) = &page.created_key else {
                return false;
            };
            let secret = created.plaintext_key.clone();
            spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&secret);
                    match JsFuture::from(promise).await {
                        Ok(_) => notify::info("Key copied to the clipboard."),
                        Err(_) => notify::error("Could not access the clipboard."),
                    }
                }
            });
            false
        }
        Msg::AcknowledgeSecret => {
            page.created_key = None;
            close_top_sheet(page.secret_sheet_ref.clone());
            true
        }

        Msg::ToggleKeyActive(id) => {
            let Some(key) = page.api_keys.iter().find(|k| k.id == id) else {
                return false;
            };
            let next_active = !key.is_active;
            if !page.key_in_flight.insert(id) {
                return false;
            }
            let request = UpdateApiKeyRequest {
                is_active: Some(next_active),
                ..Default::default()
            };
            let api = AdminApi::new(page.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.update_api_key(id, &request).await {
                    Ok(key) => link.send_message(Msg::KeyUpdated(key)),
                    Err(err) => link.send_message(Msg::KeyActionFailed(id, err)),
                }
            });
            true
        }
        Msg::RequestDeleteKey(id) => {
            let Some(key) = page.api_keys.iter().find(|k| k.id == id) else {
                return false;
            };
            let action = ConfirmAction::DeleteApiKey {
                id,
                name: key.name.clone(),
            };
            open_confirm(page, action);
            true
        }
        Msg::KeyUpdated(key) => {
            page.key_in_flight.remove(&key.id);
            if let Some(row) = page.api_keys.iter_mut().find(|k| k.id == key.id) {
                *row = key;
            }
            true
        }
        Msg::KeyDeleted(id) => {
            page.key_in_flight.remove(&id);
            page.api_keys.retain(|k| k.id != id);
            notify::info("API key deleted.");
            true
        }
        Msg::KeyActionFailed(id, err) => {
            page.key_in_flight.remove(&id);
            if !err.is_unauthorized() {
                notify::error(&format!("API key update failed: {err}"));
            }
            true
        }

        Msg::TypedConfirmation(value) => {
            page.typed_confirmation = value;
            true
        }
        Msg::CancelConfirm => {
            page.confirm = None;
            page.typed_confirmation.clear();
            close_top_sheet(page.confirm_sheet_ref.clone());
            true
        }
        Msg::Confirm => {
            let Some(action) = page.confirm.clone() else {
                return false;
            };
            if !confirmation_matches(&action, &page.typed_confirmation) {
                return false;
            }
            page.confirm = None;
            page.typed_confirmation.clear();
            close_top_sheet(page.confirm_sheet_ref.clone());
            execute_confirmed(page, ctx, action);
            true
        }
    }
}

fn open_confirm(page: &mut AdminsPage, action: ConfirmAction) {
    page.confirm = Some(action);
    page.typed_confirmation.clear();
    open_top_sheet(page.confirm_sheet_ref.clone());
}

fn execute_confirmed(page: &mut AdminsPage, ctx: &Context<AdminsPage>, action: ConfirmAction) {
    let api = AdminApi::new(page.session.clone());
    let link = ctx.link().clone();
    match action {
        ConfirmAction::DeleteAdmin { id, .. } => {
            if !page.admin_in_flight.insert(id) {
                return;
            }
            spawn_local(async move {
                match api.delete_admin(id).await {
                    Ok(()) => link.send_message(Msg::AdminDeleted(id)),
                    Err(err) => link.send_message(Msg::AdminActionFailed(id, err)),
                }
            });
        }
        ConfirmAction::ChangeRole { id, make_super, .. } => {
            if !page.admin_in_flight.insert(id) {
                return;
            }
            let request = UpdateAdminRequest {
                is_super_admin: Some(make_super),
                ..Default::default()
            };
            spawn_local(async move {
                match api.update_admin(id, &request).await {
                    Ok(admin) => link.send_message(Msg::AdminUpdated(admin)),
                    Err(err) => link.send_message(Msg::AdminActionFailed(id, err)),
                }
            });
        }
        ConfirmAction::DeleteApiKey { id, .. } => {
            if !page.key_in_flight.insert(id) {
                return;
            }
            spawn_local(async move {
                match api.delete_api_key(id).await {
                    Ok(()) => link.send_message(Msg::KeyDeleted(id)),
                    Err(err) => link.send_message(Msg::KeyActionFailed(id, err)),
                }
            });
        }
    }
}

fn send_admin_update(
    page: &AdminsPage,
    ctx: &Context<AdminsPage>,
    id: i64,
    request: UpdateAdminRequest,
) {
    let api = AdminApi::new(page.session.clone());
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.update_admin(id, &request).await {
            Ok(admin) => link.send_message(Msg::AdminUpdated(admin)),
            Err(err) => link.send_message(Msg::AdminActionFailed(id, err)),
        }
    });
}

pub fn fetch_all(page: &AdminsPage, ctx: &Context<AdminsPage>) {
    let api = AdminApi::new(page.session.clone());
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.list_admins().await {
            Ok(admins) => link.send_message(Msg::AdminsLoaded(admins)),
            Err(err) => {
                link.send_message(Msg::LoadFailed(err));
                return;
            }
        }
        match api.list_api_keys().await {
            Ok(keys) => link.send_message(Msg::KeysLoaded(keys)),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}
