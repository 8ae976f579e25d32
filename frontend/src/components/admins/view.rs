use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::admin::AdminAccount;
use common::model::api_key::ApiKey;

use super::messages::Msg;
use super::state::{confirmation_matches, AdminsPage};
use crate::tops_sheet::TopSheet;

pub fn view(page: &AdminsPage, ctx: &Context<AdminsPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="admins-page">
            <h2>{ "Admins & API keys" }</h2>
            {
                if page.loading {
                    html! { <p class="loading">{ "Loading…" }</p> }
                } else {
                    html! {
                        <>
                            { build_admins_section(page, link) }
                            { build_keys_section(page, link) }
                        </>
                    }
                }
            }
            { build_secret_sheet(page, link) }
            { build_confirm_sheet(page, link) }
        </div>
    }
}

fn build_admins_section(page: &AdminsPage, link: &Scope<AdminsPage>) -> Html {
    html! {
        <section class="admins-section">
            <h3>{ "Admin accounts" }</h3>
            <table>
                <thead>
                    <tr>
                        <th>{ "Email" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Role" }</th>
                        <th>{ "Active" }</th>
                        <th>{ "Last login" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { page.admins.iter().map(|admin| build_admin_row(page, admin, link)).collect::<Html>() }
                </tbody>
            </table>
            <div class="create-admin-row">
                <input
                    placeholder="email@example.org"
                    value={page.new_email.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    placeholder="Full name"
                    value={page.new_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={page.new_super}
                        onchange={link.callback(|_| Msg::ToggleNewSuper)}
                    />
                    { "Super admin" }
                </label>
                <button disabled={page.creating_admin} onclick={link.callback(|_| Msg::CreateAdmin)}>
                    { if page.creating_admin { "Creating…" } else { "Add admin" } }
                </button>
            </div>
        </section>
    }
}

fn build_admin_row(page: &AdminsPage, admin: &AdminAccount, link: &Scope<AdminsPage>) -> Html {
    let id = admin.id;
    let busy = page.admin_in_flight.contains(&id);
    let is_self = id == page.session.admin_id;
    let make_super = !admin.is_super_admin;
    let last_login = admin
        .last_login_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".into());
    html! {
        <tr key={id.to_string()}>
            <td>
                { &admin.email }
                { if is_self { html! { <span class="you-marker">{ " (you)" }</span> } } else { html! {} } }
            </td>
            <td>{ &admin.name }</td>
            <td>{ if admin.is_super_admin { "super admin" } else { "admin" } }</td>
            <td>{ if admin.is_active { "yes" } else { "no" } }</td>
            <td>{ last_login }</td>
            <td>
                <button
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::ToggleAdminActive(id))}
                >
                    { if admin.is_active { "Deactivate" } else { "Activate" } }
                </button>
                <button
                    disabled={busy || (is_self && !make_super)}
                    onclick={link.callback(move |_| Msg::RequestRoleChange(id, make_super))}
                >
                    { if make_super { "Make super admin" } else { "Revoke super admin" } }
                </button>
                <button
                    class="danger"
                    disabled={busy || is_self}
                    onclick={link.callback(move |_| Msg::RequestDeleteAdmin(id))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_keys_section(page: &AdminsPage, link: &Scope<AdminsPage>) -> Html {
    html! {
        <section class="keys-section">
            <h3>{ "API keys" }</h3>
            <table>
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Key" }</th>
                        <th>{ "Scopes" }</th>
                        <th>{ "Usage" }</th>
                        <th>{ "Active" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { page.api_keys.iter().map(|key| build_key_row(page, key, link)).collect::<Html>() }
                </tbody>
            </table>
            <div class="create-key-row">
                <input
                    placeholder="Key name"
                    value={page.new_key_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewKeyName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={page.scope_upload}
                        onchange={link.callback(|_| Msg::ToggleScopeUpload)}
                    />
                    { "upload" }
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={page.scope_download}
                        onchange={link.callback(|_| Msg::ToggleScopeDownload)}
                    />
                    { "download" }
                </label>
                <button disabled={page.creating_key} onclick={link.callback(|_| Msg::CreateKey)}>
                    { if page.creating_key { "Creating…" } else { "Create key" } }
                </button>
            </div>
        </section>
    }
}

fn build_key_row(page: &AdminsPage, key: &ApiKey, link: &Scope<AdminsPage>) -> Html {
    let id = key.id;
    let busy = page.key_in_flight.contains(&id);
    let scopes = key
        .scopes
        .iter()
        .map(|scope| scope.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    html! {
        <tr key={id.to_string()}>
            <td>{ &key.name }</td>
            // Only the prefix is ever shown after creation.
            <td class="key-prefix">{ format!("{}…", key.key_prefix) }</td>
            <td>{ scopes }</td>
            <td>{ key.usage_count.to_formatted_string(&Locale::en) }</td>
            <td>{ if key.is_active { "yes" } else { "no" } }</td>
            <td>
                <button
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::ToggleKeyActive(id))}
                >
                    { if key.is_active { "Deactivate" } else { "Activate" } }
                </button>
                <button
                    class="danger"
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::RequestDeleteKey(id))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_secret_sheet(page: &AdminsPage, link: &Scope<AdminsPage>) -> Html {
    html! {
        <TopSheet
            title={"API key created"}
            node_ref={page.secret_sheet_ref.clone()}
        >
            {
                match &page.created_key {
                    Some(created) => html! {
                        <>
                            <p>
                                { "Store this key now. It cannot be shown again; \
                                   only the prefix will remain visible." }
                            </p>
                            <code class="plaintext-key">{ &created.plaintext_key }</code>
                            <div class="sheet-actions">
                                <button onclick={link.callback(|_| Msg::CopySecret)}>{ "Copy" }</button>
                                <button class="primary" onclick={link.callback(|_| Msg::AcknowledgeSecret)}>
                                    { "I stored the key" }
                                </button>
                            </div>
                        </>
                    },
                    None => html! {},
                }
            }
        </TopSheet>
    }
}

fn build_confirm_sheet(page: &AdminsPage, link: &Scope<AdminsPage>) -> Html {
    let armed = page
        .confirm
        .as_ref()
        .is_some_and(|action| confirmation_matches(action, &page.typed_confirmation));
    html! {
        <TopSheet
            title={"Confirm action"}
            node_ref={page.confirm_sheet_ref.clone()}
            on_close={link.callback(|_| Msg::CancelConfirm)}
        >
            {
                match &page.confirm {
                    Some(action) => html! {
                        <>
                            <p>{ action.describe() }</p>
                            <p class="confirm-hint">
                                { format!("Type \"{}\" to confirm.", action.expected_confirmation()) }
                            </p>
                            <input
                                value={page.typed_confirmation.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::TypedConfirmation(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <div class="sheet-actions">
                                <button onclick={link.callback(|_| Msg::CancelConfirm)}>{ "Cancel" }</button>
                                <button
                                    class="danger"
                                    disabled={!armed}
                                    onclick={link.callback(|_| Msg::Confirm)}
                                >
                                    { "Confirm" }
                                </button>
                            </div>
                        </>
                    },
                    None => html! {},
                }
            }
        </TopSheet>
    }
}
