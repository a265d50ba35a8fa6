//! Administrative user roster: list, edit role, block/unblock, delete.

use api::{roster, AdminApi, User, UserRole};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::edit_user_dialog::EditUserDialog;
use crate::{use_auth, AuthSession};

const USER_TABLE_CSS: Asset = asset!("/assets/styling/user_table.css");

// The four fixed messages for the shared error slot.
const LOAD_FAILED: &str = "Failed to load users";
const ROLE_FAILED: &str = "Failed to change the user's role";
const BLOCK_FAILED: &str = "Failed to update the user's block status";
const DELETE_FAILED: &str = "Failed to delete the user";

fn admin_api(auth: &AuthSession) -> AdminApi {
    AdminApi::new(auth.token.clone())
}

#[component]
pub fn UserTable() -> Element {
    let auth = use_auth();
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut saving = use_signal(|| false);

    // One full load on mount. A failed load leaves the roster empty; there
    // is no automatic retry.
    let _loader = use_resource(move || async move {
        loading.set(true);
        match admin_api(&auth()).list_users().await {
            Ok(list) => {
                users.set(list);
                error.set(None);
            }
            Err(err) => {
                tracing::error!("failed to load users: {}", err);
                users.set(Vec::new());
                error.set(Some(LOAD_FAILED.to_string()));
            }
        }
        loading.set(false);
    });

    let on_toggle_block = move |email: String| {
        spawn(async move {
            match admin_api(&auth()).toggle_block(&email).await {
                Ok(updated) => roster::merge_block(&mut users.write(), &updated),
                Err(err) => {
                    tracing::error!("failed to toggle block for {}: {}", email, err);
                    error.set(Some(BLOCK_FAILED.to_string()));
                }
            }
        });
    };

    let on_delete = move |id: i64| {
        spawn(async move {
            match admin_api(&auth()).delete_user(id).await {
                Ok(()) => roster::remove(&mut users.write(), id),
                Err(err) => {
                    tracing::error!("failed to delete user {}: {}", id, err);
                    error.set(Some(DELETE_FAILED.to_string()));
                }
            }
        });
    };

    // Invoked by the edit dialog; the dialog only closes once the server
    // has confirmed the new role.
    let on_save_role = move |(id, role): (i64, UserRole)| {
        spawn(async move {
            saving.set(true);
            match admin_api(&auth()).assign_role(id, role).await {
                Ok(updated) => {
                    roster::merge_role(&mut users.write(), &updated);
                    editing.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to change role for user {}: {}", id, err);
                    error.set(Some(ROLE_FAILED.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: USER_TABLE_CSS }

        div {
            class: "user-table",
            h2 { class: "view-title", "Users" }

            if loading() {
                p { class: "muted", "Loading..." }
            }
            if let Some(message) = error() {
                p { class: "error-banner", "{message}" }
            }

            table {
                class: "roster",
                thead {
                    tr {
                        th { "ID" }
                        th { "First name" }
                        th { "Last name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in users() {
                        tr {
                            key: "{user.id}",
                            td { "{user.id}" }
                            td { "{user.first_name}" }
                            td { "{user.last_name}" }
                            td { "{user.email}" }
                            td { "{user.role}" }
                            td {
                                if user.is_blocked {
                                    span { class: "status status-blocked", "Blocked" }
                                } else {
                                    span { class: "status status-active", "Active" }
                                }
                            }
                            td {
                                div {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| editing.set(Some(user.clone()))
                                        },
                                        "Edit"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let email = user.email.clone();
                                            move |_| on_toggle_block(email.clone())
                                        },
                                        if user.is_blocked { "Unblock" } else { "Block" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: {
                                            let id = user.id;
                                            move |_| on_delete(id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(user) = editing() {
                EditUserDialog {
                    user: user,
                    saving: saving(),
                    on_save: on_save_role,
                    on_cancel: move |_| editing.set(None),
                }
            }
        }
    }
}
