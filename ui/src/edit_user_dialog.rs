use api::{User, UserRole};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::ModalOverlay;

/// Modal edit form for one roster row.
///
/// Only the role can be persisted by the admin API, so name and email render
/// read-only. "Save" hands `(id, role)` back to the table; "cancel" discards
/// the working copy without a request.
#[component]
pub fn EditUserDialog(
    user: User,
    #[props(default)] saving: bool,
    on_save: EventHandler<(i64, UserRole)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut role = use_signal(|| user.role);

    let user_id = user.id;
    let handle_save = move |_| on_save.call((user_id, role()));

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                h3 { class: "dialog-title", "Edit user" }

                div {
                    class: "dialog-field",
                    Label { html_for: "edit-first-name", "First name" }
                    Input {
                        id: "edit-first-name",
                        value: user.first_name.clone(),
                        readonly: true,
                    }
                }
                div {
                    class: "dialog-field",
                    Label { html_for: "edit-last-name", "Last name" }
                    Input {
                        id: "edit-last-name",
                        value: user.last_name.clone(),
                        readonly: true,
                    }
                }
                div {
                    class: "dialog-field",
                    Label { html_for: "edit-email", "Email" }
                    Input {
                        id: "edit-email",
                        r#type: "email",
                        value: user.email.clone(),
                        readonly: true,
                    }
                }
                div {
                    class: "dialog-field",
                    Label { html_for: "edit-role", "Role" }
                    select {
                        id: "edit-role",
                        class: "select",
                        value: "{role()}",
                        onchange: move |evt| role.set(UserRole::from_wire(&evt.value())),
                        for option_role in UserRole::ALL {
                            option {
                                key: "{option_role}",
                                value: "{option_role}",
                                selected: role() == option_role,
                                "{option_role}"
                            }
                        }
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving,
                        onclick: handle_save,
                        if saving { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
