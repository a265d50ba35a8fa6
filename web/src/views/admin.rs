use dioxus::prelude::*;
use ui::UserTable;

/// Administration view: the user roster.
#[component]
pub fn Admin() -> Element {
    rsx! {
        UserTable {}
    }
}
