use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Admin, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Web-specific wrapper around the shared navbar with this app's routes.
#[component]
fn Navbar() -> Element {
    rsx! {
        ui::Navbar {
            Link { to: Route::Home {}, "Search" }
            Link { to: Route::Admin {}, "Admin" }
        }
        Outlet::<Route> {}
    }
}
