use dioxus::prelude::*;

const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "TourBook" }
            {children}
        }
    }
}
