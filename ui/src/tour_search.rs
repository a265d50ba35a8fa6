//! Tour search filter form.

use dioxus::prelude::*;
use store::{catalog, SearchFilter};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::prefs::make_prefs;

const TOUR_SEARCH_CSS: Asset = asset!("/assets/styling/tour_search.css");

/// Collects a search filter and hands the snapshot to `on_search`.
///
/// The travel date and party size write through to the session preference
/// store so they survive in-session navigation. The signals are hydrated
/// from the store once, when the form mounts, and are authoritative from
/// then on.
#[component]
pub fn TourSearch(on_search: EventHandler<SearchFilter>) -> Element {
    let mut country = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut date = use_signal(|| make_prefs().date().unwrap_or_default());
    let mut days = use_signal(|| 2u32);
    let mut tourists = use_signal(|| make_prefs().tourists().unwrap_or(2));

    // Changing country invalidates the city choice.
    let handle_country_change = move |evt: FormEvent| {
        country.set(evt.value());
        city.set(String::new());
    };

    let handle_date_change = move |evt: FormEvent| {
        let value = evt.value();
        make_prefs().set_date(&value);
        date.set(value);
    };

    let handle_days_change = move |evt: FormEvent| {
        if let Ok(value) = evt.value().parse::<u32>() {
            days.set(value);
        }
    };

    let handle_tourists_change = move |evt: FormEvent| {
        if let Ok(value) = evt.value().parse::<u32>() {
            make_prefs().set_tourists(value);
            tourists.set(value);
        }
    };

    let handle_search = move |_| {
        on_search.call(SearchFilter {
            country: country(),
            city: city(),
            date: date(),
            days: days(),
            tourists: tourists(),
        });
    };

    let cities = catalog::cities_of(&country());

    rsx! {
        document::Stylesheet { href: TOUR_SEARCH_CSS }

        div {
            class: "tour-search",
            h2 { class: "view-title", "Find a tour" }

            div {
                class: "search-box",

                div {
                    class: "search-field",
                    Label { html_for: "search-country", "Country" }
                    select {
                        id: "search-country",
                        class: "select",
                        value: "{country()}",
                        onchange: handle_country_change,
                        option {
                            value: "",
                            disabled: true,
                            selected: country().is_empty(),
                            "Choose a country"
                        }
                        for name in catalog::countries() {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                div {
                    class: "search-field",
                    Label { html_for: "search-city", "City" }
                    select {
                        id: "search-city",
                        class: "select",
                        value: "{city()}",
                        disabled: country().is_empty(),
                        onchange: move |evt| city.set(evt.value()),
                        option {
                            value: "",
                            disabled: true,
                            selected: city().is_empty(),
                            if country().is_empty() { "Choose a country first" } else { "Choose a city" }
                        }
                        for name in cities {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                div {
                    class: "search-field search-field-date",
                    Label { html_for: "search-date", "Date" }
                    Input {
                        id: "search-date",
                        r#type: "date",
                        value: date(),
                        oninput: handle_date_change,
                    }
                }

                div {
                    class: "search-field search-field-small",
                    Label { html_for: "search-days", "Days" }
                    Input {
                        id: "search-days",
                        r#type: "number",
                        min: "1",
                        value: "{days()}",
                        oninput: handle_days_change,
                    }
                }

                div {
                    class: "search-field search-field-small",
                    Label { html_for: "search-tourists", "Tourists" }
                    Input {
                        id: "search-tourists",
                        r#type: "number",
                        min: "1",
                        value: "{tourists()}",
                        oninput: handle_tourists_change,
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "search-button",
                    onclick: handle_search,
                    "Search"
                }
            }
        }
    }
}
