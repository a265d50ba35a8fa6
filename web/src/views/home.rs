use dioxus::prelude::*;

use store::SearchFilter;
use ui::TourSearch;

/// Landing view: the tour search form.
///
/// The tour-results backend is outside this frontend's scope, so the search
/// handler logs the submitted filter and shows the snapshot inline.
#[component]
pub fn Home() -> Element {
    let mut submitted = use_signal(|| Option::<SearchFilter>::None);

    let on_search = move |filter: SearchFilter| {
        tracing::info!(
            "tour search: {}/{} on {} for {} days, {} tourists",
            filter.country,
            filter.city,
            filter.date,
            filter.days,
            filter.tourists,
        );
        submitted.set(Some(filter));
    };

    rsx! {
        TourSearch { on_search: on_search }

        if let Some(filter) = submitted() {
            div {
                class: "search-summary",
                h3 { "Searching tours" }
                p {
                    "{filter.country}, {filter.city}, starting {filter.date}, "
                    "{filter.days} days, {filter.tourists} tourists"
                }
            }
        }
    }
}
