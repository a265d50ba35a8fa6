//! # Destination catalog
//!
//! The static country → cities table the tour-search form is built from.
//! The table is compiled into the client and never mutated; both countries
//! and cities keep their declaration order when rendered.

/// Ordered `(country, cities)` table.
pub const DESTINATIONS: &[(&str, &[&str])] = &[
    ("Iceland", &["Reykjavik", "Akureyri", "Kopavogur"]),
    ("Germany", &["Berlin", "Hamburg", "Munich", "Stuttgart", "Frankfurt"]),
    ("France", &["Paris", "Lyon", "Marseille", "Bordeaux", "Toulouse"]),
    ("Czechia", &["Prague", "Brno", "Ostrava", "Pilsen"]),
    ("Hungary", &["Budapest", "Debrecen", "Szeged", "Miskolc"]),
    ("Slovenia", &["Ljubljana", "Maribor", "Kranj"]),
    ("Portugal", &["Lisbon", "Porto", "Faro"]),
    ("Croatia", &["Zagreb", "Split", "Dubrovnik"]),
    ("Austria", &["Vienna", "Salzburg", "Innsbruck", "Graz"]),
    ("Spain", &["Madrid", "Barcelona", "Valencia", "Seville"]),
    ("Greece", &["Athens", "Thessaloniki", "Heraklion"]),
    ("Italy", &["Rome", "Milan", "Venice", "Naples"]),
    ("Turkey", &["Istanbul", "Ankara", "Izmir", "Antalya", "Göcek"]),
];

/// Country names in display order.
pub fn countries() -> impl Iterator<Item = &'static str> {
    DESTINATIONS.iter().map(|(country, _)| *country)
}

/// Cities for a country, in display order.
///
/// An unrecognized country yields an empty list, which the form renders as
/// a city select with no options.
pub fn cities_of(country: &str) -> &'static [&'static str] {
    DESTINATIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn germany_lists_its_five_cities_in_order() {
        assert_eq!(
            cities_of("Germany"),
            ["Berlin", "Hamburg", "Munich", "Stuttgart", "Frankfurt"]
        );
    }

    #[test]
    fn unknown_country_has_no_cities() {
        assert!(cities_of("Atlantis").is_empty());
        assert!(cities_of("").is_empty());
    }

    #[test]
    fn countries_keep_declaration_order() {
        let names: Vec<_> = countries().collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names.first(), Some(&"Iceland"));
        assert_eq!(names.last(), Some(&"Turkey"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Catalog keys are display names; the form only ever submits them
        // verbatim, so "germany" is not a recognized country.
        assert!(cities_of("germany").is_empty());
    }
}
