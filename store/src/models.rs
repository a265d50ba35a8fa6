use serde::{Deserialize, Serialize};

/// The structured search criteria assembled by the tour-search form and
/// handed to the caller's search handler on submit.
///
/// String fields are empty when nothing is selected; the form submits them
/// as-is and leaves validation to the receiving side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Destination country name from the catalog, or empty.
    pub country: String,
    /// City within the selected country, or empty.
    pub city: String,
    /// ISO calendar date, e.g. "2024-07-01", or empty.
    pub date: String,
    /// Trip length in days.
    pub days: u32,
    /// Party size.
    pub tourists: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_serializes_with_plain_field_names() {
        let filter = SearchFilter {
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            date: "2024-07-01".to_string(),
            days: 5,
            tourists: 2,
        };

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "country": "Italy",
                "city": "Rome",
                "date": "2024-07-01",
                "days": 5,
                "tourists": 2,
            })
        );
    }
}
