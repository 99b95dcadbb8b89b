use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dealer as served by the get-dealerships cloud function. Every field
/// defaults when absent so a sparse document still maps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DealerRecord {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
    #[serde(default)]
    pub st: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

/// Non-defaulting mirror of [`DealerRecord`] for the state query path,
/// which assumes upstream schema compliance: a missing key is an error,
/// not an empty field.
#[derive(Deserialize, Debug)]
pub(crate) struct StrictDealer {
    address: String,
    city: String,
    full_name: String,
    short_name: String,
    id: i64,
    lat: f64,
    long: f64,
    st: String,
    state: String,
    zip: String,
}

impl From<StrictDealer> for DealerRecord {
    fn from(d: StrictDealer) -> Self {
        DealerRecord {
            address: d.address,
            city: d.city,
            full_name: d.full_name,
            short_name: d.short_name,
            id: d.id,
            lat: d.lat,
            long: d.long,
            st: d.st,
            state: d.state,
            zip: d.zip,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: String,
    pub dealership: i64,
    pub name: String,
    pub review: String,
    pub purchase: bool,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i64>,
    pub purchase_date: Option<String>,
    pub sentiment: Option<String>,
}

impl ReviewRecord {
    /// Builds a record from a raw review document. Never fails: required
    /// fields fall back to empty/false/zero with a warning, optional
    /// fields to None. Sentiment is attached later, not here.
    pub fn from_doc(doc: &Value) -> Self {
        let mut missing = Vec::new();

        let record = ReviewRecord {
            id: str_field(doc, "_id", &mut missing),
            dealership: int_field(doc, "dealership", &mut missing),
            name: str_field(doc, "name", &mut missing),
            review: str_field(doc, "review", &mut missing),
            purchase: bool_field(doc, "purchase", &mut missing),
            car_make: opt_str(doc, "car_make"),
            car_model: opt_str(doc, "car_model"),
            car_year: doc.get("car_year").and_then(Value::as_i64),
            purchase_date: opt_str(doc, "purchase_date"),
            sentiment: None,
        };

        if !missing.is_empty() {
            warn!("Something is missing from this review: {missing:?}. Using default values.");
        }

        record
    }
}

fn str_field(doc: &Value, key: &'static str, missing: &mut Vec<&'static str>) -> String {
    match doc.get(key).and_then(Value::as_str) {
        Some(v) => v.to_owned(),
        None => {
            missing.push(key);
            String::new()
        }
    }
}

fn bool_field(doc: &Value, key: &'static str, missing: &mut Vec<&'static str>) -> bool {
    match doc.get(key).and_then(Value::as_bool) {
        Some(v) => v,
        None => {
            missing.push(key);
            false
        }
    }
}

fn int_field(doc: &Value, key: &'static str, missing: &mut Vec<&'static str>) -> i64 {
    match doc.get(key).and_then(Value::as_i64) {
        Some(v) => v,
        None => {
            missing.push(key);
            0
        }
    }
}

fn opt_str(doc: &Value, key: &str) -> Option<String> {
    doc.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dealer_maps_all_fields() {
        let doc = json!({
            "address": "3 Main St",
            "city": "El Paso",
            "full_name": "Holdlamis Car Dealership",
            "short_name": "Holdlamis",
            "id": 17,
            "lat": 31.7587,
            "long": -106.4869,
            "st": "TX",
            "state": "Texas",
            "zip": "79901"
        });
        let dealer: DealerRecord = serde_json::from_value(doc).unwrap();
        assert_eq!(dealer.id, 17);
        assert_eq!(dealer.city, "El Paso");
        assert_eq!(dealer.st, "TX");
        assert_eq!(dealer.state, "Texas");
    }

    #[test]
    fn dealer_defaults_missing_fields() {
        let dealer: DealerRecord = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(dealer.id, 4);
        assert_eq!(dealer.address, "");
        assert_eq!(dealer.zip, "");
        assert_eq!(dealer.lat, 0.0);
    }

    #[test]
    fn strict_dealer_rejects_missing_fields() {
        let result = serde_json::from_value::<StrictDealer>(json!({ "id": 4 }));
        assert!(result.is_err());
    }

    #[test]
    fn review_from_full_doc() {
        let doc = json!({
            "_id": "r1",
            "dealership": 5,
            "name": "Ann",
            "review": "Great!",
            "purchase": true,
            "car_make": "Audi",
            "car_model": "A4",
            "car_year": 2021,
            "purchase_date": "07/11/2020"
        });
        let record = ReviewRecord::from_doc(&doc);
        assert_eq!(record.id, "r1");
        assert_eq!(record.dealership, 5);
        assert_eq!(record.name, "Ann");
        assert_eq!(record.review, "Great!");
        assert!(record.purchase);
        assert_eq!(record.car_make.as_deref(), Some("Audi"));
        assert_eq!(record.car_year, Some(2021));
        assert_eq!(record.sentiment, None);
    }

    #[test]
    fn review_without_optional_fields() {
        let doc = json!({
            "_id": "r1",
            "name": "Ann",
            "review": "Great!",
            "purchase": true,
            "dealership": 5
        });
        let record = ReviewRecord::from_doc(&doc);
        assert_eq!(record.car_make, None);
        assert_eq!(record.car_model, None);
        assert_eq!(record.car_year, None);
        assert_eq!(record.purchase_date, None);
    }

    #[test]
    fn review_defaults_missing_required_fields() {
        let record = ReviewRecord::from_doc(&json!({ "review": "ok" }));
        assert_eq!(record.id, "");
        assert_eq!(record.name, "");
        assert_eq!(record.review, "ok");
        assert!(!record.purchase);
        assert_eq!(record.dealership, 0);
    }

    #[test]
    fn review_defaults_wrongly_typed_fields() {
        let doc = json!({
            "_id": 12,
            "name": "Ann",
            "review": "ok",
            "purchase": "yes",
            "dealership": "5"
        });
        let record = ReviewRecord::from_doc(&doc);
        assert_eq!(record.id, "");
        assert!(!record.purchase);
        assert_eq!(record.dealership, 0);
        assert_eq!(record.name, "Ann");
    }
}
