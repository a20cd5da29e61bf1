use serde::Deserialize;
use serde_json::Value;

// result
//  ├── property_id / listing_id
//  ├── list_price / price
//  ├── href / permalink / rdc_web_url
//  ├── hoa / association        (number or nested object)
//  ├── location
//  │    └── address
//  │         ├── line / street_name
//  │         ├── city
//  │         ├── state_code / state
//  │         └── postal_code
//  └── description
//       ├── price, beds, baths, sqft, lot_sqft, year_built
//       ├── type / property_type
//       ├── text / description
//       └── hoa / association
//
// Providers disagree on shape, so most leaves are duplicated at the top
// level and every leaf may arrive as a number or a string.

/// A JSON leaf that may be a number, a string, or something unexpected.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Scalar {
    /// Mirrors "is this field filled in": empty strings and nulls are absent.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Other(v) => !v.is_null(),
            Scalar::Number(_) => true,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Other(_) => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Other(v) => v.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RealtorRecord {
    pub property_id: Option<Scalar>,
    pub listing_id: Option<Scalar>,

    pub list_price: Option<Scalar>,
    pub price: Option<Scalar>,

    pub address: Option<Scalar>,
    pub city: Option<Scalar>,
    pub state: Option<Scalar>,
    pub postal_code: Option<Scalar>,
    pub zip_code: Option<Scalar>,

    pub sqft: Option<Scalar>,
    pub beds: Option<Scalar>,
    pub baths: Option<Scalar>,
    pub year_built: Option<Scalar>,
    pub lot_sqft: Option<Scalar>,
    pub prop_type: Option<Scalar>,

    pub href: Option<Scalar>,
    pub permalink: Option<Scalar>,
    pub rdc_web_url: Option<Scalar>,

    pub remarks: Option<Scalar>,
    pub hoa_fee: Option<Value>,
    pub hoa: Option<Value>,
    pub monthly_hoa_fee: Option<Value>,
    pub hoa_monthly: Option<Value>,
    pub hoa_fee_per_month: Option<Value>,
    pub association: Option<Value>,

    pub location: Option<RecordLocation>,
    pub description: Option<Description>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecordLocation {
    pub address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line: Option<Scalar>,
    pub street_name: Option<Scalar>,
    pub city: Option<Scalar>,
    pub state_code: Option<Scalar>,
    pub state: Option<Scalar>,
    pub postal_code: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Description {
    pub price: Option<Scalar>,
    pub sqft: Option<Scalar>,
    pub beds: Option<Scalar>,
    pub baths: Option<Scalar>,
    pub year_built: Option<Scalar>,
    pub lot_sqft: Option<Scalar>,
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
    pub property_type: Option<Scalar>,

    pub text: Option<Scalar>,
    pub description: Option<Scalar>,

    pub hoa_fee: Option<Value>,
    pub hoa: Option<Value>,
    pub monthly_hoa_fee: Option<Value>,
    pub hoa_monthly: Option<Value>,
    pub hoa_fee_per_month: Option<Value>,
    pub association: Option<Value>,
}

/// Pulls the result array out of whichever envelope the provider used.
/// Non-object entries are dropped.
pub fn extract_results(payload: &Value) -> Vec<Value> {
    let candidates = [
        &payload["data"]["home_search"]["results"],
        &payload["data"]["results"],
        &payload["properties"],
        &payload["results"],
    ];

    candidates
        .into_iter()
        .filter_map(Value::as_array)
        .find(|arr| !arr.is_empty())
        .map(|arr| arr.iter().filter(|v| v.is_object()).cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_non_empty_envelope() {
        let payload = json!({
            "data": { "home_search": { "results": [] }, "results": [{ "a": 1 }, 7, "x"] },
            "results": [{ "b": 2 }]
        });
        let results = extract_results(&payload);
        assert_eq!(results, vec![json!({ "a": 1 })]);

        assert!(extract_results(&json!({ "message": "nope" })).is_empty());
    }

    #[test]
    fn record_tolerates_strings_numbers_and_odd_shapes() {
        let record: RealtorRecord = serde_json::from_value(json!({
            "list_price": "325000",
            "address": { "unexpected": true },
            "description": { "beds": 3, "baths": "2.5", "type": "single_family" },
            "hoa": { "fee": 40 }
        }))
        .unwrap();

        assert_eq!(record.list_price.unwrap().as_f64(), Some(325000.0));
        assert!(record.address.unwrap().as_f64().is_none());
        let description = record.description.unwrap();
        assert_eq!(description.baths.unwrap().as_f64(), Some(2.5));
        assert_eq!(description.kind.unwrap().as_text(), "single_family");
    }
}
