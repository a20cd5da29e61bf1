// client.rs
use crate::domain::listing::Listing;
use crate::realtor::mapping::listing_from_record;
use crate::realtor::models::{extract_results, RealtorRecord};
use crate::realtor::RealtorApiError;
use clap::ValueEnum;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::{json, Map, Value};
use std::time::Duration;
use url::Url;

/// A single best-effort request: no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum HttpMethod {
    Get,
    Post,
}

/// Which listing status a search asks the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPurpose {
    Sale,
    Rent,
}

impl SearchPurpose {
    fn statuses(self) -> Value {
        match self {
            SearchPurpose::Sale => json!(["for_sale", "ready_to_build"]),
            SearchPurpose::Rent => json!(["for_rent"]),
        }
    }
}

/// Everything needed to issue one search against a RapidAPI realtor endpoint.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub endpoint: String,
    pub method: HttpMethod,
    pub location_param: String,
    pub location_value: String,
    pub limit: u32,
    pub purpose: SearchPurpose,
    pub filters: Map<String, Value>,
}

#[derive(Clone)]
pub struct RealtorClient {
    client: Client,
    host: String,
    api_key: Option<String>,
}

impl RealtorClient {
    /// The key is only checked when a request is actually sent, so a run
    /// that never touches the API does not need one.
    pub fn new(host: impl Into<String>, api_key: Option<String>) -> Result<Self, RealtorApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RealtorApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            host: host.into(),
            api_key,
        })
    }

    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Listing>, RealtorApiError> {
        let payload = self.fetch_payload(request)?;

        let listings = extract_results(&payload)
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RealtorRecord>(item) {
                Ok(record) => listing_from_record(&record),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed realtor record");
                    None
                }
            })
            .collect();

        Ok(listings)
    }

    pub fn fetch_payload(&self, request: &SearchRequest) -> Result<Value, RealtorApiError> {
        let builder = self.build_request(request)?;

        let resp = builder
            .send()
            .map_err(|e| RealtorApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RealtorApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RealtorApiError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| RealtorApiError::JsonParse(e.to_string()))
    }

    fn build_request(&self, request: &SearchRequest) -> Result<RequestBuilder, RealtorApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(RealtorApiError::MissingApiKey)?;

        let key = HeaderValue::from_str(api_key)
            .map_err(|e| RealtorApiError::InvalidHeader(format!("api key: {e}")))?;
        let host = HeaderValue::from_str(&self.host)
            .map_err(|e| RealtorApiError::InvalidHeader(format!("host: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", key);
        headers.insert("x-rapidapi-host", host.clone());
        headers.insert("x-api-host", host);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let url = request_url(&self.host, request)?;
        tracing::debug!(method = ?request.method, %url, "realtor request");

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url).headers(headers),
            // `.json` also sets the JSON content type.
            HttpMethod::Post => self
                .client
                .post(url)
                .headers(headers)
                .json(&post_payload(request)),
        };
        Ok(builder)
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Full URL for a request. GET requests carry the search in the query string.
pub fn request_url(host: &str, request: &SearchRequest) -> Result<Url, RealtorApiError> {
    let base = Url::parse(&format!("https://{}", host.trim()))
        .map_err(|e| RealtorApiError::InvalidUrl(format!("{host}: {e}")))?;
    let mut url = base
        .join(&normalize_endpoint(&request.endpoint))
        .map_err(|e| RealtorApiError::InvalidUrl(format!("{}: {e}", request.endpoint)))?;

    if request.method == HttpMethod::Get {
        url.query_pairs_mut().extend_pairs(query_params(request));
    }
    Ok(url)
}

/// GET parameters. Nested filter objects are sent as compact JSON text and
/// lists as comma-separated values.
pub fn query_params(request: &SearchRequest) -> Vec<(String, String)> {
    let mut params = vec![
        (
            request.location_param.clone(),
            request.location_value.clone(),
        ),
        ("offset".to_string(), "0".to_string()),
        ("limit".to_string(), request.limit.to_string()),
        ("sort".to_string(), "relevance".to_string()),
    ];

    for (key, value) in &request.filters {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        };
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = text,
            None => params.push((key.clone(), text)),
        }
    }
    params
}

/// POST body. Filters are merged over the defaults.
pub fn post_payload(request: &SearchRequest) -> Value {
    let mut payload = Map::new();
    payload.insert("limit".to_string(), json!(request.limit));
    payload.insert("offset".to_string(), json!(0));
    payload.insert(
        request.location_param.clone(),
        json!(request.location_value),
    );
    payload.insert("status".to_string(), request.purpose.statuses());
    payload.insert(
        "sort".to_string(),
        json!({ "direction": "desc", "field": "list_date" }),
    );
    for (key, value) in &request.filters {
        payload.insert(key.clone(), value.clone());
    }
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent_request(method: HttpMethod) -> SearchRequest {
        SearchRequest {
            endpoint: "properties/v3/list-for-rent".to_string(),
            method,
            location_param: "zip".to_string(),
            location_value: "76131".to_string(),
            limit: 40,
            purpose: SearchPurpose::Rent,
            filters: Map::new(),
        }
    }

    #[test]
    fn get_url_carries_search_in_query() {
        let url = request_url("realtor-search.p.rapidapi.com", &rent_request(HttpMethod::Get)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://realtor-search.p.rapidapi.com/properties/v3/list-for-rent?zip=76131&offset=0&limit=40&sort=relevance"
        );
    }

    #[test]
    fn post_url_has_no_query_and_body_has_status() {
        let request = rent_request(HttpMethod::Post);
        let url = request_url("realty-in-us.p.rapidapi.com", &request).unwrap();
        assert_eq!(url.query(), None);

        let body = post_payload(&request);
        assert_eq!(body["zip"], json!("76131"));
        assert_eq!(body["status"], json!(["for_rent"]));
        assert_eq!(body["sort"]["field"], json!("list_date"));
        assert_eq!(body["limit"], json!(40));
    }

    #[test]
    fn filters_flatten_into_query_and_merge_into_body() {
        let mut request = rent_request(HttpMethod::Get);
        request.purpose = SearchPurpose::Sale;
        request.filters.insert("list_price".into(), json!({ "max": 350000.0 }));
        request.filters.insert("prop_type".into(), json!(["condo", "single_family"]));

        let params = query_params(&request);
        assert!(params.contains(&("list_price".into(), r#"{"max":350000.0}"#.into())));
        assert!(params.contains(&("prop_type".into(), "condo,single_family".into())));

        let body = post_payload(&request);
        assert_eq!(body["status"], json!(["for_sale", "ready_to_build"]));
        assert_eq!(body["list_price"]["max"], json!(350000.0));
    }

    #[test]
    fn missing_key_is_a_config_error_before_any_network() {
        let client = RealtorClient::new("example.invalid", None).unwrap();
        let err = client.search(&rent_request(HttpMethod::Get)).unwrap_err();
        assert!(err.is_config());
    }
}
