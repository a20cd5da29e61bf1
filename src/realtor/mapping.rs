// src/realtor/mapping.rs

use crate::domain::listing::{Listing, DEFAULT_YEAR_BUILT};
use crate::realtor::models::{Description, RealtorRecord, Scalar};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    // "HOA $125/mo", "hoa fee: 1,200 / year", "HOA dues 85"
    static ref HOA_TEXT: Regex =
        Regex::new(r"(?i)hoa[^$\d]{0,24}\$?([\d,]{2,7})(?:\s*/\s*(mo|month|yr|year))?")
            .expect("valid HOA pattern");
}

/// First field that is actually filled in.
fn pick_first<'a>(candidates: &[Option<&'a Scalar>]) -> Option<&'a Scalar> {
    candidates.iter().flatten().copied().find(|s| s.is_present())
}

fn text_or(candidates: &[Option<&Scalar>], default: &str) -> String {
    pick_first(candidates)
        .map(Scalar::as_text)
        .unwrap_or_else(|| default.to_string())
}

fn number_or(candidates: &[Option<&Scalar>], default: f64) -> f64 {
    pick_first(candidates)
        .map(|s| s.as_f64().unwrap_or(default))
        .unwrap_or(default)
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn first_amount(fields: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .filter_map(|k| fields.get(*k))
        .find(|v| is_present(v))
        .and_then(value_as_f64)
        .unwrap_or(0.0)
}

/// Flattens one API record into a `Listing`.
///
/// Returns `None` for records without a positive price; everything else
/// falls back to defaults.
pub fn listing_from_record(record: &RealtorRecord) -> Option<Listing> {
    let empty_description = Description::default();
    let description = record.description.as_ref().unwrap_or(&empty_description);
    let address = record.location.as_ref().and_then(|l| l.address.as_ref());

    let price = number_or(
        &[
            record.list_price.as_ref(),
            description.price.as_ref(),
            record.price.as_ref(),
        ],
        0.0,
    );
    if price <= 0.0 {
        return None;
    }

    let line = text_or(
        &[
            address.and_then(|a| a.line.as_ref()),
            address.and_then(|a| a.street_name.as_ref()),
            record.address.as_ref(),
        ],
        "Unknown Address",
    );
    let city = text_or(
        &[address.and_then(|a| a.city.as_ref()), record.city.as_ref()],
        "Unknown City",
    );
    let state = text_or(
        &[
            address.and_then(|a| a.state_code.as_ref()),
            address.and_then(|a| a.state.as_ref()),
            record.state.as_ref(),
        ],
        "NA",
    )
    .to_uppercase();
    let zip_code = text_or(
        &[
            address.and_then(|a| a.postal_code.as_ref()),
            record.postal_code.as_ref(),
            record.zip_code.as_ref(),
        ],
        "00000",
    );

    let listing_id = text_or(
        &[record.property_id.as_ref(), record.listing_id.as_ref()],
        &format!("{line}-{zip_code}"),
    );

    Some(Listing {
        listing_id,
        address: line,
        city,
        state,
        zip_code,
        price,
        sqft: number_or(&[description.sqft.as_ref(), record.sqft.as_ref()], 0.0),
        bedrooms: number_or(&[description.beds.as_ref(), record.beds.as_ref()], 0.0),
        bathrooms: number_or(&[description.baths.as_ref(), record.baths.as_ref()], 0.0),
        year_built: number_or(
            &[description.year_built.as_ref(), record.year_built.as_ref()],
            f64::from(DEFAULT_YEAR_BUILT),
        ) as i32,
        lot_size_sqft: number_or(&[description.lot_sqft.as_ref(), record.lot_sqft.as_ref()], 0.0),
        hoa_monthly: extract_hoa_monthly(record, description),
        property_type: text_or(
            &[
                description.kind.as_ref(),
                description.property_type.as_ref(),
                record.prop_type.as_ref(),
            ],
            "unknown",
        ),
        listing_url: text_or(
            &[
                record.href.as_ref(),
                record.permalink.as_ref(),
                record.rdc_web_url.as_ref(),
            ],
            "",
        ),
    })
}

/// Best-effort monthly HOA amount.
///
/// Tries flat fee fields first, then nested `hoa`/`association` objects
/// (monthly, then annual / 12), then an "HOA $N/mo" phrase in the remarks.
pub fn extract_hoa_monthly(record: &RealtorRecord, description: &Description) -> f64 {
    let flat = [
        record.hoa_fee.as_ref(),
        record.hoa.as_ref(),
        record.monthly_hoa_fee.as_ref(),
        record.hoa_monthly.as_ref(),
        description.hoa_fee.as_ref(),
        description.hoa.as_ref(),
        description.monthly_hoa_fee.as_ref(),
        description.hoa_monthly.as_ref(),
        record.hoa_fee_per_month.as_ref(),
        description.hoa_fee_per_month.as_ref(),
    ];
    if let Some(amount) = flat
        .iter()
        .flatten()
        .filter_map(|v| value_as_f64(v))
        .find(|amount| *amount > 0.0)
    {
        return amount;
    }

    let nested = [
        record.hoa.as_ref(),
        description.hoa.as_ref(),
        record.association.as_ref(),
        description.association.as_ref(),
    ]
    .into_iter()
    .flatten()
    .find(|v| is_present(v));

    if let Some(Value::Object(fields)) = nested {
        let monthly = first_amount(fields, &["monthly_fee", "fee_monthly", "hoa_fee", "fee"]);
        if monthly > 0.0 {
            return monthly;
        }
        let annual = first_amount(fields, &["annual_fee", "yearly_fee", "fee_annual"]);
        if annual > 0.0 {
            return annual / 12.0;
        }
    }

    let text_blob = [
        record.remarks.as_ref(),
        description.text.as_ref(),
        description.description.as_ref(),
    ]
    .iter()
    .map(|s| s.map(Scalar::as_text).unwrap_or_default())
    .collect::<Vec<_>>()
    .join(" ");

    if let Some(caps) = HOA_TEXT.captures(&text_blob) {
        let amount: f64 = caps[1].replace(',', "").parse().unwrap_or(0.0);
        let cadence = caps
            .get(2)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_else(|| "mo".to_string());
        if amount > 0.0 {
            return if cadence == "yr" || cadence == "year" {
                amount / 12.0
            } else {
                amount
            };
        }
    }

    0.0
}
