// src/sources/csv_files.rs

use crate::domain::listing::{Listing, DEFAULT_YEAR_BUILT};
use crate::errors::LoadError;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

type Row = HashMap<String, String>;

/// Reads a headed CSV into one map per row. Header BOMs and cell
/// whitespace are trimmed.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Row>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LoadError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|v| v.trim().to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// First non-empty value among `keys`.
fn field<'a>(row: &'a Row, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .map(String::as_str)
        .find(|v| !v.is_empty())
}

fn text(row: &Row, keys: &[&str], default: &str) -> String {
    field(row, keys).unwrap_or(default).to_string()
}

/// Blank or unparseable numbers fall back to `default`.
fn number(row: &Row, keys: &[&str], default: f64) -> f64 {
    field(row, keys)
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(default)
}

fn year(row: &Row, key: &str) -> i32 {
    field(row, &[key])
        .and_then(|v| v.parse::<f64>().ok())
        .map(|v| v as i32)
        .unwrap_or(DEFAULT_YEAR_BUILT)
}

fn listing_from_row(row: &Row) -> Listing {
    Listing {
        listing_id: text(row, &["listing_id"], ""),
        address: text(row, &["address"], "Unknown Address"),
        city: text(row, &["city"], "Unknown City"),
        state: text(row, &["state"], "NA").to_uppercase(),
        zip_code: text(row, &["zip_code"], "00000"),
        price: number(row, &["price"], 0.0),
        sqft: number(row, &["sqft"], 0.0),
        bedrooms: number(row, &["bedrooms"], 0.0),
        bathrooms: number(row, &["bathrooms"], 0.0),
        year_built: year(row, "year_built"),
        lot_size_sqft: number(row, &["lot_size_sqft"], 0.0),
        hoa_monthly: number(row, &["hoa_monthly"], 0.0),
        property_type: text(row, &["property_type", "prop_type"], "unknown"),
        listing_url: text(row, &["listing_url", "url"], ""),
    }
}

/// For-sale listings, one per row.
pub fn load_listings_csv(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let listings: Vec<Listing> = read_csv_rows(path)?.iter().map(listing_from_row).collect();
    tracing::info!(path = %path.display(), count = listings.len(), "loaded listings CSV");
    Ok(listings)
}

/// Rental comparables. `price` carries the monthly rent, taken from
/// `monthly_rent`, `rent` or `price` in that order.
pub fn load_rental_comps_csv(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let comps: Vec<Listing> = read_csv_rows(path)?
        .iter()
        .map(|row| Listing {
            listing_id: text(row, &["comp_id", "listing_id"], "rent-comp"),
            address: text(row, &["address"], "Rental Comp"),
            price: number(row, &["monthly_rent", "rent", "price"], 0.0),
            hoa_monthly: 0.0,
            property_type: text(row, &["property_type"], "rental"),
            ..listing_from_row(row)
        })
        .collect();
    tracing::info!(path = %path.display(), count = comps.len(), "loaded rental comps CSV");
    Ok(comps)
}
