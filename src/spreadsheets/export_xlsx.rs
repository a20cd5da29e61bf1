use crate::domain::analysis::Analysis;
use crate::errors::AppError;
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

const HEADERS: [&str; 22] = [
    "Rank",
    "Address",
    "City",
    "State",
    "Zip",
    "Price",
    "Beds",
    "Baths",
    "Sqft",
    "Year Built",
    "Score",
    "Est. Rent",
    "Rent Method",
    "Comps",
    "P&I",
    "Taxes",
    "Insurance",
    "PMI",
    "HOA",
    "Total Costs",
    "Net Cashflow",
    "Cash-on-Cash %",
];

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> AppError + '_ {
    move |e| AppError::Xlsx(format!("Failed to write {what}: {e}"))
}

fn write_row(sheet: &mut Worksheet, r: u32, rank: usize, a: &Analysis) -> Result<(), AppError> {
    let l = &a.listing;

    sheet
        .write_number(r, 0, rank as f64)
        .map_err(xlsx_err("rank"))?;
    sheet
        .write_string(r, 1, &l.address)
        .map_err(xlsx_err("address"))?;
    sheet.write_string(r, 2, &l.city).map_err(xlsx_err("city"))?;
    sheet.write_string(r, 3, &l.state).map_err(xlsx_err("state"))?;
    sheet
        .write_string(r, 4, &l.zip_code)
        .map_err(xlsx_err("zip"))?;

    let numbers = [
        (5, l.price),
        (6, l.bedrooms),
        (7, l.bathrooms),
        (8, l.sqft),
        (9, f64::from(l.year_built)),
        (10, a.score),
        (11, a.estimated_rent),
    ];
    for (col, value) in numbers {
        sheet
            .write_number(r, col, value)
            .map_err(xlsx_err(HEADERS[col as usize]))?;
    }

    sheet
        .write_string(r, 12, a.rent_estimation_method.as_str())
        .map_err(xlsx_err("rent method"))?;
    sheet
        .write_number(r, 13, a.comp_count as f64)
        .map_err(xlsx_err("comps"))?;

    let costs = [
        (14, a.monthly_mortgage_pi),
        (15, a.monthly_taxes),
        (16, a.monthly_insurance),
        (17, a.monthly_pmi),
        (18, a.monthly_hoa),
        (19, a.monthly_total_costs),
        (20, a.monthly_net_cashflow),
    ];
    for (col, value) in costs {
        sheet
            .write_number(r, col, value)
            .map_err(xlsx_err(HEADERS[col as usize]))?;
    }

    // Zero cash down has no finite return.
    if a.annual_cash_on_cash_return.is_finite() {
        sheet
            .write_number(r, 21, a.annual_cash_on_cash_return)
            .map_err(xlsx_err("cash-on-cash"))?;
    } else {
        sheet
            .write_string(r, 21, "inf")
            .map_err(xlsx_err("cash-on-cash"))?;
    }
    Ok(())
}

/// Serializes recommendations to an .xlsx workbook in memory.
pub fn recommendations_workbook(
    analyses: &[Analysis],
    generated_at: DateTime<Local>,
) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Recommendations")
        .map_err(xlsx_err("sheet name"))?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(|e| AppError::Xlsx(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, analysis) in analyses.iter().enumerate() {
        write_row(sheet, (i + 1) as u32, i + 1, analysis)?;
    }

    let footer = (analyses.len() + 2) as u32;
    sheet
        .write_string(
            footer,
            0,
            format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M")),
        )
        .map_err(xlsx_err("timestamp"))?;

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Xlsx(format!("Failed to save workbook: {e}")))
}

pub fn export_analyses_xlsx(analyses: &[Analysis], path: &Path) -> Result<(), AppError> {
    let buffer = recommendations_workbook(analyses, Local::now())?;
    std::fs::write(path, buffer)
        .map_err(|e| AppError::Xlsx(format!("Failed to write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), rows = analyses.len(), "exported recommendations");
    Ok(())
}
