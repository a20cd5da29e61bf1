//! Plain-text recommendation report.

use crate::domain::analysis::Analysis;
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};

const RULE_WIDTH: usize = 120;

/// Rounds to whole units and groups thousands: `289900.4` -> `289,900`.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    (value.round() as i64).to_formatted_string(&Locale::en)
}

fn render_one(out: &mut impl Write, rank: usize, rec: &Analysis) -> io::Result<()> {
    let l = &rec.listing;
    writeln!(
        out,
        "#{rank} | {}, {}, {} {} | List ${}",
        l.address,
        l.city,
        l.state,
        l.zip_code,
        group_thousands(l.price)
    )?;
    writeln!(
        out,
        "    Specs: {:.0}bd/{:.1}ba | {} sqft | Built {} | Lot {} sqft",
        l.bedrooms,
        l.bathrooms,
        group_thousands(l.sqft),
        l.year_built,
        group_thousands(l.lot_size_sqft)
    )?;
    writeln!(
        out,
        "    Score: {:.1}/100 | Est. Rent ${}/mo ({}, comps={}) | Down Payment Used ${}",
        rec.score,
        group_thousands(rec.estimated_rent),
        rec.rent_estimation_method,
        rec.comp_count,
        group_thousands(rec.down_payment)
    )?;
    writeln!(
        out,
        "    Costs/mo: P&I ${}, Tax ${}, Ins ${}, Maint ${}, Mgmt ${}, Vacancy ${}, PMI ${}, HOA ${}",
        group_thousands(rec.monthly_mortgage_pi),
        group_thousands(rec.monthly_taxes),
        group_thousands(rec.monthly_insurance),
        group_thousands(rec.monthly_maintenance),
        group_thousands(rec.monthly_management),
        group_thousands(rec.monthly_vacancy),
        group_thousands(rec.monthly_pmi),
        group_thousands(rec.monthly_hoa)
    )?;
    writeln!(
        out,
        "    Net: ${}/mo | Cash-on-Cash: {:.2}%/yr",
        group_thousands(rec.monthly_net_cashflow),
        rec.annual_cash_on_cash_return
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Writes the ranked report, or the adjustment hint when nothing qualified.
pub fn render_report(
    out: &mut impl Write,
    recommendations: &[Analysis],
    location: &str,
    max_price: f64,
) -> io::Result<()> {
    if recommendations.is_empty() {
        writeln!(out, "No positive-cashflow houses found with current constraints.")?;
        writeln!(
            out,
            "Try one or more adjustments: increase --max-down-payment, lower --max-price, \
             or reduce maintenance/management/vacancy assumptions."
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} recommended investment properties in {} under ${}.",
        recommendations.len(),
        location.to_uppercase(),
        group_thousands(max_price)
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for (i, rec) in recommendations.iter().enumerate() {
        render_one(out, i + 1, rec)?;
    }
    Ok(())
}
