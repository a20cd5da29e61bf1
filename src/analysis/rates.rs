// src/analysis/rates.rs

/// Effective annual property tax rate by state.
const STATE_PROPERTY_TAX_RATES: &[(&str, f64)] = &[
    ("AL", 0.0040),
    ("AK", 0.0119),
    ("AZ", 0.0063),
    ("AR", 0.0064),
    ("CA", 0.0075),
    ("CO", 0.0049),
    ("CT", 0.0185),
    ("DE", 0.0055),
    ("FL", 0.0090),
    ("GA", 0.0092),
    ("HI", 0.0031),
    ("ID", 0.0067),
    ("IL", 0.0215),
    ("IN", 0.0085),
    ("IA", 0.0157),
    ("KS", 0.0141),
    ("KY", 0.0083),
    ("LA", 0.0051),
    ("ME", 0.0119),
    ("MD", 0.0106),
    ("MA", 0.0117),
    ("MI", 0.0154),
    ("MN", 0.0110),
    ("MS", 0.0081),
    ("MO", 0.0099),
    ("MT", 0.0083),
    ("NE", 0.0161),
    ("NV", 0.0060),
    ("NH", 0.0186),
    ("NJ", 0.0223),
    ("NM", 0.0067),
    ("NY", 0.0172),
    ("NC", 0.0081),
    ("ND", 0.0100),
    ("OH", 0.0156),
    ("OK", 0.0090),
    ("OR", 0.0100),
    ("PA", 0.0149),
    ("RI", 0.0137),
    ("SC", 0.0056),
    ("SD", 0.0122),
    ("TN", 0.0064),
    ("TX", 0.0180),
    ("UT", 0.0056),
    ("VT", 0.0178),
    ("VA", 0.0082),
    ("WA", 0.0092),
    ("WV", 0.0059),
    ("WI", 0.0176),
    ("WY", 0.0058),
];

const DEFAULT_PROPERTY_TAX_RATE: f64 = 0.011;

/// Relative homeowners insurance cost for high-risk states.
const STATE_INSURANCE_FACTORS: &[(&str, f64)] = &[
    ("CA", 1.15),
    ("FL", 1.35),
    ("TX", 1.25),
    ("LA", 1.3),
    ("CO", 1.15),
    ("OK", 1.2),
    ("NY", 1.1),
];

fn lookup(table: &[(&str, f64)], state: &str) -> Option<f64> {
    table.iter().find(|(code, _)| *code == state).map(|(_, v)| *v)
}

pub fn property_tax_rate(state: &str) -> f64 {
    lookup(STATE_PROPERTY_TAX_RATES, state).unwrap_or(DEFAULT_PROPERTY_TAX_RATE)
}

pub fn insurance_factor(state: &str) -> f64 {
    lookup(STATE_INSURANCE_FACTORS, state).unwrap_or(1.0)
}
