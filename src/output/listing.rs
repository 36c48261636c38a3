use num_bigint::BigUint;

use crate::format::NumberFormat;

pub fn label(x: i64) -> String {
    format!("x = {x}")
}

pub fn make_listing(entries: &[(i64, BigUint)], format: &NumberFormat) -> String {
    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|(x, total)| (label(*x), format.format(total)))
        .collect();

    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

    let mut listing = String::new();
    for (l, v) in rows {
        listing.push_str(&format!("{l:<label_width$}: {v:>value_width$}\n"));
    }
    listing
}

pub fn print_listing(entries: &[(i64, BigUint)], format: &NumberFormat) {
    print!("{}", make_listing(entries, format));
}
