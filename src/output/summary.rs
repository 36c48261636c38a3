use std::time::Duration;

use crate::{count::total::Breakdown, format::NumberFormat, utils::count_digits};

pub fn make_summary(breakdown: &Breakdown, format: &NumberFormat, took: Duration) -> String {
    let mut summary = String::new();
    let mut max_len = 0;
    let mut push = |s: &str| {
        if s.len() > max_len {
            max_len = s.len();
        }
        summary.push_str(s);
        summary.push('\n');
    };

    push(&format!(
        "Increasing or Decreasing Numbers Below 10^{}",
        breakdown.exponent
    ));
    push(&format!("Increasing: {}", format.format(&breakdown.increasing)));
    push(&format!("Decreasing: {}", format.format(&breakdown.decreasing)));
    push(&format!("Duplicates: {}", format.format(&breakdown.duplicates)));
    push(&format!("Total: {}", format.format(&breakdown.total)));
    push(&format!("Digits: {}", count_digits(&breakdown.total)));
    push(&format!("Took: {:.2?}", took));

    let sep = "=".repeat(max_len);
    format!("{}\n{}{}\n", sep, summary, sep)
}

pub fn print_summary(breakdown: &Breakdown, format: &NumberFormat, took: Duration) {
    println!("{}", make_summary(breakdown, format, took));
}
