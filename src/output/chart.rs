use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::{format::NumberFormat, output::listing::label};

pub fn print_chart(entries: &[(i64, BigUint)], format: &NumberFormat, max_bar_width: u32) {
    print!("{}", make_chart(entries, format, max_bar_width));
}

pub fn make_chart(
    entries: &[(i64, BigUint)],
    format: &NumberFormat,
    max_bar_width: u32,
) -> String {
    let max_total = entries
        .iter()
        .map(|(_, total)| total)
        .max()
        .cloned()
        .unwrap_or_default();

    let labels: Vec<String> = entries.iter().map(|(x, _)| label(*x)).collect();
    let values: Vec<String> = entries.iter().map(|(_, t)| format.format(t)).collect();
    let max_label_len = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_value_len = values.iter().map(|v| v.len()).max().unwrap_or(0);

    let mut chart = String::new();

    for (((_, total), label), value) in entries.iter().zip(labels).zip(values) {
        let len = bar_len(total, &max_total, max_bar_width);
        let name = console::pad_str(&label, max_label_len, console::Alignment::Left, None);

        chart.push_str(&format!(
            "{name}   [{bar:<bar_width$}]   {value:>value_width$}\n",
            bar = "#".repeat(len),
            bar_width = max_bar_width as usize,
            value_width = max_value_len,
        ));
    }

    chart
}

/// `round(total / max * width)` in exact integer arithmetic. Any non-zero
/// total gets at least one cell.
pub fn bar_len(total: &BigUint, max_total: &BigUint, max_bar_width: u32) -> usize {
    if max_total.is_zero() {
        return 0;
    }

    let scaled = (total * max_bar_width * 2u32 + max_total) / (max_total * 2u32);
    let len = scaled.to_usize().unwrap_or(max_bar_width as usize);

    if len == 0 && !total.is_zero() {
        1
    } else {
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn bar_scaling() {
        assert_eq!(bar_len(&big(12952), &big(12952), 50), 50);
        assert_eq!(bar_len(&big(4954), &big(12952), 50), 19);
        assert_eq!(bar_len(&big(1), &big(12952), 50), 1);
        assert_eq!(bar_len(&big(0), &big(12952), 50), 0);
        assert_eq!(bar_len(&big(0), &big(0), 50), 0);
    }

    #[test]
    fn bar_scaling_rounds_half_up() {
        assert_eq!(bar_len(&big(1), &big(4), 2), 1);
        assert_eq!(bar_len(&big(3), &big(4), 2), 2);
        assert_eq!(bar_len(&big(1), &big(3), 2), 1);
    }

    #[test]
    fn renders_rows() {
        let entries = vec![(0, big(1)), (1, big(10)), (2, big(100))];
        let chart = make_chart(&entries, &NumberFormat::Raw, 10);
        assert_eq!(
            chart,
            "x = 0   [#         ]     1\n\
             x = 1   [#         ]    10\n\
             x = 2   [##########]   100\n"
        );
    }
}
