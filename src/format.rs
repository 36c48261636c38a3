use num_bigint::BigUint;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NumberFormat {
    #[default]
    Raw,
    Grouped,
    Scientific,
}

impl NumberFormat {
    pub const GROUP_SEPARATOR: char = ',';
    pub const SIGNIFICANT_DIGITS: usize = 5;

    pub fn format(&self, n: &BigUint) -> String {
        let digits = n.to_str_radix(10);
        match self {
            Self::Raw => digits,
            Self::Grouped => Self::group(&digits),
            Self::Scientific => Self::scientific(&digits),
        }
    }

    fn group(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(Self::GROUP_SEPARATOR);
            }
            grouped.push(c);
        }
        grouped
    }

    // Truncates rather than rounds.
    fn scientific(digits: &str) -> String {
        let (lead, rest) = digits.split_at(1);
        let end = rest.len().min(Self::SIGNIFICANT_DIGITS - 1);
        let fraction = rest[..end].trim_end_matches('0');
        let exponent = rest.len();

        if fraction.is_empty() {
            format!("{lead}e{exponent}")
        } else {
            format!("{lead}.{fraction}e{exponent}")
        }
    }
}
