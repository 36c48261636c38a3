pub fn make_errors<I>(errors: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut report = String::from("\n=== START ERRORS ===\n");
    for err in errors {
        report.push_str(&format!("{}\n", err));
    }
    report.push_str("=== END ERRORS ===\n");
    report
}

pub fn print_errors<I>(errors: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    eprintln!("{}", make_errors(errors));
}
