use chrono::NaiveDate;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse a command-line date given as `YYYY-MM-DD` or `YYYYMMDD`.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("'{value}' is not a date (expected YYYY-MM-DD or YYYYMMDD)"))
}
