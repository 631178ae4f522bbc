use chrono::NaiveDate;
use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Normalizes an IGDB human readable release date.
///
/// Exact dates such as `Dec 25, 2024` become `2024-12-25`. Quarter and
/// year-only dates are approximated to the first day of the period but keep
/// the `Mon 01, YYYY` form. Unknown shapes are returned unchanged and `TBD`
/// or empty input yields an empty string.
pub fn format_date(date: &str) -> String {
    lazy_static! {
        static ref QUARTER_RE: Regex = Regex::new(r"\bQ(?P<quarter>[1-4])\s+(?P<year>\d{4})\b").unwrap();
        static ref YEAR_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
    }

    if date.is_empty() || date == TBD {
        return String::new();
    }

    if let Some(cap) = QUARTER_RE.captures(date) {
        let month = QUARTER_MONTHS
            .get(&cap["quarter"])
            .copied()
            .unwrap_or("Jan");
        return format!("{month} 01, {}", &cap["year"]);
    }

    if YEAR_RE.is_match(date) {
        return format!("Jan 01, {date}");
    }

    match NaiveDate::parse_from_str(date, "%b %d, %Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date.to_owned(),
    }
}

const TBD: &str = "TBD";

static QUARTER_MONTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "1" => "Jan",
    "2" => "Apr",
    "3" => "Jul",
    "4" => "Oct",
};
