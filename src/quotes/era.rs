//! Japanese imperial calendar formatting for the quote page

use chrono::{Datelike, NaiveDate};

/// Era names with their first day, newest first
const ERAS: [(&str, (i32, u32, u32)); 5] = [
    ("令和", (2019, 5, 1)),
    ("平成", (1989, 1, 8)),
    ("昭和", (1926, 12, 25)),
    ("大正", (1912, 7, 30)),
    ("明治", (1868, 9, 8)),
];

/// Format a date as `<era><year>年<month>月<day>日`
///
/// The first year of an era is written 元年. Dates before Meiji fall
/// back to the Gregorian year.
pub fn format_japanese_date(date: NaiveDate) -> String {
    let ymd = (date.year(), date.month(), date.day());

    match ERAS.iter().find(|(_, start)| ymd >= *start) {
        Some((name, (start_year, _, _))) => {
            let era_year = date.year() - start_year + 1;
            let year = if era_year == 1 {
                "元".to_string()
            } else {
                era_year.to_string()
            };
            format!("{}{}年{}月{}日", name, year, date.month(), date.day())
        }
        None => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
    }
}
