//! The daily quote page

use crate::quotes::era::format_japanese_date;
use crate::quotes::record::Quote;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Ensō marker drawn above the quote
pub const ENSO: &str = "◯";

/// Everything the quote page shows
///
/// The date is computed on every render and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct QuotePage {
    pub quote: String,
    pub author: String,
    pub from: String,
    pub date: String,
}

impl QuotePage {
    pub fn render(quote: &Quote, today: NaiveDate) -> Self {
        Self {
            quote: quote.quote.clone(),
            author: quote.author.clone(),
            from: quote.from.clone(),
            date: format_japanese_date(today),
        }
    }

    /// `author - from` line
    pub fn attribution(&self) -> String {
        format!("{} - {}", self.author, self.from)
    }
}

impl fmt::Display for QuotePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ENSO)?;
        writeln!(f, "{}", self.quote)?;
        writeln!(f, "{}", self.attribution())?;
        write!(f, "{}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_quote_and_era_date() {
        let quote = Quote::new("Know thyself.", "Socrates", "Delphi");
        let page = QuotePage::render(&quote, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        assert_eq!(
            page.to_string(),
            "◯\nKnow thyself.\nSocrates - Delphi\n令和8年10月19日"
        );
    }

    #[test]
    fn placeholder_renders_blank_fields() {
        let page = QuotePage::render(&Quote::empty(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(page.quote, "");
        assert_eq!(page.attribution(), " - ");
    }
}
