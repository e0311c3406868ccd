/// Month/year header formatting for the calendar
use crate::exceptions::GenericError;
use log::debug;

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats the header shown above the day grid. `month` is 0-based.
pub trait MonthLabeler {
    fn month_year(&self, year: i32, month: u32) -> Result<String, GenericError>;
}

/// Labeler driven by a BCP-47-ish locale tag such as `ar`, `ar-EG` or `en_GB`.
/// Only the primary language subtag is considered.
#[derive(Debug, Clone)]
pub struct LocaleLabeler {
    tag: String,
}

impl LocaleLabeler {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn language(&self) -> String {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }
}

impl MonthLabeler for LocaleLabeler {
    fn month_year(&self, year: i32, month: u32) -> Result<String, GenericError> {
        let idx = month as usize;
        if idx >= 12 {
            return Err(GenericError::ParseError(format!(
                "month index {month} out of range"
            )));
        }
        match self.language().as_str() {
            "ar" => Ok(format!(
                "{} {}",
                ARABIC_MONTHS[idx],
                to_arabic_indic_digits(&year.to_string())
            )),
            "en" => Ok(format!("{} {}", ENGLISH_MONTHS[idx], year)),
            _ => Err(GenericError::UnsupportedLocale(self.tag.clone())),
        }
    }
}

/// Header label that is never blank: falls back to the fixed Arabic table
/// whenever the labeler cannot format.
pub fn month_year_label(labeler: &dyn MonthLabeler, year: i32, month: u32) -> String {
    match labeler.month_year(year, month) {
        Ok(label) if !label.trim().is_empty() => label,
        Ok(_) => fallback_month_year(year, month),
        Err(e) => {
            debug!("Month label localization unavailable, using fallback: {}", e);
            fallback_month_year(year, month)
        }
    }
}

pub fn fallback_month_year(year: i32, month: u32) -> String {
    format!("{} {}", ARABIC_MONTHS[(month % 12) as usize], year)
}

fn to_arabic_indic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenLabeler;

    impl MonthLabeler for BrokenLabeler {
        fn month_year(&self, _year: i32, _month: u32) -> Result<String, GenericError> {
            Err(GenericError::RuntimeError("no intl data".to_string()))
        }
    }

    struct BlankLabeler;

    impl MonthLabeler for BlankLabeler {
        fn month_year(&self, _year: i32, _month: u32) -> Result<String, GenericError> {
            Ok("  ".to_string())
        }
    }

    #[test]
    fn test_arabic_label() {
        let labeler = LocaleLabeler::new("ar");
        assert_eq!(labeler.month_year(2024, 5).unwrap(), "يونيو ٢٠٢٤");
    }

    #[test]
    fn test_region_subtag_ignored() {
        assert_eq!(
            LocaleLabeler::new("en_GB").month_year(2025, 0).unwrap(),
            "January 2025"
        );
        assert_eq!(
            LocaleLabeler::new("AR-eg").month_year(2024, 11).unwrap(),
            "ديسمبر ٢٠٢٤"
        );
    }

    #[test]
    fn test_unsupported_locale_errors() {
        let labeler = LocaleLabeler::new("xx");
        assert_eq!(
            labeler.month_year(2024, 5),
            Err(GenericError::UnsupportedLocale("xx".to_string()))
        );
    }

    #[test]
    fn test_fallback_when_unavailable() {
        assert_eq!(month_year_label(&BrokenLabeler, 2024, 5), "يونيو 2024");
        assert_eq!(month_year_label(&BlankLabeler, 2023, 0), "يناير 2023");
        assert_eq!(
            month_year_label(&LocaleLabeler::new("fr"), 2024, 1),
            "فبراير 2024"
        );
    }
}
