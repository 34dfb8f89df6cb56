use crate::calendar::MonthCursor;
use crate::date_key::DateKey;
use chrono::NaiveDate;
use std::error::Error;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(
        &mut self,
        flag: &str,
    ) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name)
                .into()
        })
    }

    /// Extract a `YYYY-MM` value for a flag
    pub fn extract_month(
        &mut self,
        flag: &str,
    ) -> Result<MonthCursor, Box<dyn Error>> {
        let raw = self.extract_value(flag)?;
        parse_month(&raw)
    }

    /// Check if there are remaining arguments
    pub fn has_more(&self) -> bool {
        self.iter.len() > 0
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    /// Collect remaining args
    pub fn collect_remaining(self) -> Vec<String> {
        self.iter.collect()
    }
}

/// Parse a `YYYY-MM-DD` date, or `today`.
pub fn parse_date(
    raw: &str,
    today: NaiveDate,
) -> Result<NaiveDate, Box<dyn Error>> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    DateKey::parse_date(raw.trim())
        .ok_or_else(|| format!("Invalid date: {raw} (expected YYYY-MM-DD)").into())
}

/// Parse a `YYYY-MM` month.
pub fn parse_month(raw: &str) -> Result<MonthCursor, Box<dyn Error>> {
    MonthCursor::parse(raw)
        .ok_or_else(|| format!("Invalid month: {raw} (expected YYYY-MM)").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
    }

    #[test]
    fn test_arg_parser_extract_month() {
        let args = vec!["--month".to_string(), "2024-02".to_string()];
        let mut parser = ArgParser::new(args, "list");
        let flag = parser.next().unwrap();
        assert_eq!(flag, "--month");
        let month = parser.extract_month("--month").unwrap();
        assert_eq!(month, MonthCursor::new(2024, 2).unwrap());
        assert!(!parser.has_more());
    }

    #[test]
    fn test_arg_parser_missing_value() {
        let mut parser = ArgParser::new(vec![], "list");
        let err = parser.extract_value("--month").unwrap_err();
        assert_eq!(err.to_string(), "Provide a value after --month for list");
    }

    #[test]
    fn test_arg_parser_collect_remaining() {
        let args =
            vec!["buy".to_string(), "milk".to_string(), "today".to_string()];
        let parser = ArgParser::new(args, "set");
        assert_eq!(parser.collect_remaining(), vec!["buy", "milk", "today"]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("today", today()).unwrap(), today());
        assert_eq!(
            parse_date("2024-02-29", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29", today()).is_err());
        assert!(parse_date("29/02/2024", today()).is_err());
    }
}
