//! Currency value type.
//!
//! A [`Currency`] keeps the major and minor units (e.g. dollars and cents) as
//! separate integers rather than a float. Parsing and formatting assume a
//! period for decimal separation and a comma for digit grouping; that matches
//! the source data this crate is fed, not any particular locale.
//!
//! Independent of the data-view core; records that carry money as text can be
//! parsed into this type by consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DECIMAL_SEPARATOR: char = '.';
const THOUSANDS_SEPARATOR: char = ',';
const MINOR_PLACES: u32 = 2;

/// Errors from currency parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The input string is not a currency amount.
    #[error("cannot parse '{raw}' to currency")]
    Parse { raw: String },

    /// The minor value does not fit the permitted number of decimal places.
    #[error("minor currency value {minor} is too big for the {places} permitted decimal places")]
    MinorOverflow { minor: u32, places: u32 },
}

/// A currency amount split into major and minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Major units (e.g. dollars). Carries the sign.
    pub major: i64,
    /// Minor units (e.g. cents).
    pub minor: u32,
}

impl Currency {
    /// Create an amount from major and minor units.
    pub fn new(major: i64, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Format with a given number of decimal places for the minor part.
    ///
    /// Fails if the minor value does not fit in `places` digits.
    pub fn format_with_places(&self, places: u32) -> Result<String, CurrencyError> {
        let fits = if places == 0 {
            self.minor == 0
        } else {
            self.minor < 10u32.pow(places)
        };
        if !fits {
            return Err(CurrencyError::MinorOverflow {
                minor: self.minor,
                places,
            });
        }

        let major = group_thousands(self.major);
        if places == 0 {
            Ok(major)
        } else {
            Ok(format!(
                "{major}{DECIMAL_SEPARATOR}{minor:0width$}",
                minor = self.minor,
                width = places as usize
            ))
        }
    }
}

impl fmt::Display for Currency {
    /// Two minor places and thousands grouping; an oversized minor part is
    /// written out in full rather than failing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:02}",
            group_thousands(self.major),
            DECIMAL_SEPARATOR,
            self.minor
        )
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parse `"1,234.56"`-style input.
    ///
    /// Grouping separators are stripped from the major part. A short minor
    /// part is right-padded, so `"2.5"` is 2 major and 50 minor, not 5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CurrencyError::Parse { raw: s.to_string() };

        let mut split = s.splitn(2, DECIMAL_SEPARATOR);
        let major_part = split.next().ok_or_else(parse_err)?;
        let major: i64 = major_part
            .replace(THOUSANDS_SEPARATOR, "")
            .parse()
            .map_err(|_| parse_err())?;

        let minor = match split.next() {
            None => 0,
            Some(minor_part) => {
                let mut padded = minor_part.to_string();
                while (padded.len() as u32) < MINOR_PLACES {
                    padded.push('0');
                }
                padded.parse::<u32>().map_err(|_| parse_err())?
            }
        };

        Ok(Self { major, minor })
    }
}

impl From<f64> for Currency {
    fn from(amount: f64) -> Self {
        let major = amount.trunc() as i64;
        let minor = ((amount - amount.trunc()).abs() * f64::from(10u32.pow(MINOR_PLACES))).round()
            as u32;
        Self { major, minor }
    }
}

/// Insert grouping separators every three digits, sign-aware.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{Currency, CurrencyError};

    #[test]
    fn parses_major_and_minor() {
        let c: Currency = "12.34".parse().unwrap();
        assert_eq!(c, Currency::new(12, 34));
    }

    #[test]
    fn parses_grouped_major() {
        let c: Currency = "1,234,567.89".parse().unwrap();
        assert_eq!(c, Currency::new(1_234_567, 89));
    }

    #[test]
    fn short_minor_part_is_right_padded() {
        let c: Currency = "2.5".parse().unwrap();
        assert_eq!(c, Currency::new(2, 50));
    }

    #[test]
    fn major_only_input_has_zero_minor() {
        let c: Currency = "42".parse().unwrap();
        assert_eq!(c, Currency::new(42, 0));
    }

    #[test]
    fn parses_negative_amounts() {
        let c: Currency = "-1,234.56".parse().unwrap();
        assert_eq!(c, Currency::new(-1234, 56));
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
        assert!("1.2.3".parse::<Currency>().is_err());
    }

    #[test]
    fn display_groups_and_pads() {
        assert_eq!(Currency::new(1_234_567, 5).to_string(), "1,234,567.05");
        assert_eq!(Currency::new(-123, 40).to_string(), "-123.40");
        assert_eq!(Currency::new(0, 0).to_string(), "0.00");
    }

    #[test]
    fn format_with_places_validates_minor() {
        let c = Currency::new(3, 505);
        assert_eq!(
            c.format_with_places(2),
            Err(CurrencyError::MinorOverflow {
                minor: 505,
                places: 2
            })
        );
        assert_eq!(c.format_with_places(3).unwrap(), "3.505");

        let whole = Currency::new(7, 0);
        assert_eq!(whole.format_with_places(0).unwrap(), "7");
        assert!(Currency::new(7, 1).format_with_places(0).is_err());
    }

    #[test]
    fn from_f64_splits_units() {
        assert_eq!(Currency::from(2.5), Currency::new(2, 50));
        assert_eq!(Currency::from(19.99), Currency::new(19, 99));
        assert_eq!(Currency::from(-2.25), Currency::new(-2, 25));
    }

    #[test]
    fn parse_display_round_trip() {
        for s in ["0.00", "12.34", "1,234.56", "-987,654.32"] {
            let c: Currency = s.parse().unwrap();
            assert_eq!(c.to_string(), s);
        }
    }
}
