pub mod data;

use crate::country::data::{ALL_COUNTRIES, COUNTRY_TABLE, RUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

impl Country {
    /// ISO 3166-1 alpha-2 code, the key of `COUNTRY_TABLE`.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn entry(&self) -> Option<CountryEntry> {
        COUNTRY_TABLE.get(self.code).copied()
    }
}

pub const DEFAULT_COUNTRY: Country = RUS;

/// Dialing rules of one country.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryEntry {
    /// Digits dialed after `+`, without separators.
    pub calling_code: &'static str,
    /// Leading digit used instead of the calling code for domestic calls.
    pub national_prefix: Option<char>,
    /// Digits of a domestic number once the national prefix is dropped.
    pub national_number_length: usize,
}

pub fn all_countries() -> &'static [Country] {
    ALL_COUNTRIES
}

/// Look a country up by its alpha-2 code, case-insensitively.
pub fn country_by_code(code: &str) -> Option<Country> {
    ALL_COUNTRIES
        .iter()
        .copied()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::data::{ARM, USA};

    #[test]
    fn every_country_has_an_entry() {
        for country in all_countries() {
            let entry = country.entry().expect("missing table entry");
            assert!(!entry.calling_code.is_empty());
            assert!(entry.calling_code.bytes().all(|b| b.is_ascii_digit()));
            assert!(entry.national_prefix.is_none_or(|p| p.is_ascii_digit()));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(country_by_code("us"), Some(USA));
        assert_eq!(country_by_code("AM"), Some(ARM));
        assert_eq!(country_by_code("zz"), None);
    }

    #[test]
    fn default_country_is_russia() {
        let entry = DEFAULT_COUNTRY.entry().unwrap();
        assert_eq!(entry.calling_code, "7");
        assert_eq!(entry.national_prefix, Some('8'));
        assert_eq!(entry.national_number_length, 10);
    }
}
