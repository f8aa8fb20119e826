//! Format rules for Form 283 data fields.
//!
//! Each rule is a pure function that classifies a non-empty value as
//! valid or returns a human-readable reason. Empty values are never
//! violations — emptiness is reported separately as a missing field.
//! Rule evaluation follows the schema enumeration order, so the
//! resulting correction list is deterministic, with at most one entry
//! per leaf (the first failing precondition wins).

use chrono::{Datelike, NaiveDate, Utc};
use form283_core::{DateComponent, DateValue, FieldKind, FormRecord};

use crate::accessor::{leaf_fields, LeafField};
use crate::report::FieldCorrection;

/// Minimum plausible year on the form.
const MIN_YEAR: i32 = 1900;

/// The registry of per-field format validators.
///
/// Rule assignment is decided at schema-definition time via
/// [`FieldKind`]; this type only carries the year bounds, captured once
/// at construction so validation stays a pure, deterministic function
/// afterward. Read-only after construction and safe to share across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct FormatRuleSet {
    min_year: i32,
    max_year: i32,
}

impl FormatRuleSet {
    /// Rule set with the default year range `1900..=current year`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_year_range(MIN_YEAR, Utc::now().year())
    }

    /// Rule set with an explicit year range (used by tests to stay
    /// independent of the wall clock).
    #[must_use]
    pub const fn with_year_range(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Check every data field of `record`, in schema order.
    ///
    /// Returns at most one [`FieldCorrection`] per leaf field.
    #[must_use]
    pub fn check(&self, record: &FormRecord) -> Vec<FieldCorrection> {
        leaf_fields(record)
            .filter_map(|leaf| self.check_leaf(&leaf, record))
            .collect()
    }

    /// Check a single leaf. Returns `None` for empty values, free-text
    /// fields, and values that satisfy their rule.
    #[must_use]
    pub fn check_leaf(&self, leaf: &LeafField<'_>, record: &FormRecord) -> Option<FieldCorrection> {
        let value = leaf.value.trim();
        if value.is_empty() {
            return None;
        }

        let reason = match leaf.kind {
            FieldKind::FreeText => None,
            FieldKind::NationalId => national_id(value),
            FieldKind::MobilePhone => mobile_phone(value),
            FieldKind::LandlinePhone => landline_phone(value),
            FieldKind::PostalCode => postal_code(value),
            FieldKind::Date { component, date } => self.date_component(component, date(record)),
        }?;

        Some(FieldCorrection {
            field: leaf.path.to_string(),
            value: value.to_string(),
            reason,
        })
    }

    fn date_component(&self, component: DateComponent, date: &DateValue) -> Option<String> {
        match component {
            DateComponent::Day => self.day(date),
            DateComponent::Month => month(date.month.trim()),
            DateComponent::Year => self.year(date.year.trim()),
        }
    }

    fn day(&self, date: &DateValue) -> Option<String> {
        let value = date.day.trim();
        if !is_digits(value) {
            return Some("Day must be numeric".to_string());
        }
        let Ok(d) = value.parse::<u32>() else {
            return Some(format!("Day must be 1-31, got {value}"));
        };
        if !(1..=31).contains(&d) {
            return Some(format!("Day must be 1-31, got {d}"));
        }

        // Month-aware (and leap-year-aware) check only when the sibling
        // components are themselves usable; otherwise 1-31 is the best
        // that can be said about the day alone.
        let m = date.month.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))?;
        let y = date
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|y| (self.min_year..=self.max_year).contains(y))?;
        if NaiveDate::from_ymd_opt(y, m, d).is_none() {
            return Some(format!("Day {d} is not valid for {m}/{y}"));
        }
        None
    }

    fn year(&self, value: &str) -> Option<String> {
        if !is_digits(value) {
            return Some("Year must be numeric".to_string());
        }
        let out_of_range = format!(
            "Year should be {}-{}, got {value}",
            self.min_year, self.max_year
        );
        match value.parse::<i32>() {
            Ok(y) if (self.min_year..=self.max_year).contains(&y) => None,
            _ => Some(out_of_range),
        }
    }
}

impl Default for FormatRuleSet {
    fn default() -> Self {
        Self::new()
    }
}

fn month(value: &str) -> Option<String> {
    if !is_digits(value) {
        return Some("Month must be numeric".to_string());
    }
    match value.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => None,
        _ => Some(format!("Month must be 1-12, got {value}")),
    }
}

/// Israeli ID number: digits, length 5-9, official check digit after
/// left-padding to 9 digits (alternating 1,2 weights from the left,
/// two-digit products reduced by digit sum, total divisible by 10).
fn national_id(value: &str) -> Option<String> {
    let cleaned = strip_separators(value, &[' ', '-']);
    if !is_digits(&cleaned) {
        return Some("ID number contains non-numeric characters".to_string());
    }
    if !(5..=9).contains(&cleaned.len()) {
        return Some(format!(
            "ID number should be 5-9 digits, got {}",
            cleaned.len()
        ));
    }

    let padded = format!("{cleaned:0>9}");
    let sum: u32 = padded
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let product = u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 2 };
            if product > 9 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    if sum % 10 != 0 {
        return Some("ID number has an invalid checksum".to_string());
    }
    None
}

/// Israeli mobile phone: 10 digits starting 05, separators allowed.
fn mobile_phone(value: &str) -> Option<String> {
    let cleaned = strip_separators(value, &[' ', '-', '(', ')']);
    if !is_digits(&cleaned) {
        return Some("Phone number contains non-numeric characters".to_string());
    }
    if !cleaned.starts_with("05") {
        return Some("Israeli mobile phone numbers must start with 05".to_string());
    }
    if cleaned.len() != 10 {
        return Some(format!(
            "Mobile phone should be 10 digits, got {}",
            cleaned.len()
        ));
    }
    None
}

/// Israeli landline phone: 9 digits starting 0, separators allowed.
fn landline_phone(value: &str) -> Option<String> {
    let cleaned = strip_separators(value, &[' ', '-', '(', ')']);
    if !is_digits(&cleaned) {
        return Some("Phone number contains non-numeric characters".to_string());
    }
    if !cleaned.starts_with('0') {
        return Some("Israeli phone numbers must start with 0".to_string());
    }
    if cleaned.len() != 9 {
        return Some(format!(
            "Landline phone should be 9 digits, got {}",
            cleaned.len()
        ));
    }
    None
}

/// Israeli postal code: exactly 7 digits, separators allowed.
fn postal_code(value: &str) -> Option<String> {
    let cleaned = strip_separators(value, &[' ', '-']);
    if !is_digits(&cleaned) {
        return Some("Postal code must be numeric".to_string());
    }
    if cleaned.len() != 7 {
        return Some(format!(
            "Postal code should be 7 digits, got {}",
            cleaned.len()
        ));
    }
    None
}

fn strip_separators(value: &str, separators: &[char]) -> String {
    value.chars().filter(|c| !separators.contains(c)).collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use form283_core::FormRecord;

    fn rules() -> FormatRuleSet {
        FormatRuleSet::with_year_range(1900, 2026)
    }

    #[test]
    fn test_national_id_valid_checksum() {
        assert_eq!(national_id("123456782"), None);
        // Separators are stripped before checking
        assert_eq!(national_id("12345-6782"), None);
        assert_eq!(national_id("123 456 782"), None);
    }

    #[test]
    fn test_national_id_short_ids_are_left_padded() {
        // 5-digit ID, valid once padded to 000010306
        assert_eq!(national_id("10306"), None);
    }

    #[test]
    fn test_national_id_transposed_digits_fail_checksum() {
        let reason = national_id("213456782").unwrap();
        assert!(reason.contains("checksum"), "got: {reason}");
    }

    #[test]
    fn test_national_id_format_violations() {
        assert!(national_id("12345678X").unwrap().contains("non-numeric"));
        assert!(national_id("1234").unwrap().contains("5-9 digits"));
        assert!(national_id("1234567890").unwrap().contains("5-9 digits"));
    }

    #[test]
    fn test_mobile_phone_valid() {
        assert_eq!(mobile_phone("0502474947"), None);
        assert_eq!(mobile_phone("050-247-4947"), None);
        assert_eq!(mobile_phone("(050) 247 4947"), None);
    }

    #[test]
    fn test_mobile_phone_wrong_leading_digit() {
        let reason = mobile_phone("650-123-4567").unwrap();
        assert!(reason.contains("start with 05"), "got: {reason}");
    }

    #[test]
    fn test_mobile_phone_wrong_length() {
        let reason = mobile_phone("050-247-494").unwrap();
        assert!(reason.contains("10 digits"), "got: {reason}");
        assert!(reason.contains("got 9"), "got: {reason}");
    }

    #[test]
    fn test_landline_phone() {
        assert_eq!(landline_phone("097656054"), None);
        assert_eq!(landline_phone("09-765-6054"), None);
        assert!(landline_phone("97656054").unwrap().contains("start with 0"));
        assert!(landline_phone("09765605").unwrap().contains("9 digits"));
        // A mobile number in the landline field fails by length
        assert!(landline_phone("0502474947").unwrap().contains("9 digits"));
    }

    #[test]
    fn test_postal_code() {
        assert_eq!(postal_code("4050403"), None);
        assert_eq!(postal_code("405-0403"), None);
        assert!(postal_code("40504").unwrap().contains("7 digits"));
        assert!(postal_code("40504A3").unwrap().contains("numeric"));
    }

    #[test]
    fn test_month_rule() {
        assert_eq!(month("12"), None);
        assert_eq!(month("1"), None);
        assert!(month("13").unwrap().contains("1-12"));
        assert!(month("0").unwrap().contains("1-12"));
        assert!(month("ינואר").unwrap().contains("numeric"));
    }

    #[test]
    fn test_year_rule() {
        let rules = rules();
        assert_eq!(rules.year("1995"), None);
        assert_eq!(rules.year("2026"), None);
        assert!(rules.year("1899").unwrap().contains("1900-2026"));
        assert!(rules.year("2050").unwrap().contains("1900-2026"));
        assert!(rules.year("שנה").unwrap().contains("numeric"));
        // Structurally unreadable values become violations, not panics
        assert!(rules.year("99999999999999999999").unwrap().contains("1900-2026"));
    }

    #[test]
    fn test_day_is_leap_year_aware() {
        let rules = rules();
        let leap = DateValue {
            day: "29".to_string(),
            month: "2".to_string(),
            year: "2024".to_string(),
        };
        assert_eq!(rules.day(&leap), None);

        let non_leap = DateValue {
            day: "29".to_string(),
            month: "2".to_string(),
            year: "2023".to_string(),
        };
        let reason = rules.day(&non_leap).unwrap();
        assert!(reason.contains("not valid"), "got: {reason}");
    }

    #[test]
    fn test_day_knows_month_lengths() {
        let rules = rules();
        let date = DateValue {
            day: "31".to_string(),
            month: "4".to_string(),
            year: "2022".to_string(),
        };
        assert!(rules.day(&date).unwrap().contains("not valid"));
    }

    #[test]
    fn test_day_falls_back_to_range_without_usable_siblings() {
        let rules = rules();
        // No month/year: 31 is acceptable, 32 is not
        let date = DateValue {
            day: "31".to_string(),
            ..DateValue::default()
        };
        assert_eq!(rules.day(&date), None);

        let date = DateValue {
            day: "32".to_string(),
            ..DateValue::default()
        };
        assert!(rules.day(&date).unwrap().contains("1-31"));

        assert!(rules
            .day(&DateValue {
                day: "יום".to_string(),
                ..DateValue::default()
            })
            .unwrap()
            .contains("numeric"));
    }

    #[test]
    fn test_check_skips_empty_values() {
        let record = FormRecord::default();
        assert!(rules().check(&record).is_empty());
    }

    #[test]
    fn test_check_reports_schema_paths_in_order() {
        let record = FormRecord {
            id_number: "213456782".to_string(),
            mobile_phone: "650-123-4567".to_string(),
            ..FormRecord::default()
        };

        let corrections = rules().check(&record);
        assert_eq!(corrections.len(), 2);
        // ID precedes mobile in schema order
        assert_eq!(corrections[0].field, "מספר זהות");
        assert_eq!(corrections[0].value, "213456782");
        assert_eq!(corrections[1].field, "טלפון נייד");
    }

    #[test]
    fn test_at_most_one_correction_per_leaf() {
        // Both non-numeric AND wrong length: first failing rule wins
        let record = FormRecord {
            id_number: "12X".to_string(),
            ..FormRecord::default()
        };
        let corrections = rules().check(&record);
        assert_eq!(corrections.len(), 1);
        assert!(corrections[0].reason.contains("non-numeric"));
    }

    #[test]
    fn test_free_text_fields_have_no_rules() {
        let record = FormRecord {
            accident_description: "123!!@#$ anything goes".to_string(),
            ..FormRecord::default()
        };
        assert!(rules().check(&record).is_empty());
    }
}
