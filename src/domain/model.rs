use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Villa {
    pub name: String,
    pub location: String,
    pub available_from: NaiveDate,
    pub available_until: NaiveDate,
    pub max_guests: u32,
    pub url: String,
    pub details: String,
}

impl Villa {
    /// e.g. "June 29 – July 11, 2025"
    pub fn availability_label(&self) -> String {
        let (from, until) = (self.available_from, self.available_until);
        if from.year() == until.year() {
            format!("{} – {}", from.format("%B %-d"), until.format("%B %-d, %Y"))
        } else {
            format!(
                "{} – {}",
                from.format("%B %-d, %Y"),
                until.format("%B %-d, %Y")
            )
        }
    }

    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.available_from <= date && date <= self.available_until
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_adults() -> u32 {
    1
}

/// 表單送出的候選紀錄，尚未驗證
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub villa: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for StayDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            villa: String::new(),
            adults: default_adults(),
            children: 0,
            start_date: None,
            end_date: None,
            notes: None,
        }
    }
}

impl StayDraft {
    pub fn new(name: impl Into<String>, villa: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            villa: villa.into(),
            ..Self::default()
        }
    }

    pub fn party(mut self, adults: u32, children: u32) -> Self {
        self.adults = adults;
        self.children = children;
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds a draft from raw form text. Empty date fields stay `None` so the
    /// ledger can report them as missing.
    pub fn from_form(
        name: &str,
        villa: &str,
        adults: u32,
        children: u32,
        start_date: &str,
        end_date: &str,
        notes: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.to_string(),
            villa: villa.to_string(),
            adults,
            children,
            start_date: parse_form_date("start date", start_date)?,
            end_date: parse_form_date("end date", end_date)?,
            notes: Some(notes.to_string()),
        })
    }

    pub fn guests(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }
}

/// 空字串視為未填寫
pub fn parse_form_date(field: &str, text: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field: field.to_string(),
            value: text.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayEntry {
    pub id: EntryId,
    pub name: String,
    pub villa: String,
    pub adults: u32,
    pub children: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StayEntry {
    pub fn guests(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    /// "2 Adults | 1 Child"
    pub fn party_label(&self) -> String {
        format!(
            "{} {} | {} {}",
            self.adults,
            if self.adults == 1 { "Adult" } else { "Adults" },
            self.children,
            if self.children == 1 { "Child" } else { "Children" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn villa(from: NaiveDate, until: NaiveDate) -> Villa {
        Villa {
            name: "Villa Carina".to_string(),
            location: "Island of Ischia, Campania".to_string(),
            available_from: from,
            available_until: until,
            max_guests: 12,
            url: "https://example.com".to_string(),
            details: String::new(),
        }
    }

    #[test]
    fn test_availability_label_same_year() {
        let v = villa(date(2025, 6, 29), date(2025, 7, 11));
        assert_eq!(v.availability_label(), "June 29 – July 11, 2025");
    }

    #[test]
    fn test_availability_label_across_years() {
        let v = villa(date(2025, 12, 28), date(2026, 1, 4));
        assert_eq!(
            v.availability_label(),
            "December 28, 2025 – January 4, 2026"
        );
    }

    #[test]
    fn test_is_available_on_includes_both_ends() {
        let v = villa(date(2025, 6, 29), date(2025, 7, 11));
        assert!(v.is_available_on(date(2025, 6, 29)));
        assert!(v.is_available_on(date(2025, 7, 11)));
        assert!(!v.is_available_on(date(2025, 7, 12)));
    }

    #[test]
    fn test_party_label_pluralization() {
        let mut entry = StayEntry {
            id: EntryId(1),
            name: "Alice".to_string(),
            villa: "Villa Carina".to_string(),
            adults: 1,
            children: 1,
            start_date: date(2025, 6, 29),
            end_date: date(2025, 7, 1),
            notes: None,
        };
        assert_eq!(entry.party_label(), "1 Adult | 1 Child");
        entry.adults = 2;
        entry.children = 0;
        assert_eq!(entry.party_label(), "2 Adults | 0 Children");
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(parse_form_date("start date", "").unwrap(), None);
        assert_eq!(
            parse_form_date("start date", "2025-07-01").unwrap(),
            Some(date(2025, 7, 1))
        );
        assert!(matches!(
            parse_form_date("start date", "07/01/2025"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_draft_defaults_match_empty_form() {
        let draft: StayDraft = toml::from_str("name = \"Alice\"").unwrap();
        assert_eq!(draft.adults, 1);
        assert_eq!(draft.children, 0);
        assert!(draft.villa.is_empty());
        assert!(draft.start_date.is_none());
    }
}
