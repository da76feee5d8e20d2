//! Date bounds for the arrival and departure pickers, and the stay-window
//! check the ledger applies on admission.

use crate::domain::model::Villa;
use crate::utils::error::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// `None` means the arrival picker stays disabled until a villa is chosen.
pub fn arrival_bounds(villa: Option<&Villa>) -> Option<DateBounds> {
    villa.map(|v| DateBounds {
        min: v.available_from,
        max: v.available_until,
    })
}

/// Departure needs both a villa and an arrival date; it may not precede arrival.
pub fn departure_bounds(villa: Option<&Villa>, start: Option<NaiveDate>) -> Option<DateBounds> {
    let villa = villa?;
    let start = start?;
    Some(DateBounds {
        min: start,
        max: villa.available_until,
    })
}

pub fn check_stay_window(
    villa: &Villa,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::InvalidDateRange { start, end });
    }
    if !villa.is_available_on(start) || !villa.is_available_on(end) {
        return Err(ValidationError::OutsideAvailability {
            villa: villa.name.clone(),
            from: villa.available_from,
            until: villa.available_until,
        });
    }
    Ok(())
}
