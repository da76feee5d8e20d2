use crate::core::ledger::StayLedger;
use crate::domain::model::StayEntry;
use crate::domain::ports::IdGenerator;
use serde::Serialize;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Serialize)]
pub struct VillaSummary {
    pub name: String,
    pub location: String,
    pub availability: String,
    pub url: String,
    pub max_guests: u32,
    pub occupancy: u32,
    pub remaining: u32,
    pub entries: Vec<StayEntry>,
}

/// Derived view of every villa in catalog order.
pub fn summarize<G: IdGenerator>(ledger: &StayLedger<G>) -> Vec<VillaSummary> {
    ledger
        .catalog()
        .list()
        .iter()
        .map(|villa| VillaSummary {
            name: villa.name.clone(),
            location: villa.location.clone(),
            availability: villa.availability_label(),
            url: villa.url.clone(),
            max_guests: villa.max_guests,
            occupancy: ledger.occupancy(villa),
            remaining: ledger.remaining_capacity(villa),
            entries: ledger.entries_for(villa).cloned().collect(),
        })
        .collect()
}

impl fmt::Display for VillaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Location: {}", self.location)?;
        writeln!(f, "  Dates Available: {}", self.availability)?;
        writeln!(f, "  Maximum Guests: {}", self.max_guests)?;
        writeln!(
            f,
            "  Current Total Guests: {}/{}",
            self.occupancy, self.max_guests
        )?;
        writeln!(f, "  View Villa Details: {}", self.url)?;
        for entry in &self.entries {
            writeln!(f, "  - [{}] {}: {}", entry.id, entry.name, entry.party_label())?;
            writeln!(
                f,
                "    Stay: {} to {}",
                entry.start_date.format("%-m/%-d/%Y"),
                entry.end_date.format("%-m/%-d/%Y")
            )?;
            if let Some(notes) = &entry.notes {
                writeln!(f, "    Notes: {}", notes)?;
            }
        }
        Ok(())
    }
}

pub fn render_text(summaries: &[VillaSummary]) -> String {
    let mut out = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", summary);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::VillaCatalog;
    use crate::domain::model::StayDraft;
    use crate::domain::ports::SequentialIds;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_lists_villas_with_entries() {
        let mut ledger = StayLedger::with_ids(VillaCatalog::estate_2025(), SequentialIds::default());
        ledger
            .add_entry(
                StayDraft::new("Alice", "Villa Carina")
                    .party(2, 1)
                    .dates(
                        NaiveDate::from_ymd_opt(2025, 6, 29).unwrap(),
                        NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
                    )
                    .notes("Vegetarian"),
            )
            .unwrap();

        let summaries = summarize(&ledger);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].occupancy, 3);
        assert_eq!(summaries[0].remaining, 9);
        assert_eq!(summaries[1].entries.len(), 0);

        let text = render_text(&summaries);
        assert!(text.contains("Current Total Guests: 3/12"));
        assert!(text.contains("[1] Alice: 2 Adults | 1 Child"));
        assert!(text.contains("Stay: 6/29/2025 to 7/3/2025"));
        assert!(text.contains("Notes: Vegetarian"));
        assert!(text.contains("Current Total Guests: 0/16"));
    }
}
