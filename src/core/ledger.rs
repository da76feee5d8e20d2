use crate::core::catalog::VillaCatalog;
use crate::core::constraints::check_stay_window;
use crate::domain::model::{EntryId, StayDraft, StayEntry, Villa};
use crate::domain::ports::{IdGenerator, TimestampIds};
use crate::utils::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPolicy {
    /// Reject stays that start after they end or leave the villa's window.
    /// Adults must also be at least one. Turning this off accepts any dates
    /// the input surface lets through.
    #[serde(default = "enabled")]
    pub enforce_date_window: bool,
}

fn enabled() -> bool {
    true
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            enforce_date_window: true,
        }
    }
}

/// One row of the villa selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VillaOption {
    pub name: String,
    pub remaining: u32,
    pub full: bool,
}

/// Sole owner of the stay entries. Occupancy is always recomputed from the
/// entries; nothing is cached.
#[derive(Debug)]
pub struct StayLedger<G: IdGenerator = TimestampIds> {
    catalog: VillaCatalog,
    policy: LedgerPolicy,
    ids: G,
    entries: Vec<StayEntry>,
}

impl StayLedger<TimestampIds> {
    pub fn new(catalog: VillaCatalog) -> Self {
        Self::with_ids(catalog, TimestampIds::default())
    }
}

impl Default for StayLedger<TimestampIds> {
    fn default() -> Self {
        Self::new(VillaCatalog::default())
    }
}

impl<G: IdGenerator> StayLedger<G> {
    pub fn with_ids(catalog: VillaCatalog, ids: G) -> Self {
        Self {
            catalog,
            policy: LedgerPolicy::default(),
            ids,
            entries: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: LedgerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &VillaCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    pub fn entries(&self) -> &[StayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&StayEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn occupancy(&self, villa: &Villa) -> u32 {
        self.entries_for(villa)
            .fold(0u32, |total, e| total.saturating_add(e.guests()))
    }

    /// Never negative: an over-full villa reports zero.
    pub fn remaining_capacity(&self, villa: &Villa) -> u32 {
        villa.max_guests.saturating_sub(self.occupancy(villa))
    }

    pub fn would_exceed_capacity(&self, villa: &Villa, adults: u32, children: u32) -> bool {
        let requested = u64::from(self.occupancy(villa)) + u64::from(adults) + u64::from(children);
        requested > u64::from(villa.max_guests)
    }

    pub fn entries_for<'a>(&'a self, villa: &'a Villa) -> impl Iterator<Item = &'a StayEntry> + 'a {
        self.entries.iter().filter(move |e| e.villa == villa.name)
    }

    /// Villa selector rows for a party of the given size.
    pub fn villa_options(&self, adults: u32, children: u32) -> Vec<VillaOption> {
        self.catalog
            .list()
            .iter()
            .map(|villa| VillaOption {
                name: villa.name.clone(),
                remaining: self.remaining_capacity(villa),
                full: self.would_exceed_capacity(villa, adults, children),
            })
            .collect()
    }

    /// Validates the draft and appends it. On any error the ledger is left
    /// untouched.
    pub fn add_entry(&mut self, draft: StayDraft) -> Result<&StayEntry, ValidationError> {
        let (start_date, end_date) = match self.check_draft(&draft) {
            Ok(dates) => dates,
            Err(e) => {
                tracing::warn!("Rejected stay for '{}': {}", draft.name, e);
                return Err(e);
            }
        };

        let entry = StayEntry {
            id: self.ids.next_id(),
            name: draft.name.trim().to_string(),
            villa: draft.villa,
            adults: draft.adults,
            children: draft.children,
            start_date,
            end_date,
            notes: draft
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };

        tracing::info!(
            "Added stay {} for {} at {} ({} guests, {} to {})",
            entry.id,
            entry.name,
            entry.villa,
            entry.guests(),
            entry.start_date,
            entry.end_date
        );

        let index = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Unknown ids are ignored.
    pub fn remove_entry(&mut self, id: EntryId) -> Option<StayEntry> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(position);
        tracing::info!("Removed stay {} for {} at {}", id, removed.name, removed.villa);
        Some(removed)
    }

    fn check_draft(&self, draft: &StayDraft) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::missing("name"));
        }
        if draft.villa.is_empty() {
            return Err(ValidationError::missing("villa"));
        }
        let villa = self
            .catalog
            .lookup(&draft.villa)
            .ok_or_else(|| ValidationError::UnknownVilla {
                name: draft.villa.clone(),
            })?;
        let start = draft
            .start_date
            .ok_or_else(|| ValidationError::missing("start date"))?;
        let end = draft
            .end_date
            .ok_or_else(|| ValidationError::missing("end date"))?;

        if self.policy.enforce_date_window {
            check_stay_window(villa, start, end)?;
            if draft.adults < 1 {
                return Err(ValidationError::InvalidGuestCount {
                    adults: draft.adults,
                });
            }
        }

        if self.would_exceed_capacity(villa, draft.adults, draft.children) {
            return Err(ValidationError::CapacityExceeded {
                villa: villa.name.clone(),
                requested: draft.guests(),
                remaining: self.remaining_capacity(villa),
            });
        }

        tracing::debug!(
            "Admitting {} guests to {} (occupancy {}/{})",
            draft.guests(),
            villa.name,
            self.occupancy(villa),
            villa.max_guests
        );
        Ok((start, end))
    }
}
