pub mod catalog;
pub mod constraints;
pub mod ledger;
pub mod summary;

pub use crate::domain::model::{EntryId, StayDraft, StayEntry, Villa};
pub use crate::domain::ports::{IdGenerator, SequentialIds, TimestampIds};
pub use crate::utils::error::{Result, ValidationError};
