use crate::domain::model::EntryId;
use chrono::Utc;

/// Source of fresh stay entry identifiers.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> EntryId;
}

/// 以建立時間（毫秒）作為 id，同一毫秒內遞增以保持唯一
#[derive(Debug, Default, Clone)]
pub struct TimestampIds {
    last: u64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> EntryId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last + 1);
        EntryId(self.last)
    }
}

#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}
