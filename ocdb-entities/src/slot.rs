use crate::{id::*, time::*};

/// A scheduled time block within an event, optionally assigned to a
/// track and held by zero or more speakers.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id        : Id,
    pub event_id  : Id,
    pub track_id  : Option<Id>,
    pub title     : String,
    pub starts_at : Timestamp,
    pub ends_at   : Option<Timestamp>,
    pub speakers  : Vec<Id>,
}

impl Slot {
    pub fn has_speaker(&self, user_id: &Id) -> bool {
        self.speakers.iter().any(|id| id == user_id)
    }
}
