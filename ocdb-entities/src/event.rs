use crate::{id::*, time::*};

/// A conference edition with a scheduled date window.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id           : Id,
    pub name         : String,
    pub description  : Option<String>,
    pub location     : Option<String>,
    pub city         : Option<String>,
    pub country      : Option<String>,
    // Both start/end time stamps are stored with second precision!
    pub starts_at    : Option<Timestamp>,
    pub ends_at      : Option<Timestamp>,
    pub cfp          : bool,
    pub cfp_deadline : Option<Timestamp>,
    pub published_at : Option<Timestamp>,
    pub approved_at  : Option<Timestamp>,
    pub ended_notification_sent_at: Option<Timestamp>,
    pub created_at   : Timestamp,
}

impl Event {
    /// Publication and approval are independent lifecycle states,
    /// each signaled only by the presence of its timestamp.
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    pub fn is_approved(&self) -> bool {
        self.approved_at.is_some()
    }

    /// The active period of the event, if both bounds are known.
    pub fn active_window(&self) -> Option<(Timestamp, Timestamp)> {
        match (self.starts_at, self.ends_at) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
