use crate::{id::*, time::*};

/// Registration record linking a user to an event.
///
/// The existence of the record is the sole signal of attendance.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub event_id   : Id,
    pub user_id    : Id,
    pub created_at : Timestamp,
}
