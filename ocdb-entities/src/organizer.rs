use crate::{id::*, time::*};

/// Join record granting a user administrative rights over an event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    pub event_id   : Id,
    pub user_id    : Id,
    pub created_at : Timestamp,
}
