use crate::id::*;

/// A named parallel session stream within an event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id       : Id,
    pub event_id : Id,
    pub name     : String,
    /// Relative display position among the sibling tracks of the event.
    pub order    : u32,
}
