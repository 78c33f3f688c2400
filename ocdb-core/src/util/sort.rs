use std::cmp::Ordering;

use crate::entities::*;

// Chronological order with the id as stable tiebreak; events without
// a start date sort last.
pub fn cmp_events_chronologically(a: &Event, b: &Event) -> Ordering {
    match (a.starts_at, b.starts_at) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

pub fn cmp_slots_by_start(a: &Slot, b: &Slot) -> Ordering {
    a.starts_at
        .cmp(&b.starts_at)
        .then_with(|| a.id.cmp(&b.id))
}

pub fn cmp_tracks_by_order(a: &Track, b: &Track) -> Ordering {
    a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id))
}
