use super::prelude::*;
use crate::util::validate::{date_in_window, TimeWindow, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewSlot {
    pub event_id  : String,
    pub track_id  : Option<String>,
    pub title     : String,
    pub starts_at : i64,
    pub ends_at   : Option<i64>,
    pub speakers  : Vec<String>,
}

pub fn create_slot<R>(repo: &R, s: NewSlot) -> Result<Slot>
where
    R: EventRepo + TrackRepo + SlotRepo,
{
    let slot = slot_from_new(Id::new(), s);
    validate_slot(repo, &slot)?;
    log::debug!("Storing newly created slot {}", slot.id);
    repo.create_slot(slot.clone())?;
    Ok(slot)
}

pub fn update_slot<R>(repo: &R, id: &str, s: NewSlot) -> Result<Slot>
where
    R: EventRepo + TrackRepo + SlotRepo,
{
    let old = repo.get_slot(id)?;
    let slot = slot_from_new(old.id, s);
    validate_slot(repo, &slot)?;
    log::debug!("Storing updated slot {}", slot.id);
    repo.update_slot(&slot)?;
    Ok(slot)
}

fn slot_from_new(id: Id, s: NewSlot) -> Slot {
    let NewSlot {
        event_id,
        track_id,
        title,
        starts_at,
        ends_at,
        speakers,
    } = s;
    Slot {
        id,
        event_id: event_id.into(),
        track_id: track_id.map(Into::into),
        title,
        starts_at: Timestamp::from_secs(starts_at),
        ends_at: ends_at.map(Timestamp::from_secs),
        speakers: speakers.into_iter().map(Into::into).collect(),
    }
}

// A slot must start within the active period of its event, and its
// track (if any) must belong to the same event.
fn validate_slot<R>(repo: &R, slot: &Slot) -> Result<()>
where
    R: EventRepo + TrackRepo,
{
    slot.validate()?;
    let event = repo.get_event(slot.event_id.as_str())?;
    let window = match event.active_window() {
        Some((start, end)) => TimeWindow::new(start, end),
        None => return Err(Error::EventWindowUndefined),
    };
    date_in_window(slot.starts_at, &window)?;
    if let Some(ref track_id) = slot.track_id {
        let track = repo.get_track(track_id.as_str())?;
        if track.event_id != slot.event_id {
            return Err(Error::TrackEventMismatch);
        }
    }
    Ok(())
}
