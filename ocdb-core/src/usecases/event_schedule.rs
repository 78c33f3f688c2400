use super::prelude::*;

/// The slots of one track, ordered by start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSchedule {
    pub track: Track,
    pub slots: Vec<Slot>,
}

/// Presentable schedule of a single event.
///
/// A read-only projection; assembling it never mutates any entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchedule {
    pub event: Event,
    pub tracks: Vec<TrackSchedule>,
    /// Slots that are not assigned to any of the event's tracks.
    pub unassigned: Vec<Slot>,
}

pub fn event_schedule<R>(repo: &R, event_id: &str) -> Result<EventSchedule>
where
    R: EventRepo + TrackRepo + SlotRepo,
{
    let event = repo.get_event(event_id)?;
    let tracks = repo.tracks_of_event(event_id)?;
    let slots = repo.slots_of_event(event_id)?;

    let mut tracks: Vec<_> = tracks
        .into_iter()
        .map(|track| TrackSchedule {
            track,
            slots: vec![],
        })
        .collect();
    let mut unassigned = vec![];
    for slot in slots {
        let position = slot
            .track_id
            .as_ref()
            .and_then(|track_id| tracks.iter().position(|t| &t.track.id == track_id));
        match position {
            Some(i) => tracks[i].slots.push(slot),
            None => unassigned.push(slot),
        }
    }

    Ok(EventSchedule {
        event,
        tracks,
        unassigned,
    })
}
