use super::prelude::*;
use crate::util::validate::Validate;

#[derive(Debug, Clone, Default)]
pub struct NewTrack {
    pub event_id: String,
    pub name: String,
}

pub fn create_track<R>(repo: &R, t: NewTrack) -> Result<Track>
where
    R: EventRepo + TrackRepo,
{
    let NewTrack { event_id, name } = t;
    let event = repo.get_event(&event_id)?;
    // New tracks are appended after the existing siblings.
    let order = repo
        .tracks_of_event(&event_id)?
        .iter()
        .map(|t| t.order + 1)
        .max()
        .unwrap_or(0);
    let track = Track {
        id: Id::new(),
        event_id: event.id,
        name,
        order,
    };
    track.validate()?;
    log::debug!("Storing newly created track {}", track.id);
    repo.create_track(track.clone())?;
    Ok(track)
}

/// Reassigns the display order of an event's tracks to the given id
/// sequence. Tracks not mentioned keep their relative order after the
/// mentioned ones.
pub fn reorder_tracks<R: TrackRepo>(
    repo: &R,
    event_id: &str,
    ordered_ids: &[&str],
) -> Result<Vec<Track>> {
    let mut tracks = repo.tracks_of_event(event_id)?;
    tracks.sort_by_key(|t| {
        ordered_ids
            .iter()
            .position(|id| *id == t.id.as_str())
            .unwrap_or(usize::MAX)
    });
    for (i, track) in tracks.iter_mut().enumerate() {
        let order = i as u32;
        if track.order != order {
            track.order = order;
            repo.update_track(track)?;
        }
    }
    Ok(tracks)
}
