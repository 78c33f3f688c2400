use super::*;

pub fn create_track<D: Db>(
    db: &D,
    new_track: usecases::NewTrack,
    user_id: Option<&Id>,
) -> Result<Track> {
    usecases::authorize_event_admin(db, &new_track.event_id, user_id)?;
    let track = usecases::create_track(db, new_track).map_err(|err| {
        warn!("Failed to store newly created track: {err}");
        err
    })?;
    Ok(track)
}

pub fn reorder_tracks<D: Db>(
    db: &D,
    event_id: &str,
    ordered_ids: &[&str],
    user_id: Option<&Id>,
) -> Result<Vec<Track>> {
    usecases::authorize_event_admin(db, event_id, user_id)?;
    Ok(usecases::reorder_tracks(db, event_id, ordered_ids)?)
}
