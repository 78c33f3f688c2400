use super::*;

pub fn create_event<D: Db>(
    db: &D,
    new_event: usecases::NewEvent,
    created_by: Option<&Id>,
) -> Result<Event> {
    let event = usecases::create_event(db, new_event).map_err(|err| {
        warn!("Failed to store newly created event: {err}");
        err
    })?;
    // The creator administers the event from the start.
    if let Some(user_id) = created_by {
        let organizer = Organizer {
            event_id: event.id.clone(),
            user_id: user_id.clone(),
            created_at: Timestamp::now(),
        };
        db.add_organizer(organizer)?;
    }
    Ok(event)
}

pub fn update_event<D: Db>(
    db: &D,
    id: &str,
    new_event: usecases::NewEvent,
    user_id: Option<&Id>,
) -> Result<Event> {
    usecases::authorize_event_admin(db, id, user_id)?;
    let event = usecases::update_event(db, id, new_event).map_err(|err| {
        warn!("Failed to store updated event {id}: {err}");
        err
    })?;
    Ok(event)
}
