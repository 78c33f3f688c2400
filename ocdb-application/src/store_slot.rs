use super::*;

pub fn create_slot<D: Db>(
    db: &D,
    new_slot: usecases::NewSlot,
    user_id: Option<&Id>,
) -> Result<Slot> {
    usecases::authorize_event_admin(db, &new_slot.event_id, user_id)?;
    let slot = usecases::create_slot(db, new_slot).map_err(|err| {
        warn!("Failed to store newly created slot: {err}");
        err
    })?;
    Ok(slot)
}

pub fn update_slot<D: Db>(
    db: &D,
    id: &str,
    new_slot: usecases::NewSlot,
    user_id: Option<&Id>,
) -> Result<Slot> {
    usecases::authorize_event_admin(db, &new_slot.event_id, user_id)?;
    let slot = usecases::update_slot(db, id, new_slot).map_err(|err| {
        warn!("Failed to store updated slot {id}: {err}");
        err
    })?;
    Ok(slot)
}
