use super::*;

pub fn attend_event<D: Db>(db: &D, event_id: &str, user_id: &str) -> Result<()> {
    usecases::attend_event(db, event_id, user_id)?;
    info!("User {user_id} attends event {event_id}");
    Ok(())
}

pub fn leave_event<D: Db>(db: &D, event_id: &str, user_id: &str) -> Result<()> {
    usecases::leave_event(db, event_id, user_id)?;
    info!("User {user_id} no longer attends event {event_id}");
    Ok(())
}
