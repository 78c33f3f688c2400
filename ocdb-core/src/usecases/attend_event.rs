use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Registers the user for the event. Registering twice is a no-op;
/// the unique join row is enforced by the storage layer.
pub fn attend_event<R>(repo: &R, event_id: &str, user_id: &str) -> Result<()>
where
    R: EventRepo + UserRepo + AttendeeRepo,
{
    let event = repo.get_event(event_id)?;
    let user = repo.get_user(user_id)?;
    let attendee = Attendee {
        event_id: event.id,
        user_id: user.id,
        created_at: Timestamp::now(),
    };
    match repo.add_attendee(attendee) {
        Ok(()) | Err(RepoError::AlreadyExists) => Ok(()),
        Err(e) => Err(Error::Repo(e)),
    }
}

pub fn leave_event<R: AttendeeRepo>(repo: &R, event_id: &str, user_id: &str) -> Result<()> {
    Ok(repo.remove_attendee(event_id, user_id)?)
}
