use super::prelude::*;

/// True if the user is recorded as an organizer of the event.
/// An absent viewer never administers anything.
pub fn is_event_administered_by<R>(
    repo: &R,
    event_id: &str,
    user_id: Option<&Id>,
) -> Result<bool>
where
    R: OrganizerRepo,
{
    match user_id {
        Some(user_id) => Ok(repo.is_event_organized_by(event_id, user_id.as_str())?),
        None => Ok(false),
    }
}

/// True if an attendee record exists for the user.
/// Always a fresh existence check against the store.
pub fn is_event_attended_by<R>(repo: &R, event_id: &str, user_id: Option<&Id>) -> Result<bool>
where
    R: AttendeeRepo,
{
    match user_id {
        Some(user_id) => Ok(repo.is_event_attended_by(event_id, user_id.as_str())?),
        None => Ok(false),
    }
}
