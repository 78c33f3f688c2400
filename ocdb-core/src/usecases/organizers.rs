use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Grants administrative rights over an event, on behalf of an acting
/// organizer.
pub fn add_organizer<R>(
    repo: &R,
    event_id: &str,
    user_id: &str,
    acting_user: Option<&Id>,
) -> Result<()>
where
    R: EventRepo + UserRepo + OrganizerRepo,
{
    super::authorize_event_admin(repo, event_id, acting_user)?;
    let event = repo.get_event(event_id)?;
    let user = repo.get_user(user_id)?;
    let organizer = Organizer {
        event_id: event.id,
        user_id: user.id,
        created_at: Timestamp::now(),
    };
    match repo.add_organizer(organizer) {
        Ok(()) | Err(RepoError::AlreadyExists) => Ok(()),
        Err(e) => Err(Error::Repo(e)),
    }
}

pub fn remove_organizer<R>(
    repo: &R,
    event_id: &str,
    user_id: &str,
    acting_user: Option<&Id>,
) -> Result<()>
where
    R: OrganizerRepo,
{
    super::authorize_event_admin(repo, event_id, acting_user)?;
    Ok(repo.remove_organizer(event_id, user_id)?)
}
