use super::prelude::*;

/// Detects whether the viewer may administer the event. Enforcement is
/// up to the caller; this only reports `Unauthorized`.
pub fn authorize_event_admin<R>(repo: &R, event_id: &str, user_id: Option<&Id>) -> Result<()>
where
    R: OrganizerRepo,
{
    if super::is_event_administered_by(repo, event_id, user_id)? {
        return Ok(());
    }
    Err(Error::Unauthorized)
}
