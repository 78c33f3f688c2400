use super::prelude::*;

/// Marks the event as approved. Approval is independent of
/// publication; neither touches the other's timestamp.
pub fn approve_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    let mut event = repo.get_event(id)?;
    if event.approved_at.is_none() {
        event.approved_at = Some(Timestamp::now());
        repo.update_event(&event)?;
    }
    Ok(event)
}
