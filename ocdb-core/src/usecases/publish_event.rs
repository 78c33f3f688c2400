use super::prelude::*;

/// Marks the event as published. Publication is independent of
/// approval; neither touches the other's timestamp.
pub fn publish_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    let mut event = repo.get_event(id)?;
    if event.published_at.is_none() {
        event.published_at = Some(Timestamp::now());
        repo.update_event(&event)?;
    }
    Ok(event)
}
