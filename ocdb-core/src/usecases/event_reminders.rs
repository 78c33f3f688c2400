use super::prelude::*;

/// Events that ended before `now` and have not been flagged as
/// notified yet.
pub fn events_ended_unnotified<R: EventRepo>(repo: &R, now: Timestamp) -> Result<Vec<Event>> {
    let mut events = repo.all_events_chronologically()?;
    events.retain(|e| {
        e.ended_notification_sent_at.is_none() && e.ends_at.map_or(false, |end| end <= now)
    });
    Ok(events)
}

pub fn mark_event_ended_notified<R: EventRepo>(
    repo: &R,
    id: &str,
    sent_at: Timestamp,
) -> Result<()> {
    let mut event = repo.get_event(id)?;
    if event.ended_notification_sent_at.is_none() {
        event.ended_notification_sent_at = Some(sent_at);
        repo.update_event(&event)?;
    }
    Ok(())
}
