use super::*;

use crate::approve_event::notify_organizers;

/// Scans for ended events and notifies their organizers exactly once.
pub fn send_event_ended_notifications<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
) -> Result<usize> {
    let now = Timestamp::now();
    let events = usecases::events_ended_unnotified(db, now)?;
    let mut sent = 0;
    for event in events {
        if let Err(err) =
            notify_organizers(db, &event, |addresses| notify.event_ended(addresses, &event))
        {
            warn!(
                "Failed to send ended notification for event {}: {}",
                event.id, err
            );
            continue;
        }
        usecases::mark_event_ended_notified(db, event.id.as_str(), now)?;
        sent += 1;
    }
    if sent > 0 {
        info!("Sent {sent} event-ended notifications");
    }
    Ok(sent)
}
