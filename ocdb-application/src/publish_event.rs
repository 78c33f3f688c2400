use super::*;

pub fn publish_event<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
    id: &str,
) -> Result<Event> {
    let event = usecases::publish_event(db, id)?;
    // Failing notifications must not undo the publication.
    if let Err(err) = notify_attendees(db, notify, &event) {
        error!(
            "Failed to send notifications for published event {}: {}",
            event.id, err
        );
    }
    Ok(event)
}

fn notify_attendees<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
    event: &Event,
) -> Result<()> {
    let mut email_addresses = Vec::new();
    for attendee in db.attendees_of_event(event.id.as_str())? {
        let user = db.get_user(attendee.user_id.as_str())?;
        email_addresses.push(user.email);
    }
    notify.event_published(&email_addresses, event);
    Ok(())
}
