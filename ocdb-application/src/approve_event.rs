use super::*;

pub fn approve_event<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
    id: &str,
) -> Result<Event> {
    let event = usecases::approve_event(db, id)?;
    // Failing notifications must not undo the approval.
    if let Err(err) = notify_organizers(db, &event, |addresses| {
        notify.event_approved(addresses, &event)
    }) {
        error!(
            "Failed to send notifications for approved event {}: {}",
            event.id, err
        );
    }
    Ok(event)
}

pub(crate) fn notify_organizers<D: Db>(
    db: &D,
    event: &Event,
    send: impl FnOnce(&[String]),
) -> Result<()> {
    let email_addresses = organizer_email_addresses(db, event.id.as_str())?;
    send(&email_addresses);
    Ok(())
}

pub(crate) fn organizer_email_addresses<D: Db>(db: &D, event_id: &str) -> Result<Vec<String>> {
    let mut email_addresses = Vec::new();
    for organizer in db.organizers_of_event(event_id)? {
        let user = db.get_user(organizer.user_id.as_str())?;
        email_addresses.push(user.email);
    }
    Ok(email_addresses)
}
