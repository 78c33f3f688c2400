use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name         : String,
    pub description  : Option<String>,
    pub location     : Option<String>,
    pub city         : Option<String>,
    pub country      : Option<String>,
    pub starts_at    : Option<i64>,
    pub ends_at      : Option<i64>,
    pub cfp          : bool,
    pub cfp_deadline : Option<i64>,
}

pub fn create_event<R: EventRepo>(repo: &R, e: NewEvent) -> Result<Event> {
    let event = event_from_new(Id::new(), Timestamp::now(), e).auto_correct();
    event.validate()?;
    log::debug!("Storing newly created event {}", event.id);
    repo.create_event(event.clone())?;
    Ok(event)
}

pub fn update_event<R: EventRepo>(repo: &R, id: &str, e: NewEvent) -> Result<Event> {
    let old = repo.get_event(id)?;
    let mut event = event_from_new(old.id, old.created_at, e);
    // Lifecycle timestamps are not editable through an update.
    event.published_at = old.published_at;
    event.approved_at = old.approved_at;
    event.ended_notification_sent_at = old.ended_notification_sent_at;
    let event = event.auto_correct();
    event.validate()?;
    log::debug!("Storing updated event {}", event.id);
    repo.update_event(&event)?;
    Ok(event)
}

fn event_from_new(id: Id, created_at: Timestamp, e: NewEvent) -> Event {
    let NewEvent {
        name,
        description,
        location,
        city,
        country,
        starts_at,
        ends_at,
        cfp,
        cfp_deadline,
    } = e;
    Event {
        id,
        name,
        description,
        location,
        city,
        country,
        starts_at: starts_at.map(Timestamp::from_secs),
        ends_at: ends_at.map(Timestamp::from_secs),
        cfp,
        cfp_deadline: cfp_deadline.map(Timestamp::from_secs),
        published_at: None,
        approved_at: None,
        ended_notification_sent_at: None,
        created_at,
    }
}
