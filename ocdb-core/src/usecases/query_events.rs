use std::collections::HashSet;

use super::prelude::*;
use crate::util::sort::cmp_events_chronologically;

/// Mutually exclusive temporal scopes of an event query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemporalScope {
    #[default]
    Upcoming,
    Past,
}

/// Independently toggleable filters, combined with logical AND.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub approved     : bool,
    pub published    : bool,
    pub organized_by : Option<Id>,
    pub attended_by  : Option<Id>,
    pub with_speaker : Option<Id>,
    pub scope        : Option<TemporalScope>,
}

impl EventQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            approved,
            published,
            organized_by,
            attended_by,
            with_speaker,
            scope,
        } = self;
        !*approved
            && !*published
            && organized_by.is_none()
            && attended_by.is_none()
            && with_speaker.is_none()
            && scope.is_none()
    }
}

pub fn query_events<R>(repo: &R, query: EventQuery) -> Result<Vec<Event>>
where
    R: EventRepo + SlotRepo + OrganizerRepo + AttendeeRepo,
{
    // One snapshot per invocation so every row sees the same "now".
    query_events_at(repo, query, Timestamp::now())
}

pub fn query_events_at<R>(repo: &R, query: EventQuery, now: Timestamp) -> Result<Vec<Event>>
where
    R: EventRepo + SlotRepo + OrganizerRepo + AttendeeRepo,
{
    if query.is_empty() {
        return Ok(repo.all_events_chronologically()?);
    }

    // Reject malformed filter arguments before any query executes.
    for id in [&query.organized_by, &query.attended_by, &query.with_speaker]
        .into_iter()
        .flatten()
    {
        if !id.is_valid() {
            return Err(Error::Id);
        }
    }

    let mut events = repo.all_events_chronologically()?;

    if query.approved {
        events.retain(|e| e.is_approved());
    }
    if query.published {
        events.retain(|e| e.is_published());
    }
    if let Some(ref user_id) = query.organized_by {
        let mut kept = Vec::with_capacity(events.len());
        for event in events {
            if repo.is_event_organized_by(event.id.as_str(), user_id.as_str())? {
                kept.push(event);
            }
        }
        events = kept;
    }
    if let Some(ref user_id) = query.attended_by {
        let mut kept = Vec::with_capacity(events.len());
        for event in events {
            if repo.is_event_attended_by(event.id.as_str(), user_id.as_str())? {
                kept.push(event);
            }
        }
        events = kept;
    }
    if let Some(ref user_id) = query.with_speaker {
        let speaker_events: HashSet<Id> = repo
            .slots_with_speaker(user_id.as_str())?
            .into_iter()
            .map(|slot| slot.event_id)
            .collect();
        events.retain(|e| speaker_events.contains(&e.id));
    }

    match query.scope {
        Some(TemporalScope::Past) => {
            events.retain(|e| e.ends_at.map_or(false, |end| end <= now));
            // Most recent past event first.
            events.sort_by(|a, b| cmp_events_chronologically(b, a));
        }
        Some(TemporalScope::Upcoming) => {
            // Soonest first; the repo order is already ascending.
            events.retain(|e| e.starts_at.map_or(false, |start| start >= now));
        }
        None => (),
    }

    Ok(events)
}
