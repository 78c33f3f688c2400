// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait EventRepo {
    fn create_event(&self, _: Event) -> Result<()>;
    fn update_event(&self, _: &Event) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;

    // Ordered by start (events without a start date last), with the
    // id as tiebreak to keep repeated reads deterministic.
    fn all_events_chronologically(&self) -> Result<Vec<Event>>;

    fn count_events(&self) -> Result<usize>;
}

pub trait TrackRepo {
    fn create_track(&self, _: Track) -> Result<()>;
    fn update_track(&self, _: &Track) -> Result<()>;

    fn get_track(&self, id: &str) -> Result<Track>;

    // Ordered by the relative track order, then by id.
    fn tracks_of_event(&self, event_id: &str) -> Result<Vec<Track>>;
}

pub trait SlotRepo {
    fn create_slot(&self, _: Slot) -> Result<()>;
    fn update_slot(&self, _: &Slot) -> Result<()>;

    fn get_slot(&self, id: &str) -> Result<Slot>;

    // Ordered by start, then by id.
    fn slots_of_event(&self, event_id: &str) -> Result<Vec<Slot>>;

    fn slots_with_speaker(&self, user_id: &str) -> Result<Vec<Slot>>;
}

pub trait OrganizerRepo {
    fn add_organizer(&self, _: Organizer) -> Result<()>;
    fn remove_organizer(&self, event_id: &str, user_id: &str) -> Result<()>;

    fn organizers_of_event(&self, event_id: &str) -> Result<Vec<Organizer>>;

    fn is_event_organized_by(&self, event_id: &str, user_id: &str) -> Result<bool>;
}

pub trait AttendeeRepo {
    fn add_attendee(&self, _: Attendee) -> Result<()>;
    fn remove_attendee(&self, event_id: &str, user_id: &str) -> Result<()>;

    fn attendees_of_event(&self, event_id: &str) -> Result<Vec<Attendee>>;

    // Direct existence check so the answer never depends on any
    // attendee list that happens to be loaded already.
    fn is_event_attended_by(&self, event_id: &str, user_id: &str) -> Result<bool>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait ReviewRepo {
    fn create_review(&self, _: Review) -> Result<()>;

    fn reviews_of_event(&self, event_id: &str) -> Result<Vec<Review>>;
}
