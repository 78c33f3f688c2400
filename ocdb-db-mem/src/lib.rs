// In-memory implementation of the repository traits. Backs the
// application flows and the CLI; persistence across processes is
// provided by seed import/export, not by this store.

use std::sync::Arc;

use parking_lot::RwLock;

use ocdb_core::{
    entities::*,
    repositories::{Error as RepoError, *},
    util::sort::{cmp_events_chronologically, cmp_slots_by_start, cmp_tracks_by_order},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
struct Tables {
    events: Vec<Event>,
    tracks: Vec<Track>,
    slots: Vec<Slot>,
    organizers: Vec<Organizer>,
    attendees: Vec<Attendee>,
    users: Vec<User>,
    reviews: Vec<Review>,
}

/// Thread-safe in-memory store. Clones share the same tables.
#[derive(Debug, Default, Clone)]
pub struct MemDb(Arc<RwLock<Tables>>);

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepo for MemDb {
    fn create_event(&self, e: Event) -> Result<()> {
        let mut tables = self.0.write();
        if tables.events.iter().any(|x| x.id == e.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.events.push(e);
        Ok(())
    }

    fn update_event(&self, e: &Event) -> Result<()> {
        for x in self.0.write().events.iter_mut() {
            if x.id == e.id {
                *x = e.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        self.0
            .read()
            .events
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        let mut events = self.0.read().events.clone();
        events.sort_by(cmp_events_chronologically);
        Ok(events)
    }

    fn count_events(&self) -> Result<usize> {
        Ok(self.0.read().events.len())
    }
}

impl TrackRepo for MemDb {
    fn create_track(&self, t: Track) -> Result<()> {
        let mut tables = self.0.write();
        if tables.tracks.iter().any(|x| x.id == t.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.tracks.push(t);
        Ok(())
    }

    fn update_track(&self, t: &Track) -> Result<()> {
        for x in self.0.write().tracks.iter_mut() {
            if x.id == t.id {
                *x = t.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_track(&self, id: &str) -> Result<Track> {
        self.0
            .read()
            .tracks
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn tracks_of_event(&self, event_id: &str) -> Result<Vec<Track>> {
        let mut tracks: Vec<_> = self
            .0
            .read()
            .tracks
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect();
        tracks.sort_by(cmp_tracks_by_order);
        Ok(tracks)
    }
}

impl SlotRepo for MemDb {
    fn create_slot(&self, s: Slot) -> Result<()> {
        let mut tables = self.0.write();
        if tables.slots.iter().any(|x| x.id == s.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.slots.push(s);
        Ok(())
    }

    fn update_slot(&self, s: &Slot) -> Result<()> {
        for x in self.0.write().slots.iter_mut() {
            if x.id == s.id {
                *x = s.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_slot(&self, id: &str) -> Result<Slot> {
        self.0
            .read()
            .slots
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn slots_of_event(&self, event_id: &str) -> Result<Vec<Slot>> {
        let mut slots: Vec<_> = self
            .0
            .read()
            .slots
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect();
        slots.sort_by(cmp_slots_by_start);
        Ok(slots)
    }

    fn slots_with_speaker(&self, user_id: &str) -> Result<Vec<Slot>> {
        let mut slots: Vec<_> = self
            .0
            .read()
            .slots
            .iter()
            .filter(|x| x.speakers.iter().any(|s| s.as_str() == user_id))
            .cloned()
            .collect();
        slots.sort_by(cmp_slots_by_start);
        Ok(slots)
    }
}

impl OrganizerRepo for MemDb {
    fn add_organizer(&self, o: Organizer) -> Result<()> {
        let mut tables = self.0.write();
        if tables
            .organizers
            .iter()
            .any(|x| x.event_id == o.event_id && x.user_id == o.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        tables.organizers.push(o);
        Ok(())
    }

    fn remove_organizer(&self, event_id: &str, user_id: &str) -> Result<()> {
        let mut tables = self.0.write();
        let len_before = tables.organizers.len();
        tables
            .organizers
            .retain(|x| !(x.event_id.as_str() == event_id && x.user_id.as_str() == user_id));
        if tables.organizers.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn organizers_of_event(&self, event_id: &str) -> Result<Vec<Organizer>> {
        Ok(self
            .0
            .read()
            .organizers
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn is_event_organized_by(&self, event_id: &str, user_id: &str) -> Result<bool> {
        Ok(self
            .0
            .read()
            .organizers
            .iter()
            .any(|x| x.event_id.as_str() == event_id && x.user_id.as_str() == user_id))
    }
}

impl AttendeeRepo for MemDb {
    fn add_attendee(&self, a: Attendee) -> Result<()> {
        let mut tables = self.0.write();
        if tables
            .attendees
            .iter()
            .any(|x| x.event_id == a.event_id && x.user_id == a.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        tables.attendees.push(a);
        Ok(())
    }

    fn remove_attendee(&self, event_id: &str, user_id: &str) -> Result<()> {
        let mut tables = self.0.write();
        let len_before = tables.attendees.len();
        tables
            .attendees
            .retain(|x| !(x.event_id.as_str() == event_id && x.user_id.as_str() == user_id));
        if tables.attendees.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn attendees_of_event(&self, event_id: &str) -> Result<Vec<Attendee>> {
        Ok(self
            .0
            .read()
            .attendees
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn is_event_attended_by(&self, event_id: &str, user_id: &str) -> Result<bool> {
        Ok(self
            .0
            .read()
            .attendees
            .iter()
            .any(|x| x.event_id.as_str() == event_id && x.user_id.as_str() == user_id))
    }
}

impl UserRepo for MemDb {
    fn create_user(&self, u: &User) -> Result<()> {
        let mut tables = self.0.write();
        if tables
            .users
            .iter()
            .any(|x| x.id == u.id || x.email == u.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        tables.users.push(u.clone());
        Ok(())
    }

    fn update_user(&self, u: &User) -> Result<()> {
        for x in self.0.write().users.iter_mut() {
            if x.id == u.id {
                *x = u.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.0
            .read()
            .users
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .0
            .read()
            .users
            .iter()
            .find(|x| x.email == email)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.0.read().users.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.0.read().users.len())
    }
}

impl ReviewRepo for MemDb {
    fn create_review(&self, r: Review) -> Result<()> {
        let mut tables = self.0.write();
        if tables.reviews.iter().any(|x| x.id == r.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.reviews.push(r);
        Ok(())
    }

    fn reviews_of_event(&self, event_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .0
            .read()
            .reviews
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }
}
