// In-memory repositories for the usecase tests.

use std::cell::RefCell;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
    util::sort::{cmp_events_chronologically, cmp_slots_by_start, cmp_tracks_by_order},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub events: RefCell<Vec<Event>>,
    pub tracks: RefCell<Vec<Track>>,
    pub slots: RefCell<Vec<Slot>>,
    pub organizers: RefCell<Vec<Organizer>>,
    pub attendees: RefCell<Vec<Attendee>>,
    pub users: RefCell<Vec<User>>,
    pub reviews: RefCell<Vec<Review>>,
}

impl EventRepo for MockDb {
    fn create_event(&self, e: Event) -> Result<()> {
        let mut events = self.events.borrow_mut();
        if events.iter().any(|x| x.id == e.id) {
            return Err(RepoError::AlreadyExists);
        }
        events.push(e);
        Ok(())
    }

    fn update_event(&self, e: &Event) -> Result<()> {
        for x in self.events.borrow_mut().iter_mut() {
            if x.id == e.id {
                *x = e.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        self.events
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        let mut events = self.events.borrow().clone();
        events.sort_by(cmp_events_chronologically);
        Ok(events)
    }

    fn count_events(&self) -> Result<usize> {
        Ok(self.events.borrow().len())
    }
}

impl TrackRepo for MockDb {
    fn create_track(&self, t: Track) -> Result<()> {
        let mut tracks = self.tracks.borrow_mut();
        if tracks.iter().any(|x| x.id == t.id) {
            return Err(RepoError::AlreadyExists);
        }
        tracks.push(t);
        Ok(())
    }

    fn update_track(&self, t: &Track) -> Result<()> {
        for x in self.tracks.borrow_mut().iter_mut() {
            if x.id == t.id {
                *x = t.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_track(&self, id: &str) -> Result<Track> {
        self.tracks
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn tracks_of_event(&self, event_id: &str) -> Result<Vec<Track>> {
        let mut tracks: Vec<_> = self
            .tracks
            .borrow()
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect();
        tracks.sort_by(cmp_tracks_by_order);
        Ok(tracks)
    }
}

impl SlotRepo for MockDb {
    fn create_slot(&self, s: Slot) -> Result<()> {
        let mut slots = self.slots.borrow_mut();
        if slots.iter().any(|x| x.id == s.id) {
            return Err(RepoError::AlreadyExists);
        }
        slots.push(s);
        Ok(())
    }

    fn update_slot(&self, s: &Slot) -> Result<()> {
        for x in self.slots.borrow_mut().iter_mut() {
            if x.id == s.id {
                *x = s.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_slot(&self, id: &str) -> Result<Slot> {
        self.slots
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn slots_of_event(&self, event_id: &str) -> Result<Vec<Slot>> {
        let mut slots: Vec<_> = self
            .slots
            .borrow()
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect();
        slots.sort_by(cmp_slots_by_start);
        Ok(slots)
    }

    fn slots_with_speaker(&self, user_id: &str) -> Result<Vec<Slot>> {
        let mut slots: Vec<_> = self
            .slots
            .borrow()
            .iter()
            .filter(|x| x.speakers.iter().any(|s| s.as_str() == user_id))
            .cloned()
            .collect();
        slots.sort_by(cmp_slots_by_start);
        Ok(slots)
    }
}

impl OrganizerRepo for MockDb {
    fn add_organizer(&self, o: Organizer) -> Result<()> {
        let mut organizers = self.organizers.borrow_mut();
        if organizers
            .iter()
            .any(|x| x.event_id == o.event_id && x.user_id == o.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        organizers.push(o);
        Ok(())
    }

    fn remove_organizer(&self, event_id: &str, user_id: &str) -> Result<()> {
        let mut organizers = self.organizers.borrow_mut();
        let len_before = organizers.len();
        organizers
            .retain(|x| !(x.event_id.as_str() == event_id && x.user_id.as_str() == user_id));
        if organizers.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn organizers_of_event(&self, event_id: &str) -> Result<Vec<Organizer>> {
        Ok(self
            .organizers
            .borrow()
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn is_event_organized_by(&self, event_id: &str, user_id: &str) -> Result<bool> {
        Ok(self
            .organizers
            .borrow()
            .iter()
            .any(|x| x.event_id.as_str() == event_id && x.user_id.as_str() == user_id))
    }
}

impl AttendeeRepo for MockDb {
    fn add_attendee(&self, a: Attendee) -> Result<()> {
        let mut attendees = self.attendees.borrow_mut();
        if attendees
            .iter()
            .any(|x| x.event_id == a.event_id && x.user_id == a.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        attendees.push(a);
        Ok(())
    }

    fn remove_attendee(&self, event_id: &str, user_id: &str) -> Result<()> {
        let mut attendees = self.attendees.borrow_mut();
        let len_before = attendees.len();
        attendees
            .retain(|x| !(x.event_id.as_str() == event_id && x.user_id.as_str() == user_id));
        if attendees.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn attendees_of_event(&self, event_id: &str) -> Result<Vec<Attendee>> {
        Ok(self
            .attendees
            .borrow()
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn is_event_attended_by(&self, event_id: &str, user_id: &str) -> Result<bool> {
        Ok(self
            .attendees
            .borrow()
            .iter()
            .any(|x| x.event_id.as_str() == event_id && x.user_id.as_str() == user_id))
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, u: &User) -> Result<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|x| x.id == u.id || x.email == u.email) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(u.clone());
        Ok(())
    }

    fn update_user(&self, u: &User) -> Result<()> {
        for x in self.users.borrow_mut().iter_mut() {
            if x.id == u.id {
                *x = u.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.users
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|x| x.email == email)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, r: Review) -> Result<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|x| x.id == r.id) {
            return Err(RepoError::AlreadyExists);
        }
        reviews.push(r);
        Ok(())
    }

    fn reviews_of_event(&self, event_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|x| x.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }
}
