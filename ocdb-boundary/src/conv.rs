use ocdb_entities as e;

use super::*;

use e::time::Timestamp;

fn secs(ts: Timestamp) -> i64 {
    ts.as_secs()
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            name,
            description,
            location,
            city,
            country,
            starts_at,
            ends_at,
            cfp,
            cfp_deadline,
            published_at,
            approved_at,
            ended_notification_sent_at,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            location,
            city,
            country,
            starts_at: starts_at.map(secs),
            ends_at: ends_at.map(secs),
            cfp,
            cfp_deadline: cfp_deadline.map(secs),
            published_at: published_at.map(secs),
            approved_at: approved_at.map(secs),
            ended_notification_sent_at: ended_notification_sent_at.map(secs),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<Event> for e::event::Event {
    fn from(from: Event) -> Self {
        let Event {
            id,
            name,
            description,
            location,
            city,
            country,
            starts_at,
            ends_at,
            cfp,
            cfp_deadline,
            published_at,
            approved_at,
            ended_notification_sent_at,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            location,
            city,
            country,
            starts_at: starts_at.map(Timestamp::from_secs),
            ends_at: ends_at.map(Timestamp::from_secs),
            cfp,
            cfp_deadline: cfp_deadline.map(Timestamp::from_secs),
            published_at: published_at.map(Timestamp::from_secs),
            approved_at: approved_at.map(Timestamp::from_secs),
            ended_notification_sent_at: ended_notification_sent_at.map(Timestamp::from_secs),
            created_at: Timestamp::from_secs(created_at),
        }
    }
}

impl From<e::track::Track> for Track {
    fn from(from: e::track::Track) -> Self {
        let e::track::Track {
            id,
            event_id,
            name,
            order,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            name,
            order,
        }
    }
}

impl From<Track> for e::track::Track {
    fn from(from: Track) -> Self {
        let Track {
            id,
            event_id,
            name,
            order,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            name,
            order,
        }
    }
}

impl From<e::slot::Slot> for Slot {
    fn from(from: e::slot::Slot) -> Self {
        let e::slot::Slot {
            id,
            event_id,
            track_id,
            title,
            starts_at,
            ends_at,
            speakers,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            track_id: track_id.map(Into::into),
            title,
            starts_at: starts_at.as_secs(),
            ends_at: ends_at.map(secs),
            speakers: speakers.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Slot> for e::slot::Slot {
    fn from(from: Slot) -> Self {
        let Slot {
            id,
            event_id,
            track_id,
            title,
            starts_at,
            ends_at,
            speakers,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            track_id: track_id.map(Into::into),
            title,
            starts_at: Timestamp::from_secs(starts_at),
            ends_at: ends_at.map(Timestamp::from_secs),
            speakers: speakers.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::User => User,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            name,
            role,
        } = from;
        Self {
            id: id.into(),
            email,
            name,
            role: role.into(),
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            email,
            name,
            role,
        } = from;
        Self {
            id: id.into(),
            email,
            name,
            role: role.into(),
        }
    }
}

impl From<e::organizer::Organizer> for Organizer {
    fn from(from: e::organizer::Organizer) -> Self {
        let e::organizer::Organizer {
            event_id,
            user_id,
            created_at,
        } = from;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<Organizer> for e::organizer::Organizer {
    fn from(from: Organizer) -> Self {
        let Organizer {
            event_id,
            user_id,
            created_at,
        } = from;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            created_at: Timestamp::from_secs(created_at),
        }
    }
}

impl From<e::attendee::Attendee> for Attendee {
    fn from(from: e::attendee::Attendee) -> Self {
        let e::attendee::Attendee {
            event_id,
            user_id,
            created_at,
        } = from;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<Attendee> for e::attendee::Attendee {
    fn from(from: Attendee) -> Self {
        let Attendee {
            event_id,
            user_id,
            created_at,
        } = from;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            created_at: Timestamp::from_secs(created_at),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            event_id,
            user_id,
            rating,
            body,
            created_at,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            user_id: user_id.into(),
            rating: rating.into(),
            body,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<Review> for e::review::Review {
    fn from(from: Review) -> Self {
        let Review {
            id,
            event_id,
            user_id,
            rating,
            body,
            created_at,
        } = from;
        Self {
            id: id.into(),
            event_id: event_id.into(),
            user_id: user_id.into(),
            // Out-of-range seed values are clamped instead of dropped.
            rating: e::review::RatingValue::clamp(rating),
            body,
            created_at: Timestamp::from_secs(created_at),
        }
    }
}
