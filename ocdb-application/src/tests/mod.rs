use std::cell::Cell;

use ocdb_db_mem::MemDb;

use super::{prelude as flows, *};

#[derive(Debug, Default)]
pub struct CountingNotifyGw {
    pub approved: Cell<usize>,
    pub published: Cell<usize>,
    pub ended: Cell<usize>,
}

impl NotificationGateway for CountingNotifyGw {
    fn event_approved(&self, _: &[String], _: &Event) {
        self.approved.set(self.approved.get() + 1);
    }
    fn event_published(&self, _: &[String], _: &Event) {
        self.published.set(self.published.get() + 1);
    }
    fn event_ended(&self, _: &[String], _: &Event) {
        self.ended.set(self.ended.get() + 1);
    }
}

pub struct BackendFixture {
    pub db: MemDb,
    pub notify: CountingNotifyGw,
}

impl BackendFixture {
    pub fn new() -> Self {
        Self {
            db: MemDb::new(),
            notify: CountingNotifyGw::default(),
        }
    }

    fn create_user(&self, id: &str, email: &str) -> Id {
        let user = User {
            id: id.into(),
            email: email.into(),
            name: id.into(),
            role: Role::User,
        };
        self.db.create_user(&user).unwrap();
        user.id
    }

    fn create_event(&self, name: &str, window: Option<(i64, i64)>, created_by: Option<&Id>) -> Id {
        let new_event = usecases::NewEvent {
            name: name.into(),
            starts_at: window.map(|(start, _)| start),
            ends_at: window.map(|(_, end)| end),
            ..Default::default()
        };
        flows::create_event(&self.db, new_event, created_by)
            .unwrap()
            .id
    }
}

#[test]
fn creator_becomes_organizer() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    let event_id = fixture.create_event("RustConf", None, Some(&alice));
    assert!(fixture
        .db
        .is_event_organized_by(event_id.as_str(), "alice")
        .unwrap());
}

#[test]
fn approve_and_publish_notify_independently() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    let event_id = fixture.create_event("RustConf", None, Some(&alice));

    let event = flows::approve_event(&fixture.db, &fixture.notify, event_id.as_str()).unwrap();
    assert!(event.is_approved());
    assert!(!event.is_published());
    assert_eq!(fixture.notify.approved.get(), 1);
    assert_eq!(fixture.notify.published.get(), 0);

    let event = flows::publish_event(&fixture.db, &fixture.notify, event_id.as_str()).unwrap();
    assert!(event.is_published());
    assert_eq!(fixture.notify.published.get(), 1);
}

#[test]
fn only_organizers_may_edit_the_schedule() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    let mallory = fixture.create_user("mallory", "mallory@bar.tld");
    let event_id = fixture.create_event("RustConf", Some((1_000, 2_000)), Some(&alice));

    let new_track = usecases::NewTrack {
        event_id: event_id.as_str().into(),
        name: "Main".into(),
    };
    assert!(flows::create_track(&fixture.db, new_track.clone(), Some(&mallory)).is_err());
    let track = flows::create_track(&fixture.db, new_track, Some(&alice)).unwrap();

    let new_slot = usecases::NewSlot {
        event_id: event_id.as_str().into(),
        track_id: Some(track.id.as_str().into()),
        title: "Opening".into(),
        starts_at: 1_000,
        ..Default::default()
    };
    assert!(flows::create_slot(&fixture.db, new_slot.clone(), None).is_err());
    let slot = flows::create_slot(&fixture.db, new_slot, Some(&alice)).unwrap();
    assert_eq!(slot.starts_at, Timestamp::from_secs(1_000));

    let schedule = usecases::event_schedule(&fixture.db, event_id.as_str()).unwrap();
    assert_eq!(schedule.tracks.len(), 1);
    assert_eq!(schedule.tracks[0].slots.len(), 1);
}

#[test]
fn attendees_show_up_in_queries() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    let bob = fixture.create_user("bob", "bob@bar.tld");
    let event_id = fixture.create_event("RustConf", None, Some(&alice));

    flows::attend_event(&fixture.db, event_id.as_str(), "bob").unwrap();

    let query = usecases::EventQuery {
        attended_by: Some(bob),
        ..Default::default()
    };
    let events = usecases::query_events(&fixture.db, query).unwrap();
    assert_eq!(events.len(), 1);

    flows::leave_event(&fixture.db, event_id.as_str(), "bob").unwrap();
    let query = usecases::EventQuery {
        attended_by: Some("bob".into()),
        ..Default::default()
    };
    assert!(usecases::query_events(&fixture.db, query)
        .unwrap()
        .is_empty());
}

#[test]
fn export_events_as_csv() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    fixture.create_event("RustConf", Some((1_000, 2_000)), Some(&alice));

    let mut buffer = Vec::new();
    flows::export_events_csv(&fixture.db, usecases::EventQuery::default(), &mut buffer).unwrap();
    let csv = String::from_utf8(buffer).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,city,country,starts_at,ends_at,cfp,published,approved,track_count,slot_count"
    );
    let record = lines.next().unwrap();
    assert!(record.contains("RustConf"));
    assert!(record.contains("1000,2000"));
}

#[test]
fn import_seed_loads_all_tables() {
    let fixture = BackendFixture::new();
    let seed = r#"{
        "users": [
            { "id": "alice", "email": "alice@bar.tld", "name": "Alice", "role": "user" }
        ],
        "events": [
            { "id": "conf", "name": "RustConf", "starts_at": 1000, "ends_at": 2000 }
        ],
        "tracks": [
            { "id": "main", "event_id": "conf", "name": "Main", "order": 0 }
        ],
        "slots": [
            {
                "id": "opening",
                "event_id": "conf",
                "track_id": "main",
                "title": "Opening",
                "starts_at": 1000,
                "speakers": ["alice"]
            }
        ],
        "organizers": [
            { "event_id": "conf", "user_id": "alice" }
        ],
        "attendees": [
            { "event_id": "conf", "user_id": "alice" }
        ],
        "reviews": [
            { "id": "r1", "event_id": "conf", "user_id": "alice", "rating": 5 }
        ]
    }"#;

    let stats = flows::import_seed(&fixture.db, seed.as_bytes()).unwrap();
    assert_eq!(stats.users, 1);
    assert_eq!(stats.events, 1);
    assert_eq!(stats.tracks, 1);
    assert_eq!(stats.slots, 1);
    assert_eq!(stats.organizers, 1);
    assert_eq!(stats.attendees, 1);
    assert_eq!(stats.reviews, 1);

    assert!(fixture.db.is_event_organized_by("conf", "alice").unwrap());
    let query = usecases::EventQuery {
        with_speaker: Some("alice".into()),
        ..Default::default()
    };
    assert_eq!(usecases::query_events(&fixture.db, query).unwrap().len(), 1);
}

#[test]
fn import_rejects_invalid_events() {
    let fixture = BackendFixture::new();
    let seed = r#"{
        "events": [
            { "id": "conf", "name": "RustConf", "starts_at": 2000, "ends_at": 1000 }
        ]
    }"#;
    assert!(flows::import_seed(&fixture.db, seed.as_bytes()).is_err());
}

#[test]
fn ended_events_are_notified_once() {
    let fixture = BackendFixture::new();
    let alice = fixture.create_user("alice", "alice@bar.tld");
    // Ended long ago.
    fixture.create_event("PastConf", Some((1_000, 2_000)), Some(&alice));

    let sent = flows::send_event_ended_notifications(&fixture.db, &fixture.notify).unwrap();
    assert_eq!(sent, 1);
    assert_eq!(fixture.notify.ended.get(), 1);

    let sent = flows::send_event_ended_notifications(&fixture.db, &fixture.notify).unwrap();
    assert_eq!(sent, 0);
    assert_eq!(fixture.notify.ended.get(), 1);
}
