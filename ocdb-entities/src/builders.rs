pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    event_builder::*, review_builder::*, slot_builder::*, track_builder::*, user_builder::*,
};

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.event.city = Some(city.into());
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.event.country = Some(country.into());
            self
        }
        pub fn starts_at(mut self, t: Timestamp) -> Self {
            self.event.starts_at = Some(t);
            self
        }
        pub fn ends_at(mut self, t: Timestamp) -> Self {
            self.event.ends_at = Some(t);
            self
        }
        pub fn cfp(mut self, deadline: Option<Timestamp>) -> Self {
            self.event.cfp = true;
            self.event.cfp_deadline = deadline;
            self
        }
        pub fn published_at(mut self, t: Timestamp) -> Self {
            self.event.published_at = Some(t);
            self
        }
        pub fn approved_at(mut self, t: Timestamp) -> Self {
            self.event.approved_at = Some(t);
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: Id::new(),
                    name: "".into(),
                    description: None,
                    location: None,
                    city: None,
                    country: None,
                    starts_at: None,
                    ends_at: None,
                    cfp: false,
                    cfp_deadline: None,
                    published_at: None,
                    approved_at: None,
                    ended_notification_sent_at: None,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod track_builder {

    use super::*;
    use crate::{id::*, track::*};

    #[derive(Debug)]
    pub struct TrackBuild {
        track: Track,
    }

    impl TrackBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.track.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &str) -> Self {
            self.track.event_id = event_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.track.name = name.into();
            self
        }
        pub fn order(mut self, order: u32) -> Self {
            self.track.order = order;
            self
        }
        pub fn finish(self) -> Track {
            self.track
        }
    }

    impl Builder for Track {
        type Build = TrackBuild;
        fn build() -> TrackBuild {
            TrackBuild {
                track: Track {
                    id: Id::new(),
                    event_id: Id::default(),
                    name: "".into(),
                    order: 0,
                },
            }
        }
    }
}

pub mod slot_builder {

    use super::*;
    use crate::{id::*, slot::*, time::*};

    #[derive(Debug)]
    pub struct SlotBuild {
        slot: Slot,
    }

    impl SlotBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.slot.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &str) -> Self {
            self.slot.event_id = event_id.into();
            self
        }
        pub fn track(mut self, track_id: Option<&str>) -> Self {
            self.slot.track_id = track_id.map(Into::into);
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.slot.title = title.into();
            self
        }
        pub fn starts_at(mut self, t: Timestamp) -> Self {
            self.slot.starts_at = t;
            self
        }
        pub fn ends_at(mut self, t: Timestamp) -> Self {
            self.slot.ends_at = Some(t);
            self
        }
        pub fn speakers(mut self, speakers: Vec<&str>) -> Self {
            self.slot.speakers = speakers.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Slot {
            self.slot
        }
    }

    impl Builder for Slot {
        type Build = SlotBuild;
        fn build() -> SlotBuild {
            SlotBuild {
                slot: Slot {
                    id: Id::new(),
                    event_id: Id::default(),
                    track_id: None,
                    title: "".into(),
                    starts_at: Timestamp::from_secs(0),
                    ends_at: None,
                    speakers: vec![],
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: "".into(),
                    name: "".into(),
                    role: Role::default(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &str) -> Self {
            self.review.event_id = event_id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn rating(mut self, value: RatingValuePrimitive) -> Self {
            self.review.rating = RatingValue::clamp(value);
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.review.body = Some(body.into());
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    event_id: Id::default(),
                    user_id: Id::default(),
                    rating: RatingValue::MIN,
                    body: None,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}
