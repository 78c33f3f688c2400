mod approve_event;
mod attend_event;
mod authorize;
mod create_new_user;
mod error;
mod event_reminders;
mod event_schedule;
mod get_event;
mod organizers;
mod publish_event;
mod query_events;
mod review_event;
mod store_event;
mod store_slot;
mod store_track;
mod visibility;

#[cfg(test)]
pub mod tests;

pub use self::{
    approve_event::*, attend_event::*, authorize::*, create_new_user::*, error::Error,
    event_reminders::*, event_schedule::*, get_event::*, organizers::*, publish_event::*,
    query_events::*, review_event::*, store_event::*, store_slot::*, store_track::*,
    visibility::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
