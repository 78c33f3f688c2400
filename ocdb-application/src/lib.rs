#[macro_use]
extern crate log;

mod approve_event;
mod attend_event;
mod create_event;
mod export_events;
mod import_seed;
mod publish_event;
mod send_event_ended_notifications;
mod store_slot;
mod store_track;

pub mod error;

pub mod prelude {
    pub use super::{
        approve_event::*, attend_event::*, create_event::*, export_events::*, import_seed::*,
        publish_event::*, send_event_ended_notifications::*, store_slot::*, store_track::*,
    };
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ocdb_core::{
    db::*, entities::*, gateways::notify::NotificationGateway, repositories::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;
