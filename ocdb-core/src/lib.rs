pub mod db;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use ocdb_entities::{
        attendee::*, event::*, id::*, organizer::*, review::*, slot::*, time::*, track::*, user::*,
    };
}
