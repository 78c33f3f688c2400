use thiserror::Error;

use crate::{
    repositories,
    util::validate::{DateNotInWindow, EventInvalidation, SlotInvalidation, TrackInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid id")]
    Id,
    #[error("The user already exists")]
    UserExists,
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
    #[error("A call-for-papers deadline requires an open call for papers")]
    CfpDeadlineWithoutCfp,
    #[error("The event has no active period to place slots in")]
    EventWindowUndefined,
    #[error("The track belongs to another event")]
    TrackEventMismatch,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Date(#[from] DateNotInWindow),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Name => Self::Name,
            EventInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
            EventInvalidation::CfpDeadlineWithoutCfp => Self::CfpDeadlineWithoutCfp,
        }
    }
}

impl From<TrackInvalidation> for Error {
    fn from(err: TrackInvalidation) -> Self {
        match err {
            TrackInvalidation::Name => Self::Name,
        }
    }
}

impl From<SlotInvalidation> for Error {
    fn from(err: SlotInvalidation) -> Self {
        match err {
            SlotInvalidation::Title => Self::Title,
            SlotInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
        }
    }
}

impl From<ocdb_entities::review::InvalidRatingValue> for Error {
    fn from(_: ocdb_entities::review::InvalidRatingValue) -> Self {
        Self::RatingValue
    }
}
