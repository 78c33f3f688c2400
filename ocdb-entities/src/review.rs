use thiserror::Error;

use crate::{id::*, time::*};

pub type RatingValuePrimitive = i8;

/// Rating of an event on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatingValue(RatingValuePrimitive);

impl RatingValue {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    pub fn clamp(value: RatingValuePrimitive) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }
}

#[derive(Debug, Error)]
#[error("Rating value out of range: {0}")]
pub struct InvalidRatingValue(RatingValuePrimitive);

impl TryFrom<RatingValuePrimitive> for RatingValue {
    type Error = InvalidRatingValue;
    fn try_from(from: RatingValuePrimitive) -> Result<Self, Self::Error> {
        if from < Self::MIN.0 || from > Self::MAX.0 {
            return Err(InvalidRatingValue(from));
        }
        Ok(Self(from))
    }
}

impl From<RatingValue> for RatingValuePrimitive {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// Average rating of an event. 0.0 when no reviews exist.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id         : Id,
    pub event_id   : Id,
    pub user_id    : Id,
    pub rating     : RatingValue,
    pub body       : Option<String>,
    pub created_at : Timestamp,
}
