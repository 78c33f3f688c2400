use std::fmt;

use thiserror::Error;

use crate::entities::*;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// An inclusive date range, e.g. the active period of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Both bounds are part of the window.
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNotInWindow {
    pub window: TimeWindow,
}

impl fmt::Display for DateNotInWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This date must be between {} and {}",
            self.window.start().format_minutes(),
            self.window.end().format_minutes()
        )
    }
}

impl std::error::Error for DateNotInWindow {}

/// Checks a candidate date against an inclusive window.
pub fn date_in_window(candidate: Timestamp, window: &TimeWindow) -> Result<(), DateNotInWindow> {
    if window.contains(candidate) {
        Ok(())
    } else {
        Err(DateNotInWindow { window: *window })
    }
}

/// Fail-closed variant for raw form input: anything that does not
/// parse as an RFC 3339 date is rejected with the same message,
/// never silently coerced.
pub fn parse_date_in_window(
    candidate: &str,
    window: &TimeWindow,
) -> Result<Timestamp, DateNotInWindow> {
    match candidate.parse::<Timestamp>() {
        Ok(ts) => date_in_window(ts, window).map(|()| ts),
        Err(_) => Err(DateNotInWindow { window: *window }),
    }
}

#[derive(Debug, Error)]
pub enum EventInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
    #[error("A call-for-papers deadline requires an open call for papers")]
    CfpDeadlineWithoutCfp,
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if let (Some(start), Some(end)) = (self.starts_at, self.ends_at) {
            if end < start {
                return Err(Self::Error::EndDateBeforeStart);
            }
        }
        if self.cfp_deadline.is_some() && !self.cfp {
            return Err(Self::Error::CfpDeadlineWithoutCfp);
        }
        Ok(())
    }
}

impl AutoCorrect for Event {
    fn auto_correct(mut self) -> Self {
        self.description = self.description.filter(|x| !x.trim().is_empty());
        self.location = self.location.filter(|x| !x.trim().is_empty());
        self.city = self.city.filter(|x| !x.trim().is_empty());
        self.country = self.country.filter(|x| !x.trim().is_empty());
        self
    }
}

#[derive(Debug, Error)]
pub enum TrackInvalidation {
    #[error("Invalid name")]
    Name,
}

impl Validate for Track {
    type Error = TrackInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SlotInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
}

impl Validate for Slot {
    type Error = SlotInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if let Some(end) = self.ends_at {
            if end < self.starts_at {
                return Err(Self::Error::EndDateBeforeStart);
            }
        }
        Ok(())
    }
}
