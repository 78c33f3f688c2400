use crate::repositories::*;

pub trait Db:
    EventRepo + TrackRepo + SlotRepo + OrganizerRepo + AttendeeRepo + UserRepo + ReviewRepo
{
}

impl<T> Db for T where
    T: EventRepo + TrackRepo + SlotRepo + OrganizerRepo + AttendeeRepo + UserRepo + ReviewRepo
{
}
