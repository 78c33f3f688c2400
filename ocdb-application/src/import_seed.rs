use std::io::Read;

use ocdb_boundary as json;
use ocdb_core::util::validate::Validate;

use super::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub users: usize,
    pub events: usize,
    pub tracks: usize,
    pub slots: usize,
    pub organizers: usize,
    pub attendees: usize,
    pub reviews: usize,
}

/// Loads a JSON seed into the store. Events are validated before
/// insertion; join rows and sub-entities are taken as-is.
pub fn import_seed<D: Db, R: Read>(db: &D, reader: R) -> Result<SeedStats> {
    let seed: json::Seed = serde_json::from_reader(reader)?;
    let mut stats = SeedStats::default();

    for user in seed.users {
        db.create_user(&user.into())?;
        stats.users += 1;
    }
    for event in seed.events {
        let event: Event = event.into();
        event.validate().map_err(usecases::Error::from)?;
        db.create_event(event)?;
        stats.events += 1;
    }
    for track in seed.tracks {
        db.create_track(track.into())?;
        stats.tracks += 1;
    }
    for slot in seed.slots {
        db.create_slot(slot.into())?;
        stats.slots += 1;
    }
    for organizer in seed.organizers {
        db.add_organizer(organizer.into())?;
        stats.organizers += 1;
    }
    for attendee in seed.attendees {
        db.add_attendee(attendee.into())?;
        stats.attendees += 1;
    }
    for review in seed.reviews {
        db.create_review(review.into())?;
        stats.reviews += 1;
    }

    debug!("Imported seed: {stats:?}");
    Ok(stats)
}
