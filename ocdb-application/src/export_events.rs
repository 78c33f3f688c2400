use std::io::Write;

use serde::Serialize;

use super::*;

#[derive(Debug, Serialize)]
pub struct CsvRecord {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    pub cfp: bool,
    pub published: bool,
    pub approved: bool,
    pub track_count: usize,
    pub slot_count: usize,
}

impl From<(Event, usize, usize)> for CsvRecord {
    fn from(from: (Event, usize, usize)) -> Self {
        let (event, track_count, slot_count) = from;
        let published = event.is_published();
        let approved = event.is_approved();
        let Event {
            id,
            name,
            city,
            country,
            starts_at,
            ends_at,
            cfp,
            ..
        } = event;
        Self {
            id: id.into(),
            name,
            city,
            country,
            starts_at: starts_at.map(Timestamp::as_secs),
            ends_at: ends_at.map(Timestamp::as_secs),
            cfp,
            published,
            approved,
            track_count,
            slot_count,
        }
    }
}

/// Writes the matching events as CSV, one record per event.
pub fn export_events_csv<D: Db, W: Write>(
    db: &D,
    query: usecases::EventQuery,
    writer: W,
) -> Result<()> {
    let events = usecases::query_events(db, query)?;
    let mut wtr = csv::Writer::from_writer(writer);
    for event in events {
        let track_count = db.tracks_of_event(event.id.as_str())?.len();
        let slot_count = db.slots_of_event(event.id.as_str())?.len();
        wtr.serialize(CsvRecord::from((event, track_count, slot_count)))?;
    }
    wtr.flush()?;
    Ok(())
}
