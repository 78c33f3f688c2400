use std::{fs::File, path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ocdb_application::prelude as flows;
use ocdb_boundary as json;
use ocdb_core::usecases::{self, EventQuery, TemporalScope};
use ocdb_db_mem::MemDb;

use crate::{config::Config, gateways::LogNotifyGw};

#[derive(Debug, Parser)]
#[command(name = "openconfdb", version, about = "An open database for conference schedules")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON seed loaded into the in-memory store before the command runs
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List events as JSON
    List {
        /// Only events that already ended, most recent first
        #[arg(long)]
        past: bool,
        /// Only upcoming events, soonest first (the default)
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,
        /// Include unpublished and unapproved events
        #[arg(long)]
        all: bool,
        /// Only events organized by this user
        #[arg(long, value_name = "USER_ID")]
        organized_by: Option<String>,
        /// Only events attended by this user
        #[arg(long, value_name = "USER_ID")]
        attended_by: Option<String>,
        /// Only events with a slot held by this speaker
        #[arg(long, value_name = "USER_ID")]
        with_speaker: Option<String>,
    },
    /// Print the schedule of a single event as JSON
    Schedule {
        event_id: String,
    },
    /// Load a JSON seed into the store and report what it contains
    Import {
        file: PathBuf,
    },
    /// Export all events as CSV
    Export {
        out: PathBuf,
    },
    /// Send pending event-ended notifications
    NotifyEnded {
        /// Keep scanning with the configured interval
        #[arg(long)]
        watch: bool,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;

    let db = MemDb::new();
    let seed = args.seed.or(cfg.store.seed);
    if let Some(ref path) = seed {
        import_from_path(&db, path)?;
    }

    match args.command {
        Command::List {
            past,
            upcoming: _,
            all,
            organized_by,
            attended_by,
            with_speaker,
        } => {
            let scope = if past {
                TemporalScope::Past
            } else {
                TemporalScope::Upcoming
            };
            let query = EventQuery {
                // Browsing defaults to the public view.
                approved: !all,
                published: !all,
                organized_by: organized_by.map(Into::into),
                attended_by: attended_by.map(Into::into),
                with_speaker: with_speaker.map(Into::into),
                scope: Some(scope),
            };
            let events: Vec<json::Event> = usecases::query_events(&db, query)?
                .into_iter()
                .map(Into::into)
                .collect();
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        Command::Schedule { event_id } => {
            let schedule = usecases::event_schedule(&db, &event_id)?;
            let schedule = json::EventSchedule {
                event: schedule.event.into(),
                tracks: schedule
                    .tracks
                    .into_iter()
                    .map(|t| json::TrackSchedule {
                        track: t.track.into(),
                        slots: t.slots.into_iter().map(Into::into).collect(),
                    })
                    .collect(),
                unassigned: schedule.unassigned.into_iter().map(Into::into).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        Command::Import { file } => {
            let stats = import_from_path(&db, &file)?;
            println!(
                "Imported {} users, {} events, {} tracks, {} slots, {} organizers, {} attendees, {} reviews",
                stats.users,
                stats.events,
                stats.tracks,
                stats.slots,
                stats.organizers,
                stats.attendees,
                stats.reviews
            );
        }
        Command::Export { out } => {
            let writer = File::create(&out)
                .with_context(|| format!("Cannot create {}", out.display()))?;
            flows::export_events_csv(&db, EventQuery::default(), writer)?;
            log::info!("Exported events to {}", out.display());
        }
        Command::NotifyEnded { watch } => {
            let notify = LogNotifyGw;
            loop {
                let sent = flows::send_event_ended_notifications(&db, &notify)?;
                println!("Sent {sent} event-ended notification(s)");
                if !watch {
                    break;
                }
                sleep(cfg.reminders.task_interval_time);
            }
        }
    }

    Ok(())
}

fn import_from_path(db: &MemDb, path: &PathBuf) -> Result<flows::SeedStats> {
    let file =
        File::open(path).with_context(|| format!("Cannot open seed file {}", path.display()))?;
    let stats = flows::import_seed(db, file)
        .with_context(|| format!("Cannot import seed file {}", path.display()))?;
    log::info!("Loaded seed from {}", path.display());
    Ok(stats)
}

fn sleep(interval: Duration) {
    log::debug!("Sleeping for {interval:?}");
    thread::sleep(interval);
}
