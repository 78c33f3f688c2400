use ocdb_core::{entities::Event, gateways::notify::NotificationGateway};

/// Records outgoing notifications in the log. Actual mail delivery
/// is not part of this system.
#[derive(Debug, Default)]
pub struct LogNotifyGw;

impl NotificationGateway for LogNotifyGw {
    fn event_approved(&self, email_addresses: &[String], event: &Event) {
        log::info!(
            "Notify {} recipient(s): event '{}' was approved",
            email_addresses.len(),
            event.name
        );
    }

    fn event_published(&self, email_addresses: &[String], event: &Event) {
        log::info!(
            "Notify {} recipient(s): event '{}' was published",
            email_addresses.len(),
            event.name
        );
    }

    fn event_ended(&self, email_addresses: &[String], event: &Event) {
        log::info!(
            "Notify {} recipient(s): event '{}' has ended",
            email_addresses.len(),
            event.name
        );
    }
}
