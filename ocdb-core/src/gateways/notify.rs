use ocdb_entities::event::Event;

pub trait NotificationGateway {
    fn event_approved(&self, email_addresses: &[String], event: &Event);
    fn event_published(&self, email_addresses: &[String], event: &Event);
    fn event_ended(&self, email_addresses: &[String], event: &Event);
}
