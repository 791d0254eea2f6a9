// Usage events

/// Marker appended once per successful public randomness call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomnessGeneratedEvent;

/// Append-only destination for usage events
pub trait EventSink {
    fn emit(&mut self, event: RandomnessGeneratedEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: RandomnessGeneratedEvent) {
        (**self).emit(event)
    }
}

/// In-memory event log, in emission order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RandomnessGeneratedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog { events: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[RandomnessGeneratedEvent] {
        &self.events
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: RandomnessGeneratedEvent) {
        self.events.push(event);
    }
}
