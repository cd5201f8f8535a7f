// Event store
// In-memory event collection with get/set semantics. Stands in for the
// external persistence layer; the grid only ever sees `&[Event]` and hands
// updates back through `update`.

use chrono::{Duration, Local, NaiveDate, TimeZone};
use thiserror::Error;

use crate::models::event::{Event, Frequency, Recurrence};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("event {0} not found")]
    NotFound(i64),
    #[error("invalid event: {0}")]
    Invalid(String),
    #[error("event has no id")]
    MissingId,
}

/// In-memory event store with sequential id assignment.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: i64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// A store seeded with demo events placed around `anchor` so freshly
    /// opened day/week views have something to show.
    pub fn with_sample_events(anchor: NaiveDate) -> Self {
        let mut store = Self::new();

        let at = |day_offset: i64, hour: u32, minute: u32| {
            let day = anchor + Duration::days(day_offset);
            Local
                .from_local_datetime(
                    &day.and_hms_opt(hour, minute, 0)
                        .expect("valid sample time"),
                )
                .single()
                .expect("sample time in local timezone")
        };

        let seeds = [
            Event::builder()
                .title("Team Meeting")
                .description("Weekly team sync to discuss project progress")
                .location("Conference Room A")
                .start(at(0, 10, 0))
                .end(at(0, 11, 30))
                .color("#4285F4")
                .reminder("30")
                .recurring(Recurrence {
                    frequency: Frequency::Weekly,
                    interval: 1,
                    until: None,
                    occurrences: None,
                    days_of_week: Some(vec![1]),
                }),
            Event::builder()
                .title("Design Review")
                .description("Walk through the new layout mocks")
                .start(at(0, 10, 30))
                .end(at(0, 12, 0))
                .color("#A142F4"),
            Event::builder()
                .title("Dentist Appointment")
                .description("Regular check-up with Dr. Smith")
                .location("Dental Clinic")
                .start(at(1, 14, 30))
                .end(at(1, 15, 30))
                .color("#EA4335")
                .reminder("60"),
            Event::builder()
                .title("Grocery Shopping")
                .location("Supermarket")
                .start(at(-2, 18, 0))
                .end(at(-2, 19, 0))
                .color("#34A853")
                .reminder("15"),
            Event::builder()
                .title("Product Conference")
                .description("Two-day offsite")
                .location("Convention Center")
                .start(at(2, 16, 0))
                .end(at(3, 13, 0))
                .color("#F4B400"),
            Event::builder()
                .title("Public Holiday")
                .start(at(4, 0, 0))
                .end(at(4, 23, 59))
                .all_day(true)
                .color("#EA4335"),
        ];

        for seed in seeds {
            let event = seed.build().expect("sample event is valid");
            store.insert(event).expect("sample event inserts");
        }

        store
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == Some(id))
    }

    /// Insert an event, assigning its id and timestamps.
    pub fn insert(&mut self, mut event: Event) -> Result<Event, StoreError> {
        event.validate().map_err(StoreError::Invalid)?;

        let now = Local::now();
        event.id = Some(self.next_id);
        event.created_at = Some(now);
        event.updated_at = Some(now);
        self.next_id += 1;

        self.events.push(event.clone());
        Ok(event)
    }

    /// Replace a stored event, keeping its creation timestamp.
    pub fn update(&mut self, event: &Event) -> Result<(), StoreError> {
        let id = event.id.ok_or(StoreError::MissingId)?;
        event.validate().map_err(StoreError::Invalid)?;

        let stored = self
            .events
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or(StoreError::NotFound(id))?;

        let created_at = stored.created_at;
        *stored = event.clone();
        stored.created_at = created_at;
        stored.updated_at = Some(Local::now());
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<Event, StoreError> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == Some(id))
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.events.remove(index))
    }
}
