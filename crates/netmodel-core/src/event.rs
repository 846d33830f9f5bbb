//! Timestamped events and the time-bounded [`EventSchedule`] holding them.

use std::cmp::Ordering;

use crate::property::PropertyContainer;
use crate::units::{TimeUnit, Unit};

/// A timestamped property record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct Event {
    time: f64,
    time_unit: TimeUnit,
    #[new(default)]
    #[serde(default, skip_serializing_if = "PropertyContainer::is_empty")]
    props: PropertyContainer,
}

properties_impl!(Event);

impl Event {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    pub fn set_time_unit(&mut self, time_unit: TimeUnit) {
        self.time_unit = time_unit;
    }

    /// Returns the event time expressed in `unit`.
    pub fn time_in(&self, unit: TimeUnit) -> f64 {
        self.time_unit.convert(self.time, unit)
    }

    /// Orders two events by time, converting `other` into this event's unit first.
    pub fn cmp_time(&self, other: &Event) -> Ordering {
        self.time.total_cmp(&other.time_in(self.time_unit))
    }
}

/// Error for schedules whose bounds are inverted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule ends at {end} before it starts at {start}")]
    InvertedBounds { start: f64, end: f64 },
}

/// A sequence of events kept sorted by time, with a start/end bound.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventSchedule {
    time_unit: TimeUnit,
    start: f64,
    end: f64,
    events: Vec<Event>,
}

impl EventSchedule {
    /// Creates an empty schedule. Fails if `end` is before `start`.
    pub fn new(time_unit: TimeUnit, start: f64, end: f64) -> Result<Self, ScheduleError> {
        check_bounds(start, end)?;
        Ok(Self {
            time_unit,
            start,
            end,
            events: Vec::new(),
        })
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    pub fn set_time_unit(&mut self, time_unit: TimeUnit) {
        self.time_unit = time_unit;
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn set_start(&mut self, start: f64) -> Result<(), ScheduleError> {
        check_bounds(start, self.end)?;
        self.start = start;
        Ok(())
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn set_end(&mut self, end: f64) -> Result<(), ScheduleError> {
        check_bounds(self.start, end)?;
        self.end = end;
        Ok(())
    }

    /// Inserts `event` after every event that does not happen later than it.
    pub fn add_event(&mut self, event: Event) {
        let idx = self
            .events
            .partition_point(|e| e.cmp_time(&event) != Ordering::Greater);
        self.events.insert(idx, event);
    }

    /// Removes the `i`th event, if there is one.
    pub fn remove(&mut self, i: usize) -> Option<Event> {
        (i < self.events.len()).then(|| self.events.remove(i))
    }

    /// Get a reference to the schedule's events, in time order.
    pub fn events(&self) -> &[Event] {
        self.events.as_ref()
    }

    delegate::delegate! {
        to self.events {
            pub fn len(&self) -> usize;

            pub fn is_empty(&self) -> bool;

            pub fn get(&self, i: usize) -> Option<&Event>;

            pub fn iter(&self) -> std::slice::Iter<'_, Event>;
        }
    }
}

impl<'a> IntoIterator for &'a EventSchedule {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

fn check_bounds(start: f64, end: f64) -> Result<(), ScheduleError> {
    // Also rejects NaN bounds
    if start <= end {
        Ok(())
    } else {
        Err(ScheduleError::InvertedBounds { start, end })
    }
}

#[cfg(test)]
mod tests {
    use crate::property::HasProperties;

    use super::*;

    fn event(time: f64, unit: TimeUnit, action: &str) -> Event {
        let mut e = Event::new(time, unit);
        e.set_property("action", action);
        e
    }

    #[test]
    fn inverted_bounds_fail() {
        assert_eq!(
            EventSchedule::new(TimeUnit::Secs, 10.0, 5.0),
            Err(ScheduleError::InvertedBounds {
                start: 10.0,
                end: 5.0
            })
        );
        assert!(EventSchedule::new(TimeUnit::Secs, 5.0, 5.0).is_ok());
        assert!(EventSchedule::new(TimeUnit::Secs, f64::NAN, 5.0).is_err());
    }

    #[test]
    fn bound_setters_recheck() -> anyhow::Result<()> {
        let mut schedule = EventSchedule::new(TimeUnit::Millis, 0.0, 100.0)?;
        assert!(schedule.set_end(-1.0).is_err());
        assert!(schedule.set_start(200.0).is_err());
        schedule.set_start(50.0)?;
        schedule.set_end(60.0)?;
        assert_eq!((schedule.start(), schedule.end()), (50.0, 60.0));
        Ok(())
    }

    #[test]
    fn events_stay_in_time_order() -> anyhow::Result<()> {
        let mut schedule = EventSchedule::new(TimeUnit::Secs, 0.0, 600.0)?;
        schedule.add_event(event(30.0, TimeUnit::Secs, "b"));
        schedule.add_event(event(1.0, TimeUnit::Mins, "d"));
        schedule.add_event(event(500.0, TimeUnit::Millis, "a"));
        schedule.add_event(event(30.0, TimeUnit::Secs, "c"));
        let actions = schedule
            .iter()
            .map(|e| e.property("action").unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(actions, ["a", "b", "c", "d"]);
        Ok(())
    }

    #[test]
    fn remove_out_of_range_is_none() -> anyhow::Result<()> {
        let mut schedule = EventSchedule::new(TimeUnit::Secs, 0.0, 1.0)?;
        schedule.add_event(event(0.5, TimeUnit::Secs, "x"));
        assert!(schedule.remove(1).is_none());
        assert_eq!(schedule.remove(0).map(|e| e.time()), Some(0.5));
        assert!(schedule.is_empty());
        Ok(())
    }

    #[test]
    fn events_compare_across_units() {
        let a = Event::new(1.5, TimeUnit::Secs);
        let b = Event::new(1500.0, TimeUnit::Millis);
        let c = Event::new(1.0, TimeUnit::Mins);
        assert_eq!(a.cmp_time(&b), Ordering::Equal);
        assert_eq!(a.cmp_time(&c), Ordering::Less);
        assert_eq!(c.time_in(TimeUnit::Secs), 60.0);
    }
}
