use log::debug;
use netmodel_core::{Event, EventSchedule, HasProperties, TimeUnit};
use xmltree::Element;

use crate::{xml, Error};

pub(crate) fn parse(root: &Element) -> Result<EventSchedule, Error> {
    let mut time_unit: Option<TimeUnit> = None;
    let mut start: Option<f64> = None;
    let mut end: Option<f64> = None;
    for (name, value) in xml::properties(root)? {
        match name {
            "t_unit" => time_unit = Some(value.parse()?),
            "t_start" => start = Some(xml::number(name, &value)?),
            "t_end" => end = Some(xml::number(name, &value)?),
            _ => continue,
        }
    }
    let time_unit = time_unit.ok_or(Error::MissingProperty("t_unit"))?;
    let mut schedule = EventSchedule::new(
        time_unit,
        start.ok_or(Error::MissingProperty("t_start"))?,
        end.ok_or(Error::MissingProperty("t_end"))?,
    )?;
    for element in xml::children(root, "event") {
        let time = xml::number("event time", xml::attribute(element, "time")?)?;
        let mut event = Event::new(time, time_unit);
        event.properties_mut().extend(xml::properties(element)?);
        schedule.add_event(event);
    }
    xml::trace_ignored(root, &["property", "event"]);
    debug!(
        "parsed event schedule with {} events in [{}, {}] {}",
        schedule.len(),
        schedule.start(),
        schedule.end(),
        time_unit
    );
    Ok(schedule)
}
