use log::debug;
use netmodel_core::{Sampling, TimeUnit, TrafficMatrix, TrafficMatrixSequence};
use xmltree::Element;

use crate::{xml, Error};

pub(crate) fn parse(root: &Element) -> Result<TrafficMatrixSequence, Error> {
    let mut time_unit: Option<TimeUnit> = None;
    let mut interval: Option<i64> = None;
    for (name, value) in xml::properties(root)? {
        match name {
            "t_unit" => time_unit = Some(value.parse()?),
            "interval" => interval = Some(xml::integer(name, &value)?),
            _ => continue,
        }
    }
    let mut sequence = match (interval, time_unit) {
        // Non-positive intervals mean the matrices were not sampled
        (Some(interval), Some(time_unit)) if interval > 0 => {
            let sampling = Sampling::new(interval.unsigned_abs(), time_unit);
            TrafficMatrixSequence::with_sampling(sampling)
        }
        _ => TrafficMatrixSequence::new(),
    };
    for element in xml::children(root, "time") {
        sequence.push(parse_matrix(element)?);
    }
    xml::trace_ignored(root, &["property", "time"]);
    debug!(
        "parsed traffic matrix sequence with {} matrices",
        sequence.len()
    );
    Ok(sequence)
}

fn parse_matrix(element: &Element) -> Result<TrafficMatrix, Error> {
    let mut matrix = TrafficMatrix::new();
    for (name, value) in xml::properties(element)? {
        if name == "volume_unit" {
            matrix.set_volume_unit(value.parse()?);
        }
    }
    for origin in xml::children(element, "origin") {
        let o = xml::attribute(origin, "id")?;
        for destination in xml::children(origin, "destination") {
            let d = xml::attribute(destination, "id")?;
            let volume = xml::number("flow volume", &xml::text(destination))?;
            matrix.add_flow(o, d, volume);
        }
    }
    xml::trace_ignored(element, &["property", "origin"]);
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use netmodel_core::CapacityUnit;

    use super::*;

    fn parse_str(document: &str) -> Result<TrafficMatrixSequence, Error> {
        parse(&xml::root(document)?)
    }

    #[test]
    fn sampling_needs_unit_and_positive_interval() -> anyhow::Result<()> {
        let seq = parse_str(
            r#"<traffic-matrix type="sequence">
                 <property name="t_unit">min</property>
                 <property name="interval">5</property>
               </traffic-matrix>"#,
        )?;
        assert_eq!(seq.sampling(), Some(Sampling::new(5, TimeUnit::Mins)));

        let seq = parse_str(
            r#"<traffic-matrix><property name="interval">5</property></traffic-matrix>"#,
        )?;
        assert_eq!(seq.sampling(), None);

        let seq = parse_str(
            r#"<traffic-matrix>
                 <property name="t_unit">sec</property>
                 <property name="interval">0</property>
               </traffic-matrix>"#,
        )?;
        assert_eq!(seq.sampling(), None);

        let seq = parse_str(
            r#"<traffic-matrix>
                 <property name="t_unit">sec</property>
                 <property name="interval">-5</property>
               </traffic-matrix>"#,
        )?;
        assert_eq!(seq.sampling(), None);
        Ok(())
    }

    #[test]
    fn invalid_interval_fails() {
        let res = parse_str(
            r#"<traffic-matrix><property name="interval">often</property></traffic-matrix>"#,
        );
        assert!(matches!(res, Err(Error::InvalidInteger { .. })));
    }

    #[test]
    fn matrix_flows_are_read() -> anyhow::Result<()> {
        let seq = parse_str(
            r#"<traffic-matrix type="single">
                 <time seq="0">
                   <property name="volume_unit">Mbps</property>
                   <origin id="a">
                     <destination id="b">12.5</destination>
                     <destination id="c">3</destination>
                   </origin>
                 </time>
               </traffic-matrix>"#,
        )?;
        let tm = seq.get(0).unwrap();
        assert_eq!(tm.volume_unit(), Some(CapacityUnit::Mbps));
        assert_eq!(tm.flow("a", "b"), Some(12.5));
        assert_eq!(tm.flow("a", "c"), Some(3.0));
        assert_eq!(tm.len(), 2);
        Ok(())
    }

    #[test]
    fn invalid_volume_unit_fails() {
        let res = parse_str(
            r#"<traffic-matrix>
                 <time><property name="volume_unit">MB</property></time>
               </traffic-matrix>"#,
        );
        assert!(matches!(res, Err(Error::InvalidUnit(..))));
    }
}
