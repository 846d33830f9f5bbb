use std::io::Write;
use std::path::PathBuf;

use netmodel_core::{
    BufferUnit, CapacityUnit, DelayUnit, HasProperties, Sampling, TimeUnit, Topology,
};
use netmodel_parser::Error;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn data(file: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", file]
        .iter()
        .collect()
}

fn topology() -> anyhow::Result<Topology> {
    Ok(netmodel_parser::parse_topology(data("topology.xml"))?)
}

#[test]
fn topology_shape_and_units() -> anyhow::Result<()> {
    init();
    let topology = topology()?;
    assert!(!topology.is_directed());
    assert_eq!(topology.number_of_nodes(), 10);
    assert_eq!(topology.number_of_edges(), 18);
    assert_eq!(topology.capacity_unit(), Some(CapacityUnit::Mbps));
    assert_eq!(topology.delay_unit(), Some(DelayUnit::Millis));
    assert_eq!(topology.buffer_unit(), Some(BufferUnit::Packets));
    assert_eq!(topology.distance_unit(), None);
    assert_eq!(topology.property("type"), Some("er"));
    Ok(())
}

#[test]
fn topology_edge_attributes() -> anyhow::Result<()> {
    init();
    let topology = topology()?;
    let edge = topology.edge("1", "5").unwrap();
    assert_eq!(edge.capacity, 20.77);
    assert_eq!(edge.buffer_size, 30.0);
    assert_eq!(edge.weight, 1.0);
    assert_eq!(edge.property("type"), Some("backbone"));
    assert!(std::ptr::eq(edge, topology.edge("5", "1").unwrap()));

    let other = topology.edge("0", "1").unwrap();
    assert_eq!((other.capacity, other.delay), (10.0, 2.0));
    assert!(!other.has_buffer_size());
    Ok(())
}

#[test]
fn topology_node_deployments() -> anyhow::Result<()> {
    init();
    let topology = topology()?;
    let node = topology.node("2").unwrap();
    assert_eq!(node.property("longitude"), Some("99.76"));
    let stack = node.protocol_stack().unwrap();
    assert_eq!(stack.name(), "tcp");
    assert_eq!(stack.property("protocol"), Some("cubic"));
    assert_eq!(node.application_names().collect::<Vec<_>>(), ["client", "server"]);
    assert_eq!(
        node.application("server").and_then(|a| a.property("port")),
        Some("80")
    );
    assert!(node.application("client").unwrap().properties().is_empty());
    assert!(topology.node("3").unwrap().protocol_stack().is_none());
    Ok(())
}

#[test]
fn directed_topology_from_str() -> anyhow::Result<()> {
    init();
    let topology = netmodel_parser::parse_topology_str(
        r#"<topology linkdefault="directed">
             <node id="1"><property name="longitude">99.76</property></node>
             <node id="2"/>
             <link>
               <from>1</from><to>2</to>
               <property name="capacity">20.77</property>
             </link>
           </topology>"#,
    )?;
    assert!(topology.is_directed());
    assert_eq!(topology.edge("1", "2").map(|e| e.capacity), Some(20.77));
    assert!(!topology.has_edge("2", "1"));
    assert_eq!(
        topology.node("1").and_then(|n| n.property("longitude")),
        Some("99.76")
    );
    insta::assert_yaml_snapshot!(topology.all_edges(), @r###"
    ---
    - - "1"
      - "2"
    "###);
    Ok(())
}

#[test]
fn event_schedule_file() -> anyhow::Result<()> {
    init();
    let schedule = netmodel_parser::parse_event_schedule(data("eventschedule.xml"))?;
    assert_eq!(schedule.time_unit(), TimeUnit::Secs);
    assert_eq!((schedule.start(), schedule.end()), (0.0, 60.0));
    let events = schedule
        .iter()
        .map(|e| (e.time(), e.property("action").unwrap_or_default()))
        .collect::<Vec<_>>();
    assert_eq!(
        events,
        [(10.0, "link_up"), (10.0, "link_down"), (42.5, "link_down")]
    );
    Ok(())
}

#[test]
fn traffic_matrix_file() -> anyhow::Result<()> {
    init();
    let sequence = netmodel_parser::parse_traffic_matrix_sequence(data("trafficmatrix.xml"))?;
    assert_eq!(sequence.sampling(), Some(Sampling::new(5, TimeUnit::Mins)));
    assert_eq!(sequence.len(), 2);
    let first = sequence.get(0).unwrap();
    assert_eq!(first.volume_unit(), Some(CapacityUnit::Mbps));
    assert_eq!(first.flow("4", "0"), Some(7.25));
    assert_eq!(first.len(), 3);
    let second = sequence.get(1).unwrap();
    assert_eq!(second.volume_unit(), Some(CapacityUnit::Gbps));
    assert_eq!(second.flow("0", "1"), Some(0.5));

    let single = netmodel_parser::parse_traffic_matrix(data("trafficmatrix.xml"))?;
    assert_eq!(&single, first);
    Ok(())
}

#[test]
fn empty_traffic_matrix_fails() {
    init();
    let res = netmodel_parser::parse_traffic_matrix_str("<traffic-matrix/>");
    assert!(matches!(res, Err(Error::EmptySequence)));
}

#[test]
fn malformed_document_fails() -> anyhow::Result<()> {
    init();
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "<topology><node id=\"1\"></topology>")?;
    let res = netmodel_parser::parse_topology(file.path());
    assert!(matches!(res, Err(Error::Xml(..))));
    Ok(())
}

#[test]
fn parse_from_temp_dir() -> anyhow::Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("topology.xml");
    std::fs::write(&path, std::fs::read_to_string(data("topology.xml"))?)?;
    let from_file = netmodel_parser::parse_topology(&path)?;
    assert_eq!(from_file.all_edges(), topology()?.all_edges());
    Ok(())
}

#[test]
fn missing_file_fails() -> anyhow::Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let res = netmodel_parser::parse_topology(dir.path().join("absent.xml"));
    assert!(matches!(res, Err(Error::Io(..))));
    Ok(())
}
