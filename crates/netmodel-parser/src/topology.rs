use log::debug;
use netmodel_core::{Edge, HasProperties, NamedPropertyContainer, Node, Topology};
use xmltree::Element;

use crate::{xml, Error};

pub(crate) fn parse(root: &Element) -> Result<Topology, Error> {
    let directed = root
        .attributes
        .get("linkdefault")
        .is_some_and(|v| v == "directed");
    let mut topology = Topology::with_direction(directed);
    for (name, value) in xml::properties(root)? {
        match name {
            "capacity_unit" => topology.set_capacity_unit(&value)?,
            "delay_unit" => topology.set_delay_unit(&value)?,
            "distance_unit" => topology.set_distance_unit(&value)?,
            "buffer_unit" => topology.set_buffer_unit(&value)?,
            _ => {
                topology.set_property(name, value);
            }
        }
    }
    for element in xml::children(root, "node") {
        let id = xml::attribute(element, "id")?;
        topology.add_node(id, parse_node(element)?);
    }
    for element in xml::children(root, "link") {
        let u = xml::child_text(element, "from")?;
        let v = xml::child_text(element, "to")?;
        topology.add_edge(u, v, parse_edge(element)?);
    }
    xml::trace_ignored(root, &["property", "node", "link"]);
    debug!(
        "parsed {} topology with {} nodes and {} edges",
        if directed { "directed" } else { "undirected" },
        topology.number_of_nodes(),
        topology.number_of_edges()
    );
    Ok(topology)
}

fn parse_node(element: &Element) -> Result<Node, Error> {
    let mut node = Node::new();
    node.properties_mut().extend(xml::properties(element)?);
    // There can only be one stack
    if let Some(stack) = element.get_child("stack") {
        node.set_protocol_stack(parse_named(stack)?);
    }
    for application in xml::children(element, "application") {
        node.set_application(parse_named(application)?);
    }
    xml::trace_ignored(element, &["property", "stack", "application"]);
    Ok(node)
}

/// Parses a `<stack>` or `<application>` element.
fn parse_named(element: &Element) -> Result<NamedPropertyContainer, Error> {
    let mut container = NamedPropertyContainer::new(xml::attribute(element, "name")?);
    container.properties_mut().extend(xml::properties(element)?);
    Ok(container)
}

fn parse_edge(element: &Element) -> Result<Edge, Error> {
    let mut edge = Edge::new();
    for (name, value) in xml::properties(element)? {
        match name {
            "capacity" => edge.capacity = xml::number(name, &value)?,
            "delay" => edge.delay = xml::number(name, &value)?,
            "weight" => edge.weight = xml::number(name, &value)?,
            "buffer" => edge.buffer_size = xml::number(name, &value)?,
            _ => {
                edge.set_property(name, value);
            }
        }
    }
    xml::trace_ignored(element, &["from", "to", "property"]);
    Ok(edge)
}
