use std::str::FromStr;

use log::trace;
use xmltree::{Element, XMLNode};

use crate::Error;

/// Parses a document and returns its root element.
pub(crate) fn root(document: &str) -> Result<Element, Error> {
    Ok(Element::parse(document.as_bytes())?)
}

/// Get an iterator over the direct children of `parent` named `name`.
pub(crate) fn children<'a>(
    parent: &'a Element,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    parent
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |child| child.name == name)
}

/// Logs the children of `parent` which none of the grammar rules consume.
pub(crate) fn trace_ignored(parent: &Element, known: &[&str]) {
    for child in parent.children.iter().filter_map(XMLNode::as_element) {
        if !known.contains(&child.name.as_str()) {
            trace!("ignoring <{}> inside <{}>", child.name, parent.name);
        }
    }
}

pub(crate) fn attribute<'a>(
    element: &'a Element,
    attribute: &'static str,
) -> Result<&'a str, Error> {
    element
        .attributes
        .get(attribute)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingAttribute {
            element: element.name.clone(),
            attribute,
        })
}

/// Returns the trimmed text content of `element`.
pub(crate) fn text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.trim().to_owned())
        .unwrap_or_default()
}

/// Returns the trimmed text of the child `name` of `parent`.
pub(crate) fn child_text(parent: &Element, name: &'static str) -> Result<String, Error> {
    parent
        .get_child(name)
        .map(text)
        .ok_or_else(|| Error::MissingElement {
            parent: parent.name.clone(),
            element: name,
        })
}

/// Collects the `(name, value)` pairs of all `<property>` children of `element`.
pub(crate) fn properties(element: &Element) -> Result<Vec<(&str, String)>, Error> {
    children(element, "property")
        .map(|prop| Ok((attribute(prop, "name")?, text(prop))))
        .collect()
}

pub(crate) fn number(what: &str, value: &str) -> Result<f64, Error> {
    value.parse().map_err(|source| Error::InvalidNumber {
        what: what.to_owned(),
        value: value.to_owned(),
        source,
    })
}

pub(crate) fn integer<T>(what: &str, value: &str) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| Error::InvalidInteger {
        what: what.to_owned(),
        value: value.to_owned(),
        source,
    })
}
