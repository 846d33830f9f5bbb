use std::collections::BTreeMap;

use crate::property::{Application, HasProperties, PropertyContainer, ProtocolStack};

/// Sentinel for typed edge fields which have not been set.
pub const UNSET: f64 = -1.0;

/// A link between two nodes.
///
/// The units of `capacity`, `delay`, `buffer_size` and `length` are not stored here; they are
/// declared once on the owning [`Topology`](crate::Topology) and apply to all of its edges.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub capacity: f64,
    pub weight: f64,
    pub delay: f64,
    pub buffer_size: f64,
    pub length: f64,
    #[serde(default, skip_serializing_if = "PropertyContainer::is_empty")]
    props: PropertyContainer,
}

properties_impl!(Edge);

impl Default for Edge {
    fn default() -> Self {
        Self {
            capacity: UNSET,
            weight: 1.0,
            delay: 0.0,
            buffer_size: UNSET,
            length: 0.0,
            props: PropertyContainer::new(),
        }
    }
}

impl Edge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: f64) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Returns `true` if a capacity other than the [`UNSET`] sentinel was assigned.
    pub fn has_capacity(&self) -> bool {
        self.capacity != UNSET
    }

    /// Returns `true` if a buffer size other than the [`UNSET`] sentinel was assigned.
    pub fn has_buffer_size(&self) -> bool {
        self.buffer_size != UNSET
    }
}

/// A network node, possibly running a protocol stack and applications.
///
/// The node owns everything deployed on it: stacks and applications are moved in, so the caller
/// keeps no handle through which the node's copy could change.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack: Option<ProtocolStack>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    applications: BTreeMap<String, Application>,
    #[serde(default, skip_serializing_if = "PropertyContainer::is_empty")]
    props: PropertyContainer,
}

properties_impl!(Node);

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol_stack(stack: ProtocolStack) -> Self {
        Self {
            stack: Some(stack),
            ..Default::default()
        }
    }

    pub fn protocol_stack(&self) -> Option<&ProtocolStack> {
        self.stack.as_ref()
    }

    pub fn protocol_stack_mut(&mut self) -> Option<&mut ProtocolStack> {
        self.stack.as_mut()
    }

    /// Deploys `stack`, returning the stack it replaces.
    pub fn set_protocol_stack(&mut self, stack: ProtocolStack) -> Option<ProtocolStack> {
        self.stack.replace(stack)
    }

    pub fn remove_protocol_stack(&mut self) -> Option<ProtocolStack> {
        self.stack.take()
    }

    pub fn application(&self, name: &str) -> Option<&Application> {
        self.applications.get(name)
    }

    /// Returns the properties of application `name` for mutation. The application itself is not
    /// handed out, since its name is the key it is stored under.
    pub fn application_properties_mut(&mut self, name: &str) -> Option<&mut PropertyContainer> {
        self.applications.get_mut(name).map(|app| app.properties_mut())
    }

    /// Re-keys application `from` under the name `to`, replacing any application already called
    /// `to`. Returns `false` if there is no application `from`.
    pub fn rename_application(&mut self, from: &str, to: impl Into<String>) -> bool {
        let Some(mut app) = self.applications.remove(from) else {
            return false;
        };
        app.set_name(to);
        self.set_application(app);
        true
    }

    /// Deploys `application` under its own name, returning the application it replaces.
    pub fn set_application(&mut self, application: Application) -> Option<Application> {
        self.applications
            .insert(application.name().to_owned(), application)
    }

    pub fn remove_application(&mut self, name: &str) -> Option<Application> {
        self.applications.remove(name)
    }

    /// Get an iterator over the names of all deployed applications.
    pub fn application_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.applications.keys().map(String::as_str)
    }

    /// Get an iterator over all deployed applications.
    pub fn applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.applications.values()
    }
}
