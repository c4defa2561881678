//! Host editor seams.
//!
//! The editor runtime owns nodes, widgets and links; this crate only
//! mutates them through the traits below, which the host implements on
//! its node handles. Keeping the seam explicit also lets every component
//! run against an in-memory node in tests.

use crate::ports::PortType;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of one input port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortView {
    /// Port name as shown in the editor
    pub name: String,
    /// Data type tag of the port
    pub port_type: PortType,
    /// Whether an upstream output is connected
    pub connected: bool,
}

impl PortView {
    pub fn new(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            port_type,
            connected: false,
        }
    }

    pub fn connected(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            port_type,
            connected: true,
        }
    }
}

/// Spec for a numeric widget installed on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberControlSpec {
    /// Stable identity key of the widget on the node
    pub name: String,
    /// Text shown next to the widget
    pub label: String,
    /// Smallest accepted value
    pub min: i64,
    /// Largest accepted value
    pub max: i64,
    /// Value preselected on fresh nodes
    pub default: i64,
    /// Whether the widget value is saved into the graph document
    pub persisted: bool,
}

/// Spec for an action (button) widget installed on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionControlSpec {
    /// Stable identity key of the widget on the node
    pub name: String,
    /// Text shown on the button
    pub label: String,
    /// Action widgets are transient; hosts must not save them
    pub persisted: bool,
}

/// Visual tone of the preview label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelTone {
    /// Regular file name display
    Normal,
    /// Load failure display
    Error,
}

/// Structural port operations on a node.
///
/// Implementations mutate the host's ordered input-port list in place.
/// Indices refer to positions in that list at call time.
pub trait PortHost {
    /// Snapshot of the current input ports, in list order.
    fn input_ports(&self) -> Vec<PortView>;

    /// Append a new, unconnected input port.
    fn append_input(&mut self, name: &str, port_type: PortType);

    /// Remove the input port at `index`.
    ///
    /// The port must not be connected; callers sever its link first.
    fn remove_input(&mut self, index: usize);

    /// Drop the link feeding the input port at `index`, if any.
    fn sever_connection(&mut self, index: usize);

    /// Ask the node to recompute its size.
    fn request_resize(&mut self);

    /// Ask the canvas to repaint the node.
    fn request_redraw(&mut self);

    /// Tell the owning graph that its contents changed.
    fn notify_graph_changed(&mut self);
}

/// Widget operations on a node.
pub trait ControlHost {
    /// Whether a control with `name` already exists on the node.
    fn has_control(&self, name: &str) -> bool;

    fn install_number_control(&mut self, spec: &NumberControlSpec);

    fn install_action_control(&mut self, spec: &ActionControlSpec);

    /// Current value of a numeric control, if present.
    fn control_value(&self, name: &str) -> Option<i64>;
}

/// Preview element operations on a node.
///
/// The container is created at most once per node; label and media source
/// are rewritten in place on every attach.
pub trait PreviewHost {
    fn has_preview(&self) -> bool;

    /// Create the empty preview container with the given height hint.
    fn create_preview(&mut self, height: u32);

    fn set_preview_label(&mut self, text: &str, tone: LabelTone);

    /// Point the media sub-element at `url`.
    fn set_preview_media(&mut self, url: &str);

    /// Ask the media sub-element to (re)load its source.
    fn request_media_load(&mut self);
}

/// A node handle exposing everything the extension needs.
pub trait EditorNode: PortHost + ControlHost + PreviewHost {
    /// Host-registered type name of the node.
    fn type_name(&self) -> &str;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory node double used across the crate's tests.

    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct FakeNode {
        pub type_name: String,
        pub ports: Vec<PortView>,
        pub number_controls: Vec<NumberControlSpec>,
        pub action_controls: Vec<ActionControlSpec>,
        pub values: HashMap<String, i64>,
        pub resizes: usize,
        pub redraws: usize,
        pub graph_changes: usize,
        pub preview: Option<FakePreview>,
        pub preview_creates: usize,
        /// Ordered record of structural port calls, e.g. "sever image_3"
        pub events: Vec<String>,
    }

    #[derive(Debug, Default, Clone)]
    pub struct FakePreview {
        pub height: u32,
        pub label: String,
        pub tone: Option<LabelTone>,
        pub media_url: Option<String>,
        pub loads: usize,
    }

    impl FakeNode {
        pub fn new(type_name: &str) -> Self {
            Self {
                type_name: type_name.to_string(),
                ..Self::default()
            }
        }

        pub fn with_ports(type_name: &str, ports: Vec<PortView>) -> Self {
            Self {
                type_name: type_name.to_string(),
                ports,
                ..Self::default()
            }
        }

        pub fn port_names(&self) -> Vec<&str> {
            self.ports.iter().map(|p| p.name.as_str()).collect()
        }
    }

    impl PortHost for FakeNode {
        fn input_ports(&self) -> Vec<PortView> {
            self.ports.clone()
        }

        fn append_input(&mut self, name: &str, port_type: PortType) {
            self.events.push(format!("append {name}"));
            self.ports.push(PortView::new(name, port_type));
        }

        fn remove_input(&mut self, index: usize) {
            let name = self.ports[index].name.clone();
            assert!(
                !self.ports[index].connected,
                "removed {name} while still connected"
            );
            self.events.push(format!("remove {name}"));
            self.ports.remove(index);
        }

        fn sever_connection(&mut self, index: usize) {
            let name = self.ports[index].name.clone();
            self.events.push(format!("sever {name}"));
            self.ports[index].connected = false;
        }

        fn request_resize(&mut self) {
            self.resizes += 1;
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn notify_graph_changed(&mut self) {
            self.graph_changes += 1;
        }
    }

    impl ControlHost for FakeNode {
        fn has_control(&self, name: &str) -> bool {
            self.number_controls.iter().any(|c| c.name == name)
                || self.action_controls.iter().any(|c| c.name == name)
        }

        fn install_number_control(&mut self, spec: &NumberControlSpec) {
            self.values.insert(spec.name.clone(), spec.default);
            self.number_controls.push(spec.clone());
        }

        fn install_action_control(&mut self, spec: &ActionControlSpec) {
            self.action_controls.push(spec.clone());
        }

        fn control_value(&self, name: &str) -> Option<i64> {
            self.values.get(name).copied()
        }
    }

    impl PreviewHost for FakeNode {
        fn has_preview(&self) -> bool {
            self.preview.is_some()
        }

        fn create_preview(&mut self, height: u32) {
            self.preview_creates += 1;
            if self.preview.is_none() {
                self.preview = Some(FakePreview {
                    height,
                    ..FakePreview::default()
                });
            }
        }

        fn set_preview_label(&mut self, text: &str, tone: LabelTone) {
            if let Some(preview) = self.preview.as_mut() {
                preview.label = text.to_string();
                preview.tone = Some(tone);
            }
        }

        fn set_preview_media(&mut self, url: &str) {
            if let Some(preview) = self.preview.as_mut() {
                preview.media_url = Some(url.to_string());
            }
        }

        fn request_media_load(&mut self) {
            if let Some(preview) = self.preview.as_mut() {
                preview.loads += 1;
            }
        }
    }

    impl EditorNode for FakeNode {
        fn type_name(&self) -> &str {
            &self.type_name
        }
    }
}
