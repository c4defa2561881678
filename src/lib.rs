//! Node UI extensions for the Visual Media Engine editor.
//!
//! Augments media nodes with two capabilities:
//! - **Dynamic inputs**: a user-declared number of typed input ports,
//!   kept consistent by the port reconciler
//! - **Result previews**: a media player widget attached to a node after
//!   it executes
//!
//! The host editor owns the graph, nodes, widgets and links. This crate
//! never touches them directly; everything goes through the traits in
//! [`host`], which the editor implements on its node handles.

pub mod extension;
pub mod host;
pub mod payload;
pub mod ports;
pub mod preview;
pub mod reconciler;
pub mod settings;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use extension::{NodeUiExtension, COUNT_CONTROL, UPDATE_CONTROL};
pub use host::{
    ActionControlSpec, ControlHost, EditorNode, LabelTone, NumberControlSpec, PortHost, PortView,
    PreviewHost,
};
pub use payload::{ExecutionPayload, OutputArtifacts};
pub use ports::{NamingError, PortNaming, PortType};
pub use preview::PreviewAttachment;
pub use reconciler::{EditPlan, PlannedRemoval, PortReconciler, ReconcileReport};
pub use settings::{Settings, SettingsError};
