//! Lifecycle glue between the host editor's hooks and the two components.
//!
//! The host constructs one [`NodeUiExtension`] per installed profile and
//! wires its hooks only after construction succeeds; that ordering is the
//! readiness gate. Every hook tolerates re-entry: repeated node-created
//! events install nothing twice, and repeated trigger clicks land on the
//! reconciler's no-op path.

use crate::host::{ActionControlSpec, EditorNode, NumberControlSpec};
use crate::payload::ExecutionPayload;
use crate::preview::PreviewAttachment;
use crate::reconciler::{PortReconciler, ReconcileReport};
use crate::settings::{Settings, SettingsError};

/// Name of the persisted numeric control holding the desired count.
pub const COUNT_CONTROL: &str = "input_count";

/// Name of the transient action control that triggers reconciliation.
pub const UPDATE_CONTROL: &str = "update_inputs";

/// One installed extension: dynamic inputs plus result preview for a set
/// of node types.
pub struct NodeUiExtension {
    settings: Settings,
    reconciler: PortReconciler,
    preview: PreviewAttachment,
}

impl NodeUiExtension {
    /// Build the extension from validated settings.
    ///
    /// Returns an error instead of a half-initialized extension; hosts
    /// must not wire hooks before this succeeds.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let reconciler = PortReconciler::new(settings.naming()?, settings.port_type);
        let preview =
            PreviewAttachment::new(settings.server_base.clone(), settings.preview_height);
        Ok(Self {
            settings,
            reconciler,
            preview,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether this extension augments nodes of type `type_name`.
    pub fn applies_to(&self, type_name: &str) -> bool {
        self.settings.node_types.iter().any(|t| t == type_name)
    }

    /// Node-created hook: install the count and trigger controls.
    ///
    /// Safe against duplicate hook registration - a control is only
    /// installed when no control with its name exists yet.
    pub fn on_node_created<N>(&self, node: &mut N)
    where
        N: EditorNode + ?Sized,
    {
        if !self.applies_to(node.type_name()) {
            return;
        }

        if !node.has_control(COUNT_CONTROL) {
            node.install_number_control(&NumberControlSpec {
                name: COUNT_CONTROL.to_string(),
                label: "Inputs".to_string(),
                min: self.settings.min_inputs as i64,
                max: self.settings.max_inputs as i64,
                default: self.settings.default_inputs as i64,
                persisted: true,
            });
        }

        if !node.has_control(UPDATE_CONTROL) {
            node.install_action_control(&ActionControlSpec {
                name: UPDATE_CONTROL.to_string(),
                label: "Update inputs".to_string(),
                persisted: false,
            });
        }
    }

    /// Trigger-control callback: read the desired count and reconcile.
    ///
    /// A missing count control falls back to the default count; a value
    /// outside the configured range is clamped into it.
    pub fn update_inputs<N>(&self, node: &mut N) -> ReconcileReport
    where
        N: EditorNode + ?Sized,
    {
        let desired = self.desired_count(node);
        self.reconciler.reconcile(node, desired)
    }

    /// Execution-complete hook: refresh the node's media preview.
    pub fn on_node_executed<N>(&self, node: &mut N, payload: &ExecutionPayload)
    where
        N: EditorNode + ?Sized,
    {
        if !self.applies_to(node.type_name()) {
            return;
        }
        self.preview.attach_payload(node, payload);
    }

    /// Host media-error callback: mark the preview as failed.
    pub fn on_preview_load_failure<N>(&self, node: &mut N, resource: &str)
    where
        N: EditorNode + ?Sized,
    {
        self.preview.report_load_failure(node, resource);
    }

    fn desired_count<N>(&self, node: &N) -> u32
    where
        N: EditorNode + ?Sized,
    {
        match node.control_value(COUNT_CONTROL) {
            Some(value) => value.clamp(
                self.settings.min_inputs as i64,
                self.settings.max_inputs as i64,
            ) as u32,
            None => {
                log::warn!(
                    "count control missing, assuming {} input(s)",
                    self.settings.default_inputs
                );
                self.settings.default_inputs
            }
        }
    }
}
