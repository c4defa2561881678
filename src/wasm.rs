//! Browser bindings for the editor frontend.
//!
//! The editor runs the planning half in WASM and applies the resulting
//! edits through its own node handles; only plain data crosses the
//! boundary.

use crate::host::PortView;
use crate::ports::PortNaming;
use crate::reconciler::EditPlan;
use wasm_bindgen::prelude::*;

/// Compute the input edits for a port snapshot.
///
/// `ports` is an array of `{ name, port_type, connected }` rows as
/// produced by the editor; the returned value is the serialized
/// [`EditPlan`].
#[wasm_bindgen]
pub fn plan_input_edits(ports: JsValue, prefix: &str, desired: u32) -> Result<JsValue, JsValue> {
    let ports: Vec<PortView> = serde_wasm_bindgen::from_value(ports).map_err(JsValue::from)?;
    let naming = PortNaming::new(prefix).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let plan = EditPlan::compute(&ports, &naming, desired);
    serde_wasm_bindgen::to_value(&plan).map_err(JsValue::from)
}

/// Playable URL for a produced resource on the host's resource server.
#[wasm_bindgen]
pub fn resource_url(server_base: &str, resource: &str) -> String {
    crate::preview::media_url(server_base, resource)
}
