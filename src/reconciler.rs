//! Port reconciliation - keeps a node's dynamic inputs at the declared count.
//!
//! The reconciler compares the ports that follow the naming convention
//! against the desired count, then either removes the out-of-range ports
//! (severing their links first) or appends the missing ones. Planning is
//! pure and host-free; application goes through [`PortHost`].

use crate::host::{PortHost, PortView};
use crate::ports::{PortNaming, PortType};
use serde::{Deserialize, Serialize};

/// One planned port removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRemoval {
    /// Position in the port list at planning time
    pub index: usize,
    /// Port name at that position
    pub name: String,
    /// Whether a link must be severed before the removal
    pub sever: bool,
}

/// The structural edits that bring a port list to the desired count.
///
/// Removals are ordered by strictly descending index so each stays valid
/// while the list shrinks underneath it. Appends are ordered by ascending
/// suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditPlan {
    pub removals: Vec<PlannedRemoval>,
    pub appends: Vec<String>,
}

impl EditPlan {
    /// Plan the edits that take `ports` to `desired` matching ports.
    ///
    /// Ports that do not follow `naming` are never touched. When
    /// shrinking, every matching port whose 1-based suffix exceeds
    /// `desired` is removed - by suffix, not by trailing position, so a
    /// suffix gap introduced behind our back cannot strand a high port.
    /// When growing, suffixes `current+1..=desired` are appended.
    pub fn compute(ports: &[PortView], naming: &PortNaming, desired: u32) -> Self {
        let current = ports.iter().filter(|p| naming.matches(&p.name)).count() as u32;

        let mut removals = Vec::new();
        if desired < current {
            for (index, port) in ports.iter().enumerate().rev() {
                let Some(suffix) = naming.suffix_of(&port.name) else {
                    continue;
                };
                if suffix > desired {
                    removals.push(PlannedRemoval {
                        index,
                        name: port.name.clone(),
                        sever: port.connected,
                    });
                }
            }
        }

        let mut appends = Vec::new();
        if desired > current {
            for suffix in current + 1..=desired {
                appends.push(naming.port_name(suffix));
            }
        }

        Self { removals, appends }
    }

    /// True when the plan contains no edits.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.appends.is_empty()
    }
}

/// Record of one reconciliation pass, for host-side logging.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    /// Count requested by the user
    pub desired: u32,
    /// Matching ports before the pass
    pub current: u32,
    /// Port names appended, in order
    pub appended: Vec<String>,
    /// Port names removed, in order
    pub removed: Vec<String>,
    /// Port names whose links were severed, in order
    pub severed: Vec<String>,
}

impl ReconcileReport {
    /// Whether the pass changed the port list.
    pub fn changed(&self) -> bool {
        !self.appended.is_empty() || !self.removed.is_empty()
    }
}

/// Applies port-count reconciliation to host nodes.
pub struct PortReconciler {
    naming: PortNaming,
    port_type: PortType,
}

impl PortReconciler {
    pub fn new(naming: PortNaming, port_type: PortType) -> Self {
        Self { naming, port_type }
    }

    pub fn naming(&self) -> &PortNaming {
        &self.naming
    }

    /// Bring the matching inputs of `node` to exactly `desired` ports.
    ///
    /// A removed port's link is severed strictly before the removal, so
    /// the host's link store never holds a reference to a missing port.
    /// Resize, redraw and graph-changed notifications fire once per pass,
    /// and only when the port list actually changed.
    pub fn reconcile<H>(&self, node: &mut H, desired: u32) -> ReconcileReport
    where
        H: PortHost + ?Sized,
    {
        let ports = node.input_ports();
        let current = ports.iter().filter(|p| self.naming.matches(&p.name)).count() as u32;
        let plan = EditPlan::compute(&ports, &self.naming, desired);

        let mut report = ReconcileReport {
            desired,
            current,
            appended: Vec::new(),
            removed: Vec::new(),
            severed: Vec::new(),
        };

        if plan.is_empty() {
            log::debug!("inputs already at {current}, nothing to reconcile");
            return report;
        }

        for removal in &plan.removals {
            if removal.sever {
                node.sever_connection(removal.index);
                report.severed.push(removal.name.clone());
            }
            node.remove_input(removal.index);
            report.removed.push(removal.name.clone());
        }

        for name in &plan.appends {
            node.append_input(name, self.port_type);
            report.appended.push(name.clone());
        }

        node.request_resize();
        node.request_redraw();
        node.notify_graph_changed();

        log::debug!(
            "reconciled inputs {current} -> {desired} ({} removed, {} appended)",
            report.removed.len(),
            report.appended.len()
        );

        report
    }
}
