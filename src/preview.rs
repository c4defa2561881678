//! Media preview attachment - shows a produced artifact on its node.
//!
//! The preview container is created on the first result a node produces
//! and reused for every later one; only the label and media source are
//! rewritten. Media loading is asynchronous on the host side; a load
//! failure comes back through [`PreviewAttachment::report_load_failure`]
//! and repaints the label, nothing else.

use crate::host::{LabelTone, PreviewHost};
use crate::payload::ExecutionPayload;

/// Height hint for the preview container, in canvas units.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 70;

/// Playable URL for `resource` on the host's resource server.
///
/// The query string uses form encoding, which is what the editor's
/// resource endpoint parses.
pub fn media_url(server_base: &str, resource: &str) -> String {
    let query = serde_urlencoded::to_string([("filename", resource), ("type", "output")])
        .unwrap_or_default();
    format!("{server_base}/view?{query}")
}

/// Attaches and refreshes the media preview element on host nodes.
#[derive(Debug, Clone)]
pub struct PreviewAttachment {
    server_base: String,
    height: u32,
}

impl PreviewAttachment {
    pub fn new(server_base: impl Into<String>, height: u32) -> Self {
        Self {
            server_base: server_base.into(),
            height,
        }
    }

    /// Read the artifact out of `payload` and attach it to `node`.
    ///
    /// Logs and returns without touching the node when the payload
    /// carries no media artifact.
    pub fn attach_payload<P>(&self, node: &mut P, payload: &ExecutionPayload)
    where
        P: PreviewHost + ?Sized,
    {
        match payload.media_path() {
            Some(resource) => self.attach(node, resource),
            None => log::warn!("execution result carried no media artifact"),
        }
    }

    /// Point the preview of `node` at `resource`, creating the container
    /// on first use.
    pub fn attach<P>(&self, node: &mut P, resource: &str)
    where
        P: PreviewHost + ?Sized,
    {
        let display_name = display_name(resource);

        if !node.has_preview() {
            node.create_preview(self.height);
        }

        node.set_preview_label(display_name, LabelTone::Normal);
        node.set_preview_media(&media_url(&self.server_base, resource));
        node.request_media_load();

        log::debug!("preview attached for {display_name}");
    }

    /// Paint the load-failure state for `resource` on the label.
    ///
    /// Called by the host from its media element's asynchronous error
    /// callback. Only display text changes; the node stays functional.
    pub fn report_load_failure<P>(&self, node: &mut P, resource: &str)
    where
        P: PreviewHost + ?Sized,
    {
        log::warn!("media failed to load: {resource}");
        node.set_preview_label(
            &format!("Failed to load: {}", display_name(resource)),
            LabelTone::Error,
        );
    }
}

/// Final path segment of a resource reference.
fn display_name(resource: &str) -> &str {
    resource.rsplit('/').next().unwrap_or(resource)
}
