//! Host capabilities the controller depends on.
//!
//! The browser widget opens links in a new tab and drives a camera overlay;
//! other hosts plug in their own implementations.

use bakerbot_core::error::{BakerError, Result};
use bakerbot_core::session::PreviewParams;

/// Opens the handoff deep link. There is no delivery confirmation.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Camera overlay that previews the chosen cake.
pub trait PreviewSurface: Send + Sync {
    fn launch(&self, params: &PreviewParams) -> Result<()>;
}

/// Preview surface for hosts without a camera.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl PreviewSurface for NoCamera {
    fn launch(&self, _params: &PreviewParams) -> Result<()> {
        Err(BakerError::capability(
            "Camera not supported on this device, so the AR preview is unavailable",
        ))
    }
}
