// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Mica return `error::Result<T>`.  No panics in
// production paths; a fatal error surfaces exactly once in `main()`, which
// logs it and exits with status 1.
//
// Only the bring-up phases are fatal.  Platform decoration, font staging and
// per-frame surface hiccups are advisory by contract and never appear here.

/// Every fatal error that Mica can produce.
#[derive(Debug)]
pub enum MicaError {
    /// The windowing subsystem refused to start.
    EventLoop(winit::error::EventLoopError),

    /// The OS refused to create the main window.
    Window(winit::error::OsError),

    /// No rendering surface could be created for the window.
    CreateSurface(wgpu::CreateSurfaceError),

    /// No GPU adapter is compatible with the window surface.
    NoAdapter,

    /// The surface advertises no usable texture format.
    NoSurfaceFormat,

    /// The adapter refused to open a logical device.
    RequestDevice(wgpu::RequestDeviceError),
}

impl std::fmt::Display for MicaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "event loop creation failed: {e}"),
            Self::Window(e) => write!(f, "window creation failed: {e}"),
            Self::CreateSurface(e) => write!(f, "render surface creation failed: {e}"),
            Self::NoAdapter => write!(f, "no compatible GPU adapter found"),
            Self::NoSurfaceFormat => write!(f, "render surface advertises no texture format"),
            Self::RequestDevice(e) => write!(f, "GPU device creation failed: {e}"),
        }
    }
}

impl std::error::Error for MicaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::CreateSurface(e) => Some(e),
            Self::RequestDevice(e) => Some(e),
            Self::NoAdapter | Self::NoSurfaceFormat => None,
        }
    }
}

// `From` impls so that `?` composes with the collaborator crates' error types
// throughout the bring-up code.

impl From<wgpu::CreateSurfaceError> for MicaError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        Self::CreateSurface(e)
    }
}

impl From<wgpu::RequestDeviceError> for MicaError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        Self::RequestDevice(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MicaError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_phase() {
        assert!(MicaError::NoAdapter.to_string().contains("adapter"));
        assert!(MicaError::NoSurfaceFormat.to_string().contains("texture format"));
    }

    #[test]
    fn leaf_variants_have_no_source() {
        use std::error::Error;
        assert!(MicaError::NoAdapter.source().is_none());
        assert!(MicaError::NoSurfaceFormat.source().is_none());
    }
}
