//! D3D11 Feature Inspection & Monitor Queries
//!
//! Leaf components of a Direct3D-11-on-Metal translation layer: a fixed
//! per-device table of D3D11 feature-support records, and stateless Win32
//! monitor/display-mode queries for windowing and fullscreen setup.
//!
//! # Example
//!
//! ```
//! use d3d11_inspect::{DeviceInspection, DeviceProbe, Feature};
//!
//! struct Probe;
//!
//! impl DeviceProbe for Probe {
//!     fn has_unified_memory(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let inspection = DeviceInspection::new(&Probe);
//!
//! let mut threading = [0u8; 8];
//! inspection.get_feature_data(Feature::Threading, &mut threading)?;
//! # Ok::<(), d3d11_inspect::FeatureError>(())
//! ```

pub mod error;
pub mod inspection;
pub mod types;
pub mod wsi;

#[cfg(feature = "c-api")]
pub mod ffi;

// Re-export main types
pub use error::{FeatureError, FeatureResult, WsiError, WsiResult};
pub use inspection::{DeviceInspection, DeviceProbe, Feature};
pub use types::{DisplayName, ModeSelector, Rational, Rect, WsiMode};
pub use wsi::{
    enum_monitors, get_current_display_mode, get_default_monitor, get_desktop_coordinates,
    get_desktop_display_mode, get_display_mode, get_display_name, Monitor, MonitorHost,
};

/// Collect every attached monitor in host enumeration order
pub fn get_monitors() -> Vec<Monitor> {
    let mut monitors = Vec::new();
    while let Some(monitor) = enum_monitors(monitors.len() as u32) {
        monitors.push(monitor);
    }
    monitors
}

/// Collect every display mode of a monitor, in host mode order.
///
/// Stops at the first missing mode index; any other failure is returned.
pub fn get_display_modes(monitor: Monitor) -> WsiResult<Vec<WsiMode>> {
    let mut modes = Vec::new();
    loop {
        match get_display_mode(monitor, modes.len() as u32) {
            Ok(mode) => modes.push(mode),
            Err(WsiError::ModeNotFound) => return Ok(modes),
            Err(e) => return Err(e),
        }
    }
}

/// Library version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_monitor_enumeration_is_consistent() {
        // Headless environments report no monitors; otherwise the indexed
        // queries must agree with the collected list.
        let monitors = get_monitors();
        for (i, monitor) in monitors.iter().enumerate() {
            assert_eq!(enum_monitors(i as u32), Some(*monitor));
        }
        assert_eq!(enum_monitors(monitors.len() as u32), None);
    }
}
