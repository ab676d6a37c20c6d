//! Monitor and display-mode queries.
//!
//! Stateless pass-throughs to the host windowing system: nothing is cached,
//! every call re-queries the host, and thread safety is whatever the host
//! API provides. The host itself sits behind the [`MonitorHost`] trait so the
//! query logic and its failure behavior are shared between the Win32 backend,
//! the non-Windows stub and test hosts.

#[cfg(target_os = "windows")]
mod windows;

#[cfg(not(target_os = "windows"))]
mod stub;

use crate::error::{WsiError, WsiResult};
use crate::types::{DisplayName, ModeSelector, Rect, WsiMode};
use once_cell::sync::Lazy;

/// Opaque handle to one attached display output.
///
/// On Windows this wraps an `HMONITOR`. Handles can go stale when the
/// display configuration changes; a failed query against a stale handle is
/// permanent for that call and the caller must re-enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Monitor(pub(crate) isize);

impl Monitor {
    /// Rebuild a handle from its raw value (FFI boundary)
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw host value of the handle
    pub const fn as_raw(&self) -> isize {
        self.0
    }
}

/// Name and desktop rectangle of a monitor, as one host info query returns it
#[derive(Debug, Clone, Copy)]
pub struct MonitorInfo {
    pub name: DisplayName,
    pub rect: Rect,
}

/// A display mode exactly as the host reports it, before conversion
#[derive(Debug, Clone, Copy)]
pub struct RawMode {
    pub width: u32,
    pub height: u32,
    pub frequency_hz: u32,
    pub bits_per_pixel: u32,
    pub display_flags: u32,
}

/// Host windowing system seam.
///
/// Implementations forward directly to the platform API and hold no state.
pub trait MonitorHost: Send + Sync {
    /// The monitor containing the logical origin (0, 0). The host snaps to
    /// the primary monitor, so this always yields a handle.
    fn monitor_from_origin(&self) -> Monitor;

    /// The `index`-th monitor in host enumeration order, or `None` past the
    /// end of the list.
    fn monitor_at(&self, index: u32) -> Option<Monitor>;

    /// Name and desktop rectangle for a monitor; `None` if the handle is
    /// stale or invalid.
    fn monitor_info(&self, monitor: Monitor) -> Option<MonitorInfo>;

    /// The selected display mode of a named display device; `None` if the
    /// selected mode does not exist.
    fn display_settings(&self, device: &DisplayName, selector: ModeSelector) -> Option<RawMode>;
}

#[cfg(target_os = "windows")]
static HOST: Lazy<windows::Win32Host> = Lazy::new(|| windows::Win32Host);

#[cfg(not(target_os = "windows"))]
static HOST: Lazy<stub::NullHost> = Lazy::new(|| stub::NullHost);

/// The process-wide host backend for the current platform
pub fn host() -> &'static dyn MonitorHost {
    &*HOST
}

/// Handle of the monitor containing the logical origin
pub fn get_default_monitor() -> Monitor {
    host().monitor_from_origin()
}

/// Handle of the `index`-th attached monitor, `None` past the end
pub fn enum_monitors(index: u32) -> Option<Monitor> {
    host().monitor_at(index)
}

/// Device name of a monitor
pub fn get_display_name(monitor: Monitor) -> WsiResult<DisplayName> {
    get_display_name_with(host(), monitor)
}

/// Desktop-space bounding rectangle of a monitor
pub fn get_desktop_coordinates(monitor: Monitor) -> WsiResult<Rect> {
    get_desktop_coordinates_with(host(), monitor)
}

/// The `mode_number`-th display mode of a monitor.
///
/// Walking `mode_number` up from 0 until this returns
/// [`WsiError::ModeNotFound`] is the supported way to enumerate modes; the
/// terminal call is not an error condition and is not logged.
pub fn get_display_mode(monitor: Monitor, mode_number: u32) -> WsiResult<WsiMode> {
    retrieve_display_mode(host(), monitor, ModeSelector::Numbered(mode_number))
}

/// The monitor's currently active display mode
pub fn get_current_display_mode(monitor: Monitor) -> WsiResult<WsiMode> {
    retrieve_display_mode(host(), monitor, ModeSelector::Current)
}

/// The monitor's mode as stored in persistent desktop configuration
pub fn get_desktop_display_mode(monitor: Monitor) -> WsiResult<WsiMode> {
    retrieve_display_mode(host(), monitor, ModeSelector::Registry)
}

/// [`get_display_name`] against an explicit host
pub fn get_display_name_with(host: &dyn MonitorHost, monitor: Monitor) -> WsiResult<DisplayName> {
    match host.monitor_info(monitor) {
        Some(info) => Ok(info.name),
        None => {
            log::error!("wsi: get_display_name: failed to query monitor info");
            Err(WsiError::MonitorInfoFailed("get_display_name"))
        }
    }
}

/// [`get_desktop_coordinates`] against an explicit host
pub fn get_desktop_coordinates_with(host: &dyn MonitorHost, monitor: Monitor) -> WsiResult<Rect> {
    match host.monitor_info(monitor) {
        Some(info) => Ok(info.rect),
        None => {
            log::error!("wsi: get_desktop_coordinates: failed to query monitor info");
            Err(WsiError::MonitorInfoFailed("get_desktop_coordinates"))
        }
    }
}

/// Shared two-step retrieval all three display-mode queries funnel through:
/// resolve the monitor to its device name, then ask the host for the
/// selected mode of that device.
pub fn retrieve_display_mode(
    host: &dyn MonitorHost,
    monitor: Monitor,
    selector: ModeSelector,
) -> WsiResult<WsiMode> {
    let info = match host.monitor_info(monitor) {
        Some(info) => info,
        None => {
            log::error!("wsi: retrieve_display_mode: failed to query monitor info");
            return Err(WsiError::MonitorInfoFailed("retrieve_display_mode"));
        }
    };

    // A missing mode is the normal end-of-enumeration signal, never logged
    let raw = host
        .display_settings(&info.name, selector)
        .ok_or(WsiError::ModeNotFound)?;

    Ok(WsiMode::from_host(
        raw.width,
        raw.height,
        raw.frequency_hz,
        raw.bits_per_pixel,
        raw.display_flags,
    ))
}
