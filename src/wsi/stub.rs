//! Stub monitor host for platforms without a Win32 display stack.
//!
//! Reports an empty monitor list; every info query fails. Keeps the crate
//! buildable and its platform-independent logic testable off-Windows.

use super::{Monitor, MonitorHost, MonitorInfo, RawMode};
use crate::types::{DisplayName, ModeSelector};

pub(super) struct NullHost;

impl MonitorHost for NullHost {
    fn monitor_from_origin(&self) -> Monitor {
        Monitor(0)
    }

    fn monitor_at(&self, _index: u32) -> Option<Monitor> {
        None
    }

    fn monitor_info(&self, _monitor: Monitor) -> Option<MonitorInfo> {
        None
    }

    fn display_settings(&self, _device: &DisplayName, _selector: ModeSelector) -> Option<RawMode> {
        None
    }
}
