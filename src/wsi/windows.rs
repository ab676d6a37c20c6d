//! Win32 monitor host backend

use super::{Monitor, MonitorHost, MonitorInfo, RawMode};
use crate::types::{DisplayName, ModeSelector, Rect};

use windows::core::PCWSTR;
use windows::Win32::{
    Foundation::{BOOL, FALSE, LPARAM, POINT, RECT, TRUE},
    Graphics::Gdi::{
        EnumDisplayMonitors, EnumDisplaySettingsW, GetMonitorInfoW, MonitorFromPoint, DEVMODEW,
        ENUM_CURRENT_SETTINGS, ENUM_DISPLAY_SETTINGS_MODE, ENUM_REGISTRY_SETTINGS, HDC, HMONITOR,
        MONITORINFO, MONITORINFOEXW, MONITOR_DEFAULTTOPRIMARY,
    },
};

/// Stateless pass-through to the Win32 display APIs
pub(super) struct Win32Host;

struct EnumData {
    remaining: u32,
    monitor: Option<Monitor>,
}

/// Counts down to the requested index in host enumeration order, then
/// stops the enumeration with that monitor.
unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let data = &mut *(lparam.0 as *mut EnumData);

    if data.remaining > 0 {
        data.remaining -= 1;
        return TRUE; // continue
    }

    data.monitor = Some(Monitor(hmonitor.0 as isize));
    FALSE // stop
}

impl MonitorHost for Win32Host {
    fn monitor_from_origin(&self) -> Monitor {
        let hmonitor =
            unsafe { MonitorFromPoint(POINT { x: 0, y: 0 }, MONITOR_DEFAULTTOPRIMARY) };
        Monitor(hmonitor.0 as isize)
    }

    fn monitor_at(&self, index: u32) -> Option<Monitor> {
        let mut data = EnumData {
            remaining: index,
            monitor: None,
        };

        unsafe {
            let _ = EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(monitor_enum_proc),
                LPARAM(&mut data as *mut EnumData as isize),
            );
        }

        data.monitor
    }

    fn monitor_info(&self, monitor: Monitor) -> Option<MonitorInfo> {
        let mut info = MONITORINFOEXW {
            monitorInfo: MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFOEXW>() as u32,
                ..Default::default()
            },
            ..Default::default()
        };

        let ok = unsafe {
            GetMonitorInfoW(
                HMONITOR(monitor.0 as *mut core::ffi::c_void),
                &mut info.monitorInfo as *mut _ as *mut MONITORINFO,
            )
            .as_bool()
        };
        if !ok {
            return None;
        }

        let rect = info.monitorInfo.rcMonitor;
        Some(MonitorInfo {
            name: DisplayName(info.szDevice),
            rect: Rect {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            },
        })
    }

    fn display_settings(&self, device: &DisplayName, selector: ModeSelector) -> Option<RawMode> {
        let mode_num = match selector {
            ModeSelector::Numbered(n) => ENUM_DISPLAY_SETTINGS_MODE(n),
            ModeSelector::Current => ENUM_CURRENT_SETTINGS,
            ModeSelector::Registry => ENUM_REGISTRY_SETTINGS,
        };

        let mut devmode = DEVMODEW {
            dmSize: std::mem::size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };

        let ok = unsafe {
            EnumDisplaySettingsW(PCWSTR(device.0.as_ptr()), mode_num, &mut devmode).as_bool()
        };
        if !ok {
            return None;
        }

        Some(RawMode {
            width: devmode.dmPelsWidth,
            height: devmode.dmPelsHeight,
            frequency_hz: devmode.dmDisplayFrequency,
            bits_per_pixel: devmode.dmBitsPerPel,
            display_flags: unsafe { devmode.Anonymous2.dmDisplayFlags },
        })
    }
}
