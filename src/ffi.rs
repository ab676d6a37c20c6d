//! C API for the inspection and monitor query surfaces
//!
//! Mirrors the shape of the external contracts: feature queries return 0 or
//! a negative invalid-argument code, monitor queries return boolean-style
//! results with out-parameters.

#![allow(non_camel_case_types)]

use crate::inspection::{DeviceInspection, DeviceProbe};
use crate::types::{ModeSelector, Rational, WsiMode};
use crate::wsi::{self, Monitor};
use libc::{c_int, c_uint, c_void};
use std::slice;

/// Opaque handle for a device inspection instance
pub struct d3d11_inspection_handle {
    inner: DeviceInspection,
}

/// Desktop rectangle for the C API
#[repr(C)]
pub struct wsi_rect {
    pub left: c_int,
    pub top: c_int,
    pub right: c_int,
    pub bottom: c_int,
}

/// Display mode for the C API
#[repr(C)]
pub struct wsi_display_mode {
    pub width: c_uint,
    pub height: c_uint,
    pub refresh_rate_numerator: c_uint,
    pub refresh_rate_denominator: c_uint,
    pub bits_per_pixel: c_uint,
    pub interlaced: c_int,
}

// Error codes
const SUCCESS: c_int = 0;
const ERROR_NULL_POINTER: c_int = -1;

struct FixedProbe {
    unified_memory: bool,
}

impl DeviceProbe for FixedProbe {
    fn has_unified_memory(&self) -> bool {
        self.unified_memory
    }
}

/// Build the capability table for a device with the given unified-memory
/// property
#[no_mangle]
pub extern "C" fn d3d11_inspection_create(
    has_unified_memory: c_int,
) -> *mut d3d11_inspection_handle {
    let probe = FixedProbe {
        unified_memory: has_unified_memory != 0,
    };
    let handle = Box::new(d3d11_inspection_handle {
        inner: DeviceInspection::new(&probe),
    });
    Box::into_raw(handle)
}

/// Destroy a capability table handle
#[no_mangle]
pub extern "C" fn d3d11_inspection_destroy(handle: *mut d3d11_inspection_handle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Copy the record for `feature` into `out` (`size` bytes). Returns 0 on
/// success or a negative invalid-argument code; on failure `out` is left
/// untouched.
#[no_mangle]
pub extern "C" fn d3d11_inspection_get_feature_data(
    handle: *const d3d11_inspection_handle,
    feature: c_uint,
    size: c_uint,
    out: *mut c_void,
) -> c_int {
    if handle.is_null() || out.is_null() {
        return ERROR_NULL_POINTER;
    }

    unsafe {
        let inspection = &(*handle).inner;
        let buffer = slice::from_raw_parts_mut(out as *mut u8, size as usize);
        match inspection.get_feature_data_raw(feature, buffer) {
            Ok(()) => SUCCESS,
            Err(e) => e.to_error_code(),
        }
    }
}

/// Handle of the monitor containing the logical origin
#[no_mangle]
pub extern "C" fn wsi_get_default_monitor() -> isize {
    wsi::get_default_monitor().as_raw()
}

/// Handle of the `index`-th monitor, 0 past the end of the list
#[no_mangle]
pub extern "C" fn wsi_enum_monitors(index: c_uint) -> isize {
    wsi::enum_monitors(index).map_or(0, |m| m.as_raw())
}

/// Write the 32-wide-character device name of a monitor. Returns 1 on
/// success, 0 on failure.
#[no_mangle]
pub extern "C" fn wsi_get_display_name(monitor: isize, name: *mut u16) -> c_int {
    if name.is_null() {
        return 0;
    }

    match wsi::get_display_name(Monitor::from_raw(monitor)) {
        Ok(display_name) => {
            unsafe {
                slice::from_raw_parts_mut(name, 32).copy_from_slice(&display_name.0);
            }
            1
        }
        Err(_) => 0,
    }
}

/// Write the desktop rectangle of a monitor. Returns 1 on success, 0 on
/// failure.
#[no_mangle]
pub extern "C" fn wsi_get_desktop_coordinates(monitor: isize, rect: *mut wsi_rect) -> c_int {
    if rect.is_null() {
        return 0;
    }

    match wsi::get_desktop_coordinates(Monitor::from_raw(monitor)) {
        Ok(r) => {
            unsafe {
                *rect = wsi_rect {
                    left: r.left,
                    top: r.top,
                    right: r.right,
                    bottom: r.bottom,
                };
            }
            1
        }
        Err(_) => 0,
    }
}

fn write_mode(mode: WsiMode, out: *mut wsi_display_mode) -> c_int {
    let Rational {
        numerator,
        denominator,
    } = mode.refresh_rate;

    unsafe {
        *out = wsi_display_mode {
            width: mode.width,
            height: mode.height,
            refresh_rate_numerator: numerator,
            refresh_rate_denominator: denominator,
            bits_per_pixel: mode.bits_per_pixel,
            interlaced: mode.interlaced as c_int,
        };
    }
    1
}

fn get_mode(monitor: isize, selector: ModeSelector, out: *mut wsi_display_mode) -> c_int {
    if out.is_null() {
        return 0;
    }

    match wsi::retrieve_display_mode(wsi::host(), Monitor::from_raw(monitor), selector) {
        Ok(mode) => write_mode(mode, out),
        Err(_) => 0,
    }
}

/// Retrieve the `mode_number`-th display mode of a monitor
#[no_mangle]
pub extern "C" fn wsi_get_display_mode(
    monitor: isize,
    mode_number: c_uint,
    out: *mut wsi_display_mode,
) -> c_int {
    get_mode(monitor, ModeSelector::Numbered(mode_number), out)
}

/// Retrieve the currently active display mode of a monitor
#[no_mangle]
pub extern "C" fn wsi_get_current_display_mode(
    monitor: isize,
    out: *mut wsi_display_mode,
) -> c_int {
    get_mode(monitor, ModeSelector::Current, out)
}

/// Retrieve a monitor's mode as stored in persistent desktop configuration
#[no_mangle]
pub extern "C" fn wsi_get_desktop_display_mode(
    monitor: isize,
    out: *mut wsi_display_mode,
) -> c_int {
    get_mode(monitor, ModeSelector::Registry, out)
}
