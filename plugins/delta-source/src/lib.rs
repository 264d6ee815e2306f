//! # Delta-Pulse Source Plugin
//!
//! Exports the delta-pulse test signal sources to a host radio framework
//! over the C plugin ABI.
//!
//! ## Building
//!
//! ```bash
//! cargo build --release -p dpulse-delta-plugin
//! ```
//!
//! This produces `target/release/libdpulse_delta_plugin.so` (Linux)
//! or `.dll` (Windows) or `.dylib` (macOS), which a host discovers and
//! loads through the symbols declared in `dpulse_core::plugin`.

use std::ffi::{c_char, c_void, CStr};

use dpulse_core::plugin::{
    caps::{CAN_GENERATE, SUPPORTS_CENTERING, SUPPORTS_WINDOWING},
    PluginInfo, SourceDescriptor, PLUGIN_API_VERSION,
};
use dpulse_core::{SignalSource, SourceFactory};

// ============================================================================
// Plugin Metadata
// ============================================================================

/// Plugin name as C string
static PLUGIN_NAME: &[u8] = b"delta_source\0";
/// Plugin version
static PLUGIN_VERSION: &[u8] = b"1.0.0\0";
/// Plugin description
static PLUGIN_DESCRIPTION: &[u8] = b"Delta-like test pulse sources (IFFT pulse and ideal impulse)\0";
/// Plugin author
static PLUGIN_AUTHOR: &[u8] = b"dpulse project\0";

/// Static plugin info
static PLUGIN_INFO: PluginInfo = PluginInfo {
    name: PLUGIN_NAME.as_ptr() as *const c_char,
    version: PLUGIN_VERSION.as_ptr() as *const c_char,
    description: PLUGIN_DESCRIPTION.as_ptr() as *const c_char,
    author: PLUGIN_AUTHOR.as_ptr() as *const c_char,
    source_count: 2,
};

// ============================================================================
// Source Descriptors
// ============================================================================

/// Delta pulse source ID
static DELTA_ID: &[u8] = b"delta-pulse\0";
/// Delta pulse source name
static DELTA_NAME: &[u8] = b"IFFT Delta-Like Pulse\0";
/// Delta pulse source description
static DELTA_DESCRIPTION: &[u8] = b"Impulse from a flat spectrum with Hann taper and centering\0";

/// Impulse source ID
static IMPULSE_ID: &[u8] = b"impulse\0";
/// Impulse source name
static IMPULSE_NAME: &[u8] = b"Ideal Time-Domain Impulse\0";
/// Impulse source description
static IMPULSE_DESCRIPTION: &[u8] = b"Single spike at index 0, exactly zero elsewhere\0";

/// Static source descriptors
static SOURCE_DESCRIPTORS: [SourceDescriptor; 2] = [
    SourceDescriptor {
        id: DELTA_ID.as_ptr() as *const c_char,
        name: DELTA_NAME.as_ptr() as *const c_char,
        description: DELTA_DESCRIPTION.as_ptr() as *const c_char,
        max_samples: 1 << 30,
        capabilities: CAN_GENERATE | SUPPORTS_WINDOWING | SUPPORTS_CENTERING,
    },
    SourceDescriptor {
        id: IMPULSE_ID.as_ptr() as *const c_char,
        name: IMPULSE_NAME.as_ptr() as *const c_char,
        description: IMPULSE_DESCRIPTION.as_ptr() as *const c_char,
        max_samples: 1 << 30,
        capabilities: CAN_GENERATE,
    },
];

// ============================================================================
// Plugin ABI Functions
// ============================================================================

/// Return the plugin API version for compatibility checking.
#[no_mangle]
pub extern "C" fn dpulse_plugin_api_version() -> u32 {
    PLUGIN_API_VERSION
}

/// Return plugin metadata.
#[no_mangle]
pub extern "C" fn dpulse_plugin_info() -> *const PluginInfo {
    &PLUGIN_INFO
}

/// List available sources in this plugin.
#[no_mangle]
pub extern "C" fn dpulse_list_sources(count: *mut u32) -> *const SourceDescriptor {
    if !count.is_null() {
        unsafe { *count = SOURCE_DESCRIPTORS.len() as u32 };
    }
    SOURCE_DESCRIPTORS.as_ptr()
}

/// Create a source instance.
///
/// Returns null for an unknown ID or an invalid ID string.
///
/// # Safety
///
/// The returned handle must be passed to `dpulse_destroy_source` when no
/// longer needed.
#[no_mangle]
pub extern "C" fn dpulse_create_source(id: *const c_char, num_samples: u64) -> *mut c_void {
    if id.is_null() {
        return std::ptr::null_mut();
    }

    let id_cstr = unsafe { CStr::from_ptr(id) };
    let id_str = match id_cstr.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match SourceFactory::create(id_str, num_samples as usize) {
        Some(source) => Box::into_raw(Box::new(source)) as *mut c_void,
        None => std::ptr::null_mut(),
    }
}

/// Destroy a source instance.
///
/// # Safety
///
/// The handle must have been created by `dpulse_create_source` and not
/// already destroyed.
#[no_mangle]
pub extern "C" fn dpulse_destroy_source(handle: *mut c_void) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle as *mut Box<dyn SignalSource>);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
