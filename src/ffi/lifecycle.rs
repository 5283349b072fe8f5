//! Loader attach/detach notifications.
//!
//! The library holds no state, so every notification is acknowledged without
//! doing any work. Only Windows calls an entry point; elsewhere the loader
//! needs nothing from us.

/// A notification code delivered by the platform loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderEvent {
    ProcessDetach,
    ProcessAttach,
    ThreadAttach,
    ThreadDetach,
    Unknown(u32),
}

impl From<u32> for LoaderEvent {
    fn from(reason: u32) -> Self {
        match reason {
            0 => LoaderEvent::ProcessDetach,
            1 => LoaderEvent::ProcessAttach,
            2 => LoaderEvent::ThreadAttach,
            3 => LoaderEvent::ThreadDetach,
            other => LoaderEvent::Unknown(other),
        }
    }
}

/// Handles a loader notification.
///
/// No notification needs any work, so every code, known or not, is
/// acknowledged.
pub fn on_loader_event(reason: u32) -> bool {
    let _ = LoaderEvent::from(reason);
    true
}

/// Windows DLL entry point.
///
/// # Returns
/// `TRUE` (1) for every notification.
#[cfg(windows)]
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn DllMain(
    _module: *mut core::ffi::c_void,
    reason: u32,
    _reserved: *mut core::ffi::c_void,
) -> i32 {
    on_loader_event(reason) as i32
}
