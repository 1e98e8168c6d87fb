pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;

use std::ffi::CStr;

use gl::types::GLenum;

/// Reads a `glGetString` value, e.g. `gl::VERSION`.
pub fn gl_string(name: GLenum) -> Option<String> {
    unsafe {
        let ptr = gl::GetString(name);

        if ptr.is_null() {
            return None;
        }

        Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
    }
}
