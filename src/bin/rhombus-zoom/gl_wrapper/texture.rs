use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLuint};
use thiserror::Error;

pub struct Texture2D {
    id: GLuint,
}

impl Texture2D {
    pub fn new(
        width: u32,
        height: u32,
        data: &[u8],
        format: TextureFormats,
        filter: TextureFilter,
    ) -> Result<Self, TextureError> {
        check_src_len(width, height, data.len(), format)?;

        let mut id = 0;

        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, filter.gl_filter());
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, filter.gl_filter());

            // rows of 3 byte texels are not 4 byte aligned in general
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format.internal_format(),
                width as i32,
                height as i32,
                0,
                format.pixel_format(),
                gl::UNSIGNED_BYTE,
                data.as_ptr() as *const c_void,
            );
        }

        Ok(Self { id })
    }

    pub fn bind(&self, unit: u8) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
            gl::BindTexture(gl::TEXTURE_2D, self.id)
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

fn check_src_len(
    width: u32,
    height: u32,
    len: usize,
    format: TextureFormats,
) -> Result<(), TextureError> {
    let expected = width as usize * height as usize * format.channels() as usize;

    if expected != len {
        return Err(TextureError::InvalidSrcLength { expected, got: len });
    }

    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("Invalid source data length, expected {expected} bytes, got {got}")]
    InvalidSrcLength { expected: usize, got: usize },
}

#[derive(Debug, Copy, Clone)]
pub enum TextureFormats {
    Rgb8,
}

impl TextureFormats {
    pub fn channels(&self) -> u8 {
        match self {
            TextureFormats::Rgb8 => 3,
        }
    }

    fn internal_format(&self) -> GLint {
        match self {
            TextureFormats::Rgb8 => gl::RGB8 as GLint,
        }
    }

    fn pixel_format(&self) -> GLenum {
        match self {
            TextureFormats::Rgb8 => gl::RGB,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum TextureFilter {
    Linear,
}

impl TextureFilter {
    fn gl_filter(&self) -> GLint {
        match self {
            TextureFilter::Linear => gl::LINEAR as GLint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_length() {
        assert_eq!(check_src_len(256, 256, 256 * 256 * 3, TextureFormats::Rgb8), Ok(()));
        assert_eq!(
            check_src_len(2, 2, 16, TextureFormats::Rgb8),
            Err(TextureError::InvalidSrcLength {
                expected: 12,
                got: 16
            })
        );
    }
}
