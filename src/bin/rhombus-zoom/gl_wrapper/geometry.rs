use std::ffi::c_void;

use gl::types::{GLenum, GLuint};
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    primitive: Primitive,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            primitive: Primitive::Triangles,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let stride = vertex_stride(&self.attributes, self.data.len())?;

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(self.data) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            let mut offset = 0;

            for (i, attr) in self.attributes.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (stride * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                offset += attr.size();
                gl::EnableVertexAttribArray(i as u32);
            }

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        let vertices = self.data.len() / stride;

        Ok(Geometry {
            vao,
            vbo,
            vertices,
            primitive: self.primitive,
        })
    }
}

/// Floats per vertex for `attributes`, checked against the length of the vertex data.
fn vertex_stride(attributes: &[VertexAttribute], data_len: usize) -> Result<usize, GBError> {
    let stride: usize = attributes.iter().map(|a| a.size()).sum();

    if stride == 0 {
        return Err(GBError::NoAttributes);
    }

    if data_len % stride != 0 {
        return Err(GBError::InvalidDataLength);
    }

    Ok(stride)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry needs at least one vertex attribute")]
    NoAttributes,
}

#[derive(Debug, Copy, Clone)]
pub enum VertexAttribute {
    Vec2,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    TriangleStrip,
}

impl Primitive {
    pub fn gl_mode(&self) -> GLenum {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

pub struct Geometry {
    vao: GLuint,
    vbo: GLuint,
    vertices: usize,
    primitive: Primitive,
}

impl Geometry {
    pub fn vao(&self) -> GLuint {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhombus_zoom::quad::QUAD;

    #[test]
    fn quad_stride() {
        let attrs = [VertexAttribute::Vec2, VertexAttribute::Vec2];

        assert_eq!(vertex_stride(&attrs, QUAD.len()), Ok(4));
        assert_eq!(QUAD.len() / 4, 4);
    }

    #[test]
    fn stride_errors() {
        assert_eq!(vertex_stride(&[], 8), Err(GBError::NoAttributes));
        assert_eq!(
            vertex_stride(&[VertexAttribute::Vec2, VertexAttribute::Vec2], 6),
            Err(GBError::InvalidDataLength)
        );
    }
}
