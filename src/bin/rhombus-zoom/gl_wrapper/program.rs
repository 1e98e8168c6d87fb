use std::ffi::{c_char, CString, NulError};

use gl::types::{GLenum, GLint, GLuint};
use log::debug;
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = Shader::compile(gl::VERTEX_SHADER, self.vert)?;
        let frag = Shader::compile(gl::FRAGMENT_SHADER, self.frag)?;

        let mut success: GLint = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert.id);
            gl::AttachShader(program, frag.id);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            gl::DetachShader(program, vert.id);
            gl::DetachShader(program, frag.id);

            Ok(Program { id: program })
        }
    }
}

/// Compiled shader stage, deleted once the program is linked.
struct Shader {
    id: GLuint,
}

impl Shader {
    fn compile(kind: GLenum, src: &str) -> Result<Self, PBError> {
        let src = CString::new(src)?;
        let mut success: GLint = 0;

        unsafe {
            let shader = Self {
                id: gl::CreateShader(kind),
            };

            gl::ShaderSource(shader.id, 1, &src.as_ptr(), std::ptr::null());
            gl::CompileShader(shader.id);

            gl::GetShaderiv(shader.id, gl::COMPILE_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetShaderInfoLog(
                    shader.id,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                return Err(PBError::Compilation(info_log_to_string(&buf)));
            }

            Ok(shader)
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("shader source contains a NUL byte")]
    InvalidSource(#[from] NulError),
    #[error("shader compilation failed:\n{0}")]
    Compilation(String),
    #[error("program linking failed:\n{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Looks up a uniform. Inactive uniforms still get a handle, writes to it are ignored by GL.
    pub fn uniform(&self, name: &str) -> Uniform {
        let location = CString::new(name)
            .map(|name| unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) })
            .unwrap_or(-1);

        if location < 0 {
            debug!("uniform {name} is not active in program {}", self.id);
        }

        Uniform { location }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

/// Uniform location of a [`Program`]. Setters expect the program to be in use.
#[derive(Debug, Copy, Clone)]
pub struct Uniform {
    location: GLint,
}

impl Uniform {
    pub fn set_f32(&self, value: f32) {
        unsafe { gl::Uniform1f(self.location, value) }
    }

    pub fn set_i32(&self, value: i32) {
        unsafe { gl::Uniform1i(self.location, value) }
    }
}
