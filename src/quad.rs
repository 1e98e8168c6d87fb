use cgmath::Vector2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vector2<f32>,
    pub tex_coord: Vector2<f32>,
}

impl Vertex {
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            tex_coord: Vector2 { x: u, y: v },
        }
    }
}

/// Full screen quad in triangle strip order.
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(-1.0, -1.0, 0.0, 0.0),
    Vertex::new(1.0, -1.0, 1.0, 0.0),
    Vertex::new(-1.0, 1.0, 0.0, 1.0),
    Vertex::new(1.0, 1.0, 1.0, 1.0),
];

/// [`QUAD_VERTICES`] interleaved as `x, y, u, v` for upload into a vertex buffer.
#[rustfmt::skip]
pub const QUAD: [f32; 16] = [
    -1.0, -1.0, 0.0, 0.0,
    1.0, -1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0, 1.0,
    1.0, 1.0, 1.0, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_matches_vertices() {
        for (vertex, chunk) in QUAD_VERTICES.iter().zip(QUAD.chunks_exact(4)) {
            assert_eq!(
                [vertex.position.x, vertex.position.y, vertex.tex_coord.x, vertex.tex_coord.y],
                chunk
            );
        }
    }

    #[test]
    fn tex_coords_follow_positions() {
        for vertex in QUAD_VERTICES {
            assert_eq!(vertex.tex_coord, (vertex.position + Vector2::new(1.0, 1.0)) / 2.0);
        }
    }
}
