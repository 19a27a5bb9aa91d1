//! The unit-cube primitive every piece of furniture is built from.
//!
//! One cube, 24 vertices (four per face so each face carries its own
//! normal and UVs), 36 indices. Uploaded to the GPU once; every draw in the
//! room reuses the same buffers with a different instance transform.

use wgpu::util::DeviceExt;

use super::vertex::Vertex3D;

//    v6----- v5
//   /|      /|
//  v1------v0|
//  | |     | |
//  | |v7---|-|v4
//  |/      |/
//  v2------v3
#[rustfmt::skip]
pub fn vertices() -> Vec<Vertex3D> {
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    let faces: [([f32; 3], [f32; 3], [f32; 2]); 24] = [
        // v0-v1-v2-v3 front
        ([ 0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
        ([-0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0], [0.0, 1.0]),
        ([-0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0], [0.0, 0.0]),
        ([ 0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0], [1.0, 0.0]),
        // v0-v3-v4-v5 right
        ([ 0.5,  0.5,  0.5], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
        ([ 0.5, -0.5,  0.5], [ 1.0,  0.0,  0.0], [0.0, 0.0]),
        ([ 0.5, -0.5, -0.5], [ 1.0,  0.0,  0.0], [1.0, 0.0]),
        ([ 0.5,  0.5, -0.5], [ 1.0,  0.0,  0.0], [1.0, 1.0]),
        // v0-v5-v6-v1 up
        ([ 0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
        ([ 0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0], [1.0, 1.0]),
        ([-0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
        ([-0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0], [0.0, 0.0]),
        // v1-v6-v7-v2 left
        ([-0.5,  0.5,  0.5], [-1.0,  0.0,  0.0], [1.0, 1.0]),
        ([-0.5,  0.5, -0.5], [-1.0,  0.0,  0.0], [0.0, 1.0]),
        ([-0.5, -0.5, -0.5], [-1.0,  0.0,  0.0], [0.0, 0.0]),
        ([-0.5, -0.5,  0.5], [-1.0,  0.0,  0.0], [1.0, 0.0]),
        // v7-v4-v3-v2 down
        ([-0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0], [0.0, 0.0]),
        ([ 0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
        ([ 0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0], [1.0, 1.0]),
        ([-0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0], [0.0, 1.0]),
        // v4-v7-v6-v5 back
        ([ 0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0], [0.0, 0.0]),
        ([-0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0], [1.0, 0.0]),
        ([-0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
        ([ 0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0], [0.0, 1.0]),
    ];

    faces
        .iter()
        .map(|&(position, normal, uv)| Vertex3D {
            position,
            color: WHITE,
            normal,
            uv,
        })
        .collect()
}

#[rustfmt::skip]
pub fn indices() -> Vec<u16> {
    vec![
        0, 1, 2,    0, 2, 3,    // front
        4, 5, 6,    4, 6, 7,    // right
        8, 9, 10,   8, 10, 11,  // up
        12, 13, 14, 12, 14, 15, // left
        16, 17, 18, 16, 18, 19, // down
        20, 21, 22, 20, 22, 23, // back
    ]
}

/// The cube's GPU buffers.
pub struct CubeMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl CubeMesh {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertices = vertices();
        let indices = indices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_vertex_and_index_counts() {
        assert_eq!(vertices().len(), 24); // 6 faces * 4 vertices
        assert_eq!(indices().len(), 36); // 6 faces * 2 triangles * 3 indices
    }

    #[test]
    fn every_normal_is_axis_aligned_and_unit_length() {
        for v in vertices() {
            let [x, y, z] = v.normal;
            assert_eq!(x.abs() + y.abs() + z.abs(), 1.0);
        }
    }

    #[test]
    fn indices_stay_within_the_vertex_table() {
        assert!(indices().iter().all(|&i| (i as usize) < 24));
    }
}
