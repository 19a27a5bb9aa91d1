//! View and projection construction from the accumulated camera pose.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};

use crate::scene::CameraPose;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// The fixed gaze direction: the eye always looks down-and-into the room,
/// offset by this vector from its own position.
pub const FORWARD_OFFSET: Vector3<f32> = Vector3::new(3.0, -10.0, -17.0);

/// Vertical field of view in degrees.
const FOVY: f32 = 50.0;
const ZNEAR: f32 = 1.0;
const ZFAR: f32 = 100.0;

/// Builds the view transform once per frame: eye at the accumulated
/// offsets, target a fixed forward offset away, Y up.
pub fn view_matrix(pose: &CameraPose) -> Matrix4<f32> {
    let eye = Point3::new(pose.x_offset, pose.y_offset, pose.z_offset);
    let target = eye + FORWARD_OFFSET;
    Matrix4::look_at_rh(eye, target, Vector3::unit_y())
}

pub fn projection_matrix(aspect: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * perspective(Deg(FOVY), aspect, ZNEAR, ZFAR)
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};

    #[test]
    fn view_matrix_places_the_eye_at_the_offsets() {
        let pose = CameraPose::default();
        let view = view_matrix(&pose);
        // The eye maps to the view-space origin.
        let eye = view * Vector4::new(pose.x_offset, pose.y_offset, pose.z_offset, 1.0);
        assert!(eye.truncate().magnitude() < 1e-4);
    }

    #[test]
    fn target_lands_on_the_negative_view_z_axis() {
        let pose = CameraPose::default();
        let view = view_matrix(&pose);
        let target = Point3::new(pose.x_offset, pose.y_offset, pose.z_offset) + FORWARD_OFFSET;
        let v = view * Vector4::new(target.x, target.y, target.z, 1.0);
        assert!(v.x.abs() < 1e-3);
        assert!(v.y.abs() < 1e-3);
        assert!(v.z < 0.0);
    }
}
