//! The room's light rig: one ambient term and three attenuated point
//! lights, with two toggles selecting the uniform values the shader sees.

use crate::scene::ToggleState;

/// Quadratic attenuation coefficient. Mirrored in the fragment shader.
pub const ATTENUATION_K: f32 = 0.035;

/// Point-light positions in room space: living area, office corner, dining
/// table.
pub const LIGHT_POSITIONS: [[f32; 3]; 3] = [
    [-1.0, 1.5, 0.0],
    [-4.0, 4.5, 5.0],
    [4.0, 4.5, -5.0],
];

const AMBIENT_FULL: [f32; 3] = [1.0, 1.0, 1.0];
const AMBIENT_DIM: [f32; 3] = [0.4, 0.4, 0.4];

/// Warm gray shared by all three point lights when they are switched on.
const POINT_ON: [f32; 3] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0];
const POINT_OFF: [f32; 3] = [0.0, 0.0, 0.0];

/// Falloff factor for a point light at the given distance. The shader
/// computes the same expression per fragment; this copy exists for the CPU
/// side of the contract and its tests.
pub fn attenuation(distance: f32) -> f32 {
    1.0 / (1.0 + ATTENUATION_K * distance * distance)
}

/// Ambient color selected by the dim toggle.
pub fn ambient_color(toggles: &ToggleState) -> [f32; 3] {
    if toggles.ambient_dim {
        AMBIENT_DIM
    } else {
        AMBIENT_FULL
    }
}

/// Per-light color: black while the directional toggle is off, warm gray
/// while on. Independent of the ambient toggle.
pub fn point_light_color(toggles: &ToggleState) -> [f32; 3] {
    if toggles.directional_on {
        POINT_ON
    } else {
        POINT_OFF
    }
}

/// GPU-side light block. 16-byte aligned vec4 slots, like the light
/// uniforms elsewhere in the pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 4],
    pub positions: [[f32; 4]; 3],
    pub colors: [[f32; 4]; 3],
}

impl LightsUniform {
    pub fn from_toggles(toggles: &ToggleState) -> Self {
        let [ar, ag, ab] = ambient_color(toggles);
        let [lr, lg, lb] = point_light_color(toggles);
        Self {
            ambient: [ar, ag, ab, 1.0],
            positions: LIGHT_POSITIONS.map(|[x, y, z]| [x, y, z, 1.0]),
            colors: [[lr, lg, lb, 1.0]; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attenuation_is_one_at_zero_distance() {
        assert_eq!(attenuation(0.0), 1.0);
    }

    #[test]
    fn attenuation_strictly_decreases_with_distance() {
        let mut previous = attenuation(0.0);
        for i in 1..200 {
            let next = attenuation(i as f32 * 0.25);
            assert!(next < previous, "attenuation not decreasing at step {}", i);
            previous = next;
        }
    }

    #[test]
    fn ambient_toggle_selects_dim_and_restores_full() {
        let mut toggles = ToggleState::default();
        assert_eq!(ambient_color(&toggles), [1.0, 1.0, 1.0]);

        toggles.ambient_dim = true;
        assert_eq!(ambient_color(&toggles), [0.4, 0.4, 0.4]);

        toggles.ambient_dim = false;
        assert_eq!(ambient_color(&toggles), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn point_lights_are_black_until_switched_on() {
        let mut toggles = ToggleState::default();
        assert_eq!(point_light_color(&toggles), [0.0, 0.0, 0.0]);

        toggles.directional_on = true;
        let on = point_light_color(&toggles);
        assert!(on.iter().all(|&c| c > 0.0));

        // Independent of the ambient toggle.
        toggles.ambient_dim = true;
        assert_eq!(point_light_color(&toggles), on);
    }

    #[test]
    fn uniform_packs_three_lights() {
        let uniform = LightsUniform::from_toggles(&ToggleState::default());
        assert_eq!(uniform.positions.len(), 3);
        assert_eq!(uniform.positions[0][..3], [-1.0, 1.5, 0.0]);
    }
}
