//! Hierarchical transform composition via a save/restore stack.
//!
//! The room is modelled as a hierarchy of cubes, each positioned relative to
//! its parent. `TransformStack` holds the composed parent transform and a
//! stack of saved copies, so a child scope can append local transforms and
//! then restore the parent exactly.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

/// Composed model transform plus a stack of saved states.
///
/// Every operation right-multiplies the current transform, so the most
/// recently applied operation is the innermost (parent x local, standard
/// scene-graph order). An unbalanced push/pop sequence is a programming
/// defect: `pop` on an empty stack asserts in debug builds and is undefined
/// in release builds.
pub struct TransformStack {
    current: Matrix4<f32>,
    saved: Vec<Matrix4<f32>>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: Matrix4::identity(),
            saved: Vec::new(),
        }
    }

    /// Saves a copy of the current composed transform.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the transform saved by the matching `push`, discarding
    /// everything composed since.
    pub fn pop(&mut self) {
        debug_assert!(!self.saved.is_empty(), "pop on empty transform stack");
        if let Some(m) = self.saved.pop() {
            self.current = m;
        }
    }

    /// Runs `f` inside a push/pop pair, restoring the transform on every
    /// exit path. All hierarchy composition in the scene builder goes
    /// through here, which makes an unbalanced stack unreachable from safe
    /// callers.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current = self.current * Matrix4::from_translation(Vector3::new(x, y, z));
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.current = self.current * Matrix4::from_angle_x(Deg(degrees));
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.current = self.current * Matrix4::from_angle_y(Deg(degrees));
    }

    pub fn rotate_z(&mut self, degrees: f32) {
        self.current = self.current * Matrix4::from_angle_z(Deg(degrees));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.current = self.current * Matrix4::from_nonuniform_scale(x, y, z);
    }

    /// The composed transform at this point in the hierarchy.
    pub fn current(&self) -> Matrix4<f32> {
        self.current
    }

    /// Number of saved transforms. Equal before and after any balanced
    /// traversal.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn assert_matrices_close(a: Matrix4<f32>, b: Matrix4<f32>) {
        for i in 0..4 {
            for j in 0..4 {
                assert!((a[i][j] - b[i][j]).abs() < 1e-5, "mismatch at [{i}][{j}]");
            }
        }
    }

    #[test]
    fn pop_restores_pushed_transform() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 2.0, 3.0);
        let before = stack.current();

        stack.push();
        stack.scale(2.0, 2.0, 2.0);
        stack.rotate_y(45.0);
        stack.pop();

        assert_matrices_close(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scoped_restores_on_exit() {
        let mut stack = TransformStack::new();
        let before = stack.current();
        stack.scoped(|s| {
            s.translate(5.0, 0.0, 0.0);
            s.scoped(|s| s.scale(3.0, 1.0, 1.0));
        });
        assert_matrices_close(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn operations_compose_parent_then_local() {
        // Translate then scale: the scale applies in the translated frame,
        // so the origin maps to the translation alone.
        let mut stack = TransformStack::new();
        stack.translate(10.0, 0.0, 0.0);
        stack.scale(2.0, 2.0, 2.0);

        let origin = stack.current() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x - 10.0).abs() < 1e-5);
        assert!(origin.y.abs() < 1e-5 && origin.z.abs() < 1e-5);

        let unit_x = stack.current() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((unit_x.x - 12.0).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "pop on empty transform stack")]
    fn pop_on_empty_stack_is_a_defect() {
        let mut stack = TransformStack::new();
        stack.pop();
    }
}
