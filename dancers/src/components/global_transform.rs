use glam::{Affine3A, Quat, Vec3};

use super::LocalTransform;

/// Component used to represent the global transform of the entity.
/// This is the transformation from local to world space, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// World space position of the entity
    pub fn translation(&self) -> Vec3 {
        self.0.translation.into()
    }

    /// Convenience function to decompose the [`GlobalTransform`] into its components
    pub fn to_scale_rotation_translation(&self) -> (Vec3, Quat, Vec3) {
        self.0.to_scale_rotation_translation()
    }
}

impl From<LocalTransform> for GlobalTransform {
    fn from(l: LocalTransform) -> Self {
        GlobalTransform(l.to_affine())
    }
}
