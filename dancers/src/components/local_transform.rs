use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The entity's position relative to its [`super::Parent`].
///
/// Bones have theirs written every frame by the `animation_system`. The dance floor's scale is set
/// by the `settings_system` when the scale slider moves.
///
/// If the entity doesn't have a [`super::Parent`], then the global transform is just whatever you've set here.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// A transform that only moves the entity
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Convenience function to convert the [`LocalTransform`] into an [`Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}
