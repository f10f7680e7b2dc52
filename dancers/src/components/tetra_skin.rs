use glam::{Quat, Vec3};
use hecs::{Entity, World};

use super::{GlobalTransform, Lifecycle, Skeleton};
use crate::DancersResult;

/// A tetrahedron pinned to a bone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// The bone this marker follows
    pub bone: Entity,
    /// World space position, copied from the bone every frame
    pub translation: Vec3,
    /// World space orientation, copied from the bone every frame
    pub rotation: Quat,
}

impl Marker {
    fn new(bone: Entity) -> Self {
        Self {
            bone,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// The "tetra" skin: one [`Marker`] per bone, moved to its bone's world transform every frame.
///
/// Added to a dancer when it is spawned. It stays empty until the dancer's pose graph is ready,
/// and the `tetra_skin_system` leaves it alone until then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TetraSkin {
    markers: Lifecycle<Vec<Marker>>,
    /// Whether the renderer should draw the group this frame
    pub visible: bool,
}

impl TetraSkin {
    /// Name of the object the renderer draws this skin as
    pub const GROUP_NAME: &'static str = "tetra";

    /// Create one marker for every bone below (and including) `root`
    pub fn on_pose_graph_ready(&mut self, world: &World, root: Entity) -> DancersResult<()> {
        self.markers.initialize_with(|| {
            let bones = Skeleton::traverse(world, root)?;
            Ok(bones.into_iter().map(Marker::new).collect())
        })
    }

    /// Has the pose graph arrived?
    pub fn is_initialized(&self) -> bool {
        self.markers.is_initialized()
    }

    /// All markers, in traversal order. Empty until initialized.
    pub fn markers(&self) -> &[Marker] {
        self.markers.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Per frame update. When `enabled`, snap every marker to its bone and show the group;
    /// otherwise hide the group and leave the markers where they are.
    pub fn update(&mut self, world: &World, enabled: bool) {
        let Some(markers) = self.markers.get_mut() else {
            return;
        };

        self.visible = enabled;
        if !enabled {
            return;
        }

        for marker in markers.iter_mut() {
            // Skip bones that have been despawned
            let Ok(global_transform) = world.get::<&GlobalTransform>(marker.bone) else {
                continue;
            };
            let (_, rotation, translation) = global_transform.to_scale_rotation_translation();
            marker.translation = translation;
            marker.rotation = rotation;
        }
    }
}
