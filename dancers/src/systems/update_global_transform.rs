use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    DanceFloor,
};
use hecs::World;

/// Update global transform system
/// Walks through each entity without a parent (the stage) and copies its LocalTransform into its
/// GlobalTransform. Children are handled by `update_global_transform_with_parent_system`.
pub fn update_global_transform_system(dance_floor: &mut DanceFloor) {
    update_global_transform_system_inner(&mut dance_floor.world);
}

pub(crate) fn update_global_transform_system_inner(world: &mut World) {
    for (_, (local_transform, global_transform)) in world
        .query_mut::<(&LocalTransform, &mut GlobalTransform)>()
        .without::<&Parent>()
    {
        *global_transform = (*local_transform).into();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Affine3A, Quat, Vec3};

    use super::*;

    #[test]
    pub fn test_update_global_transform_system() {
        let mut world = World::new();
        let entity = world.spawn((LocalTransform::default(), GlobalTransform::default()));

        let test_translation = Vec3::new(5.0, 1.0, 2.0);
        let test_rotation = Quat::from_euler(glam::EulerRot::XYZ, 0.3, 0.3, 0.3);
        {
            let mut local_transform = world.get::<&mut LocalTransform>(entity).unwrap();
            local_transform.translation = test_translation;
            local_transform.rotation = test_rotation;
            local_transform.scale = Vec3::splat(0.5);
        }

        update_global_transform_system_inner(&mut world);

        let expected_matrix = Affine3A::from_scale_rotation_translation(
            Vec3::splat(0.5),
            test_rotation,
            test_translation,
        );
        let global_transform = world.get::<&GlobalTransform>(entity).unwrap();
        assert_relative_eq!(global_transform.0, expected_matrix);
    }

    #[test]
    pub fn test_children_are_left_alone() {
        let mut world = World::new();
        let parent = world.spawn((LocalTransform::default(), GlobalTransform::default()));
        let child = world.spawn((
            LocalTransform::from_translation(Vec3::X),
            GlobalTransform::default(),
            Parent(parent),
        ));

        update_global_transform_system_inner(&mut world);

        let global_transform = world.get::<&GlobalTransform>(child).unwrap();
        assert_eq!(global_transform.0, Affine3A::IDENTITY);
    }
}
