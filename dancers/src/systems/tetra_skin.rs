use crate::{
    components::{DancerToggles, TetraSkin},
    DanceFloor,
};
use hecs::World;

/// Tetra skin system
/// Snaps every marker to its bone's world transform, or hides the markers when the dancer's
/// marker toggle is off. Dancers still waiting for their skeleton are skipped.
pub fn tetra_skin_system(dance_floor: &mut DanceFloor) {
    tetra_skin_system_inner(&mut dance_floor.world);
}

pub(crate) fn tetra_skin_system_inner(world: &mut World) {
    let world: &World = world;
    for (_, (toggles, tetra_skin)) in world.query::<(&DancerToggles, &mut TetraSkin)>().iter() {
        tetra_skin.update(world, toggles.marker_enabled);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};
    use hecs::Entity;

    use super::*;
    use crate::{
        components::{GlobalTransform, LocalTransform, Skeleton},
        skeleton_definition::SkeletonDefinition,
        systems::{
            pose_graph::on_pose_graph_ready,
            update_global_transform::update_global_transform_system_inner,
            update_global_transform_with_parent::update_global_transform_with_parent_system_inner,
        },
    };

    fn setup() -> (World, Entity, Skeleton) {
        let mut world = World::new();
        let dancer = world.spawn((
            DancerToggles::default(),
            TetraSkin::default(),
            LocalTransform::from_translation(Vec3::new(0., 0., -2.)),
            GlobalTransform::default(),
        ));

        let mut definition = SkeletonDefinition::default();
        let hips = definition.add_bone("Hips", None, Vec3::new(0., 1., 0.));
        let spine = definition.add_bone("Spine", Some(hips), Vec3::new(0., 0.2, 0.));
        definition.add_bone("Head", Some(spine), Vec3::new(0., 0.5, 0.));
        let skeleton = definition.spawn(&mut world, dancer).unwrap();

        on_pose_graph_ready(&world, dancer, skeleton.root, &mut rand::thread_rng()).unwrap();
        (world, dancer, skeleton)
    }

    fn tick(world: &mut World) {
        update_global_transform_system_inner(world);
        update_global_transform_with_parent_system_inner(world);
        tetra_skin_system_inner(world);
    }

    #[test]
    pub fn test_one_marker_per_bone() {
        let (mut world, dancer, skeleton) = setup();

        for frame in 0..3 {
            // Move the spine around between frames
            {
                let mut spine = world
                    .get::<&mut LocalTransform>(skeleton.bones[1])
                    .unwrap();
                spine.rotation = Quat::from_rotation_x(frame as f32 * 0.3);
            }

            tick(&mut world);

            let tetra_skin = world.get::<&TetraSkin>(dancer).unwrap();
            assert!(tetra_skin.visible);
            assert_eq!(tetra_skin.markers().len(), 3);
            for (marker, bone) in tetra_skin.markers().iter().zip(&skeleton.bones) {
                assert_eq!(marker.bone, *bone);
                let global_transform = world.get::<&GlobalTransform>(*bone).unwrap();
                let (_, rotation, translation) = global_transform.to_scale_rotation_translation();
                assert_relative_eq!(marker.translation, translation);
                assert_relative_eq!(marker.rotation, rotation);
            }
        }

        let tetra_skin = world.get::<&TetraSkin>(dancer).unwrap();
        assert_relative_eq!(
            tetra_skin.markers()[0].translation,
            Vec3::new(0., 1., -2.)
        );
    }

    #[test]
    pub fn test_disabling_only_hides() {
        let (mut world, dancer, skeleton) = setup();
        tick(&mut world);
        let before = world.get::<&TetraSkin>(dancer).unwrap().markers().to_vec();

        world
            .get::<&mut DancerToggles>(dancer)
            .unwrap()
            .marker_enabled = false;
        world
            .get::<&mut LocalTransform>(skeleton.root)
            .unwrap()
            .translation = Vec3::new(5., 5., 5.);

        for _ in 0..3 {
            tick(&mut world);
            let tetra_skin = world.get::<&TetraSkin>(dancer).unwrap();
            assert!(!tetra_skin.visible);
            assert_eq!(tetra_skin.markers(), before.as_slice());
        }

        // And back on again
        world
            .get::<&mut DancerToggles>(dancer)
            .unwrap()
            .marker_enabled = true;
        tick(&mut world);
        let tetra_skin = world.get::<&TetraSkin>(dancer).unwrap();
        assert!(tetra_skin.visible);
        assert_relative_eq!(tetra_skin.markers()[0].translation, Vec3::new(5., 5., 3.));
    }

    #[test]
    pub fn test_uninitialized_skin_is_inert() {
        let mut world = World::new();
        let dancer = world.spawn((DancerToggles::default(), TetraSkin::default()));

        for _ in 0..5 {
            tick(&mut world);
        }

        let tetra_skin = world.get::<&TetraSkin>(dancer).unwrap();
        assert!(!tetra_skin.is_initialized());
        assert!(!tetra_skin.visible);
        assert!(tetra_skin.markers().is_empty());
    }

    #[test]
    pub fn test_second_pose_graph_is_rejected() {
        let (world, dancer, skeleton) = setup();
        let result = world
            .get::<&mut TetraSkin>(dancer)
            .unwrap()
            .on_pose_graph_ready(&world, skeleton.root);
        assert!(matches!(
            result,
            Err(crate::DancersError::AlreadyInitialized)
        ));
        assert_eq!(world.get::<&TetraSkin>(dancer).unwrap().markers().len(), 3);
    }
}
