use crate::{
    components::{AnimationPlayer, LocalTransform},
    DanceFloor,
};
use hecs::World;

/// Animation system
/// Advances every dancer's AnimationPlayer and writes the sampled pose into its bones' LocalTransforms
pub fn animation_system(dance_floor: &mut DanceFloor, delta_time: f32) {
    animation_system_inner(&mut dance_floor.world, delta_time);
}

pub(crate) fn animation_system_inner(world: &mut World, delta_time: f32) {
    for (_, player) in world.query::<&mut AnimationPlayer>().iter() {
        player.advance(delta_time);

        for track in &player.clip.tracks {
            let Some(&bone) = player.bones.get(track.bone) else {
                continue;
            };
            let Some((translation, rotation)) = track.sample(player.time) else {
                continue;
            };
            if let Ok(mut local_transform) = world.get::<&mut LocalTransform>(bone) {
                local_transform.translation = translation;
                local_transform.rotation = rotation;
            }
        }
    }
}
