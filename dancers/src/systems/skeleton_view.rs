use crate::{
    components::{DancerToggles, SkeletonView},
    DanceFloor,
};
use hecs::World;

/// Skeleton view system
/// Shows or hides each dancer's skeleton debug view to match its toggle
pub fn skeleton_view_system(dance_floor: &mut DanceFloor) {
    skeleton_view_system_inner(&mut dance_floor.world);
}

pub(crate) fn skeleton_view_system_inner(world: &mut World) {
    for (_, (toggles, skeleton_view)) in world.query_mut::<(&DancerToggles, &mut SkeletonView)>() {
        skeleton_view.visible = toggles.skeleton_visible;
    }
}
