use crate::{
    components::{DancerToggles, RibbonSkin},
    DanceFloor,
};
use hecs::World;

/// Ribbon skin system
/// Pushes a fresh head sample onto every ribbon strand, or hides the ribbons when the dancer's
/// ribbon toggle is off. Dancers still waiting for their skeleton are skipped.
pub fn ribbon_skin_system(dance_floor: &mut DanceFloor) {
    ribbon_skin_system_inner(&mut dance_floor.world);
}

pub(crate) fn ribbon_skin_system_inner(world: &mut World) {
    let world: &World = world;
    for (_, (toggles, ribbon_skin)) in world.query::<(&DancerToggles, &mut RibbonSkin)>().iter() {
        ribbon_skin.update(world, toggles.ribbon_enabled);
    }
}
