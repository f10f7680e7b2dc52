use glam::Vec3;
use hecs::World;
use log::{debug, warn};

use crate::{
    components::{DancerToggles, LocalTransform, Stage},
    contexts::{SettingsContext, SettingsEvent},
    DanceFloor,
};

/// Settings system
/// Applies every queued settings event to every dancer on the floor
pub fn settings_system(dance_floor: &mut DanceFloor) {
    settings_system_inner(&mut dance_floor.world, &mut dance_floor.settings_context);
}

pub(crate) fn settings_system_inner(world: &mut World, settings_context: &mut SettingsContext) {
    let scale_slider = settings_context.scale_slider;
    for event in settings_context.drain() {
        debug!("[DANCERS_SETTINGS] Received {event:?}");
        match event {
            SettingsEvent::SetScale(value) => {
                if !value.is_finite() {
                    warn!("[DANCERS_SETTINGS] Ignoring scale {value}");
                    continue;
                }
                let scale = Vec3::splat(scale_slider.quantize(value));
                for (_, local_transform) in world.query_mut::<&mut LocalTransform>().with::<&Stage>() {
                    local_transform.scale = scale;
                }
            }
            SettingsEvent::ToggleRibbons => {
                for (_, toggles) in world.query_mut::<&mut DancerToggles>() {
                    toggles.ribbon_enabled = !toggles.ribbon_enabled;
                }
            }
            SettingsEvent::ToggleMarkers => {
                for (_, toggles) in world.query_mut::<&mut DancerToggles>() {
                    toggles.marker_enabled = !toggles.marker_enabled;
                }
            }
            SettingsEvent::ToggleSkeleton => {
                for (_, toggles) in world.query_mut::<&mut DancerToggles>() {
                    toggles.skeleton_visible = !toggles.skeleton_visible;
                }
            }
        }
    }
}
