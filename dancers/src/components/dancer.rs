/// Per-dancer switches, flipped by the settings panel and read every frame by the skins.
///
/// Only `settings_system` writes these. Every dancer on the floor receives the same events, but
/// each keeps its own flags so dancers can start with different defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DancerToggles {
    /// Draw the ribbon trails
    pub ribbon_enabled: bool,
    /// Draw the tetrahedron markers
    pub marker_enabled: bool,
    /// Draw the skeleton debug view
    pub skeleton_visible: bool,
}

impl DancerToggles {
    /// Both skins on, skeleton debug view as configured
    pub fn new(skeleton_visible: bool) -> Self {
        Self {
            ribbon_enabled: true,
            marker_enabled: true,
            skeleton_visible,
        }
    }
}

impl Default for DancerToggles {
    fn default() -> Self {
        Self::new(false)
    }
}
