/// The skeleton debug view of a dancer: lines drawn between each bone and its parent.
/// Added once the dancer's skeleton has loaded; `skeleton_view_system` keeps `visible` in sync
/// with [`super::DancerToggles::skeleton_visible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkeletonView {
    /// Whether the renderer should draw the view this frame
    pub visible: bool,
}
