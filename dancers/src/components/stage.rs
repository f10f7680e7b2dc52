/// Marker component for the dance floor every dancer stands on.
/// Its [`super::LocalTransform`] scale is driven by the scale slider.
#[derive(Debug)]
pub struct Stage;
