#![allow(missing_docs)]
pub mod animation;
pub mod pose_graph;
pub mod ribbon_skin;
pub mod settings;
pub mod skeleton_view;
pub mod tetra_skin;
pub mod update_global_transform;
pub mod update_global_transform_with_parent;

pub use animation::animation_system;
pub use pose_graph::{on_pose_graph_ready, pose_graph_system};
pub use ribbon_skin::ribbon_skin_system;
pub use settings::settings_system;
pub use skeleton_view::skeleton_view_system;
pub use tetra_skin::tetra_skin_system;
pub use update_global_transform::update_global_transform_system;
pub use update_global_transform_with_parent::update_global_transform_with_parent_system;
