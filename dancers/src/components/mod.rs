#![allow(missing_docs)]
pub mod animation_player;
pub mod bone;
pub mod dancer;
pub mod global_transform;
pub mod info;
pub mod lifecycle;
pub mod local_transform;
pub mod parent;
pub mod ribbon_skin;
pub mod skeleton;
pub mod skeleton_view;
pub mod stage;
pub mod tetra_skin;

pub use animation_player::{AnimationClip, AnimationPlayer, BoneTrack, Keyframe};
pub use bone::Bone;
pub use dancer::DancerToggles;
pub use global_transform::GlobalTransform;
pub use info::Info;
pub use lifecycle::Lifecycle;
pub use local_transform::LocalTransform;
pub use parent::Parent;
pub use ribbon_skin::{RibbonConfig, RibbonSkin, RibbonStrand};
pub use skeleton::Skeleton;
pub use skeleton_view::SkeletonView;
pub use stage::Stage;
pub use tetra_skin::{Marker, TetraSkin};
