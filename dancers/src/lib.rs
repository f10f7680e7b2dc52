#![deny(missing_docs)]

//! Secondary motion for a VR dance floor. 💃
//!
//! Dancers are skeletons played back from motion capture. This crate dresses them up with two
//! "skins" that follow the bones frame after frame:
//!
//! - the **tetra skin** pins a tetrahedron marker to every bone, following its world position and
//!   orientation;
//! - the **ribbon skin** trails a handful of ribbons behind every bone, each one a fixed length
//!   history of positions that fades out towards its tail.
//!
//! # Getting started
//! Build a [`DanceFloor`] from a [`config::DanceFloorConfig`], give [`DanceFloor::loader`] to
//! whatever loads your skeletons, and call [`DanceFloor::tick`] once per frame. Until a dancer's
//! skeleton arrives its skins simply do nothing. Settings panel input goes through
//! [`DanceFloor::send_settings_event`].
//!
//! Rendering is up to you: read the [`components::TetraSkin`] and [`components::RibbonSkin`]
//! components off each dancer after the tick.

pub use dance_floor::DanceFloor;
pub use dancers_error::DancersError;
pub use glam;
pub use hecs;

/// Components are data attached to dancers and their bones
pub mod components;
/// Configuration for the dance floor and its dancers
pub mod config;
/// Contexts are wrappers around state shared with the world outside the frame loop
pub mod contexts;
mod dance_floor;
mod dancers_error;
/// Skeleton definitions, as handed over by a skeleton loader
pub mod skeleton_definition;
/// Systems are functions called each frame to update the dancers
pub mod systems;
/// Fixed length position history used by the ribbons
pub mod trail;

/// Dancers result type
pub type DancersResult<T> = std::result::Result<T, DancersError>;
