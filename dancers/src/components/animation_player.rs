use glam::{Quat, Vec3};
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::{DancersError, DancersResult};

/// A bone's pose at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds from the start of the clip
    pub time: f32,
    /// Local translation of the bone
    pub translation: Vec3,
    /// Local rotation of the bone
    pub rotation: Quat,
}

/// Keyframes for a single bone, sorted by time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneTrack {
    /// Index of the bone in the skeleton definition
    pub bone: usize,
    /// The keyframes
    pub keyframes: Vec<Keyframe>,
}

impl BoneTrack {
    /// Interpolate the track at `time`, holding the first and last keyframes outside the track
    pub fn sample(&self, time: f32) -> Option<(Vec3, Quat)> {
        let next = self.keyframes.partition_point(|k| k.time <= time);
        let (from, to) = match next {
            0 => (self.keyframes.first()?, self.keyframes.first()?),
            n if n == self.keyframes.len() => (self.keyframes.last()?, self.keyframes.last()?),
            n => (&self.keyframes[n - 1], &self.keyframes[n]),
        };

        let span = to.time - from.time;
        if span <= 0. {
            return Some((to.translation, to.rotation));
        }

        let amount = (time - from.time) / span;
        Some((
            from.translation.lerp(to.translation, amount),
            from.rotation.slerp(to.rotation, amount),
        ))
    }
}

/// A motion capture take: one track per animated bone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationClip {
    /// A helpful name
    pub name: String,
    /// Per bone tracks
    pub tracks: Vec<BoneTrack>,
}

impl AnimationClip {
    /// Time of the last keyframe in any track
    pub fn duration(&self) -> f32 {
        self.tracks
            .iter()
            .filter_map(|t| t.keyframes.last())
            .map(|k| k.time)
            .fold(0., f32::max)
    }

    /// Check the keyframes are in order and every track targets a bone of a `bone_count` skeleton
    pub fn validate(&self, bone_count: usize) -> DancersResult<()> {
        for track in &self.tracks {
            if track.bone >= bone_count {
                return Err(DancersError::InvalidConfig(format!(
                    "clip {:?} animates bone {} but the skeleton only has {bone_count}",
                    self.name, track.bone
                )));
            }
            if track.keyframes.windows(2).any(|w| w[0].time > w[1].time) {
                return Err(DancersError::InvalidConfig(format!(
                    "clip {:?} has out of order keyframes for bone {}",
                    self.name, track.bone
                )));
            }
        }
        Ok(())
    }
}

/// Plays an [`AnimationClip`] on a dancer's bones. Added alongside the dancer's `Skeleton`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlayer {
    /// The clip being played
    pub clip: AnimationClip,
    /// Bone entities, indexed by [`BoneTrack::bone`]
    pub bones: Vec<Entity>,
    /// Seconds since the clip started
    pub time: f32,
    /// Start over at the end of the clip instead of holding the last pose
    pub looping: bool,
}

impl AnimationPlayer {
    /// Play `clip` once from the start
    pub fn new(clip: AnimationClip, bones: Vec<Entity>) -> Self {
        Self {
            clip,
            bones,
            time: 0.,
            looping: false,
        }
    }

    /// Move the playhead forward by `delta` seconds
    pub fn advance(&mut self, delta: f32) {
        let duration = self.clip.duration();
        self.time += delta;
        if self.looping && duration > 0. {
            self.time %= duration;
        } else {
            self.time = self.time.min(duration);
        }
    }

    /// Has a non-looping clip reached its end?
    pub fn is_finished(&self) -> bool {
        !self.looping && self.time >= self.clip.duration()
    }
}
