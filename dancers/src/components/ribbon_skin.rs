use glam::Vec3;
use hecs::{Entity, World};
use palette::{FromColor, Hsl, Srgb};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Bone, GlobalTransform, Lifecycle, Skeleton};
use crate::{trail::Trail, DancersError, DancersResult};

/// How a dancer's ribbons look. Fixed once the [`RibbonSkin`] is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonConfig {
    /// Number of samples in every strand
    pub max_length: usize,
    /// Hex color of the newest sample; older samples fade to black
    pub color: String,
    /// Strands created for every bone that has children
    pub iterations: usize,
    /// Width of the box each strand's random offset is drawn from
    pub random_scale: f32,
    /// Width of the jitter added to each strand's lerp factor
    pub random_lerp: f32,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            max_length: 20,
            color: "#ffffff".into(),
            iterations: 6,
            random_scale: 2.0,
            random_lerp: 0.4,
        }
    }
}

impl RibbonConfig {
    /// Check every value is in range and the color parses
    pub fn validate(&self) -> DancersResult<()> {
        if self.max_length == 0 {
            return Err(DancersError::InvalidConfig(
                "ribbon max_length must be at least 1".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(DancersError::InvalidConfig(
                "ribbon iterations must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("random_scale", self.random_scale),
            ("random_lerp", self.random_lerp),
        ] {
            if !value.is_finite() || value < 0. {
                return Err(DancersError::InvalidConfig(format!(
                    "ribbon {name} must be a non-negative number, got {value}"
                )));
            }
        }
        self.base_color().map(|_| ())
    }

    /// The configured color, parsed
    pub fn base_color(&self) -> DancersResult<Srgb> {
        let color: Srgb<u8> = self
            .color
            .parse()
            .map_err(|_| DancersError::InvalidColor(self.color.clone()))?;
        Ok(color.into_format())
    }

    /// One color per sample. Hue and saturation come from the base color; lightness falls
    /// linearly from 1.0 at the newest sample to `1 / max_length` at the oldest.
    pub fn gradient(&self) -> DancersResult<Vec<Srgb>> {
        let base: Hsl = Hsl::from_color(self.base_color()?);
        let max_length = self.max_length as f32;
        Ok((0..self.max_length)
            .map(|i| {
                let lightness = 1.0 - i as f32 / max_length;
                Srgb::from_color(Hsl::new(base.hue, base.saturation, lightness))
            })
            .collect())
    }
}

/// One ribbon: a trail of positions following a bone, optionally pulled towards its first child
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonStrand {
    /// The bone this strand follows
    pub bone: Entity,
    /// The bone's first child, if it has one
    pub child: Option<Entity>,
    /// Constant offset from the bone, drawn when the strand was created
    pub offset: Vec3,
    /// Constant lerp factor towards `child`, drawn when the strand was created. 0 for leaf bones.
    pub lerp: f32,
    /// Per sample colors, newest first
    pub colors: Vec<Srgb>,
    /// Set whenever the trail moves; the renderer clears it after uploading the vertices
    pub needs_update: bool,
    trail: Trail,
}

impl RibbonStrand {
    /// Sample positions, newest first
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Where the next head sample goes, given the current bone and child positions
    pub fn next_head(&self, bone_position: Vec3, child_position: Option<Vec3>) -> Vec3 {
        let head = bone_position + self.offset;
        match child_position {
            Some(child_position) => head.lerp(child_position, self.lerp),
            None => head,
        }
    }

    fn advance(&mut self, head: Vec3) {
        self.trail.push(head);
        self.needs_update = true;
    }
}

/// The "ribbon" skin: a handful of strands per bone trailing behind the dance.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonSkin {
    config: RibbonConfig,
    gradient: Vec<Srgb>,
    strands: Lifecycle<Vec<RibbonStrand>>,
    /// Whether the renderer should draw the group this frame
    pub visible: bool,
}

impl RibbonSkin {
    /// Name of the object the renderer draws this skin as
    pub const GROUP_NAME: &'static str = "ribbon";

    /// Create an empty skin. Fails if `config` doesn't validate.
    pub fn new(config: RibbonConfig) -> DancersResult<Self> {
        config.validate()?;
        let gradient = config.gradient()?;
        Ok(Self {
            config,
            gradient,
            strands: Lifecycle::Uninitialized,
            visible: false,
        })
    }

    /// The configuration this skin was created with
    pub fn config(&self) -> &RibbonConfig {
        &self.config
    }

    /// Has the pose graph arrived?
    pub fn is_initialized(&self) -> bool {
        self.strands.is_initialized()
    }

    /// All strands, grouped by bone in traversal order. Empty until initialized.
    pub fn strands(&self) -> &[RibbonStrand] {
        self.strands.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Create the strands for every bone below (and including) `root`.
    ///
    /// Bones with children get `iterations` strands, with later strands pulled harder towards the
    /// first child. A leaf bone gets exactly one strand with no pull.
    pub fn on_pose_graph_ready(
        &mut self,
        world: &World,
        root: Entity,
        rng: &mut impl Rng,
    ) -> DancersResult<()> {
        let config = &self.config;
        let gradient = &self.gradient;
        self.strands.initialize_with(|| {
            let mut strands = Vec::new();
            for bone_entity in Skeleton::traverse(world, root)? {
                let bone = world
                    .get::<&Bone>(bone_entity)
                    .map_err(|_| DancersError::NoSuchEntity(bone_entity))?;

                for r in 0..config.iterations {
                    let offset = random_offset(config.random_scale, rng);
                    let (child, lerp) = match bone.first_child() {
                        Some(child) => {
                            let lerp = r as f32 / config.iterations as f32
                                - config.random_lerp / 2.
                                + rng.gen::<f32>() * config.random_lerp;
                            (Some(child), lerp)
                        }
                        None => (None, 0.),
                    };

                    strands.push(RibbonStrand {
                        bone: bone_entity,
                        child,
                        offset,
                        lerp,
                        colors: gradient.clone(),
                        needs_update: false,
                        trail: Trail::new(config.max_length),
                    });

                    if bone.is_leaf() {
                        break;
                    }
                }
            }
            Ok(strands)
        })
    }

    /// Per frame update. When `enabled`, show the group and push a new head sample onto every
    /// strand; otherwise hide the group and leave the strands alone.
    pub fn update(&mut self, world: &World, enabled: bool) {
        let Some(strands) = self.strands.get_mut() else {
            return;
        };

        self.visible = enabled;
        if !enabled {
            return;
        }

        for strand in strands.iter_mut() {
            let Some(bone_position) = world_position(world, strand.bone) else {
                continue;
            };
            let child_position = strand.child.and_then(|child| world_position(world, child));
            let head = strand.next_head(bone_position, child_position);
            strand.advance(head);
        }
    }
}

fn random_offset(scale: f32, rng: &mut impl Rng) -> Vec3 {
    let mut axis = || -scale / 2. + rng.gen::<f32>() * scale;
    Vec3::new(axis(), axis(), axis())
}

fn world_position(world: &World, entity: Entity) -> Option<Vec3> {
    world
        .get::<&GlobalTransform>(entity)
        .ok()
        .map(|global_transform| global_transform.translation())
}
