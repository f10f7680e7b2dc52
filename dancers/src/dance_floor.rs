use std::sync::mpsc::Sender;

use glam::Vec3;
use hecs::{Entity, EntityBuilder, World};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    components::{
        DancerToggles, GlobalTransform, Info, LocalTransform, Parent, RibbonSkin, Stage, TetraSkin,
    },
    config::{DanceFloorConfig, DancerConfig},
    contexts::{LoaderContext, LoaderMessage, SettingsContext, SettingsEvent},
    systems::{
        animation_system, pose_graph_system, ribbon_skin_system, settings_system,
        skeleton_view_system, tetra_skin_system, update_global_transform_system,
        update_global_transform_with_parent_system,
    },
    DancersResult,
};

/// The dance floor: a world full of dancers, and everything needed to advance it one frame.
///
/// Create one from a [`DanceFloorConfig`], hand [`DanceFloor::loader`] to whatever loads the
/// dancers' skeletons, then call [`DanceFloor::tick`] once per rendered frame.
pub struct DanceFloor {
    /// All the entities
    pub world: World,
    /// The entity every dancer stands on
    pub stage: Entity,
    pub(crate) loader_context: LoaderContext,
    pub(crate) settings_context: SettingsContext,
    pub(crate) rng: StdRng,
    dancers: Vec<Entity>,
}

impl DanceFloor {
    /// Set up the stage and spawn every configured dancer. Skeletons arrive later, through
    /// [`DanceFloor::loader`].
    pub fn new(config: &DanceFloorConfig) -> DancersResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = World::new();
        let stage_transform = LocalTransform {
            scale: Vec3::splat(config.scale),
            ..Default::default()
        };
        let stage = world.spawn((
            Stage,
            Info {
                name: "Stage".into(),
                node_id: 0,
            },
            stage_transform,
            GlobalTransform::from(stage_transform),
        ));

        let mut dance_floor = Self {
            world,
            stage,
            loader_context: LoaderContext::default(),
            settings_context: SettingsContext::new(config.scale_slider),
            rng,
            dancers: Vec::new(),
        };

        for dancer in &config.dancers {
            dance_floor.add_dancer(dancer)?;
        }

        Ok(dance_floor)
    }

    /// Put another dancer on the floor. It stands still until its skeleton arrives.
    pub fn add_dancer(&mut self, config: &DancerConfig) -> DancersResult<Entity> {
        let mut builder = EntityBuilder::new();
        builder.add_bundle((
            Info {
                name: config.name.clone(),
                node_id: self.dancers.len(),
            },
            DancerToggles::new(config.display),
            LocalTransform::from_translation(config.position),
            GlobalTransform::default(),
            Parent(self.stage),
        ));

        let mut skins = vec![];
        if config.markers {
            builder.add(TetraSkin::default());
            skins.push(TetraSkin::GROUP_NAME);
        }
        if let Some(ribbon) = &config.ribbon {
            builder.add(RibbonSkin::new(ribbon.clone())?);
            skins.push(RibbonSkin::GROUP_NAME);
        }
        let dancer = self.world.spawn(builder.build());

        info!(
            "[DANCERS_FLOOR] {} joined the floor at {} wearing {:?}",
            config.name, config.position, skins
        );
        self.dancers.push(dancer);
        Ok(dancer)
    }

    /// Every dancer, in the order they were added
    pub fn dancers(&self) -> &[Entity] {
        &self.dancers
    }

    /// A handle skeleton loaders use to deliver pose graphs, possibly from another thread
    pub fn loader(&self) -> Sender<LoaderMessage> {
        self.loader_context.sender()
    }

    /// Queue a settings change for the next tick
    pub fn send_settings_event(&mut self, event: SettingsEvent) {
        self.settings_context.send(event);
    }

    /// Advance everything by one frame, `delta_time` seconds after the last one
    pub fn tick(&mut self, delta_time: f32) {
        settings_system(self);
        pose_graph_system(self);
        animation_system(self, delta_time);
        update_global_transform_system(self);
        update_global_transform_with_parent_system(self);
        skeleton_view_system(self);
        tetra_skin_system(self);
        ribbon_skin_system(self);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        components::{RibbonConfig, SkeletonView},
        skeleton_definition::SkeletonDefinition,
    };

    fn config() -> DanceFloorConfig {
        DanceFloorConfig {
            dancers: vec![
                DancerConfig {
                    name: "Left".into(),
                    position: Vec3::new(-1., 0., 0.),
                    ..Default::default()
                },
                DancerConfig {
                    name: "Right".into(),
                    position: Vec3::new(1., 0., 0.),
                    display: true,
                    ribbon: Some(RibbonConfig {
                        max_length: 5,
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ],
            seed: Some(99),
            ..Default::default()
        }
    }

    fn skeleton() -> SkeletonDefinition {
        let mut definition = SkeletonDefinition::default();
        let hips = definition.add_bone("Hips", None, Vec3::new(0., 1., 0.));
        let spine = definition.add_bone("Spine", Some(hips), Vec3::new(0., 0.3, 0.));
        definition.add_bone("Head", Some(spine), Vec3::new(0., 0.4, 0.));
        definition
    }

    fn load(dance_floor: &DanceFloor, dancer: Entity) {
        dance_floor
            .loader()
            .send(LoaderMessage::SkeletonLoaded {
                dancer,
                skeleton: skeleton(),
                clip: None,
            })
            .unwrap();
    }

    #[test]
    pub fn test_dancers_wait_for_their_skeletons() {
        let mut dance_floor = DanceFloor::new(&config()).unwrap();
        let [left, right] = [dance_floor.dancers()[0], dance_floor.dancers()[1]];

        for _ in 0..10 {
            dance_floor.tick(1. / 72.);
        }
        {
            let world = &dance_floor.world;
            assert!(!world.get::<&TetraSkin>(left).unwrap().is_initialized());
            assert!(!world.get::<&RibbonSkin>(right).unwrap().is_initialized());
        }

        // Only the right dancer's loader delivers
        let loader = dance_floor.loader();
        std::thread::spawn(move || {
            loader
                .send(LoaderMessage::Failed {
                    dancer: left,
                    reason: "no such file".into(),
                })
                .unwrap();
        })
        .join()
        .unwrap();
        load(&dance_floor, right);
        dance_floor.tick(1. / 72.);

        let world = &dance_floor.world;
        assert!(!world.get::<&TetraSkin>(left).unwrap().is_initialized());
        assert!(world.get::<&SkeletonView>(left).is_err());

        let tetra_skin = world.get::<&TetraSkin>(right).unwrap();
        assert!(tetra_skin.visible);
        assert_relative_eq!(tetra_skin.markers()[0].translation, Vec3::new(1., 1., 0.));
        assert_relative_eq!(tetra_skin.markers()[2].translation, Vec3::new(1., 1.7, 0.));

        let ribbon_skin = world.get::<&RibbonSkin>(right).unwrap();
        assert!(ribbon_skin.visible);
        assert_eq!(ribbon_skin.strands().len(), 6 + 6 + 1);
        assert!(ribbon_skin.strands().iter().all(|s| s.trail().len() == 5));
        assert!(world.get::<&SkeletonView>(right).unwrap().visible);
    }

    #[test]
    pub fn test_settings_reach_the_skins() {
        let mut dance_floor = DanceFloor::new(&config()).unwrap();
        let dancers = dance_floor.dancers().to_vec();
        for dancer in &dancers {
            load(&dance_floor, *dancer);
        }
        dance_floor.tick(1. / 72.);

        let samples = |dance_floor: &DanceFloor, dancer: Entity| {
            dance_floor
                .world
                .get::<&RibbonSkin>(dancer)
                .unwrap()
                .strands()
                .iter()
                .map(|s| s.trail().to_vec())
                .collect::<Vec<_>>()
        };
        let before = samples(&dance_floor, dancers[0]);

        dance_floor.send_settings_event(SettingsEvent::ToggleRibbons);
        dance_floor.send_settings_event(SettingsEvent::ToggleMarkers);
        dance_floor.send_settings_event(SettingsEvent::ToggleSkeleton);
        dance_floor.tick(1. / 72.);

        for dancer in &dancers {
            let world = &dance_floor.world;
            assert!(!world.get::<&TetraSkin>(*dancer).unwrap().visible);
            assert!(!world.get::<&RibbonSkin>(*dancer).unwrap().visible);
        }
        assert!(dance_floor
            .world
            .get::<&SkeletonView>(dancers[0])
            .unwrap()
            .visible);
        assert!(!dance_floor
            .world
            .get::<&SkeletonView>(dancers[1])
            .unwrap()
            .visible);
        assert_eq!(samples(&dance_floor, dancers[0]), before);

        // Shrink the floor and bring the markers back
        dance_floor.send_settings_event(SettingsEvent::SetScale(0.5));
        dance_floor.send_settings_event(SettingsEvent::ToggleMarkers);
        dance_floor.tick(1. / 72.);

        let tetra_skin = dance_floor.world.get::<&TetraSkin>(dancers[1]).unwrap();
        assert!(tetra_skin.visible);
        assert_relative_eq!(
            tetra_skin.markers()[0].translation,
            Vec3::new(0.5, 0.5, 0.),
            epsilon = 1e-6
        );
    }

    #[test]
    pub fn test_invalid_dancer_is_rejected() {
        let mut config = config();
        config.dancers[1].ribbon = Some(RibbonConfig {
            color: "not a color".into(),
            ..Default::default()
        });
        assert!(DanceFloor::new(&config).is_err());
    }
}
