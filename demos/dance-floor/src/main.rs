use std::{f32::consts::TAU, thread, time::Duration};

use anyhow::Result;
use dancers::{
    components::{AnimationClip, BoneTrack, Keyframe, RibbonSkin, TetraSkin},
    config::DanceFloorConfig,
    contexts::{LoaderMessage, SettingsEvent},
    glam::{Quat, Vec3},
    skeleton_definition::SkeletonDefinition,
    DanceFloor,
};
use log::{info, warn};

const FRAME_RATE: f32 = 72.;
const SHOW_LENGTH_SECONDS: f32 = 12.;

pub fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("[DANCE_FLOOR] MAIN!");
    real_main().expect("Error running the dance floor!");
    info!("[DANCE_FLOOR] FINISHED! Goodbye!");
}

fn real_main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DanceFloorConfig::load(path)?,
        None => DanceFloorConfig::default(),
    };
    let mut dance_floor = DanceFloor::new(&config)?;

    // Stand-in for a motion capture loader: takes a moment, then hands over the skeleton
    let loader = dance_floor.loader();
    let dancers = dance_floor.dancers().to_vec();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(500));
        for dancer in dancers {
            let skeleton = humanoid();
            let clip = dance(&skeleton);
            if loader
                .send(LoaderMessage::SkeletonLoaded {
                    dancer,
                    skeleton,
                    clip: Some(clip),
                })
                .is_err()
            {
                warn!("[DANCE_FLOOR] The floor closed before {dancer:?} could arrive");
                return;
            }
        }
    });

    let delta_time = 1. / FRAME_RATE;
    let frames = (SHOW_LENGTH_SECONDS * FRAME_RATE) as usize;
    for frame in 0..frames {
        // Stand-ins for the controller buttons and the scale slider
        match frame {
            f if f == 4 * FRAME_RATE as usize => {
                dance_floor.send_settings_event(SettingsEvent::ToggleRibbons)
            }
            f if f == 6 * FRAME_RATE as usize => {
                dance_floor.send_settings_event(SettingsEvent::ToggleRibbons);
                dance_floor.send_settings_event(SettingsEvent::ToggleMarkers);
            }
            f if f == 8 * FRAME_RATE as usize => {
                dance_floor.send_settings_event(SettingsEvent::SetScale(0.5))
            }
            _ => {}
        }

        dance_floor.tick(delta_time);
        if frame % FRAME_RATE as usize == 0 {
            report(&dance_floor, frame);
        }
        thread::sleep(Duration::from_secs_f32(delta_time));
    }

    Ok(())
}

fn report(dance_floor: &DanceFloor, frame: usize) {
    for dancer in dance_floor.dancers() {
        let world = &dance_floor.world;
        if let Ok(tetra_skin) = world.get::<&TetraSkin>(*dancer) {
            if let Some(marker) = tetra_skin.markers().first() {
                info!(
                    "[DANCE_FLOOR] Frame {frame}: {:?} {} visible: {}, root marker at {}",
                    dancer,
                    TetraSkin::GROUP_NAME,
                    tetra_skin.visible,
                    marker.translation
                );
            }
        }
        if let Ok(ribbon_skin) = world.get::<&RibbonSkin>(*dancer) {
            let spread = ribbon_skin
                .strands()
                .iter()
                .map(|strand| {
                    let trail = strand.trail();
                    let tail = trail.get(trail.len() - 1).unwrap_or_default();
                    trail.head().distance(tail)
                })
                .fold(0., f32::max);
            info!(
                "[DANCE_FLOOR] Frame {frame}: {:?} {} visible: {}, {} strands, longest trail {spread:.2}m",
                dancer,
                RibbonSkin::GROUP_NAME,
                ribbon_skin.visible,
                ribbon_skin.strands().len()
            );
        }
    }
}

fn humanoid() -> SkeletonDefinition {
    let mut skeleton = SkeletonDefinition::default();
    let hips = skeleton.add_bone("Hips", None, Vec3::new(0., 1., 0.));
    let spine = skeleton.add_bone("Spine", Some(hips), Vec3::new(0., 0.25, 0.));
    let neck = skeleton.add_bone("Neck", Some(spine), Vec3::new(0., 0.3, 0.));
    skeleton.add_bone("Head", Some(neck), Vec3::new(0., 0.15, 0.));

    for side in [-1., 1.] {
        let name = if side < 0. { "Left" } else { "Right" };
        let shoulder = skeleton.add_bone(
            format!("{name}Shoulder"),
            Some(spine),
            Vec3::new(0.15 * side, 0.25, 0.),
        );
        let arm = skeleton.add_bone(
            format!("{name}Arm"),
            Some(shoulder),
            Vec3::new(0.25 * side, 0., 0.),
        );
        skeleton.add_bone(
            format!("{name}Hand"),
            Some(arm),
            Vec3::new(0.25 * side, 0., 0.),
        );

        let up_leg = skeleton.add_bone(
            format!("{name}UpLeg"),
            Some(hips),
            Vec3::new(0.1 * side, -0.05, 0.),
        );
        let leg = skeleton.add_bone(
            format!("{name}Leg"),
            Some(up_leg),
            Vec3::new(0., -0.45, 0.),
        );
        skeleton.add_bone(format!("{name}Foot"), Some(leg), Vec3::new(0., -0.45, 0.));
    }

    skeleton
}

// Every bone sways around its own axis, a little out of phase with its parent
fn dance(skeleton: &SkeletonDefinition) -> AnimationClip {
    let steps = 32;
    let duration = SHOW_LENGTH_SECONDS;
    let tracks = skeleton
        .bones
        .iter()
        .enumerate()
        .map(|(bone, definition)| BoneTrack {
            bone,
            keyframes: (0..=steps)
                .map(|step| {
                    let time = duration * step as f32 / steps as f32;
                    let phase = time * TAU / 2. + bone as f32 * 0.4;
                    Keyframe {
                        time,
                        translation: definition.offset,
                        rotation: Quat::from_rotation_z(0.3 * phase.sin())
                            * Quat::from_rotation_y(0.2 * phase.cos()),
                    }
                })
                .collect(),
        })
        .collect();

    AnimationClip {
        name: "Sway".into(),
        tracks,
    }
}
