use hecs::{Entity, World};
use log::{info, warn};
use rand::Rng;

use crate::{
    components::{
        AnimationClip, AnimationPlayer, Bone, DancerToggles, Info, RibbonSkin, Skeleton,
        SkeletonView, TetraSkin,
    },
    contexts::{LoaderContext, LoaderMessage},
    skeleton_definition::SkeletonDefinition,
    DanceFloor, DancersError, DancersResult,
};

/// Pose graph system
/// Drains the loader channel. Each loaded skeleton is spawned into the world, gets its clip
/// playing, and is handed to its dancer's skins. Dancers whose skeletons fail to load are left
/// as they are, and their skins stay empty.
pub fn pose_graph_system(dance_floor: &mut DanceFloor) {
    let DanceFloor {
        world,
        loader_context,
        rng,
        ..
    } = dance_floor;
    pose_graph_system_inner(world, loader_context, rng);
}

pub(crate) fn pose_graph_system_inner(
    world: &mut World,
    loader_context: &LoaderContext,
    rng: &mut impl Rng,
) {
    for message in loader_context.try_iter() {
        match message {
            LoaderMessage::SkeletonLoaded {
                dancer,
                skeleton,
                clip,
            } => match attach_skeleton(world, dancer, &skeleton, clip, rng) {
                Ok(skeleton) => info!(
                    "[DANCERS_POSE_GRAPH] {} is ready to dance with {} bones",
                    dancer_name(world, dancer),
                    skeleton.bones.len()
                ),
                Err(e) => warn!(
                    "[DANCERS_POSE_GRAPH] Unable to attach skeleton to {}: {e}",
                    dancer_name(world, dancer)
                ),
            },
            LoaderMessage::Failed { dancer, reason } => warn!(
                "[DANCERS_POSE_GRAPH] Skeleton for {} failed to load: {reason}",
                dancer_name(world, dancer)
            ),
        }
    }
}

fn attach_skeleton(
    world: &mut World,
    dancer: Entity,
    definition: &SkeletonDefinition,
    clip: Option<AnimationClip>,
    rng: &mut impl Rng,
) -> DancersResult<Skeleton> {
    if world.get::<&Skeleton>(dancer).is_ok() {
        return Err(DancersError::AlreadyInitialized);
    }
    if let Some(clip) = &clip {
        clip.validate(definition.bones.len())?;
    }
    ensure_skins_uninitialized(world, dancer)?;

    let skeleton = definition.spawn(world, dancer)?;
    if let Err(e) = on_pose_graph_ready(world, dancer, skeleton.root, rng) {
        for bone in &skeleton.bones {
            let _ = world.despawn(*bone);
        }
        return Err(e);
    }

    let skeleton_visible = world
        .get::<&DancerToggles>(dancer)
        .map(|toggles| toggles.skeleton_visible)
        .unwrap_or_default();
    world
        .insert(
            dancer,
            (
                skeleton.clone(),
                SkeletonView {
                    visible: skeleton_visible,
                },
            ),
        )
        .map_err(|_| DancersError::NoSuchEntity(dancer))?;

    if let Some(clip) = clip {
        let player = AnimationPlayer::new(clip, skeleton.bones.clone());
        world
            .insert_one(dancer, player)
            .map_err(|_| DancersError::NoSuchEntity(dancer))?;
    }

    Ok(skeleton)
}

/// Tell every skin on `dancer` that the bones below `root` are ready to be followed.
/// Skins the dancer doesn't wear are skipped.
///
/// `root` must be a bone of `dancer`. Nothing is initialized unless every skin the dancer wears
/// is still waiting for its pose graph.
pub fn on_pose_graph_ready(
    world: &World,
    dancer: Entity,
    root: Entity,
    rng: &mut impl Rng,
) -> DancersResult<()> {
    let owner = world
        .get::<&Bone>(root)
        .map_err(|_| DancersError::NoSuchEntity(root))?
        .dancer;
    if owner != dancer {
        return Err(DancersError::MalformedSkeleton(format!(
            "root bone {root:?} belongs to {}, not {}",
            dancer_name(world, owner),
            dancer_name(world, dancer)
        )));
    }
    ensure_skins_uninitialized(world, dancer)?;

    if let Ok(mut tetra_skin) = world.get::<&mut TetraSkin>(dancer) {
        tetra_skin.on_pose_graph_ready(world, root)?;
        info!(
            "[DANCERS_POSE_GRAPH] Created {} markers",
            tetra_skin.markers().len()
        );
    }

    if let Ok(mut ribbon_skin) = world.get::<&mut RibbonSkin>(dancer) {
        ribbon_skin.on_pose_graph_ready(world, root, rng)?;
        info!(
            "[DANCERS_POSE_GRAPH] Created {} ribbon strands",
            ribbon_skin.strands().len()
        );
    }

    Ok(())
}

fn ensure_skins_uninitialized(world: &World, dancer: Entity) -> DancersResult<()> {
    let tetra_ready = world
        .get::<&TetraSkin>(dancer)
        .map(|skin| skin.is_initialized())
        .unwrap_or_default();
    let ribbon_ready = world
        .get::<&RibbonSkin>(dancer)
        .map(|skin| skin.is_initialized())
        .unwrap_or_default();
    if tetra_ready || ribbon_ready {
        return Err(DancersError::AlreadyInitialized);
    }
    Ok(())
}

fn dancer_name(world: &World, dancer: Entity) -> String {
    world
        .get::<&Info>(dancer)
        .map(|info| info.name.clone())
        .unwrap_or_else(|_| format!("{dancer:?}"))
}
