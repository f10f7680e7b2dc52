use std::collections::HashSet;

use hecs::{Entity, World};

use super::Bone;
use crate::{DancersError, DancersResult};

/// Added to a dancer once its skeleton has been spawned into the world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    /// The root bone. Its parent is the dancer itself.
    pub root: Entity,
    /// Every bone, indexed the same way as the `SkeletonDefinition` it was spawned from
    pub bones: Vec<Entity>,
}

impl Skeleton {
    /// Walk the bone tree below `root`, depth first, parents before their children.
    ///
    /// Every bone is visited exactly once. A bone that is reachable twice (a cycle, or a bone
    /// shared between two parents) is a [`DancersError::MalformedSkeleton`]; an entity without a
    /// [`Bone`] is a [`DancersError::NoSuchEntity`].
    pub fn traverse(world: &World, root: Entity) -> DancersResult<Vec<Entity>> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(entity) = stack.pop() {
            if !visited.insert(entity) {
                return Err(DancersError::MalformedSkeleton(format!(
                    "bone {entity:?} is reachable more than once from {root:?}"
                )));
            }

            let bone = world
                .get::<&Bone>(entity)
                .map_err(|_| DancersError::NoSuchEntity(entity))?;
            order.push(entity);

            // Reversed so the first child is popped first
            stack.extend(bone.children.iter().rev());
        }

        Ok(order)
    }
}
