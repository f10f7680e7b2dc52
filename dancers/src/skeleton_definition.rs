use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::{
    components::{Bone, GlobalTransform, Info, LocalTransform, Parent, Skeleton},
    DancersError, DancersResult,
};

/// A bone as described by a skeleton loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneDefinition {
    /// A helpful name, eg. "LeftForeArm"
    pub name: String,
    /// Index of the parent bone, or `None` for the root
    pub parent: Option<usize>,
    /// Rest position relative to the parent
    #[serde(default)]
    pub offset: Vec3,
}

/// The bone hierarchy of a dancer, as handed over by a skeleton loader.
/// Nothing is spawned into the world until [`SkeletonDefinition::spawn`] is called.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonDefinition {
    /// Every bone. Parents don't have to come before their children.
    pub bones: Vec<BoneDefinition>,
}

impl SkeletonDefinition {
    /// Append a bone and return its index
    pub fn add_bone(&mut self, name: impl Into<String>, parent: Option<usize>, offset: Vec3) -> usize {
        self.bones.push(BoneDefinition {
            name: name.into(),
            parent,
            offset,
        });
        self.bones.len() - 1
    }

    /// Indices of the bones whose parent is `index`, in definition order
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.bones
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.parent == Some(index))
            .map(|(i, _)| i)
    }

    /// Make sure the bones form a single tree and return the index of its root
    pub fn validate(&self) -> DancersResult<usize> {
        let mut roots = self
            .bones
            .iter()
            .enumerate()
            .filter(|(_, b)| b.parent.is_none())
            .map(|(i, _)| i);

        let root = roots
            .next()
            .ok_or_else(|| DancersError::MalformedSkeleton("there is no root bone".into()))?;
        if let Some(second) = roots.next() {
            return Err(DancersError::MalformedSkeleton(format!(
                "both {:?} and {:?} are root bones",
                self.bones[root].name, self.bones[second].name
            )));
        }

        for bone in &self.bones {
            if let Some(parent) = bone.parent.filter(|&p| p >= self.bones.len()) {
                return Err(DancersError::MalformedSkeleton(format!(
                    "{:?} has parent {parent}, but there are only {} bones",
                    bone.name,
                    self.bones.len()
                )));
            }
        }

        for (index, bone) in self.bones.iter().enumerate() {
            // Walk up to the root. Any path longer than the number of bones goes round in circles.
            let mut ancestor = index;
            let mut steps = 0;
            while let Some(parent) = self.bones[ancestor].parent {
                ancestor = parent;
                steps += 1;
                if steps > self.bones.len() {
                    return Err(DancersError::MalformedSkeleton(format!(
                        "{:?} is its own ancestor",
                        bone.name
                    )));
                }
            }
        }

        Ok(root)
    }

    /// Spawn one entity per bone, parented to `dancer`, and return the resulting [`Skeleton`]
    pub fn spawn(&self, world: &mut World, dancer: Entity) -> DancersResult<Skeleton> {
        let root = self.validate()?;
        if !world.contains(dancer) {
            return Err(DancersError::NoSuchEntity(dancer));
        }

        let bones = self
            .bones
            .iter()
            .enumerate()
            .map(|(node_id, definition)| {
                let local_transform = LocalTransform::from_translation(definition.offset);
                world.spawn((
                    Info {
                        name: definition.name.clone(),
                        node_id,
                    },
                    local_transform,
                    GlobalTransform::from(local_transform),
                ))
            })
            .collect::<Vec<_>>();

        for (index, definition) in self.bones.iter().enumerate() {
            let parent = definition.parent.map_or(dancer, |p| bones[p]);
            let bone = Bone {
                dancer,
                children: self.children_of(index).map(|c| bones[c]).collect(),
            };
            world
                .insert(bones[index], (Parent(parent), bone))
                .map_err(|_| DancersError::NoSuchEntity(bones[index]))?;
        }

        Ok(Skeleton {
            root: bones[root],
            bones,
        })
    }
}
