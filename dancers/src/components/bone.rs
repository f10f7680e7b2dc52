use hecs::Entity;

/// A node in a dancer's skeleton.
/// Added by `SkeletonDefinition::spawn` alongside a [`super::Parent`] pointing at the parent bone
/// (or at the dancer, for the root bone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bone {
    /// The dancer this bone belongs to
    pub dancer: Entity,
    /// Child bones, in skeleton definition order
    pub children: Vec<Entity>,
}

impl Bone {
    /// Leaf bones (hands, feet, the top of the head) have no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The bone ribbons are pulled towards
    pub fn first_child(&self) -> Option<Entity> {
        self.children.first().copied()
    }
}
