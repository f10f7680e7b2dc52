use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    DanceFloor,
};
use hecs::World;

/// Update global transform with parent transform system
/// Walks through each entity that has a Parent (dancers and their bones) and builds a hierarchy
/// Then transforms each entity based on the hierarchy
pub fn update_global_transform_with_parent_system(dance_floor: &mut DanceFloor) {
    update_global_transform_with_parent_system_inner(&mut dance_floor.world);
}

pub(crate) fn update_global_transform_with_parent_system_inner(world: &mut World) {
    // Construct a view for efficient random access into the set of all entities that have
    // parents. Views allow work like dynamic borrow checking or component storage look-up to be
    // done once rather than per-entity as in `World::get`.
    let mut parents = world.query::<(&Parent, &LocalTransform)>();
    let parents = parents.view();

    // View of entities that don't have parents, i.e. roots of the transform hierarchy
    let mut roots = world.query::<&GlobalTransform>().without::<&Parent>();
    let roots = roots.view();

    // This query can coexist with the `roots` view without illegal aliasing of `GlobalTransform`
    // references because the inclusion of `&Parent` in the query, and its exclusion from the view,
    // guarantees that they will never overlap. Similarly, it can coexist with `parents` because
    // that view does not reference `GlobalTransform`s at all.
    for (_entity, (parent, local_transform, absolute)) in world
        .query::<(&Parent, &LocalTransform, &mut GlobalTransform)>()
        .iter()
    {
        // Walk the hierarchy from this entity to the root, accumulating the entity's absolute
        // transform.
        let mut relative = local_transform.to_affine();
        let mut ancestor = parent.0;
        while let Some((next, ancestor_local)) = parents.get(ancestor) {
            relative = ancestor_local.to_affine() * relative;
            ancestor = next.0;
        }
        // The `while` loop terminates when `ancestor` cannot be found in `parents`, i.e. when it
        // does not have a `Parent` component, and is therefore necessarily a root.
        if let Some(root) = roots.get(ancestor) {
            absolute.0 = root.0 * relative;
        }
    }
}
