/// Component that adds some information about the entity
/// Useful for debugging - added to every bone and dancer when they are spawned
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
    /// Index of the bone in its skeleton definition, or of the dancer on the floor
    pub node_id: usize,
}
