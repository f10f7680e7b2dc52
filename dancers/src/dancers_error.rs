use hecs::Entity;
use thiserror::Error;

/// Everything that can go wrong while putting dancers on the floor
#[derive(Error, Debug)]
pub enum DancersError {
    /// The bone graph is not a single rooted tree
    #[error("The skeleton is malformed: {0}")]
    MalformedSkeleton(String),
    /// A skin was handed a second pose graph
    #[error("The skin has already been attached to a pose graph")]
    AlreadyInitialized,
    /// A color string could not be parsed
    #[error("Could not parse {0:?} as a color")]
    InvalidColor(String),
    /// A configuration value is out of range
    #[error("The configuration is invalid: {0}")]
    InvalidConfig(String),
    /// An entity was despawned or is missing a required component
    #[error("Entity {0:?} does not exist or is missing a component")]
    NoSuchEntity(Entity),
    #[error(transparent)]
    /// Configuration could not be (de)serialized
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    /// Configuration could not be read
    IO(#[from] std::io::Error),
    #[error(transparent)]
    /// Anything else
    Other(#[from] anyhow::Error),
}
