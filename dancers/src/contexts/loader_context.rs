use std::sync::mpsc::{self, Receiver, Sender, TryIter};

use hecs::Entity;

use crate::{components::AnimationClip, skeleton_definition::SkeletonDefinition};

/// Sent by a skeleton loader once it is done with a dancer's motion capture file
#[derive(Debug, Clone)]
pub enum LoaderMessage {
    /// The skeleton (and, optionally, the take to play on it) is ready to be spawned
    SkeletonLoaded {
        dancer: Entity,
        skeleton: SkeletonDefinition,
        clip: Option<AnimationClip>,
    },
    /// The loader gave up. The dancer will never get a pose graph.
    Failed { dancer: Entity, reason: String },
}

/// Channel between skeleton loaders, which may run on other threads, and the frame loop.
///
/// Loaders hold a [`Sender`] obtained from [`LoaderContext::sender`]; `pose_graph_system`
/// drains the other end once per frame.
pub struct LoaderContext {
    sender: Sender<LoaderMessage>,
    receiver: Receiver<LoaderMessage>,
}

impl Default for LoaderContext {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }
}

impl LoaderContext {
    /// A handle loaders can use to deliver skeletons
    pub fn sender(&self) -> Sender<LoaderMessage> {
        self.sender.clone()
    }

    /// Everything delivered since the last call, without blocking
    pub fn try_iter(&self) -> TryIter<'_, LoaderMessage> {
        self.receiver.try_iter()
    }
}
