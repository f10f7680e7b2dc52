use crate::{DancersError, DancersResult};

/// Two-state lifecycle shared by the skins.
///
/// A skin starts `Uninitialized` and moves to `Initialized` exactly once, when its dancer's pose
/// graph becomes ready. There is no way back.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// The pose graph hasn't arrived yet (and may never)
    Uninitialized,
    /// The pose graph arrived and the skin's state was built from it
    Initialized(T),
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Lifecycle::Uninitialized
    }
}

impl<T> Lifecycle<T> {
    /// Build the initialized state with `init` and transition to it.
    ///
    /// `init` is not called when already initialized, and a failing `init` leaves the lifecycle
    /// `Uninitialized`.
    pub fn initialize_with(&mut self, init: impl FnOnce() -> DancersResult<T>) -> DancersResult<()> {
        if self.is_initialized() {
            return Err(DancersError::AlreadyInitialized);
        }
        *self = Lifecycle::Initialized(init()?);
        Ok(())
    }

    /// Has the pose graph arrived?
    pub fn is_initialized(&self) -> bool {
        matches!(self, Lifecycle::Initialized(_))
    }

    /// The initialized state, if any
    pub fn get(&self) -> Option<&T> {
        match self {
            Lifecycle::Initialized(state) => Some(state),
            Lifecycle::Uninitialized => None,
        }
    }

    /// The initialized state, if any
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Lifecycle::Initialized(state) => Some(state),
            Lifecycle::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_initializes_once() {
        let mut lifecycle = Lifecycle::default();
        assert!(!lifecycle.is_initialized());
        assert_eq!(lifecycle.get(), None);

        lifecycle.initialize_with(|| Ok(1)).unwrap();
        assert_eq!(lifecycle.get(), Some(&1));

        let mut called = false;
        let result = lifecycle.initialize_with(|| {
            called = true;
            Ok(2)
        });
        assert!(matches!(result, Err(DancersError::AlreadyInitialized)));
        assert!(!called);
        assert_eq!(lifecycle.get(), Some(&1));
    }

    #[test]
    pub fn test_failed_init_stays_uninitialized() {
        let mut lifecycle = Lifecycle::<usize>::default();
        let result =
            lifecycle.initialize_with(|| Err(DancersError::MalformedSkeleton("cycle".into())));
        assert!(result.is_err());
        assert_eq!(lifecycle, Lifecycle::Uninitialized);
    }
}
