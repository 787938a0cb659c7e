//! Feature slice registry.
//! A type-erased container for the state each feature contributes to the server.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state that can be shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A feature after initialization, keyed by the concrete state type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    /// Human-readable name, used in startup logs.
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(name: &'static str, state: T) -> Self {
        Self { id: TypeId::of::<T>(), name, state: Box::new(state) }
    }

    /// Borrows the state as its concrete type.
    #[must_use]
    pub fn downcast<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
