use inlinable_string::InlinableString;

use crate::utils::prelude::Component;
use crate::Entity;

/// Human readable names of entities. Names are not required to be unique, lookups
/// return the first match in the order of candidates.
#[derive(Default)]
pub struct Tags {
    names: Component<InlinableString>,
}

impl Tags {
    pub fn new() -> Self {
        Tags {
            names: Component::new(),
        }
    }

    #[inline]
    pub fn add<T: Into<InlinableString>>(&mut self, ent: Entity, name: T) {
        self.names.add(ent, name.into());
    }

    #[inline]
    pub fn remove(&mut self, ent: Entity) {
        self.names.remove(ent);
    }

    #[inline]
    pub fn name(&self, ent: Entity) -> Option<&str> {
        self.names.get(ent).map(|v| v.as_ref())
    }

    /// Picks the first entity in `candidates` named `name`.
    pub fn find<T>(&self, candidates: T, name: &str) -> Option<Entity>
    where
        T: IntoIterator<Item = Entity>,
    {
        candidates
            .into_iter()
            .find(|&v| self.name(v) == Some(name))
    }
}
