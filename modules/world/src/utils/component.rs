use hydrogen::utils::hash::FastHashMap;

use crate::Entity;

/// A densely packed storage of `T`, keyed by entity. Removal swaps the last
/// element into the hole, so the order of `data` is not stable.
pub struct Component<T> {
    remap: FastHashMap<Entity, usize>,
    pub data: Vec<T>,
    pub entities: Vec<Entity>,
}

impl<T> Default for Component<T> {
    fn default() -> Self {
        Component::new()
    }
}

impl<T> Component<T> {
    pub fn new() -> Self {
        Component {
            remap: FastHashMap::default(),
            data: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Adds `v` to `ent`, returns the value it replaced.
    pub fn add(&mut self, ent: Entity, v: T) -> Option<T> {
        if let Some(&index) = self.remap.get(&ent) {
            return Some(::std::mem::replace(&mut self.data[index], v));
        }

        self.remap.insert(ent, self.data.len());
        self.data.push(v);
        self.entities.push(ent);
        None
    }

    pub fn remove(&mut self, ent: Entity) -> Option<T> {
        let index = self.remap.remove(&ent)?;
        let v = self.data.swap_remove(index);
        self.entities.swap_remove(index);

        if index < self.entities.len() {
            self.remap.insert(self.entities[index], index);
        }

        Some(v)
    }

    #[inline]
    pub fn has(&self, ent: Entity) -> bool {
        self.remap.contains_key(&ent)
    }

    #[inline]
    pub fn get(&self, ent: Entity) -> Option<&T> {
        self.remap.get(&ent).map(|&index| &self.data[index])
    }

    #[inline]
    pub fn get_mut(&mut self, ent: Entity) -> Option<&mut T> {
        match self.remap.get(&ent) {
            Some(&index) => Some(&mut self.data[index]),
            None => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(entity, value)` pairs.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Entity, &'a T)> + 'a {
        self.entities.iter().cloned().zip(self.data.iter())
    }
}
