use std::iter;

use hydrogen::errors::Result;
use hydrogen::math::prelude::*;
use hydrogen::utils::hash::FastHashMap;

use super::node::Node;
use super::transform::Transform;

use crate::Entity;

#[derive(Debug, Clone, Copy)]
struct Slot {
    ent: Entity,
    node: Node,
    local: Transform,
}

/// A scene graph that stores the position, rotation and scale of entities
/// relative to their parents.
///
/// World transforms are composed on demand, `World(N) = World(P) * Local(N)`,
/// so changes of a parent are seen by all of its descendants immediately.
#[derive(Default)]
pub struct SceneGraph {
    remap: FastHashMap<Entity, usize>,
    slots: Vec<Slot>,
    roots: Vec<Entity>,
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph::default()
    }

    /// Adds a node as a new root.
    pub(crate) fn add(&mut self, ent: Entity) {
        assert!(!self.remap.contains_key(&ent), "{} is already in the graph.", ent);

        self.remap.insert(ent, self.slots.len());
        self.slots.push(Slot {
            ent,
            node: Node::default(),
            local: Transform::default(),
        });

        self.roots.push(ent);
    }

    /// Removes a node and all of its descendants, in tree order.
    pub(crate) fn remove(&mut self, ent: Entity) -> Option<Vec<Entity>> {
        let index = *self.remap.get(&ent)?;
        self.unlink(index);
        self.roots.retain(|&v| v != ent);

        let removes: Vec<_> = iter::once(ent).chain(self.descendants(ent)).collect();
        for v in &removes {
            if let Some(index) = self.remap.remove(v) {
                self.slots.swap_remove(index);
                if let Some(moved) = self.slots.get(index) {
                    self.remap.insert(moved.ent, index);
                }
            }
        }

        Some(removes)
    }

    fn index(&self, ent: Entity) -> Result<usize> {
        self.remap
            .get(&ent)
            .cloned()
            .ok_or_else(|| format_err!("{} does not have a node.", ent))
    }

    #[inline]
    fn node(&self, ent: Entity) -> Option<&Node> {
        self.remap.get(&ent).map(|&v| &self.slots[v].node)
    }

    #[inline]
    fn node_mut(&mut self, ent: Entity) -> Option<&mut Node> {
        let index = *self.remap.get(&ent)?;
        Some(&mut self.slots[index].node)
    }

    #[inline]
    fn local_mut(&mut self, ent: Entity) -> Option<&mut Transform> {
        let index = *self.remap.get(&ent)?;
        Some(&mut self.slots[index].local)
    }

    /// The world transform of the parent of `ent`, identity for roots.
    fn parent_transform(&self, ent: Entity) -> Transform {
        self.parent(ent)
            .and_then(|v| self.transform(v))
            .unwrap_or_default()
    }

    /// Detaches the node at `index` from its parent and siblings, which makes
    /// it a root.
    fn unlink(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        let parent = slot.node.parent.take();
        let next_sib = slot.node.next_sib.take();
        let prev_sib = slot.node.prev_sib.take();
        let ent = slot.ent;

        if let Some(next) = next_sib {
            if let Some(v) = self.node_mut(next) {
                v.prev_sib = prev_sib;
            }
        }

        match (prev_sib, parent) {
            (Some(prev), _) => {
                if let Some(v) = self.node_mut(prev) {
                    v.next_sib = next_sib;
                }
            }
            // The next sibling becomes the first child.
            (None, Some(parent)) => {
                if let Some(v) = self.node_mut(parent) {
                    v.first_child = next_sib;
                }
            }
            (None, None) => {}
        }

        if parent.is_some() {
            self.roots.push(ent);
        }
    }
}

impl SceneGraph {
    #[inline]
    pub fn contains(&self, ent: Entity) -> bool {
        self.remap.contains_key(&ent)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the nodes without parent, in the order they became roots.
    #[inline]
    pub fn roots(&self) -> impl Iterator<Item = Entity> + '_ {
        self.roots.iter().cloned()
    }

    #[inline]
    pub fn parent(&self, ent: Entity) -> Option<Entity> {
        self.node(ent).and_then(|v| v.parent)
    }

    /// Returns true if `ent` has no child. Unknown entities are neither leaves
    /// nor roots.
    #[inline]
    pub fn is_leaf(&self, ent: Entity) -> bool {
        self.node(ent).map_or(false, |v| v.first_child.is_none())
    }

    #[inline]
    pub fn is_root(&self, ent: Entity) -> bool {
        self.node(ent).map_or(false, |v| v.parent.is_none())
    }

    /// Attaches `child` to `parent` after its existing children. Passing `None`
    /// turns `child` into a root.
    ///
    /// With `keep_world_pose` the local transform of `child` is adjusted so its
    /// world transform stays the same, otherwise the local transform is kept.
    pub fn set_parent<T>(&mut self, child: Entity, parent: T, keep_world_pose: bool) -> Result<()>
    where
        T: Into<Option<Entity>>,
    {
        let child_index = self.index(child)?;
        let parent = parent.into();

        if let Some(parent) = parent {
            self.index(parent)?;
            if parent == child || self.is_ancestor(parent, child) {
                bail!("{} can not be attached to itself or its descendant.", child);
            }
        }

        let world = self.transform(child);
        self.unlink(child_index);

        if let Some(parent) = parent {
            let last = self.children(parent).last();
            match last {
                Some(last) => {
                    if let Some(v) = self.node_mut(last) {
                        v.next_sib = Some(child);
                    }
                }
                None => {
                    if let Some(v) = self.node_mut(parent) {
                        v.first_child = Some(child);
                    }
                }
            }

            let node = &mut self.slots[child_index].node;
            node.parent = Some(parent);
            node.prev_sib = last;
            self.roots.retain(|&v| v != child);
        }

        if let (true, Some(world)) = (keep_world_pose, world) {
            self.set_transform(child, world);
        }

        Ok(())
    }

    /// Makes `child` a root. Its own children are not affected.
    pub fn remove_from_parent(&mut self, child: Entity, keep_world_pose: bool) -> Result<()> {
        self.set_parent(child, None, keep_world_pose)
    }

    /// Iterates from the parent of `ent` up to its root.
    #[inline]
    pub fn ancestors(&self, ent: Entity) -> Ancestors {
        Ancestors {
            cursor: self.parent(ent),
            graph: self,
        }
    }

    /// Returns true if `rhs` is one of the ancestors of `lhs`.
    #[inline]
    pub fn is_ancestor(&self, lhs: Entity, rhs: Entity) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Iterates the direct children of `ent` in the order they were attached.
    #[inline]
    pub fn children(&self, ent: Entity) -> Children {
        Children {
            cursor: self.node(ent).and_then(|v| v.first_child),
            graph: self,
        }
    }

    /// Iterates all the descendants of `ent` in depth-first order.
    #[inline]
    pub fn descendants(&self, ent: Entity) -> Descendants {
        Descendants {
            root: ent,
            cursor: self.node(ent).and_then(|v| v.first_child),
            graph: self,
        }
    }
}

pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    cursor: Option<Entity>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.cursor?;
        self.cursor = self.graph.parent(ent);
        Some(ent)
    }
}

pub struct Children<'a> {
    graph: &'a SceneGraph,
    cursor: Option<Entity>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.cursor?;
        self.cursor = self.graph.node(ent).and_then(|v| v.next_sib);
        Some(ent)
    }
}

pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    root: Entity,
    cursor: Option<Entity>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.cursor?;
        let node = *self.graph.node(ent)?;

        self.cursor = node.first_child.or(node.next_sib).or_else(|| {
            // Climbs back until an ancestor below the root has a next sibling.
            let mut parent = node.parent;
            while let Some(v) = parent.filter(|&v| v != self.root) {
                let up = self.graph.node(v)?;
                if up.next_sib.is_some() {
                    return up.next_sib;
                }

                parent = up.parent;
            }

            None
        });

        Some(ent)
    }
}

impl SceneGraph {
    /// Gets the transform in world space.
    pub fn transform(&self, ent: Entity) -> Option<Transform> {
        let local = self.local_transform(ent)?;
        Some(self.ancestors(ent).fold(local, |acc, v| {
            self.local_transform(v).unwrap_or_default() * acc
        }))
    }

    /// Sets the transform in world space.
    pub fn set_transform(&mut self, ent: Entity, transform: Transform) {
        if let Some(inverse) = self.parent_transform(ent).inverse() {
            if let Some(local) = self.local_mut(ent) {
                *local = inverse * transform;
            }
        }
    }

    #[inline]
    pub fn local_transform(&self, ent: Entity) -> Option<Transform> {
        self.remap.get(&ent).map(|&v| self.slots[v].local)
    }

    #[inline]
    pub fn set_local_transform(&mut self, ent: Entity, transform: Transform) {
        if let Some(local) = self.local_mut(ent) {
            *local = transform;
        }
    }
}

impl SceneGraph {
    /// Moves `ent` by `translation`, expressed in the space of its parent.
    #[inline]
    pub fn translate<T>(&mut self, ent: Entity, translation: T)
    where
        T: Into<Vector3<f32>>,
    {
        if let Some(local) = self.local_mut(ent) {
            local.position += translation.into();
        }
    }

    #[inline]
    pub fn position(&self, ent: Entity) -> Option<Vector3<f32>> {
        self.transform(ent).map(|v| v.position)
    }

    /// Sets position in world space.
    pub fn set_position<T>(&mut self, ent: Entity, position: T)
    where
        T: Into<Vector3<f32>>,
    {
        if let Some(inverse) = self.parent_transform(ent).inverse() {
            if let Some(local) = self.local_mut(ent) {
                local.position = inverse.transform_point(position);
            }
        }
    }

    #[inline]
    pub fn local_position(&self, ent: Entity) -> Option<Vector3<f32>> {
        self.local_transform(ent).map(|v| v.position)
    }

    #[inline]
    pub fn set_local_position<T>(&mut self, ent: Entity, position: T)
    where
        T: Into<Vector3<f32>>,
    {
        if let Some(local) = self.local_mut(ent) {
            local.position = position.into();
        }
    }
}

impl SceneGraph {
    /// Rotates `ent` about `axis`, which is expressed in its own local space.
    /// Degenerated axes are ignored.
    pub fn rotate_on_axis<T, A>(&mut self, ent: Entity, axis: T, angle: A)
    where
        T: Into<Vector3<f32>>,
        A: Into<Rad<f32>>,
    {
        let axis = axis.into();
        if axis.magnitude2() <= ::std::f32::EPSILON {
            return;
        }

        let q = Quaternion::from_axis_angle(axis.normalize(), angle);
        if let Some(local) = self.local_mut(ent) {
            local.rotation = (local.rotation * q).normalize();
        }
    }

    /// Rotates `ent` so its forward axis (+z) points at `center`, and its up
    /// axis leans towards `up`.
    pub fn look_at<T1, T2>(&mut self, ent: Entity, center: T1, up: T2)
    where
        T1: Into<Vector3<f32>>,
        T2: Into<Vector3<f32>>,
    {
        let eye = match self.position(ent) {
            Some(v) => v,
            None => return,
        };

        let dir = center.into() - eye;
        if dir.magnitude2() <= ::std::f32::EPSILON {
            return;
        }

        let dir = dir.normalize();
        let mut side = up.into().cross(dir);
        if side.magnitude2() <= ::std::f32::EPSILON {
            // Up is parallel with the view direction.
            side = Vector3::unit_z().cross(dir);
        }

        let side = side.normalize();
        let up = dir.cross(side).normalize();
        let rotation: Quaternion<f32> = Matrix3::from_cols(side, up, dir).into();
        self.set_rotation(ent, rotation);
    }

    #[inline]
    pub fn rotation(&self, ent: Entity) -> Option<Quaternion<f32>> {
        self.transform(ent).map(|v| v.rotation)
    }

    /// Sets rotation in world space.
    pub fn set_rotation<T>(&mut self, ent: Entity, rotation: T)
    where
        T: Into<Quaternion<f32>>,
    {
        let parent = self
            .parent(ent)
            .and_then(|v| self.rotation(v))
            .unwrap_or_else(Quaternion::one);

        if let Some(local) = self.local_mut(ent) {
            local.rotation = parent.invert() * rotation.into();
        }
    }

    #[inline]
    pub fn set_local_rotation<T>(&mut self, ent: Entity, rotation: T)
    where
        T: Into<Quaternion<f32>>,
    {
        if let Some(local) = self.local_mut(ent) {
            local.rotation = rotation.into();
        }
    }

    #[inline]
    pub fn scale(&self, ent: Entity) -> Option<f32> {
        self.transform(ent).map(|v| v.scale)
    }

    /// Sets the uniform scale in world space. A zero scaled parent leaves the
    /// local scale as given.
    pub fn set_scale(&mut self, ent: Entity, scale: f32) {
        let parent = self.parent(ent).and_then(|v| self.scale(v)).unwrap_or(1.0);
        if let Some(local) = self.local_mut(ent) {
            local.scale = if parent.abs() > ::std::f32::EPSILON {
                scale / parent
            } else {
                scale
            };
        }
    }

    #[inline]
    pub fn local_scale(&self, ent: Entity) -> Option<f32> {
        self.local_transform(ent).map(|v| v.scale)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hydrogen::utils::handle::HandleLike;

    fn graph(n: usize) -> (SceneGraph, Vec<Entity>) {
        let mut graph = SceneGraph::new();
        let ents: Vec<_> = (0..n).map(|i| Entity::new(i as u32, 1)).collect();
        for &v in &ents {
            graph.add(v);
        }

        (graph, ents)
    }

    #[test]
    fn sibling_links() {
        let (mut graph, e) = graph(4);
        graph.set_parent(e[1], e[0], false).unwrap();
        graph.set_parent(e[2], e[0], false).unwrap();
        graph.set_parent(e[3], e[0], false).unwrap();

        graph.remove_from_parent(e[2], false).unwrap();
        assert_eq!(graph.children(e[0]).collect::<Vec<_>>(), [e[1], e[3]]);
        assert_eq!(graph.node(e[3]).unwrap().prev_sib, Some(e[1]));
        assert_eq!(graph.node(e[1]).unwrap().next_sib, Some(e[3]));
        assert!(graph.is_root(e[2]));
        assert_eq!(graph.roots().collect::<Vec<_>>(), [e[0], e[2]]);

        graph.remove_from_parent(e[1], false).unwrap();
        assert_eq!(graph.node(e[0]).unwrap().first_child, Some(e[3]));
        assert_eq!(graph.node(e[3]).unwrap().prev_sib, None);
    }

    #[test]
    fn remove_remaps() {
        let (mut graph, e) = graph(3);
        graph.set_parent(e[1], e[0], false).unwrap();
        graph.set_local_position(e[2], [1.0, 2.0, 3.0]);

        let removed = graph.remove(e[0]).unwrap();
        assert_eq!(removed, [e[0], e[1]]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.local_position(e[2]), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert!(graph.remove(e[0]).is_none());
        assert!(!graph.contains(e[1]));
    }

    #[test]
    fn unknown_parent() {
        let (mut graph, e) = graph(1);
        let ghost = Entity::new(7, 1);
        assert!(graph.set_parent(e[0], ghost, false).is_err());
        assert!(graph.set_parent(ghost, e[0], false).is_err());
        assert!(graph.is_root(e[0]));
    }
}
