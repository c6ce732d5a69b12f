use crate::Entity;

/// `Node` records the tree relationships of an entity. Every `Node` can have a
/// parent, which allows you to apply position, rotation and scale hierarchically.
///
/// Siblings are kept in a doubly linked list in insertion order. Every access
/// requires going through the `SceneGraph`, which keeps the links consistent.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub parent: Option<Entity>,
    pub next_sib: Option<Entity>,
    pub prev_sib: Option<Entity>,
    pub first_child: Option<Entity>,
}
