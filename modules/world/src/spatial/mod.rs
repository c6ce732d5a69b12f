pub mod graph;
pub mod node;
pub mod transform;

pub mod prelude {
    pub use super::graph::SceneGraph;
    pub use super::node::Node;
    pub use super::transform::Transform;
}
