pub mod component;

pub mod prelude {
    pub use super::component::Component;
}
