//! Platform-agnostic building blocks shared by the components.

pub mod classes;
pub mod dom;
pub mod partition;
pub mod subscription;
