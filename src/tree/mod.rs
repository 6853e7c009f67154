//! Directory tree access: root resolution, traversal, and content hashing.

pub mod hasher;
pub mod path;
pub mod walker;
