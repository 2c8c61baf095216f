//! I/O helpers for tools and services.

pub mod config;
pub mod map_transform;
pub mod measure;
pub mod paths;
pub mod services;
