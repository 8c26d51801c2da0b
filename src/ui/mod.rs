#[cfg(feature = "hydrate")]
pub mod behaviors;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
