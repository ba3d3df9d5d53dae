//! Platform-agnostic helpers consumed by views: language selection, navigation, class names.

pub mod classes;
pub mod language;
pub mod navigation;
