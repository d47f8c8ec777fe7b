//! Value objects

pub mod element_kind;

pub use element_kind::ElementKind;
