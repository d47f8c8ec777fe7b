//! Domain layer
//!
//! Pure selector logic: element kinds, the catalog port, the element tree
//! and the selection state machine. Nothing here touches processes or the
//! file system.

pub mod ports;
pub mod selection;
pub mod tree;
pub mod value_objects;
