//! Domain layer: the keyed-assignment mechanism and the entities built on it.

pub mod options;
pub mod sender;
