//! Projection kinds and the numeric machinery of resistance.
mod aspect;
mod kind;
mod resist;

pub use aspect::{RandomValue, RoundingAspect};
pub use kind::{ELEMENT_COUNT, ProjectionInfo, ProjectionKind};
pub use resist::{ResistLevel, ResistanceProfile};
