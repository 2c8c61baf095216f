//! Tools that hand a single input file, or arguments loaded from it, to a
//! service.

pub mod input;
pub mod map_transform;
pub mod tag_setter;

pub use input::InputTool;
pub use map_transform::{MAP_TRANSFORM_TOOL, MapTransformTool};
pub use tag_setter::{TAG_SETTER_TOOL, TagSetterTool};
