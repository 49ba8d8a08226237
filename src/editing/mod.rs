pub mod captions;
pub mod color;
pub mod effects;
pub mod filters;
pub mod resolution;
