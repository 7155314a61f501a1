//! Individual panels composed by [`super::ui`].
pub mod footer;
pub mod header;
pub mod messages;
pub mod pads;
pub mod progress;
