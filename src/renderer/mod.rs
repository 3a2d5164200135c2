//! Canvas 2D rendering
//!
//! Every frame is redrawn from scratch with flat-colored rectangles.

pub mod draw;
pub mod surface;

pub use draw::draw_frame;
pub use surface::Surface;
