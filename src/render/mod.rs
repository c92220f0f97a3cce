//! Board rendering onto abstract drawing surfaces

/// Frame painting for boards
pub mod painter;
/// Image-backed surface
pub mod raster;
/// Draw-call recording surface
pub mod recording;
/// Surface trait and line styles
pub mod surface;

pub use painter::{Painter, RenderStyle};
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawingSurface, LineStyle};
