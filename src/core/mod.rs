pub mod axis;
pub mod band;
pub mod palette;
pub mod scale;
pub mod types;

pub use axis::{Axis, AxisOrientation, AxisTick, TickFormat};
pub use band::{BandScale, PointScale};
pub use palette::{SeriesPalette, SeriesRole};
pub use scale::LinearScale;
pub use types::Viewport;
