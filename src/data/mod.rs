pub mod adapt;
pub mod dataset;

pub use adapt::{
    AxisExtents, InterleavedBars, SCATTER_HEADROOM, axis_extents, diverging_domain, interleaved,
    scatter_ceilings,
};
pub use dataset::{Dataset, Record};
