//! The four chart components. Each one owns an immutable layout derived from
//! the dataset at construction, a selection state, and the projection from
//! that state onto per-key primitive styles.

mod common;
mod one_sided_bar;
mod parallel_coordinates;
mod scatter;
mod two_sided_bar;

pub use common::{ACCENT_COLOR, BASE_COLOR};
pub use one_sided_bar::{OneSidedBarChart, OneSidedBarConfig};
pub use parallel_coordinates::{ParallelCoordinatesConfig, ParallelCoordinatesPlot};
pub use scatter::{Scatterplot, ScatterplotConfig};
pub use two_sided_bar::{Margins, TwoSidedBarChart, TwoSidedBarConfig};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, SelectionState};
use crate::render::RenderFrame;

/// Uniform surface over the four chart components, for hosts that drive
/// several charts through one code path.
pub trait ChartComponent {
    /// Materializes the scene under the current selection state.
    fn frame(&self) -> ChartResult<RenderFrame>;
    /// Feeds one pointer event into the selection state machine.
    fn pointer_event(&mut self, event: &PointerEvent);
    /// Re-projects selection styles onto an already materialized frame.
    fn restyle(&self, frame: &mut RenderFrame);
    fn selection(&self) -> &SelectionState;
    fn keys(&self) -> &[String];
    fn viewport(&self) -> Viewport;
}

macro_rules! impl_chart_component {
    ($($chart:ty),+ $(,)?) => {
        $(impl ChartComponent for $chart {
            fn frame(&self) -> ChartResult<RenderFrame> {
                Self::frame(self)
            }

            fn pointer_event(&mut self, event: &PointerEvent) {
                Self::pointer_event(self, event);
            }

            fn restyle(&self, frame: &mut RenderFrame) {
                Self::restyle(self, frame);
            }

            fn selection(&self) -> &SelectionState {
                Self::selection(self)
            }

            fn keys(&self) -> &[String] {
                Self::keys(self)
            }

            fn viewport(&self) -> Viewport {
                Self::viewport(self)
            }
        })+
    };
}

impl_chart_component!(
    OneSidedBarChart,
    TwoSidedBarChart,
    ParallelCoordinatesPlot,
    Scatterplot,
);
