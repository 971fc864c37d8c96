pub mod dataset;
pub mod domain;
pub mod metric;
pub mod record;
pub mod scale;
pub mod types;

pub use dataset::HealthDataset;
pub use domain::{AxisDomain, DomainPadding};
pub use metric::{Axis, Metric};
pub use record::StateRecord;
pub use scale::LinearScale;
pub use types::{PixelRange, PlotArea, PlotMargins, Viewport};
