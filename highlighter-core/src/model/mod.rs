pub mod highlight;
pub mod segment;
pub mod selection;

pub use highlight::Highlight;
pub use segment::Segment;
pub use selection::{Selection, SelectionMarker};
