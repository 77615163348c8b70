pub mod constraints;
pub mod optimizer;
pub mod types;

pub use constraints::ConstraintGraph;
pub use optimizer::ScheduleOptimizer;
pub use types::{ScheduleEntry, ScheduleResult};
