pub mod lifecycle;
pub mod survey;
pub mod tally;

pub use lifecycle::{LifecycleError, SurveyLifecycle};
pub use survey::*;
pub use tally::{Tally, TallyError};
