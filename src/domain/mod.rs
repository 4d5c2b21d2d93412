pub mod state;
pub mod submission;
pub mod summary;

pub use state::RequestState;
pub use submission::{Submission, SummaryFormat, ValidationError};
pub use summary::SummaryResult;
