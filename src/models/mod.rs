pub mod item;
pub mod quality_rating;
pub mod review_record;
pub mod solution;
pub mod sm2;

pub use item::{Item, ItemRef, NewItem};
pub use quality_rating::QualityRating;
pub use review_record::{ReviewRecord, ReviewState};
pub use solution::{NewSolution, Solution, SolutionAuthor};
pub use sm2::{ScheduledReview, compute_next_review};
