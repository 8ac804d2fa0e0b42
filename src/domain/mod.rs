pub mod criteria;
pub mod engine;
pub mod facets;
pub mod record;
pub mod summary;

pub use criteria::{DeadlineBucket, DeadlineFilter, FilterCriteria};
pub use engine::{classify, closed_view, days_left, filter, open_view};
pub use facets::Facets;
pub use record::{Editais, Record};
pub use summary::Tally;
