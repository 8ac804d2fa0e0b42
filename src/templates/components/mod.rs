pub mod chart;
pub mod edital_card;
pub mod error;
pub mod feedback;
pub mod filters;

pub use chart::tally_chart;
pub use edital_card::edital_card;
pub use error::error_page;
pub use feedback::feedback_form;
pub use filters::filter_form;
