pub mod filters;
pub mod list;
pub mod summary;

pub use filters::FilterBar;
pub use list::ApplicationsList;
pub use summary::SummaryCards;
