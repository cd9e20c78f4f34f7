// Score normalization & classification.
// Every display surface (detail card, breakdown panel, comparison dialog)
// goes through `view::build_view`, so thresholds live in exactly one place.

pub mod classify;
pub mod compare;
pub mod completeness;
pub mod handlers;
pub mod normalize;
pub mod trend;
pub mod view;
pub mod weights;

// Re-export the public API consumed by handlers and library users.
pub use compare::{compare, ComparisonReport};
pub use completeness::{evaluate_completeness, CompletenessReport};
pub use normalize::normalize;
pub use trend::{trend, TrendReport};
pub use view::{build_view, AggregateScoreView};
