//! Card visibility rules.
//!
//! - [`search`]: free-text (regex) matching over title and source.
//! - [`facets`]: output-type matching over the three facets.
//!
//! The two are independent. The session caches the facet result per card in
//! the visibility mapping and evaluates the search query when listing; a card
//! is displayed only when both agree.

pub mod facets;
pub mod search;

pub use facets::{Facet, TypeFacets};
pub use search::SearchQuery;
