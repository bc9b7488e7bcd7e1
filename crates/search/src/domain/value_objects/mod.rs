mod category_filter;
mod location_filter;
mod post_id;
mod resolved_location;
mod search_criteria;
mod search_query;
mod search_ticket;
mod support_request_id;

pub use category_filter::CategoryFilter;
pub use location_filter::LocationFilter;
pub use post_id::PostId;
pub use resolved_location::ResolvedLocation;
pub use search_criteria::SearchCriteria;
pub use search_query::SearchQuery;
pub use search_ticket::SearchTicket;
pub use support_request_id::SupportRequestId;
