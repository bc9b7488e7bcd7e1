mod postgres_post_row;
mod postgres_searchable_profile_row;
mod postgres_support_request_row;

pub use postgres_post_row::PostgresPostRow;
pub use postgres_searchable_profile_row::PostgresSearchableProfileRow;
pub use postgres_support_request_row::PostgresSupportRequestRow;
