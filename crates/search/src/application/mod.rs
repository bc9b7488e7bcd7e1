pub mod search_community;
