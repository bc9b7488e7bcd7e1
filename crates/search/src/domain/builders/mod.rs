mod searchable_profile_builder;

pub use searchable_profile_builder::SearchableProfileBuilder;
