mod search_settings;

pub use search_settings::SearchSettings;
