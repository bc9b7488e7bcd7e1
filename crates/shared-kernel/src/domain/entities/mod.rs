mod entity;

pub use entity::EntityMetadata;
