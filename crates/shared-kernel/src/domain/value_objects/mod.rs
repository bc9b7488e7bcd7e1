mod account_id;
mod geo_point;
mod value_object;

pub use account_id::AccountId;
pub use geo_point::GeoPoint;
pub use value_object::ValueObject;
