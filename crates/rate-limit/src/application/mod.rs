pub mod check_and_record;
pub mod ports;
