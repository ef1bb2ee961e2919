pub mod constants;
pub mod deserializers;
pub mod test_helpers;
pub mod types;
