pub mod data_type;
pub mod types;
pub mod value;
