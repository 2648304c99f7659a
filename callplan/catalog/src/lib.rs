pub mod error;
pub mod identifier;
pub mod memory;
pub mod procedure;
pub mod provider;
