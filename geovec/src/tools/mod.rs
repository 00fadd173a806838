pub mod assembly;
pub mod convert;
pub mod probe;
