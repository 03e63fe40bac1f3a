// Module exports for models

pub mod goal;
pub mod settings;
pub mod streak;
