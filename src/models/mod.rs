// Module exports for models

pub mod boot;
pub mod countdown;
pub mod settings;
