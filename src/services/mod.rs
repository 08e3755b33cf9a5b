// Service module exports

pub mod boot;
pub mod countdown;
pub mod scheduler;
pub mod settings;
