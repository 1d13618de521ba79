pub mod analytics_use_cases;
pub mod domain;
pub mod ports;
pub mod services;
