pub mod domain;
pub mod ports;
pub mod services;
pub mod story_use_cases;
