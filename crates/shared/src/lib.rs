pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod executor;
pub mod model;
pub mod repository;
pub mod service;
pub mod utils;
