pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;
