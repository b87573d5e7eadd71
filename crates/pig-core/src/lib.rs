pub mod config;
pub mod logging;

pub mod download;
pub mod generator;
pub mod size_model;
pub mod url_builder;
