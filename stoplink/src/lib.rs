pub mod algorithm;
pub mod app;
pub mod config;
pub mod model;

#[cfg(test)]
mod test_utils;
