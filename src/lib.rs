pub mod app;
pub mod config;
pub mod email;
pub mod error;
pub mod handlers;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::AppError;
