pub mod client;
pub mod resources;

pub use client::ApiClient;
