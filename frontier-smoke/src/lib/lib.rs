pub mod client;
pub mod config;
pub mod console;
pub mod flow;
pub mod otp;

pub use client::ApiClient;
pub use flow::SmokeFlow;
