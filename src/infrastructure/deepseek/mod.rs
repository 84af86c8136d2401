//! DeepSeek API client infrastructure

pub mod client;

pub use client::DeepSeekClientImpl;
