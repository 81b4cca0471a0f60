/// HTTP boundary to the GenAI Story service

pub mod client;

pub use client::{ApiClient, GenerationRequest};
