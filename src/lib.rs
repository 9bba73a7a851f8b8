//! toneshift: workplace tone conversion backend
//!
//! Serves the static frontend and a `/convert` endpoint that rewrites user
//! text into an audience-appropriate business register through the Groq
//! chat-completion API.

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod server;
