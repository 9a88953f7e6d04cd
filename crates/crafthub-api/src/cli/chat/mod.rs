//! Interactive terminal chat with the simulated assistant.
//!
//! This module implements the chat loop: welcome banner, transcript
//! rendering, typing spinner, numbered suggestions and slash commands.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
