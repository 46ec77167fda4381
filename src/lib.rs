pub mod core {
	pub mod catalog;
	pub mod clock;
	pub mod engine;
	pub mod game;
	pub mod input;
	pub mod state;
	pub mod word;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
