/// Falling-words typing game
pub mod game;
pub mod renderer;

pub use game::TypingGame;
pub use renderer::TypingRenderer;
