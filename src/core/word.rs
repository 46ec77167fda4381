use serde::{Deserialize, Serialize};

/// Identity of a falling word. Never reused within one [`IdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(u64);

impl WordId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> WordId {
        let id = WordId(self.next);
        self.next += 1;
        id
    }
}

/// One word in flight. `x`, `text` and `speed` are fixed at spawn; only `y` moves.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingWord {
    id: WordId,
    text: String,
    x: f32,
    y: f32,
    speed: f32,
}

impl FallingWord {
    pub(crate) fn new(id: WordId, text: String, x: f32, y: f32, speed: f32) -> Self {
        Self { id, text, x, y, speed }
    }

    pub fn id(&self) -> WordId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Units per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        self.y += self.speed * dt;
    }
}
