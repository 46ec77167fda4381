/// Vocabulary the falling words are drawn from
use rand::Rng;

/// Built-in list of common Japanese words and phrases
pub const JAPANESE_WORDS: &[&str] = &[
    "こんにちは",
    "ありがとう",
    "さようなら",
    "すみません",
    "お願いします",
    "猫",
    "犬",
    "水",
    "火",
    "風",
    "山",
    "海",
    "空",
    "学校",
    "先生",
    "友達",
    "日本語",
    "勉強",
    "ごはん",
    "電車",
];

/// A non-empty list of candidate words.
///
/// The only way to build one is through [`WordCatalog::new`] or
/// [`WordCatalog::japanese`], so `pick_random` never has to deal with an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog from any word list. Returns `None` if the list is empty.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self { words })
    }

    pub fn japanese() -> Self {
        Self {
            words: JAPANESE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Uniform pick over the whole list
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.words.len());
        &self.words[idx]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::japanese()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn empty_list_is_rejected() {
        assert!(WordCatalog::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn japanese_catalog_has_every_builtin_word() {
        let catalog = WordCatalog::japanese();
        assert_eq!(catalog.len(), JAPANESE_WORDS.len());
        assert!(catalog.words().iter().any(|w| w == "猫"));
    }

    #[test]
    fn picks_come_from_the_list() {
        let catalog = WordCatalog::new(["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let word = catalog.pick_random(&mut rng).to_string();
            assert!(catalog.words().contains(&word));
            seen.insert(word);
        }
        // 200 uniform draws over three words hit all of them
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_word_catalog_always_returns_it() {
        let catalog = WordCatalog::new(["猫"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(catalog.pick_random(&mut rng), "猫");
        }
    }
}
