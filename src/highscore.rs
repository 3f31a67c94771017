//! High score persistence
//!
//! The best score is a single integer. On the web it lives in LocalStorage;
//! anything missing or unreadable counts as 0.

/// Where the high score is kept between sessions
pub trait HighScoreStore {
    /// Previously saved high score, or 0
    fn load(&self) -> u64;
    /// Persist a new high score
    fn save(&mut self, high_score: u64);
}

/// Parse a stored high score, defaulting to 0 on missing/malformed data
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Number of save calls, for tests
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw stored text
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        parse_high_score(self.value.as_deref())
    }

    fn save(&mut self, high_score: u64) {
        self.value = Some(high_score.to_string());
        self.saves += 1;
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "hop_runner_high_score";
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let raw = crate::platform::storage::get_item(Self::STORAGE_KEY);
        let score = parse_high_score(raw.as_deref());
        log::info!("Loaded high score: {}", score);
        score
    }

    fn save(&mut self, high_score: u64) {
        if crate::platform::storage::set_item(Self::STORAGE_KEY, &high_score.to_string()) {
            log::info!("High score saved ({})", high_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_high_score(Some("42")), 42);
        assert_eq!(parse_high_score(Some(" 7\n")), 7);
        assert_eq!(parse_high_score(None), 0);
        assert_eq!(parse_high_score(Some("")), 0);
        assert_eq!(parse_high_score(Some("abc")), 0);
        assert_eq!(parse_high_score(Some("-3")), 0);
        assert_eq!(parse_high_score(Some("12.5")), 0);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), 0);

        store.save(15);
        assert_eq!(store.load(), 15);
        assert_eq!(store.saves, 1);

        assert_eq!(MemoryStore::with_raw("garbage").load(), 0);
        assert_eq!(MemoryStore::with_raw("99").load(), 99);
    }
}
