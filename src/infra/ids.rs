use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{PlayerId, TableId};

/// Генерация ID на монотонных счётчиках. Достаточно для локального
/// запуска и тестов; в проде ID обычно приходят из хранилища.
/// Номера раздач сюда не входят: это счётчик самого стола.
#[derive(Debug, Default)]
pub struct IdGenerator {
    table_counter: AtomicU64,
    player_counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            table_counter: AtomicU64::new(0),
            player_counter: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn next_table_id(&self) -> TableId {
        self.table_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
