//! Контроль времени: правила тайминга и чистые проверки "истекло ли".
//!
//! Движок сам не тикает. Он хранит только метки времени, а внешний
//! планировщик сравнивает их с текущим моментом и дергает переходы.

use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// Правила тайминга одного стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRules {
    /// Сколько секунд даётся на ход. По истечении - авто-fold.
    pub turn_timeout_secs: i64,
    /// Пауза между раздачами.
    pub inter_hand_delay_secs: i64,
}

impl TimeRules {
    pub const fn new(turn_timeout_secs: i64, inter_hand_delay_secs: i64) -> Self {
        Self {
            turn_timeout_secs,
            inter_hand_delay_secs,
        }
    }

    /// Стандартный профиль: 20 секунд на ход, 5 секунд между раздачами.
    pub const fn standard() -> Self {
        Self::new(20, 5)
    }
}

/// Истекло ли время хода, начатого в `turn_started_at`.
pub fn turn_expired(rules: &TimeRules, turn_started_at: Timestamp, now: Timestamp) -> bool {
    now - turn_started_at >= rules.turn_timeout_secs
}

/// Сколько секунд на ход осталось (для выдачи клиенту).
pub fn turn_remaining(rules: &TimeRules, turn_started_at: Timestamp, now: Timestamp) -> i64 {
    (rules.turn_timeout_secs - (now - turn_started_at)).max(0)
}

/// Пора ли авто-стартовать следующую раздачу после завершённой.
pub fn next_hand_due(rules: &TimeRules, finished_at: Timestamp, now: Timestamp) -> bool {
    now - finished_at >= rules.inter_hand_delay_secs
}
