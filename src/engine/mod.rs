//! Покерный движок: ставки, переходы улиц, вскрытие, координация столов.
//!
//! Основные операции:
//!   - `start_hand` - запустить новую раздачу
//!   - `apply_action` - применить действие игрока
//!   - `auto_fold_expired` - авто-fold по таймауту (момент времени подаёт планировщик)
//!   - `TableManager` - посадка/уход игроков и расписание раздач

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod showdown;
pub mod table_manager;
pub mod validation;

pub use actions::{ActionKind, PlayerAction};
pub use errors::EngineError;
pub use game_loop::{apply_action, auto_fold_expired, force_fold, start_hand, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use table_manager::{ManagerError, TableManager};

/// Источник случайности для движка. Реализации - в infra
/// (системный RNG и детерминированный для тестов/реплеев).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
