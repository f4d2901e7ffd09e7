//! Доменная модель: карты, фишки, колода, игроки, раздачи, столы.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TableId = u64;
pub type HandId = u64;

/// Unix-время в секундах. Движок сам время не измеряет:
/// все переходы принимают `now` параметром снаружи.
pub type Timestamp = i64;

// Удобные реэкспорты, чтобы писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
