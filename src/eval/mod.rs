//! Оценка силы рук: лучшая 5-карточная комбинация из 5-7 карт
//! с полным порядком тай-брейков.
//!
//! Основная функция:
//!   `evaluate_best_hand(hole, board) -> HandResult`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::evaluate_best_hand;
pub use hand_rank::{describe_rank, HandCategory, HandResult};
