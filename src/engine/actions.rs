use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Закрытый набор действий игрока. Невалидные виды действий
/// не существуют уже на уровне типа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Поднять свою суммарную ставку на этой улице до указанного размера.
    /// Первый bet на улице - это тоже Raise (с нуля).
    Raise(Chips),
}

/// Действие конкретного игрока. Место за столом движок ищет
/// сам по идентичности, клиент его не сообщает.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub kind: ActionKind,
}
