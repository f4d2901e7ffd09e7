use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Ошибки движка одной раздачи. Любая ошибка означает,
/// что состояние стола не изменилось.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Игрок {0} не сидит за этим столом")]
    PlayerNotAtTable(PlayerId),

    #[error("Игрок {0} не участвует в текущей раздаче")]
    PlayerNotInHand(PlayerId),

    #[error("Сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerId),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Невозможно выполнить check: нужно уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call: нет ставки для уравнивания")]
    CannotCall,

    #[error("Raise до {0} не превышает текущую ставку")]
    RaiseTooLow(Chips),

    #[error("В колоде не хватает карт")]
    DeckExhausted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
