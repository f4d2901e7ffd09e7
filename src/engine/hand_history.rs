use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Street};
use crate::domain::{HandId, PlayerId, SeatIndex, TableId};
use crate::engine::actions::ActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { table_id: TableId, hand_no: HandId },

    /// Кнопка и принудительные ставки.
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: [Card; 2] },

    /// Открыты новые общие карты.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока (включая авто-fold по таймауту).
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: ActionKind,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу.
    StreetChanged { street: Street },

    /// Вскрытие карт на шоудауне.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: [Card; 2],
        rank: HandRank,
    },

    /// Выплата банка (или его доли при сплите).
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished { hand_no: HandId },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи: журнал для реплеев и аудита.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }
}
