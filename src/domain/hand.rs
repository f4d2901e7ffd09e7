use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::table::SeatIndex;
use crate::domain::{HandId, PlayerId, Timestamp};
use crate::engine::hand_history::HandHistory;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// Ранг руки в упакованном виде:
///   [категория:4 бита][5 рангов по 4 бита, от старшего к младшему].
/// Сравнение чисел даёт ровно "категория, потом карты, потом кикеры".
/// Упаковку и распаковку делает eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(pub u32);

/// Данные игрока внутри одной раздачи. Индексируются местом,
/// параллельно `Table::seats` - без каких-либо map'ов по идентичности.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatInHand {
    /// Карманные карты, видны только владельцу.
    pub hole_cards: [Card; 2],
    /// Ставка на текущей улице.
    pub round_bet: Chips,
    /// Суммарно внесено в банк за раздачу.
    pub total_bet: Chips,
    pub folded: bool,
    pub all_in: bool,
}

impl SeatInHand {
    pub fn new(hole_cards: [Card; 2]) -> Self {
        Self {
            hole_cards,
            round_bet: Chips::ZERO,
            total_bet: Chips::ZERO,
            folded: false,
            all_in: false,
        }
    }
}

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    /// Целевая ставка, до которой должны дотянуться игроки (BB, raise).
    pub current_bet: Chips,
    /// Место последнего агрессора (raise), если он был.
    pub last_aggressor: Option<SeatIndex>,
    /// Очередь мест, которые ещё должны походить на этой улице.
    /// Пустая очередь = раунд ставок закрыт.
    pub to_act: Vec<SeatIndex>,
}

/// Победитель раздачи (при сплите их несколько).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub amount: Chips,
    /// None, если банк отдан без вскрытия (все остальные сфолдили).
    pub rank: Option<HandRank>,
}

/// Состояние одной раздачи.
/// Существует ровно пока стол в статусе Playing или HandComplete.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandState {
    /// Порядковый номер раздачи на этом столе.
    pub hand_no: HandId,
    pub phase: Street,
    pub deck: Deck,
    /// Общие карты (0, 3, 4 или 5).
    pub board: Vec<Card>,
    pub pot: Chips,
    pub betting: BettingRound,
    /// Кнопка дилера на эту раздачу.
    pub dealer: SeatIndex,
    /// Когда начался ход текущего игрока. Таймаут проверяет планировщик снаружи.
    pub turn_started_at: Timestamp,
    /// Участники раздачи, параллельно table.seats. None = место вне раздачи.
    pub seats: Vec<Option<SeatInHand>>,
    /// Заполняется при завершении раздачи.
    pub winners: Vec<Winner>,
    pub finished_at: Option<Timestamp>,
    /// Журнал событий раздачи (для истории/реплеев).
    pub history: HandHistory,
}

impl HandState {
    /// Чей сейчас ход: голова очереди.
    pub fn turn(&self) -> Option<SeatIndex> {
        self.betting.to_act.first().copied()
    }

    pub fn seat_in_hand(&self, seat: SeatIndex) -> Option<&SeatInHand> {
        self.seats.get(seat as usize).and_then(|s| s.as_ref())
    }

    /// Сколько участников ещё не сфолдило.
    pub fn unfolded_count(&self) -> usize {
        self.seats.iter().flatten().filter(|s| !s.folded).count()
    }

    /// Единственный не сфолдивший участник, если он остался один.
    pub fn last_unfolded(&self) -> Option<SeatIndex> {
        let mut it = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.as_ref().map(|s| !s.folded).unwrap_or(false))
            .map(|(i, _)| i as SeatIndex);
        match (it.next(), it.next()) {
            (Some(seat), None) => Some(seat),
            _ => None,
        }
    }
}

/// Краткий итог завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_no: HandId,
    pub street_reached: Street,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub winners: Vec<Winner>,
}
