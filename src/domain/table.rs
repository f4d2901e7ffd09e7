use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::HandState;
use crate::domain::player::Seat;
use crate::domain::{PlayerId, TableId};
use crate::time_ctrl::TimeRules;

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

/// Размеры блайндов стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub const fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }
}

/// Конфиг стола: места, блайнды, посадка, тайминги.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Количество мест за столом (обычно 9).
    pub max_seats: u8,
    pub stakes: TableStakes,
    /// Стек, с которым игрок садится по умолчанию.
    pub default_buy_in: Chips,
    /// Минимум игроков с фишками для старта раздачи.
    pub min_players: usize,
    pub time: TimeRules,
}

impl TableConfig {
    /// Стандартный кеш-стол: 9 мест, блайнды 50/100, стек на 100 BB.
    pub fn standard() -> Self {
        Self {
            max_seats: 9,
            stakes: TableStakes::new(Chips(50), Chips(100)),
            default_buy_in: Chips(10_000),
            min_players: 2,
            time: TimeRules::standard(),
        }
    }
}

/// Статус стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableStatus {
    /// Раздача не идёт, ждём игроков.
    Waiting,
    /// Идёт раздача.
    Playing,
    /// Раздача завершена, выплаты сделаны, ждём паузу перед следующей.
    HandComplete,
}

/// Основное состояние стола - агрегат, который целиком передаётся
/// в чистые функции переходов. Никакого глобального состояния игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub config: TableConfig,

    /// Места за столом: индекс вектора = SeatIndex, None = пустое.
    pub seats: Vec<Option<Seat>>,

    pub status: TableStatus,

    /// Кнопка дилера. Переживает раздачи: ротация идёт от неё.
    pub dealer_button: Option<SeatIndex>,

    /// Сколько раздач уже запущено (номер текущей = hands_played).
    pub hands_played: u64,

    /// Текущая раздача. Some <=> status Playing | HandComplete.
    pub hand: Option<HandState>,
}

impl Table {
    /// Создать пустой стол с заданной конфигурацией.
    pub fn new(id: TableId, name: String, config: TableConfig) -> Self {
        let seats = vec![None; config.max_seats as usize];
        Self {
            id,
            name,
            config,
            seats,
            status: TableStatus::Waiting,
            dealer_button: None,
            hands_played: 0,
            hand: None,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.config.max_seats
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Сколько мест с положительным стеком (кандидаты на раздачу).
    pub fn funded_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|s| !s.stack.is_zero())
            .count()
    }

    /// Где сидит игрок. Единственная точка поиска "идентичность -> место".
    pub fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.seats.iter().enumerate().find_map(|(i, s)| {
            s.as_ref()
                .filter(|s| s.player_id == player_id)
                .map(|_| i as SeatIndex)
        })
    }

    /// Свободное место с минимальным индексом.
    pub fn first_free_seat(&self) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|s| s.is_none())
            .map(|i| i as SeatIndex)
    }

    pub fn seat(&self, index: SeatIndex) -> Option<&Seat> {
        self.seats.get(index as usize).and_then(|s| s.as_ref())
    }
}
