use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, HandSummary, Street};
use crate::domain::table::{Table, TableStatus};
use crate::domain::{HandId, PlayerId, TableId};
use crate::eval::describe_rank;

/// Публичная информация о месте: видна всем за столом.
/// Карманных карт здесь нет по построению.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatDto {
    pub seat_index: u8,
    pub player_id: PlayerId,
    pub name: String,
    pub stack: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Ставка на текущей улице.
    pub round_bet: Chips,
}

/// Допустимое действие для игрока, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidActionDto {
    Fold,
    Check,
    /// Сколько спишется при call (с учётом короткого стека).
    Call { amount: Chips },
    /// Минимальная суммарная ставка, до которой можно поднять.
    Raise { min_total: Chips },
}

/// Победитель раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerDto {
    pub player_id: PlayerId,
    pub seat_index: u8,
    pub name: String,
    pub amount: Chips,
    pub rank: Option<HandRank>,
    /// Название комбинации, None при победе фолдами.
    pub hand_name: Option<String>,
}

/// Вид стола глазами конкретного игрока (или наблюдателя, если
/// идентичность не передана). Чужие карманные карты скрыты всегда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub name: String,
    pub status: TableStatus,
    pub max_seats: u8,
    pub small_blind: Chips,
    pub big_blind: Chips,

    pub hand_no: Option<HandId>,
    pub phase: Option<Street>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub board: Vec<Card>,
    pub dealer_button: Option<u8>,

    pub seats: Vec<SeatDto>,

    /// Место спрашивающего, если он сидит за столом.
    pub your_seat: Option<u8>,
    /// Карманные карты спрашивающего - единственные видимые.
    pub your_cards: Option<[Card; 2]>,
    pub your_turn: bool,
    /// Допустимые действия, только если сейчас ход спрашивающего.
    pub valid_actions: Vec<ValidActionDto>,

    /// Чей сейчас ход и сколько секунд осталось.
    pub turn_seat: Option<u8>,
    pub turn_remaining_secs: Option<i64>,

    /// Победители, как только они известны.
    pub winners: Vec<WinnerDto>,
}

/// Краткая строка лобби.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSummaryDto {
    pub table_id: TableId,
    pub name: String,
    pub status: TableStatus,
    pub seated: usize,
    pub max_seats: u8,
}

/// Итог раздачи для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummaryDto {
    pub hand_no: HandId,
    pub street_reached: Street,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub winners: Vec<WinnerDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успех без дополнительных данных.
    Ok,

    /// Игрок посажен.
    Seated { table_id: TableId, seat: u8 },

    /// Создан новый стол.
    TableCreated(TableViewDto),

    /// Обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раздача завершилась этой командой.
    HandFinished {
        table: TableViewDto,
        summary: HandSummaryDto,
    },
}

/// Имя победителя по текущему составу стола.
/// Если место уже освободилось, остаётся только идентичность.
fn winner_name(table: &Table, player_id: PlayerId, seat_index: u8) -> String {
    table
        .seat(seat_index)
        .filter(|s| s.player_id == player_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("Player {player_id}"))
}

pub fn map_winner(table: &Table, winner: &crate::domain::hand::Winner) -> WinnerDto {
    WinnerDto {
        player_id: winner.player_id,
        seat_index: winner.seat,
        name: winner_name(table, winner.player_id, winner.seat),
        amount: winner.amount,
        rank: winner.rank,
        hand_name: winner.rank.map(|r| describe_rank(r).to_string()),
    }
}

pub fn map_hand_summary(table: &Table, summary: &HandSummary) -> HandSummaryDto {
    HandSummaryDto {
        hand_no: summary.hand_no,
        street_reached: summary.street_reached,
        board: summary.board.clone(),
        total_pot: summary.total_pot,
        winners: summary.winners.iter().map(|w| map_winner(table, w)).collect(),
    }
}
