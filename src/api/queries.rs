use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::HandState;
use crate::domain::table::{SeatIndex, Table, TableStatus};
use crate::domain::{PlayerId, TableId, Timestamp};
use crate::engine::table_manager::TableManager;
use crate::engine::validation::to_call;
use crate::time_ctrl;

use super::dto::{map_winner, SeatDto, TableSummaryDto, TableViewDto, ValidActionDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние стола глазами игрока (None = наблюдатель).
    GetTable {
        table_id: TableId,
        viewer: Option<PlayerId>,
    },

    /// Список столов для лобби.
    ListTables,
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Table(TableViewDto),
    Tables(Vec<TableSummaryDto>),
}

/// Выполнить запрос. Чтение ничего не мутирует.
pub fn run_query(
    manager: &TableManager,
    now: Timestamp,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTable { table_id, viewer } => {
            let table = manager
                .table(table_id)
                .ok_or(ApiError::TableNotFound(table_id))?;
            Ok(QueryResponse::Table(build_table_view(table, viewer, now)))
        }

        Query::ListTables => {
            let tables = manager
                .tables()
                .into_iter()
                .map(|t| TableSummaryDto {
                    table_id: t.id,
                    name: t.name.clone(),
                    status: t.status,
                    seated: t.seated_count(),
                    max_seats: t.max_seats(),
                })
                .collect();
            Ok(QueryResponse::Tables(tables))
        }
    }
}

/// Собрать вид стола для спрашивающего: публичная информация по местам,
/// свои карманные карты, допустимые действия на своём ходу,
/// оставшееся время хода и победители, когда они известны.
pub fn build_table_view(table: &Table, viewer: Option<PlayerId>, now: Timestamp) -> TableViewDto {
    let hand = table.hand.as_ref();

    let mut seats = Vec::new();
    for (idx, chair) in table.seats.iter().enumerate() {
        let Some(chair) = chair else { continue };
        let sih = hand.and_then(|h| h.seat_in_hand(idx as SeatIndex));
        seats.push(SeatDto {
            seat_index: idx as u8,
            player_id: chair.player_id,
            name: chair.name.clone(),
            stack: chair.stack,
            folded: sih.map(|s| s.folded).unwrap_or(false),
            all_in: sih.map(|s| s.all_in).unwrap_or(false),
            round_bet: sih.map(|s| s.round_bet).unwrap_or(Chips::ZERO),
        });
    }

    let your_seat = viewer.and_then(|pid| table.seat_of(pid));
    let your_cards = match (hand, your_seat) {
        (Some(h), Some(s)) => h.seat_in_hand(s).map(|x| x.hole_cards),
        _ => None,
    };

    let turn_seat = if table.status == TableStatus::Playing {
        hand.and_then(|h| h.turn())
    } else {
        None
    };
    let your_turn = your_seat.is_some() && turn_seat == your_seat;

    let valid_actions = match (hand, your_seat) {
        (Some(h), Some(s)) if your_turn => build_valid_actions(table, h, s),
        _ => Vec::new(),
    };

    let turn_remaining_secs = match (turn_seat, hand) {
        (Some(_), Some(h)) => Some(time_ctrl::turn_remaining(
            &table.config.time,
            h.turn_started_at,
            now,
        )),
        _ => None,
    };

    let winners = hand
        .map(|h| h.winners.iter().map(|w| map_winner(table, w)).collect())
        .unwrap_or_default();

    TableViewDto {
        table_id: table.id,
        name: table.name.clone(),
        status: table.status,
        max_seats: table.max_seats(),
        small_blind: table.config.stakes.small_blind,
        big_blind: table.config.stakes.big_blind,

        hand_no: hand.map(|h| h.hand_no),
        phase: hand.map(|h| h.phase),
        pot: hand.map(|h| h.pot).unwrap_or(Chips::ZERO),
        current_bet: hand.map(|h| h.betting.current_bet).unwrap_or(Chips::ZERO),
        board: hand.map(|h| h.board.clone()).unwrap_or_default(),
        dealer_button: table.dealer_button,

        seats,
        your_seat,
        your_cards,
        your_turn,
        valid_actions,
        turn_seat,
        turn_remaining_secs,
        winners,
    }
}

/// Допустимые действия для места, чей сейчас ход.
fn build_valid_actions(table: &Table, hand: &HandState, seat: SeatIndex) -> Vec<ValidActionDto> {
    let Some(sih) = hand.seat_in_hand(seat) else {
        return Vec::new();
    };
    let Some(chair) = table.seat(seat) else {
        return Vec::new();
    };

    let mut actions = vec![ValidActionDto::Fold];
    let need = to_call(sih, &hand.betting);
    if need.is_zero() {
        actions.push(ValidActionDto::Check);
    } else {
        let amount = if chair.stack < need { chair.stack } else { need };
        actions.push(ValidActionDto::Call { amount });
    }
    // Поднимать есть смысл, только если стек переживает уравнивание.
    if chair.stack > need {
        actions.push(ValidActionDto::Raise {
            min_total: hand.betting.current_bet + Chips(1),
        });
    }
    actions
}
