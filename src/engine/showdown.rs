//! Развязка раздачи: определение победителей и выплаты.
//!
//! Все взносы, включая all-in, лежат в одном общем банке: отдельные
//! сайд-поты по уровням здесь сознательно не строятся. Банк делится
//! поровну между сильнейшими руками; остаток от деления раздаётся
//! по фишке в порядке мест после кнопки.

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, HandSummary, Street, Winner};
use crate::domain::table::{Table, TableStatus};
use crate::domain::{PlayerId, SeatIndex, Timestamp};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandEventKind;
use crate::eval::evaluate_best_hand;

/// Единственный не сфолдивший игрок забирает весь банк без вскрытия.
/// Карты борда не доводятся: на какой улице раздача оборвалась,
/// та и останется в итоге.
pub fn award_to_last_player(table: &mut Table, now: Timestamp) -> Result<HandSummary, EngineError> {
    let (seat, pot) = {
        let hand = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        let seat = hand
            .last_unfolded()
            .ok_or(EngineError::Internal("нет претендента на банк"))?;
        (seat, hand.pot)
    };

    let player_id = table
        .seats
        .get(seat as usize)
        .and_then(|s| s.as_ref())
        .map(|s| s.player_id)
        .ok_or(EngineError::Internal("победитель без места"))?;

    if let Some(chair) = table.seats[seat as usize].as_mut() {
        chair.stack += pot;
    }

    let winner = Winner {
        player_id,
        seat,
        amount: pot,
        rank: None,
    };

    let hand = table.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
    hand.history.push(HandEventKind::PotAwarded {
        seat,
        player_id,
        amount: pot,
    });
    hand.history.push(HandEventKind::HandFinished {
        hand_no: hand.hand_no,
    });
    hand.winners = vec![winner.clone()];
    hand.finished_at = Some(now);

    let summary = HandSummary {
        hand_no: hand.hand_no,
        street_reached: hand.phase,
        board: hand.board.clone(),
        total_pot: pot,
        winners: vec![winner],
    };

    table.status = TableStatus::HandComplete;
    Ok(summary)
}

/// Вскрытие: оценить руки всех не сфолдивших, отранжировать,
/// поделить банк поровну между сильнейшими (целочисленно вниз).
pub fn resolve_showdown(table: &mut Table, now: Timestamp) -> Result<HandSummary, EngineError> {
    let max = table.seats.len();

    // Кандидаты: не сфолдившие участники и их лучшие комбинации.
    let mut revealed: Vec<(SeatIndex, PlayerId, [Card; 2], HandRank)> = Vec::new();
    let (dealer, pot, hand_no) = {
        let hand = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        for (idx, sih) in hand.seats.iter().enumerate() {
            let Some(s) = sih else { continue };
            if s.folded {
                continue;
            }
            let player_id = table
                .seats
                .get(idx)
                .and_then(|c| c.as_ref())
                .map(|c| c.player_id)
                .ok_or(EngineError::Internal("участник раздачи без места"))?;
            let result = evaluate_best_hand(&s.hole_cards, &hand.board);
            revealed.push((idx as SeatIndex, player_id, s.hole_cards, result.rank()));
        }
        (hand.dealer, hand.pot, hand.hand_no)
    };

    if revealed.is_empty() {
        return Err(EngineError::Internal("вскрытие без участников"));
    }

    let best = revealed
        .iter()
        .map(|(_, _, _, rank)| *rank)
        .max()
        .expect("участники уже проверены");

    // Сплит: все с сильнейшей рукой, в порядке мест после кнопки.
    // Этот же порядок определяет, кому достанутся фишки остатка.
    let mut tied: Vec<(SeatIndex, PlayerId, HandRank)> = revealed
        .iter()
        .filter(|(_, _, _, rank)| *rank == best)
        .map(|(seat, pid, _, rank)| (*seat, *pid, *rank))
        .collect();
    tied.sort_by_key(|(seat, _, _)| (*seat as usize + max - dealer as usize - 1) % max);

    let share = Chips(pot.0 / tied.len() as u64);
    let mut remainder = pot.0 % tied.len() as u64;

    let mut winners = Vec::with_capacity(tied.len());
    for (seat, player_id, rank) in tied {
        let mut amount = share;
        if remainder > 0 {
            amount.0 += 1;
            remainder -= 1;
        }
        if let Some(chair) = table.seats[seat as usize].as_mut() {
            chair.stack += amount;
        }
        winners.push(Winner {
            player_id,
            seat,
            amount,
            rank: Some(rank),
        });
    }

    let hand = table.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
    hand.phase = Street::Showdown;
    for (seat, player_id, hole_cards, rank) in revealed {
        hand.history.push(HandEventKind::ShowdownReveal {
            seat,
            player_id,
            hole_cards,
            rank,
        });
    }
    for w in &winners {
        hand.history.push(HandEventKind::PotAwarded {
            seat: w.seat,
            player_id: w.player_id,
            amount: w.amount,
        });
    }
    hand.history.push(HandEventKind::HandFinished { hand_no });
    hand.winners = winners.clone();
    hand.finished_at = Some(now);

    let summary = HandSummary {
        hand_no,
        street_reached: Street::Showdown,
        board: hand.board.clone(),
        total_pot: pot,
        winners,
    };

    table.status = TableStatus::HandComplete;
    Ok(summary)
}
