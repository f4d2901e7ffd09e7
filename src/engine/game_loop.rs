use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{BettingRound, HandState, HandSummary, SeatInHand, Street};
use crate::domain::player::Seat;
use crate::domain::table::{Table, TableStatus};
use crate::domain::Timestamp;
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::betting::{opening_order, order_after_raise};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{funded_seats_from, next_dealer};
use crate::engine::showdown;
use crate::engine::validation::{to_call, validate_action};
use crate::engine::RandomSource;
use crate::time_ctrl;

/// Статус раздачи после применения перехода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Старт новой раздачи:
/// - ротация кнопки на следующее место с фишками;
/// - блайнды до любых добровольных действий;
/// - свежая перемешанная колода, по 2 карманные карты участникам;
/// - первым на префлопе ходит место за большим блайндом.
///
/// Участвуют только места со стеком > 0. Убирать обанкротившиеся
/// места со стола - работа TableManager, не этой функции.
pub fn start_hand<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    now: Timestamp,
) -> Result<HandStatus, EngineError> {
    if table.hand.is_some() {
        return Err(EngineError::HandAlreadyInProgress);
    }
    if table.funded_count() < table.config.min_players {
        return Err(EngineError::NotEnoughPlayers);
    }

    let dealer = next_dealer(table).ok_or(EngineError::NotEnoughPlayers)?;
    table.dealer_button = Some(dealer);

    // Порядок раздачи и блайндов: по кругу от кнопки.
    let order = funded_seats_from(table, dealer);

    let hand_no = table.hands_played + 1;
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let mut history = HandHistory::new();
    history.push(HandEventKind::HandStarted {
        table_id: table.id,
        hand_no,
    });

    // Карманные карты: по одной по кругу, два круга.
    let max = table.seats.len();
    let mut dealt: Vec<Vec<Card>> = vec![Vec::new(); max];
    for _round in 0..2 {
        for &s in &order {
            let card = deck.draw_one().ok_or(EngineError::DeckExhausted)?;
            dealt[s as usize].push(card);
        }
    }

    let mut seats_in_hand: Vec<Option<SeatInHand>> = vec![None; max];
    for &s in &order {
        let cards = [dealt[s as usize][0], dealt[s as usize][1]];
        seats_in_hand[s as usize] = Some(SeatInHand::new(cards));
        history.push(HandEventKind::HoleCardsDealt { seat: s, cards });
    }

    let mut hand = HandState {
        hand_no,
        phase: Street::Preflop,
        deck,
        board: Vec::new(),
        pot: Chips::ZERO,
        betting: BettingRound::new(Chips::ZERO, Vec::new()),
        dealer,
        turn_started_at: now,
        seats: seats_in_hand,
        winners: Vec::new(),
        finished_at: None,
        history,
    };

    // Блайнды. Короткий стек постит сколько может (all-in с блайнда).
    let stakes = table.config.stakes;
    let sb_seat = order[1 % order.len()];
    let bb_seat = order[2 % order.len()];
    let sb_paid = post_blind(&mut table.seats, &mut hand, sb_seat, stakes.small_blind);
    let bb_paid = post_blind(&mut table.seats, &mut hand, bb_seat, stakes.big_blind);

    hand.betting.current_bet = stakes.big_blind;
    hand.betting.last_aggressor = Some(bb_seat);
    hand.history.push(HandEventKind::BlindsPosted {
        dealer,
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
    });

    // Очередь префлопа: от места за BB, сам BB замыкает (опция).
    hand.betting.to_act = opening_order(&hand, bb_seat);

    table.hand = Some(hand);
    table.status = TableStatus::Playing;
    table.hands_played = hand_no;

    // Блайнды могли поставить всех в all-in - тогда сразу доводим борд.
    let complete = table
        .hand
        .as_ref()
        .map(|h| h.betting.is_round_complete())
        .unwrap_or(false);
    if complete {
        return advance_street(table, now);
    }
    Ok(HandStatus::Ongoing)
}

/// Применить действие игрока. Действие либо применяется целиком,
/// либо отклоняется целиком - частичных мутаций не бывает.
pub fn apply_action(
    table: &mut Table,
    action: PlayerAction,
    now: Timestamp,
) -> Result<HandStatus, EngineError> {
    if table.status != TableStatus::Playing {
        return Err(EngineError::NoActiveHand);
    }
    let seat = table
        .seat_of(action.player_id)
        .ok_or(EngineError::PlayerNotAtTable(action.player_id))?;
    let seat_idx = seat as usize;

    // Все проверки до первой мутации.
    {
        let hand = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        let sih = hand
            .seat_in_hand(seat)
            .ok_or(EngineError::PlayerNotInHand(action.player_id))?;
        if hand.turn() != Some(seat) {
            return Err(EngineError::NotPlayersTurn(action.player_id));
        }
        validate_action(sih, &action.kind, &hand.betting)?;
    }

    {
        let hand = table.hand.as_mut().ok_or(EngineError::NoActiveHand)?;

        match action.kind {
            ActionKind::Fold => {
                if let Some(sih) = hand.seats[seat_idx].as_mut() {
                    sih.folded = true;
                }
                hand.betting.mark_acted(seat);
            }

            ActionKind::Check => {
                hand.betting.mark_acted(seat);
            }

            ActionKind::Call => {
                let chair = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::Internal("участник раздачи без места"))?;
                let sih = hand.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::PlayerNotInHand(action.player_id))?;

                // Недостающее до ставки, но не больше стека: call в all-in
                // на меньшую сумму разрешён.
                let need = to_call(sih, &hand.betting);
                let pay = take_from_stack(chair, need);
                sih.round_bet += pay;
                sih.total_bet += pay;
                if chair.stack.is_zero() {
                    sih.all_in = true;
                }
                hand.pot += pay;
                hand.betting.mark_acted(seat);
            }

            ActionKind::Raise(total) => {
                let chair = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::Internal("участник раздачи без места"))?;
                let sih = hand.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::PlayerNotInHand(action.player_id))?;

                let pay = take_from_stack(chair, total - sih.round_bet);
                sih.round_bet += pay;
                sih.total_bet += pay;
                if chair.stack.is_zero() {
                    sih.all_in = true;
                }
                let new_bet = sih.round_bet;
                hand.pot += pay;

                if new_bet > hand.betting.current_bet {
                    // Настоящий рейз: действие переоткрывается для всех
                    // остальных, даже если они уже уравнивали.
                    let order = order_after_raise(hand, seat);
                    hand.betting.on_raise(seat, new_bet, order);
                } else {
                    // Стека не хватило дотянуться до текущей ставки:
                    // это all-in call, агрессию не переоткрываем.
                    hand.betting.mark_acted(seat);
                }
            }
        }

        let new_stack = table.seats[seat_idx]
            .as_ref()
            .map(|c| c.stack)
            .unwrap_or(Chips::ZERO);
        let pot_after = hand.pot;
        hand.history.push(HandEventKind::PlayerActed {
            player_id: action.player_id,
            seat,
            action: action.kind,
            new_stack,
            pot_after,
        });
    }

    resolve_after_action(table, now)
}

/// Принудительный fold вне очереди (уход из-за стола, дисконнект).
/// Для игрока в своей очереди эквивалентен обычному fold.
pub fn force_fold(
    table: &mut Table,
    player_id: crate::domain::PlayerId,
    now: Timestamp,
) -> Result<HandStatus, EngineError> {
    if table.status != TableStatus::Playing {
        return Err(EngineError::NoActiveHand);
    }
    let seat = table
        .seat_of(player_id)
        .ok_or(EngineError::PlayerNotAtTable(player_id))?;
    let seat_idx = seat as usize;

    {
        let hand = table.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
        let sih = hand
            .seats
            .get_mut(seat_idx)
            .and_then(|s| s.as_mut())
            .ok_or(EngineError::PlayerNotInHand(player_id))?;
        if sih.folded {
            return Ok(HandStatus::Ongoing);
        }
        sih.folded = true;
        hand.betting.mark_acted(seat);

        let new_stack = table.seats[seat_idx]
            .as_ref()
            .map(|c| c.stack)
            .unwrap_or(Chips::ZERO);
        let pot_after = hand.pot;
        hand.history.push(HandEventKind::PlayerActed {
            player_id,
            seat,
            action: ActionKind::Fold,
            new_stack,
            pot_after,
        });
    }

    resolve_after_action(table, now)
}

/// Проверка таймаута хода. Если время вышло - применяется fold
/// от имени текущего игрока, как будто он прислал его сам.
pub fn auto_fold_expired(
    table: &mut Table,
    now: Timestamp,
) -> Result<Option<HandStatus>, EngineError> {
    let (player_id, started) = match (&table.status, table.hand.as_ref()) {
        (TableStatus::Playing, Some(hand)) => match hand.turn() {
            Some(seat) => {
                let player_id = table
                    .seats
                    .get(seat as usize)
                    .and_then(|s| s.as_ref())
                    .map(|s| s.player_id)
                    .ok_or(EngineError::Internal("ход у пустого места"))?;
                (player_id, hand.turn_started_at)
            }
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    if !time_ctrl::turn_expired(&table.config.time, started, now) {
        return Ok(None);
    }

    apply_action(
        table,
        PlayerAction {
            player_id,
            kind: ActionKind::Fold,
        },
        now,
    )
    .map(Some)
}

/// Развязка после применённого действия: победа фолдами,
/// закрытие раунда или просто передача хода.
fn resolve_after_action(table: &mut Table, now: Timestamp) -> Result<HandStatus, EngineError> {
    let (unfolded, round_done) = {
        let hand = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        (hand.unfolded_count(), hand.betting.is_round_complete())
    };

    if unfolded <= 1 {
        // Остальные сфолдили: банк уходит сразу, без вскрытия и без борда.
        return showdown::award_to_last_player(table, now).map(HandStatus::Finished);
    }
    if round_done {
        return advance_street(table, now);
    }

    if let Some(hand) = table.hand.as_mut() {
        hand.turn_started_at = now;
    }
    Ok(HandStatus::Ongoing)
}

/// Переход улиц после закрытия раунда. Если на открытой улице ходить
/// некому (все в all-in), борд доводится до конца и идёт вскрытие.
fn advance_street(table: &mut Table, now: Timestamp) -> Result<HandStatus, EngineError> {
    loop {
        let phase = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?.phase;
        let (street, cards_to_deal) = match phase {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            Street::River => {
                return showdown::resolve_showdown(table, now).map(HandStatus::Finished);
            }
            Street::Showdown => {
                return Err(EngineError::Internal("переход улицы после вскрытия"));
            }
        };

        open_street(table, street, cards_to_deal, now)?;

        let hand = table.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        if !hand.betting.is_round_complete() {
            return Ok(HandStatus::Ongoing);
        }
    }
}

/// Открыть следующую улицу: добрать борд, обнулить ставки раунда,
/// собрать очередь от первого активного места после кнопки.
fn open_street(
    table: &mut Table,
    street: Street,
    cards_to_deal: usize,
    now: Timestamp,
) -> Result<(), EngineError> {
    let hand = table.hand.as_mut().ok_or(EngineError::NoActiveHand)?;

    let cards = hand
        .deck
        .deal(cards_to_deal)
        .ok_or(EngineError::DeckExhausted)?;
    hand.board.extend(cards.iter().copied());
    hand.history.push(HandEventKind::BoardDealt {
        street,
        cards,
    });

    for sih in hand.seats.iter_mut().flatten() {
        sih.round_bet = Chips::ZERO;
    }
    hand.phase = street;
    let order = opening_order(hand, hand.dealer);
    hand.betting = BettingRound::new(Chips::ZERO, order);
    hand.turn_started_at = now;
    hand.history.push(HandEventKind::StreetChanged { street });
    Ok(())
}

/// Поставить блайнд: списать со стека не больше номинала.
fn post_blind(
    chairs: &mut [Option<Seat>],
    hand: &mut HandState,
    seat: crate::domain::SeatIndex,
    amount: Chips,
) -> Chips {
    let Some(chair) = chairs[seat as usize].as_mut() else {
        return Chips::ZERO;
    };
    let paid = take_from_stack(chair, amount);
    if let Some(sih) = hand.seats[seat as usize].as_mut() {
        sih.round_bet += paid;
        sih.total_bet += paid;
        if chair.stack.is_zero() {
            sih.all_in = true;
        }
    }
    hand.pot += paid;
    paid
}

/// Списать со стека не больше `amount`, вернуть фактически списанное.
fn take_from_stack(seat: &mut Seat, amount: Chips) -> Chips {
    let real = if seat.stack < amount { seat.stack } else { amount };
    seat.stack -= real;
    real
}
