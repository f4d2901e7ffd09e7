use std::str::FromStr;

use holdem_engine::domain::{
    BettingRound, Card, Chips, Deck, HandState, PlayerProfile, Seat, SeatInHand, Street, Table,
    TableConfig, TableStakes, TableStatus,
};
use holdem_engine::engine::showdown::{award_to_last_player, resolve_showdown};
use holdem_engine::engine::HandHistory;
use holdem_engine::eval::HandCategory;
use holdem_engine::time_ctrl::TimeRules;

fn card(s: &str) -> Card {
    Card::from_str(s).unwrap()
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| card(s)).collect()
}

fn make_table(stacks: &[u64]) -> Table {
    let config = TableConfig {
        max_seats: 9,
        stakes: TableStakes::new(Chips(50), Chips(100)),
        default_buy_in: Chips(10_000),
        min_players: 2,
        time: TimeRules::standard(),
    };
    let mut table = Table::new(1, "Showdown".to_string(), config);
    for (i, stack) in stacks.iter().enumerate() {
        let profile = PlayerProfile {
            id: i as u64 + 1,
            name: format!("P{}", i + 1),
        };
        table.seats[i] = Some(Seat::new(&profile, Chips(*stack), 0));
    }
    table
}

/// Раздача, доигранная до ривера, с заданными карманными картами.
fn river_hand(
    table: &Table,
    board: &[&str],
    holes: &[(usize, [&str; 2])],
    pot: u64,
    dealer: u8,
) -> HandState {
    let mut seats = vec![None; table.seats.len()];
    for (idx, hole) in holes {
        seats[*idx] = Some(SeatInHand::new([card(hole[0]), card(hole[1])]));
    }
    HandState {
        hand_no: 1,
        phase: Street::River,
        deck: Deck { cards: Vec::new() },
        board: cards(board),
        pot: Chips(pot),
        betting: BettingRound::new(Chips::ZERO, Vec::new()),
        dealer,
        turn_started_at: 0,
        seats,
        winners: Vec::new(),
        finished_at: None,
        history: HandHistory::new(),
    }
}

#[test]
fn three_nines_beat_a_pair_of_queens() {
    // борд 2h 7d 9c Js Kh: у X пара дам, у Y сет девяток через 9c
    let mut table = make_table(&[1_000, 1_000]);
    let hand = river_hand(
        &table,
        &["2h", "7d", "9c", "Js", "Kh"],
        &[(0, ["Qc", "Qd"]), (1, ["9s", "9h"])],
        200,
        0,
    );
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = resolve_showdown(&mut table, 77).unwrap();

    assert_eq!(summary.winners.len(), 1);
    let w = &summary.winners[0];
    assert_eq!(w.player_id, 2);
    assert_eq!(w.seat, 1);
    assert_eq!(w.amount, Chips(200));
    assert_eq!(w.rank.unwrap().category(), HandCategory::ThreeOfAKind);

    // банк целиком у Y, X не получает ничего
    assert_eq!(table.seats[1].as_ref().unwrap().stack, Chips(1_200));
    assert_eq!(table.seats[0].as_ref().unwrap().stack, Chips(1_000));

    assert_eq!(table.status, TableStatus::HandComplete);
    let hand = table.hand.as_ref().unwrap();
    assert_eq!(hand.phase, Street::Showdown);
    assert_eq!(hand.finished_at, Some(77));
    assert_eq!(hand.winners.len(), 1);
}

#[test]
fn folded_players_are_not_evaluated() {
    let mut table = make_table(&[1_000, 1_000, 1_000]);
    let mut hand = river_hand(
        &table,
        &["2h", "7d", "9c", "Js", "Kh"],
        &[(0, ["Qc", "Qd"]), (1, ["9s", "9h"]), (2, ["Ac", "Ad"])],
        300,
        0,
    );
    // сет всё ещё бьёт пару дам, а сфолдившие тузы не участвуют
    hand.seats[2].as_mut().unwrap().folded = true;
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = resolve_showdown(&mut table, 0).unwrap();
    assert_eq!(summary.winners.len(), 1);
    assert_eq!(summary.winners[0].player_id, 2);
    assert_eq!(table.seats[2].as_ref().unwrap().stack, Chips(1_000));
}

#[test]
fn board_tie_splits_the_pot_evenly() {
    // роял на борде: играют все, сплит на троих
    let mut table = make_table(&[1_000, 1_000, 1_000]);
    let hand = river_hand(
        &table,
        &["Ah", "Kh", "Qh", "Jh", "Th"],
        &[(0, ["2c", "3c"]), (1, ["2d", "3d"]), (2, ["2s", "3s"])],
        300,
        0,
    );
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = resolve_showdown(&mut table, 0).unwrap();
    assert_eq!(summary.winners.len(), 3);
    for w in &summary.winners {
        assert_eq!(w.amount, Chips(100));
        assert_eq!(w.rank.unwrap().category(), HandCategory::RoyalFlush);
    }
    for seat in 0..3usize {
        assert_eq!(table.seats[seat].as_ref().unwrap().stack, Chips(1_100));
    }
}

#[test]
fn split_remainder_goes_one_chip_at_a_time_after_the_button() {
    // банк 100 на троих: по 33, остаток 1 уходит первому месту после кнопки
    let mut table = make_table(&[1_000, 1_000, 1_000]);
    let hand = river_hand(
        &table,
        &["Ah", "Kh", "Qh", "Jh", "Th"],
        &[(0, ["2c", "3c"]), (1, ["2d", "3d"]), (2, ["2s", "3s"])],
        100,
        0,
    );
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = resolve_showdown(&mut table, 0).unwrap();

    // порядок выплат: места 1, 2, 0 (по кругу после кнопки 0)
    assert_eq!(summary.winners[0].seat, 1);
    assert_eq!(summary.winners[0].amount, Chips(34));
    assert_eq!(summary.winners[1].seat, 2);
    assert_eq!(summary.winners[1].amount, Chips(33));
    assert_eq!(summary.winners[2].seat, 0);
    assert_eq!(summary.winners[2].amount, Chips(33));

    let total: u64 = summary.winners.iter().map(|w| w.amount.0).sum();
    assert_eq!(total, 100);
}

#[test]
fn all_in_contributions_share_one_merged_pot() {
    // упрощение движка: сайд-поты не строятся, короткий all-in
    // претендует на весь банк целиком
    let mut table = make_table(&[0, 2_000]);
    let mut hand = river_hand(
        &table,
        &["2h", "7d", "9c", "Js", "Kh"],
        &[(0, ["Qc", "Qd"]), (1, ["9s", "9h"])],
        500,
        0,
    );
    hand.seats[0].as_mut().unwrap().all_in = true;
    hand.seats[0].as_mut().unwrap().total_bet = Chips(100);
    hand.seats[1].as_mut().unwrap().total_bet = Chips(400);
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = resolve_showdown(&mut table, 0).unwrap();
    // сет девяток забирает все 500, включая превышение соперника
    assert_eq!(summary.winners[0].player_id, 2);
    assert_eq!(summary.winners[0].amount, Chips(500));
}

#[test]
fn last_unfolded_player_takes_pot_without_evaluation() {
    let mut table = make_table(&[1_000, 1_000, 1_000]);
    let mut hand = river_hand(
        &table,
        &[],
        &[(0, ["Qc", "Qd"]), (1, ["9s", "9h"]), (2, ["Ac", "Ad"])],
        150,
        0,
    );
    hand.phase = Street::Preflop;
    hand.seats[0].as_mut().unwrap().folded = true;
    hand.seats[2].as_mut().unwrap().folded = true;
    table.hand = Some(hand);
    table.status = TableStatus::Playing;

    let summary = award_to_last_player(&mut table, 5).unwrap();

    assert_eq!(summary.winners.len(), 1);
    let w = &summary.winners[0];
    assert_eq!(w.player_id, 2);
    // без вскрытия ранга нет
    assert!(w.rank.is_none());
    assert_eq!(w.amount, Chips(150));
    // борд не доигрывается
    assert_eq!(summary.street_reached, Street::Preflop);
    assert!(summary.board.is_empty());
    assert_eq!(table.seats[1].as_ref().unwrap().stack, Chips(1_150));
    assert_eq!(table.status, TableStatus::HandComplete);
}
