use std::cmp::Ordering;
use std::str::FromStr;

use holdem_engine::domain::{Card, Rank};
use holdem_engine::eval::{describe_rank, evaluate_best_hand, HandCategory};

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| Card::from_str(s).unwrap()).collect()
}

fn eval(hole: &[&str], board: &[&str]) -> holdem_engine::eval::HandResult {
    evaluate_best_hand(&cards(hole), &cards(board))
}

//
// категории
//
#[test]
fn high_card_is_weakest_category() {
    let r = eval(&["Ah", "Kd"], &["2c", "7s", "9h"]);
    assert_eq!(r.category, HandCategory::HighCard);
    assert_eq!(r.category as u8, 1);
    assert_eq!(r.cards[0].rank, Rank::Ace);
}

#[test]
fn one_pair_detected_with_three_kickers() {
    let r = eval(&["Ah", "Ad"], &["2c", "7s", "9h", "Jd", "4c"]);
    assert_eq!(r.category, HandCategory::OnePair);
    assert_eq!(r.cards[0].rank, Rank::Ace);
    assert_eq!(r.cards[1].rank, Rank::Ace);
    assert_eq!(r.kickers, vec![Rank::Jack, Rank::Nine, Rank::Seven]);
}

#[test]
fn two_pair_keeps_best_two_pairs_of_seven_cards() {
    let r = eval(&["Ah", "Ad"], &["Kc", "Ks", "2h", "2d", "9c"]);
    assert_eq!(r.category, HandCategory::TwoPair);
    // из трёх пар берутся две старшие, кикер - девятка
    assert_eq!(r.cards[0].rank, Rank::Ace);
    assert_eq!(r.cards[2].rank, Rank::King);
    assert_eq!(r.kickers, vec![Rank::Nine]);
}

#[test]
fn three_of_a_kind_detected() {
    let r = eval(&["9s", "9h"], &["9c", "Kd", "2h"]);
    assert_eq!(r.category, HandCategory::ThreeOfAKind);
    assert_eq!(r.cards[0].rank, Rank::Nine);
    assert_eq!(r.kickers, vec![Rank::King, Rank::Two]);
}

#[test]
fn straight_detected_with_highest_window() {
    // среди 2..8 есть стриты 2-6, 3-7, 4-8: должен победить 8-high
    let r = eval(&["2c", "3d"], &["4h", "5s", "6c", "7d", "8h"]);
    assert_eq!(r.category, HandCategory::Straight);
    assert_eq!(r.cards[0].rank, Rank::Eight);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let r = eval(&["Ac", "2d"], &["3h", "4s", "5c"]);
    assert_eq!(r.category, HandCategory::Straight);
    // туз играет как единица и уходит в хвост комбинации
    assert_eq!(r.cards[0].rank, Rank::Five);
    assert_eq!(r.cards[4].rank, Rank::Ace);

    // wheel слабее шестёрочного стрита
    let six_high = eval(&["2c", "3d"], &["4h", "5s", "6c"]);
    assert_eq!(six_high.cmp(&r), Ordering::Greater);
}

#[test]
fn flush_detected_with_descending_kickers() {
    let r = eval(&["Ah", "4h"], &["9h", "Jh", "2h", "Kc", "Ks"]);
    assert_eq!(r.category, HandCategory::Flush);
    assert_eq!(r.cards[0].rank, Rank::Ace);
    assert_eq!(r.kickers, vec![Rank::Jack, Rank::Nine, Rank::Four, Rank::Two]);
}

#[test]
fn full_house_prefers_higher_trips() {
    let r = eval(&["9s", "9h"], &["9c", "8d", "8h", "8c", "2s"]);
    assert_eq!(r.category, HandCategory::FullHouse);
    // два сета: старший идёт тройкой, младший - парой
    assert_eq!(r.cards[0].rank, Rank::Nine);
    assert_eq!(r.cards[3].rank, Rank::Eight);
}

#[test]
fn four_of_a_kind_with_best_kicker() {
    let r = eval(&["7s", "7h"], &["7c", "7d", "Kh", "2c", "3d"]);
    assert_eq!(r.category, HandCategory::FourOfAKind);
    assert_eq!(r.cards[0].rank, Rank::Seven);
    assert_eq!(r.kickers, vec![Rank::King]);
}

#[test]
fn straight_flush_beats_four_of_a_kind() {
    let sf = eval(&["5h", "6h"], &["7h", "8h", "9h"]);
    assert_eq!(sf.category, HandCategory::StraightFlush);
    assert_eq!(sf.cards[0].rank, Rank::Nine);

    let quads = eval(&["7s", "7h"], &["7c", "7d", "Kh"]);
    assert!(sf > quads);
}

#[test]
fn steel_wheel_is_straight_flush_not_royal() {
    let r = eval(&["Ac", "2c"], &["3c", "4c", "5c"]);
    assert_eq!(r.category, HandCategory::StraightFlush);
    assert_eq!(r.cards[0].rank, Rank::Five);
}

#[test]
fn royal_flush_is_category_ten() {
    let r = eval(&["Ts", "Js"], &["Qs", "Ks", "As"]);
    assert_eq!(r.category, HandCategory::RoyalFlush);
    assert_eq!(r.category as u8, 10);
    assert_eq!(describe_rank(r.rank()), "Royal flush");
}

//
// абсолютный порядок категорий
//
#[test]
fn any_pair_beats_any_high_card() {
    // худшая пара против лучшей старшей карты
    let pair = eval(&["2c", "2d"], &["3h", "4s", "5c", "7d", "8h"]);
    let high = eval(&["Ah", "Kd"], &["Qc", "Js", "9h", "2s", "3c"]);
    assert_eq!(pair.category, HandCategory::OnePair);
    assert_eq!(high.category, HandCategory::HighCard);
    assert!(pair > high);
}

#[test]
fn category_ladder_is_strict() {
    let ladder = [
        eval(&["Ah", "Kd"], &["2c", "7s", "9h"]),          // high card
        eval(&["2c", "2d"], &["3h", "7s", "9h"]),          // pair
        eval(&["2c", "2d"], &["3h", "3s", "9h"]),          // two pair
        eval(&["2c", "2d"], &["2h", "7s", "9h"]),          // trips
        eval(&["2c", "3d"], &["4h", "5s", "6c"]),          // straight
        eval(&["2h", "7h"], &["9h", "Jh", "Kh"]),          // flush
        eval(&["2c", "2d"], &["2h", "3s", "3c"]),          // full house
        eval(&["2c", "2d"], &["2h", "2s", "9h"]),          // quads
        eval(&["2h", "3h"], &["4h", "5h", "6h"]),          // straight flush
        eval(&["Ts", "Js"], &["Qs", "Ks", "As"]),          // royal flush
    ];

    for pair in ladder.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

//
// тай-брейки
//
#[test]
fn comparing_a_hand_with_itself_is_a_tie() {
    let r = eval(&["Qc", "Qd"], &["2h", "7d", "9c", "Js", "Kh"]);
    assert_eq!(r.cmp(&r), Ordering::Equal);
    assert_eq!(r, r.clone());
}

#[test]
fn suits_do_not_break_ties() {
    let hearts = eval(&["Ah", "Kh"], &["2c", "7s", "9d"]);
    let spades = eval(&["As", "Ks"], &["2d", "7c", "9h"]);
    assert_eq!(hearts.cmp(&spades), Ordering::Equal);
}

#[test]
fn pair_ties_break_by_kickers_in_order() {
    let king_kicker = eval(&["Ah", "Ad"], &["Kc", "7s", "2h"]);
    let queen_kicker = eval(&["As", "Ac"], &["Qc", "7d", "2s"]);
    assert!(king_kicker > queen_kicker);

    let same = eval(&["As", "Ac"], &["Kd", "7h", "2d"]);
    assert_eq!(king_kicker.cmp(&same), Ordering::Equal);
}

#[test]
fn two_pair_ties_break_top_pair_then_second_then_kicker() {
    let aces_kings = eval(&["Ah", "Ad"], &["Kc", "Ks", "2h"]);
    let aces_queens = eval(&["As", "Ac"], &["Qc", "Qs", "2d"]);
    assert!(aces_kings > aces_queens);

    let aces_kings_better_kicker = eval(&["As", "Ac"], &["Kd", "Kh", "9h"]);
    assert!(aces_kings_better_kicker > aces_kings);
}

#[test]
fn full_house_ties_break_by_trips_then_pair() {
    let nines_over_kings = eval(&["9s", "9h"], &["9c", "Kd", "Kh"]);
    let eights_over_aces = eval(&["8s", "8h"], &["8c", "Ad", "Ah"]);
    // тройка важнее пары
    assert!(nines_over_kings > eights_over_aces);
}

#[test]
fn flush_ties_break_by_all_five_cards() {
    let ace_high = eval(&["Ah", "4h"], &["9h", "Jh", "2h"]);
    let king_high = eval(&["Kh", "4h"], &["9h", "Jh", "2h"]);
    assert!(ace_high > king_high);
}

//
// окна из 6-7 карт
//
#[test]
fn best_five_of_seven_prefers_flush_over_straight() {
    // и стрит, и флеш доступны - флеш сильнее
    let r = eval(&["6h", "7h"], &["8h", "9c", "Th", "2h", "3d"]);
    assert_eq!(r.category, HandCategory::Flush);
}

#[test]
fn packed_rank_roundtrips_category_and_ranks() {
    let r = eval(&["Qc", "Qd"], &["2h", "7d", "9c", "Js", "Kh"]);
    let packed = r.rank();
    assert_eq!(packed.category(), HandCategory::OnePair);
    let ranks = packed.ranks();
    assert_eq!(ranks[0], Rank::Queen);
    assert_eq!(ranks[1], Rank::Queen);
    assert_eq!(ranks[2], Rank::King);
}
