use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandResult};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Главная функция: лучшая 5-карточная комбинация из hole + board.
///
/// Ожидается:
///   - `hole.len() == 2`
///   - `board.len()` от 3 до 5 (обычно 5)
///
/// Корректно работает для любых 5-7 карт без дубликатов.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandResult {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&all_cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт"
    );

    best_of_all_5card_windows(&all_cards)
}

/// Перебор всех C(n,5) окон из N карт (N=5-7), выбираем сильнейшее.
/// При нескольких стритах/флешах в разных окнах победит старшее окно.
fn best_of_all_5card_windows(cards: &[Card]) -> HandResult {
    let n = cards.len();
    let mut best: Option<HandResult> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let result = evaluate_5card_hand(&five);
                        if best.as_ref().map_or(true, |br| result > *br) {
                            best = Some(result);
                        }
                    }
                }
            }
        }
    }

    best.expect("окон C(n,5) при n >= 5 всегда хотя бы одно")
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_5card_hand(cards: &[Card; 5]) -> HandResult {
    // копия по убыванию ранга - базовый порядок для кикеров
    let mut sorted = *cards;
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards.iter() {
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(rank_mask);

    // Стрит-флеш и роял проверяются раньше всего остального.
    if is_flush {
        if let Some(high) = straight_high {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandResult {
                category,
                cards: straight_order(&sorted, high),
                kickers: Vec::new(),
            };
        }
    }

    // Группы рангов: (ранг, сколько раз), сортировка по количеству,
    // затем по рангу - обе по убыванию.
    let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for v in (2u8..=14).rev() {
        let count = rank_counts[v as usize];
        if count > 0 {
            groups.push((Rank::from_value(v), count));
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    // pattern вида [4,1], [3,2], [3,1,1], [2,2,1], [2,1,1,1], [1,1,1,1,1]
    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();

    match pattern.as_slice() {
        [4, 1] => HandResult {
            category: HandCategory::FourOfAKind,
            cards: cards_by_groups(&sorted, &groups),
            kickers: vec![groups[1].0],
        },
        [3, 2] => HandResult {
            category: HandCategory::FullHouse,
            cards: cards_by_groups(&sorted, &groups),
            kickers: Vec::new(),
        },
        _ if is_flush => HandResult {
            category: HandCategory::Flush,
            cards: sorted,
            kickers: sorted[1..].iter().map(|c| c.rank).collect(),
        },
        _ if straight_high.is_some() => {
            let high = straight_high.expect("проверено строкой выше");
            HandResult {
                category: HandCategory::Straight,
                cards: straight_order(&sorted, high),
                kickers: Vec::new(),
            }
        }
        [3, 1, 1] => HandResult {
            category: HandCategory::ThreeOfAKind,
            cards: cards_by_groups(&sorted, &groups),
            kickers: vec![groups[1].0, groups[2].0],
        },
        [2, 2, 1] => HandResult {
            category: HandCategory::TwoPair,
            cards: cards_by_groups(&sorted, &groups),
            kickers: vec![groups[2].0],
        },
        [2, 1, 1, 1] => HandResult {
            category: HandCategory::OnePair,
            cards: cards_by_groups(&sorted, &groups),
            kickers: vec![groups[1].0, groups[2].0, groups[3].0],
        },
        _ => HandResult {
            category: HandCategory::HighCard,
            cards: sorted,
            kickers: sorted[1..].iter().map(|c| c.rank).collect(),
        },
    }
}

/// Выложить пятёрку в каноническом порядке: группы по убыванию
/// (размер, потом ранг), внутри группы - как в отсортированной пятёрке.
fn cards_by_groups(sorted: &[Card; 5], groups: &[(Rank, u8)]) -> [Card; 5] {
    let mut out = [sorted[0]; 5];
    let mut i = 0;
    for (rank, _) in groups {
        for card in sorted.iter().filter(|c| c.rank == *rank) {
            out[i] = *card;
            i += 1;
        }
    }
    out
}

/// Стрит в игровом порядке от старшей карты.
/// Для wheel (A2345) туз уходит в конец: 5,4,3,2,A.
fn straight_order(sorted: &[Card; 5], high: Rank) -> [Card; 5] {
    if high == Rank::Five {
        // по убыванию это [A,5,4,3,2] - сдвигаем туз в хвост
        [sorted[1], sorted[2], sorted[3], sorted[4], sorted[0]]
    } else {
        *sorted
    }
}
