use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// 13 бит (от 2 до A): бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    // Rank::Two = 2, поэтому двойка ложится в бит 0.
    1u16 << ((rank as u8) - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let idx = (ranks[i] as u8) - 2;
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Маски всех возможных стритов (5 подряд), от wheel до broadway.
///
/// Индексация по старшей карте стрита:
///   0: A2345 (wheel, старшая - пятёрка)
///   1: 23456
///   ...
///   9: TJQKA (broadway)
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Найти стрит в маске рангов. Возвращает старшую карту стрита.
///
/// Проверка идёт от broadway вниз, так что при нескольких стритах
/// побеждает старший. Особый случай: wheel (A2345) -> Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    for (i, sm) in STRAIGHT_MASKS.iter().enumerate().rev() {
        if rank_mask & sm == *sm {
            // индекс 0 = wheel со старшей пятёркой, дальше по порядку
            return Some(Rank::from_value(i as u8 + 5));
        }
    }
    None
}
