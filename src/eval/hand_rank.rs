use std::cmp::Ordering;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе, порядковые номера 1..10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    /// Стрит-флеш со старшим тузом.
    RoyalFlush = 10,
}

/// Лучшая 5-карточная комбинация: категория, сами карты и кикеры.
#[derive(Clone, Debug)]
pub struct HandResult {
    pub category: HandCategory,
    /// Ровно 5 карт комбинации: сначала определяющие категорию,
    /// затем кикеры, внутри групп по убыванию ранга.
    pub cards: [Card; 5],
    /// Ранги кикеров по убыванию. Пусто, если категорию определяют все 5 карт.
    pub kickers: Vec<Rank>,
}

impl HandResult {
    /// Упаковать в сравнимый ключ (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Ранги 2..14 влезают в 4 бита, категории 1..10 тоже.
    pub fn rank(&self) -> HandRank {
        let mut value = (self.category as u32 & 0x0F) << 20;
        for (i, card) in self.cards.iter().enumerate() {
            value |= (card.rank as u32 & 0x0F) << (16 - 4 * i as u32);
        }
        HandRank(value)
    }
}

// Сравнение только по рангам: масти на силу руки не влияют,
// поэтому равенство по упакованному ключу = сплит.
impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl HandRank {
    /// Вытащить категорию из упакованного значения.
    pub fn category(self) -> HandCategory {
        match (self.0 >> 20) & 0x0F {
            1 => HandCategory::HighCard,
            2 => HandCategory::OnePair,
            3 => HandCategory::TwoPair,
            4 => HandCategory::ThreeOfAKind,
            5 => HandCategory::Straight,
            6 => HandCategory::Flush,
            7 => HandCategory::FullHouse,
            8 => HandCategory::FourOfAKind,
            9 => HandCategory::StraightFlush,
            10 => HandCategory::RoyalFlush,
            _ => HandCategory::HighCard,
        }
    }

    /// Пять рангов комбинации, от старшего к младшему.
    pub fn ranks(self) -> [Rank; 5] {
        [
            Rank::from_value(((self.0 >> 16) & 0x0F) as u8),
            Rank::from_value(((self.0 >> 12) & 0x0F) as u8),
            Rank::from_value(((self.0 >> 8) & 0x0F) as u8),
            Rank::from_value(((self.0 >> 4) & 0x0F) as u8),
            Rank::from_value((self.0 & 0x0F) as u8),
        ]
    }
}

/// Человекочитаемое имя категории.
pub fn describe_rank(rank: HandRank) -> &'static str {
    match rank.category() {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
        HandCategory::RoyalFlush => "Royal flush",
    }
}
