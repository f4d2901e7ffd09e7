use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, Timestamp};

/// Профиль игрока: внешняя идентичность + отображаемое имя.
/// Проверку credential'ов делает провайдер идентичности (infra), не домен.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

/// Занятое место за столом: кто сидит, сколько фишек, когда сел.
/// Данные конкретной раздачи живут отдельно (см. `SeatInHand`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub player_id: PlayerId,
    pub name: String,
    /// Текущий стек за столом.
    pub stack: Chips,
    pub seated_at: Timestamp,
}

impl Seat {
    pub fn new(profile: &PlayerProfile, stack: Chips, seated_at: Timestamp) -> Self {
        Self {
            player_id: profile.id,
            name: profile.name.clone(),
            stack,
            seated_at,
        }
    }
}
