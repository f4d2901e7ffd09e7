use crate::domain::chips::Chips;
use crate::domain::hand::{BettingRound, HandState};
use crate::domain::SeatIndex;

impl BettingRound {
    /// Новый раунд без агрессора, с заданной очередью действий.
    pub fn new(current_bet: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            current_bet,
            last_aggressor: None,
            to_act,
        }
    }

    /// Игрок походил - убираем его из очереди, если он там был.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Ставка поднята: новая целевая ставка, новый агрессор,
    /// действие переоткрывается для всех из `new_to_act`.
    pub fn on_raise(&mut self, seat: SeatIndex, new_bet: Chips, new_to_act: Vec<SeatIndex>) {
        self.current_bet = new_bet;
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act;
    }

    /// Раунд закрыт, когда действовать больше некому: все не сфолдившие
    /// и не all-in уравняли ставку, и ход вернулся к агрессору
    /// (либо без агрессии каждый походил по разу).
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}

/// Очередь на открытие улицы: активные (не folded, не all-in) участники
/// по кругу, начиная со следующего места после `after`. Само место `after`,
/// если оно активно, замыкает очередь - так большой блайнд получает
/// опцию на префлопе, а кнопка ходит последней на постфлопе.
pub fn opening_order(hand: &HandState, after: SeatIndex) -> Vec<SeatIndex> {
    let max = hand.seats.len();
    let mut order = Vec::new();
    if max == 0 {
        return order;
    }

    let mut idx = (after as usize + 1) % max;
    for _ in 0..max {
        if let Some(s) = hand.seats[idx].as_ref() {
            if !s.folded && !s.all_in {
                order.push(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }
    order
}

/// Очередь после рейза: все активные участники, кроме самого рейзера,
/// начиная со следующего места после него. Действие переоткрывается
/// даже для тех, кто уже уравнивал прежнюю ставку.
pub fn order_after_raise(hand: &HandState, raiser: SeatIndex) -> Vec<SeatIndex> {
    opening_order(hand, raiser)
        .into_iter()
        .filter(|s| *s != raiser)
        .collect()
}
