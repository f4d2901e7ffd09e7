use crate::domain::chips::Chips;
use crate::domain::hand::{BettingRound, SeatInHand};
use crate::engine::actions::ActionKind;
use crate::engine::errors::EngineError;

/// Проверить, допустимо ли действие при текущем раунде ставок.
/// Ничего не мутирует: либо Ok, либо причина отказа.
///
/// Правила для ставки игрока B и целевой ставки C:
///   - fold всегда можно;
///   - check только при B == C;
///   - call только при C > B (недостающее спишется с учётом стека);
///   - raise до R только при R > C.
pub fn validate_action(
    seat: &SeatInHand,
    kind: &ActionKind,
    betting: &BettingRound,
) -> Result<(), EngineError> {
    // Сфолдившие и all-in в очередь не попадают, но проверка обязана
    // быть полной: действие отклоняется целиком, без частичных мутаций.
    if seat.folded || seat.all_in {
        return Err(EngineError::IllegalAction);
    }

    match kind {
        ActionKind::Fold => Ok(()),

        ActionKind::Check => {
            if seat.round_bet == betting.current_bet {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        ActionKind::Call => {
            if betting.current_bet > seat.round_bet {
                Ok(())
            } else {
                Err(EngineError::CannotCall)
            }
        }

        ActionKind::Raise(total) => {
            if *total > betting.current_bet {
                Ok(())
            } else {
                Err(EngineError::RaiseTooLow(*total))
            }
        }
    }
}

/// Сколько фишек не хватает игроку до уравнивания текущей ставки.
pub fn to_call(seat: &SeatInHand, betting: &BettingRound) -> Chips {
    if betting.current_bet <= seat.round_bet {
        Chips::ZERO
    } else {
        betting.current_bet - seat.round_bet
    }
}
