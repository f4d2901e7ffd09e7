use crate::domain::table::{SeatIndex, Table};

/// Следующее место с фишками по кругу (с учётом или без учёта стартового).
pub fn next_funded_seat(table: &Table, start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    let max = table.seats.len();
    if max == 0 {
        return None;
    }

    let mut idx = start as usize % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if let Some(seat) = table.seats[idx].as_ref() {
            if !seat.stack.is_zero() {
                return Some(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Места с фишками по кругу, начиная с `start` (включительно).
/// Это порядок раздачи карманных карт и рассадка блайндов.
pub fn funded_seats_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    let max = table.seats.len();
    let mut seats = Vec::new();
    if max == 0 {
        return seats;
    }

    let mut idx = start as usize % max;
    for _ in 0..max {
        if let Some(seat) = table.seats[idx].as_ref() {
            if !seat.stack.is_zero() {
                seats.push(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    seats
}

/// Следующая позиция кнопки дилера:
/// - если кнопка уже была - следующее место с фишками после неё (по кругу);
/// - если нет - первое место с фишками.
/// Места без фишек кнопку не получают.
pub fn next_dealer(table: &Table) -> Option<SeatIndex> {
    match table.dealer_button {
        Some(button) => next_funded_seat(table, button, false),
        None => next_funded_seat(table, 0, true),
    }
}
