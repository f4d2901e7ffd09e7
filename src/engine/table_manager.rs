use std::collections::HashMap;

use crate::domain::chips::Chips;
use crate::domain::player::{PlayerProfile, Seat};
use crate::domain::table::{SeatIndex, Table, TableConfig, TableStatus};
use crate::domain::{PlayerId, TableId, Timestamp};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{self, HandStatus};
use crate::engine::showdown;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::time_ctrl;

/// Ошибки уровня координатора столов (над движком одной раздачи).
#[derive(Debug)]
pub enum ManagerError {
    /// Стол с таким ID не найден.
    TableNotFound(TableId),

    /// Свободных мест нет.
    TableFull(TableId),

    /// Посадка со стеком меньше большого блайнда бессмысленна.
    BuyInTooSmall { required: Chips },

    /// Проброшенная ошибка движка.
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Координатор столов:
/// - хранит столы по TableId и общий конфиг для новых столов;
/// - сажает и убирает игроков;
/// - по тикам внешнего планировщика гоняет таймауты ходов,
///   паузы между раздачами и авто-старт следующих раздач.
pub struct TableManager {
    tables: HashMap<TableId, Table>,
    default_config: TableConfig,
}

impl TableManager {
    pub fn new(default_config: TableConfig) -> Self {
        Self {
            tables: HashMap::new(),
            default_config,
        }
    }

    pub fn default_config(&self) -> &TableConfig {
        &self.default_config
    }

    /// Добавить стол под его TableId. Существующий стол с тем же id заменяется.
    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(table.id, table);
    }

    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables.contains_key(&table_id)
    }

    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.get(&table_id)
    }

    pub fn table_mut(&mut self, table_id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(&table_id)
    }

    /// Все столы (для лобби), в порядке возрастания id.
    pub fn tables(&self) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self.tables.values().collect();
        tables.sort_by_key(|t| t.id);
        tables
    }

    /// Посадить игрока за конкретный стол: свободное место с минимальным
    /// индексом. Повторный запрос от уже сидящего игрока идемпотентен -
    /// возвращается его текущее место.
    pub fn seat_player(
        &mut self,
        table_id: TableId,
        profile: &PlayerProfile,
        buy_in: Chips,
        now: Timestamp,
    ) -> Result<SeatIndex, ManagerError> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        if let Some(seat) = table.seat_of(profile.id) {
            return Ok(seat);
        }
        if buy_in < table.config.stakes.big_blind {
            return Err(ManagerError::BuyInTooSmall {
                required: table.config.stakes.big_blind,
            });
        }

        let index = table
            .first_free_seat()
            .ok_or(ManagerError::TableFull(table_id))?;
        table.seats[index as usize] = Some(Seat::new(profile, buy_in, now));
        Ok(index)
    }

    /// Посадить игрока за первый стол со свободным местом.
    /// Когда свободных мест нет нигде, создаётся новый стол
    /// с конфигом по умолчанию.
    pub fn seat_anywhere(
        &mut self,
        profile: &PlayerProfile,
        buy_in: Chips,
        ids: &IdGenerator,
        now: Timestamp,
    ) -> Result<(TableId, SeatIndex), ManagerError> {
        // Уже где-то сидит - идемпотентный ответ.
        let existing = self
            .tables()
            .iter()
            .find_map(|t| t.seat_of(profile.id).map(|s| (t.id, s)));
        if let Some(found) = existing {
            return Ok(found);
        }

        let free_table = self
            .tables()
            .iter()
            .find(|t| t.first_free_seat().is_some())
            .map(|t| t.id);

        let table_id = match free_table {
            Some(id) => id,
            None => {
                let id = ids.next_table_id();
                let name = format!("Table {id}");
                self.add_table(Table::new(id, name, self.default_config.clone()));
                id
            }
        };

        let seat = self.seat_player(table_id, profile, buy_in, now)?;
        Ok((table_id, seat))
    }

    /// Убрать игрока со стола. Если по нему идёт раздача - сперва
    /// неявный fold, затем место освобождается.
    pub fn unseat_player(
        &mut self,
        table_id: TableId,
        player_id: PlayerId,
        now: Timestamp,
    ) -> Result<(), ManagerError> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let Some(seat) = table.seat_of(player_id) else {
            // Уже не сидит - считаем выполненным.
            return Ok(());
        };

        if table.status == TableStatus::Playing {
            let in_hand = table
                .hand
                .as_ref()
                .and_then(|h| h.seat_in_hand(seat))
                .map(|s| !s.folded)
                .unwrap_or(false);
            if in_hand {
                let last_left = table
                    .hand
                    .as_ref()
                    .map(|h| h.unfolded_count() <= 1)
                    .unwrap_or(false);
                if last_left {
                    // Уходит последний претендент - раздача закрывается
                    // в его пользу, и только потом место освобождается.
                    showdown::award_to_last_player(table, now)?;
                } else {
                    game_loop::force_fold(table, player_id, now)?;
                }
            }
        }

        table.seats[seat as usize] = None;
        Ok(())
    }

    /// Запустить раздачу на столе.
    pub fn start_hand<R: RandomSource>(
        &mut self,
        table_id: TableId,
        rng: &mut R,
        now: Timestamp,
    ) -> Result<HandStatus, ManagerError> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;
        Ok(game_loop::start_hand(table, rng, now)?)
    }

    /// Применить действие игрока.
    pub fn apply_action(
        &mut self,
        table_id: TableId,
        action: PlayerAction,
        now: Timestamp,
    ) -> Result<HandStatus, ManagerError> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;
        Ok(game_loop::apply_action(table, action, now)?)
    }

    /// Один тик внешнего планировщика для стола:
    /// - во время раздачи: авто-fold просроченного хода;
    /// - после раздачи: по истечении паузы убрать обанкротившиеся места
    ///   и запустить следующую раздачу, если игроков хватает;
    /// - в ожидании: запустить раздачу, как только игроков достаточно.
    pub fn tick<R: RandomSource>(
        &mut self,
        table_id: TableId,
        rng: &mut R,
        now: Timestamp,
    ) -> Result<(), ManagerError> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        match table.status {
            TableStatus::Playing => {
                game_loop::auto_fold_expired(table, now)?;
            }

            TableStatus::HandComplete => {
                let due = table
                    .hand
                    .as_ref()
                    .and_then(|h| h.finished_at)
                    .map(|fin| time_ctrl::next_hand_due(&table.config.time, fin, now))
                    .unwrap_or(true);
                if due {
                    finish_break(table, rng, now)?;
                }
            }

            TableStatus::Waiting => {
                if table.funded_count() >= table.config.min_players {
                    game_loop::start_hand(table, rng, now)?;
                }
            }
        }

        Ok(())
    }
}

/// Пауза между раздачами закончилась: выплаты уже сделаны, осталось
/// убрать места со стеком меньше большого блайнда и стартовать дальше.
fn finish_break<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    now: Timestamp,
) -> Result<(), ManagerError> {
    let big_blind = table.config.stakes.big_blind;
    for seat in table.seats.iter_mut() {
        if seat.as_ref().map(|s| s.stack < big_blind).unwrap_or(false) {
            *seat = None;
        }
    }

    table.hand = None;

    if table.funded_count() >= table.config.min_players {
        game_loop::start_hand(table, rng, now)?;
    } else {
        table.status = TableStatus::Waiting;
    }
    Ok(())
}
