use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerProfile;
use crate::domain::table::{Table, TableConfig};
use crate::domain::{PlayerId, TableId, Timestamp};
use crate::engine::actions::PlayerAction;
use crate::engine::game_loop::HandStatus;
use crate::engine::table_manager::TableManager;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

use super::dto::{map_hand_summary, CommandResponse};
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда верхнего уровня - всё, что меняет состояние столов.
/// Запросы "только чтение" живут отдельно (queries.rs).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новый стол.
    CreateTable(CreateTableCommand),

    /// Посадить игрока (за конкретный стол или за любой свободный).
    JoinTable(JoinTableCommand),

    /// Убрать игрока со стола (с неявным fold, если идёт раздача).
    LeaveTable(LeaveTableCommand),

    /// Запустить раздачу.
    StartHand(StartHandCommand),

    /// Действие игрока в раздаче.
    PlayerAction(PlayerActionCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTableCommand {
    pub table_id: TableId,
    pub name: String,
    pub config: TableConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JoinTableCommand {
    /// None = посадить за первый стол со свободным местом
    /// (или создать новый, если всё занято).
    pub table_id: Option<TableId>,
    pub player: PlayerProfile,
    /// None = стек по умолчанию из конфига стола.
    pub buy_in: Option<Chips>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaveTableCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartHandCommand {
    pub table_id: TableId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerActionCommand {
    pub table_id: TableId,
    pub action: PlayerAction,
}

/// Применить команду к координатору столов.
///
/// `now` и `rng` подаются снаружи: api, как и движок, сам не добывает
/// ни время, ни случайность. Любая ошибка означает, что состояние
/// столов не изменилось.
pub fn execute<R: RandomSource>(
    manager: &mut TableManager,
    ids: &IdGenerator,
    rng: &mut R,
    now: Timestamp,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateTable(cmd) => {
            if manager.has_table(cmd.table_id) {
                return Err(ApiError::InvalidCommand(format!(
                    "Стол {} уже существует",
                    cmd.table_id
                )));
            }
            let table = Table::new(cmd.table_id, cmd.name, cmd.config);
            manager.add_table(table);
            let table = manager
                .table(cmd.table_id)
                .ok_or_else(|| ApiError::Internal("стол пропал после создания".into()))?;
            Ok(CommandResponse::TableCreated(build_table_view(
                table, None, now,
            )))
        }

        Command::JoinTable(cmd) => {
            let buy_in = cmd
                .buy_in
                .unwrap_or(manager.default_config().default_buy_in);
            let (table_id, seat) = match cmd.table_id {
                Some(id) => (id, manager.seat_player(id, &cmd.player, buy_in, now)?),
                None => manager.seat_anywhere(&cmd.player, buy_in, ids, now)?,
            };
            Ok(CommandResponse::Seated {
                table_id,
                seat,
            })
        }

        Command::LeaveTable(cmd) => {
            manager.unseat_player(cmd.table_id, cmd.player_id, now)?;
            Ok(CommandResponse::Ok)
        }

        Command::StartHand(cmd) => {
            let status = manager.start_hand(cmd.table_id, rng, now)?;
            respond_with_status(manager, cmd.table_id, status, now)
        }

        Command::PlayerAction(cmd) => {
            let status = manager.apply_action(cmd.table_id, cmd.action, now)?;
            respond_with_status(manager, cmd.table_id, status, now)
        }
    }
}

/// Собрать ответ по статусу раздачи: просто состояние стола
/// либо состояние + итог завершившейся раздачи.
fn respond_with_status(
    manager: &TableManager,
    table_id: TableId,
    status: HandStatus,
    now: Timestamp,
) -> Result<CommandResponse, ApiError> {
    let table = manager
        .table(table_id)
        .ok_or(ApiError::TableNotFound(table_id))?;
    let view = build_table_view(table, None, now);

    match status {
        HandStatus::Ongoing => Ok(CommandResponse::TableState(view)),
        HandStatus::Finished(summary) => Ok(CommandResponse::HandFinished {
            table: view,
            summary: map_hand_summary(table, &summary),
        }),
    }
}
