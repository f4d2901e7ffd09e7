use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TableId};
use crate::engine::table_manager::ManagerError;
use crate::engine::EngineError;

/// Ошибки внешнего API - то, что отдаётся клиенту.
/// Любая из них означает, что состояние столов не изменилось.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Стол не найден.
    TableNotFound(TableId),

    /// Свободных мест за столом нет.
    TableFull(TableId),

    /// Игрок не найден за столом.
    PlayerNotAtTable(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (очередь хода, легальность действия).
    Engine(String),

    /// Внутренняя ошибка сервиса.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::PlayerNotAtTable(id) => ApiError::PlayerNotAtTable(id),
            other => ApiError::Engine(other.to_string()),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::TableNotFound(id) => ApiError::TableNotFound(id),
            ManagerError::TableFull(id) => ApiError::TableFull(id),
            ManagerError::BuyInTooSmall { required } => ApiError::InvalidCommand(format!(
                "Для посадки нужен стек не меньше большого блайнда ({required})"
            )),
            ManagerError::Engine(e) => e.into(),
        }
    }
}
