use std::collections::HashMap;

use thiserror::Error;

use crate::domain::player::PlayerProfile;

/// Ошибка проверки идентичности.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Неизвестный credential")]
    UnknownCredential,
}

/// Провайдер идентичности: внешний credential превращается в профиль
/// игрока (идентичность + отображаемое имя) либо в отказ.
/// Как именно проверяется credential - забота реализации, не движка.
pub trait IdentityProvider {
    fn authenticate(&self, credential: &str) -> Result<PlayerProfile, IdentityError>;
}

/// Статический провайдер: фиксированная таблица токенов.
/// Используется в тестах и dev CLI.
#[derive(Debug, Default)]
pub struct StaticIdentityProvider {
    players: HashMap<String, PlayerProfile>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, credential: impl Into<String>, profile: PlayerProfile) {
        self.players.insert(credential.into(), profile);
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn authenticate(&self, credential: &str) -> Result<PlayerProfile, IdentityError> {
        self.players
            .get(credential)
            .cloned()
            .ok_or(IdentityError::UnknownCredential)
    }
}
