use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::table::Table;
use crate::domain::{PlayerId, TableId};

/// Учётная запись игрока: баланс и ссылка на стол, за которым он сидит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub current_table: Option<TableId>,
}

/// Абстракция хранилища: по одной записи на стол и на игрока.
///
/// Движку важно только одно свойство: запись стола читается и пишется
/// атомарно, а конкурентные действия по одному столу сериализует
/// внешний слой. Сам движок этим не занимается.
pub trait Storage {
    fn load_table(&self, id: TableId) -> Option<Table>;

    fn save_table(&mut self, table: &Table);

    fn load_account(&self, id: PlayerId) -> Option<Account>;

    fn save_account(&mut self, account: &Account);
}

/// In-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tables: HashMap<TableId, Table>,
    accounts: HashMap<PlayerId, Account>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn load_table(&self, id: TableId) -> Option<Table> {
        self.tables.get(&id).cloned()
    }

    fn save_table(&mut self, table: &Table) {
        self.tables.insert(table.id, table.clone());
    }

    fn load_account(&self, id: PlayerId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    fn save_account(&mut self, account: &Account) {
        self.accounts.insert(account.player_id, account.clone());
    }
}
