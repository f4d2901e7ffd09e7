//! Движок столов техасского холдема для автоматических игроков.
//!
//! Ядро - чистые функции переходов над агрегатом `Table`:
//! текущее состояние + одно действие + `now` дают следующее состояние.
//! Движок не владеет ни временем, ни случайностью, ни хранилищем:
//! всё это подаётся снаружи (см. `infra` и `time_ctrl`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;
