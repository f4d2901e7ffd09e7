// Dev CLI: несколько автоматических игроков садятся за стол и играют
// подряд несколько раздач через публичный API движка. Время здесь
// симулированное: каждый виток цикла - одна "секунда" планировщика.

use holdem_engine::api::{
    execute, run_query, Command, CommandResponse, JoinTableCommand, PlayerActionCommand, Query,
    QueryResponse, TableViewDto, ValidActionDto,
};
use holdem_engine::domain::{PlayerId, TableConfig, TableId, Timestamp};
use holdem_engine::engine::{ActionKind, PlayerAction, TableManager};
use holdem_engine::infra::{IdGenerator, IdentityProvider, StaticIdentityProvider, SystemRng};

const HANDS_TO_PLAY: u64 = 3;

fn main() {
    println!("holdem_dev_cli: стартуем стол с автоматическими игроками");

    let ids = IdGenerator::new();
    let mut rng = SystemRng::default();
    let mut manager = TableManager::new(TableConfig::standard());

    // Провайдер идентичности: фиксированные токены ботов.
    let mut auth = StaticIdentityProvider::new();
    for (token, name) in [
        ("token-alice", "Alice"),
        ("token-bob", "Bob"),
        ("token-carol", "Carol"),
        ("token-dave", "Dave"),
    ] {
        let profile = holdem_engine::domain::PlayerProfile {
            id: ids.next_player_id(),
            name: name.to_string(),
        };
        auth.register(token, profile);
    }

    let mut now: Timestamp = 1_700_000_000;
    let mut table_id: TableId = 0;

    // Посадка: каждый бот проходит через credential -> профиль -> место.
    for token in ["token-alice", "token-bob", "token-carol", "token-dave"] {
        let profile = auth
            .authenticate(token)
            .expect("токен зарегистрирован строкой выше");
        let response = execute(
            &mut manager,
            &ids,
            &mut rng,
            now,
            Command::JoinTable(JoinTableCommand {
                table_id: None,
                player: profile.clone(),
                buy_in: None,
            }),
        )
        .expect("посадка за пустой стол не может отказать");

        if let CommandResponse::Seated { table_id: id, seat } = response {
            table_id = id;
            println!("[CLI] {} сел за стол {} на место {}", profile.name, id, seat);
        }
    }

    // Каждому боту дадим по одному рейзу за сессию, чтобы раздачи
    // не сводились к чистым check/call.
    let mut raises_left: u64 = 2;
    let mut hands_finished: u64 = 0;
    let mut last_phase = None;

    for _ in 0..2_000 {
        if hands_finished >= HANDS_TO_PLAY {
            break;
        }

        manager
            .tick(table_id, &mut rng, now)
            .expect("tick по существующему столу");

        let observer = query_table(&manager, table_id, None, now);
        if observer.phase != last_phase {
            last_phase = observer.phase;
            if let Some(phase) = observer.phase {
                println!(
                    "[CLI] Раздача {:?}: улица {:?}, банк {}, борд {:?}",
                    observer.hand_no,
                    phase,
                    observer.pot,
                    observer.board.iter().map(|c| c.to_string()).collect::<Vec<_>>()
                );
            }
        }

        if let Some(turn_seat) = observer.turn_seat {
            let player_id = observer
                .seats
                .iter()
                .find(|s| s.seat_index == turn_seat)
                .map(|s| s.player_id)
                .expect("очередь всегда у занятого места");

            let hero_view = query_table(&manager, table_id, Some(player_id), now);
            let action = choose_action(&hero_view, &mut raises_left);
            let response = execute(
                &mut manager,
                &ids,
                &mut rng,
                now,
                Command::PlayerAction(PlayerActionCommand {
                    table_id,
                    action: PlayerAction {
                        player_id,
                        kind: action,
                    },
                }),
            );

            match response {
                Ok(CommandResponse::HandFinished { summary, .. }) => {
                    hands_finished += 1;
                    println!(
                        "[CLI] Раздача {} завершена на {:?}, банк {}",
                        summary.hand_no, summary.street_reached, summary.total_pot
                    );
                    for w in &summary.winners {
                        println!(
                            "[CLI]   победитель: {} (место {}), выигрыш {}, рука: {}",
                            w.name,
                            w.seat_index,
                            w.amount,
                            w.hand_name.as_deref().unwrap_or("без вскрытия")
                        );
                    }
                }
                Ok(_) => {}
                Err(e) => println!("[CLI] ОШИБКА действия: {e:?}"),
            }
        }

        now += 1;
    }

    // Финальный снимок стола - то, что ушло бы клиенту.
    let final_view = query_table(&manager, table_id, None, now);
    println!();
    println!("[CLI] Итоговые стеки:");
    for seat in &final_view.seats {
        println!("[CLI]   {} (место {}): {}", seat.name, seat.seat_index, seat.stack);
    }
    let snapshot = serde_json::to_string_pretty(&final_view)
        .expect("вид стола сериализуем по построению");
    println!();
    println!("[CLI] JSON-снимок стола:");
    println!("{snapshot}");
}

fn query_table(
    manager: &TableManager,
    table_id: TableId,
    viewer: Option<PlayerId>,
    now: Timestamp,
) -> TableViewDto {
    match run_query(manager, now, Query::GetTable { table_id, viewer }) {
        Ok(QueryResponse::Table(view)) => view,
        other => panic!("неожиданный ответ на GetTable: {other:?}"),
    }
}

/// Нехитрая стратегия бота: пара рейзов на сессию, дальше
/// check, когда можно, и call, когда нельзя.
fn choose_action(view: &TableViewDto, raises_left: &mut u64) -> ActionKind {
    let can_check = view
        .valid_actions
        .iter()
        .any(|a| matches!(a, ValidActionDto::Check));
    let can_raise = view
        .valid_actions
        .iter()
        .any(|a| matches!(a, ValidActionDto::Raise { .. }));

    if can_raise && *raises_left > 0 && can_check {
        *raises_left -= 1;
        return ActionKind::Raise(view.current_bet + view.big_blind + view.big_blind);
    }
    if can_check {
        return ActionKind::Check;
    }
    if view
        .valid_actions
        .iter()
        .any(|a| matches!(a, ValidActionDto::Call { .. }))
    {
        return ActionKind::Call;
    }
    ActionKind::Fold
}
