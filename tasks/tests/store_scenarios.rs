//! End-to-end scenarios through `TaskListStore`.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use std::time::Duration;
use tasks::{
    render, AppConfig, DispatchError, Locale, Strings, Task, TaskAction, TaskEnvironment,
    TaskError, TaskListStore, TaskState,
};
use tokio::time::{sleep, Instant};

const NOTICE: Duration = Duration::from_millis(2000);

fn store() -> TaskListStore {
    TaskListStore::new(TaskEnvironment::new(NOTICE))
}

#[tokio::test]
async fn adding_a_task() {
    let store = store();
    store.edit_input("Buy milk").await.unwrap();
    store.submit_pending().await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.tasks, vec![Task::new("Buy milk")]);
    assert!(state.pending_input.is_empty());
    assert_eq!(store.completed_count().await, 0);
}

#[tokio::test]
async fn completing_the_first_task() {
    let store = TaskListStore::with_state(
        TaskState::with_tasks([Task::new("A"), Task::new("B")]),
        TaskEnvironment::new(NOTICE),
    );

    store.complete_task(0).await.unwrap();

    let state = store.snapshot().await;
    assert!(state.tasks[0].done);
    assert!(!state.tasks[1].done);
    assert_eq!(store.completed_count().await, 1);
}

#[tokio::test]
async fn deleting_a_completed_task() {
    let mut initial = TaskState::with_tasks([Task::new("A"), Task::new("B")]);
    initial.tasks[0].complete();
    let store = TaskListStore::with_state(initial, TaskEnvironment::new(NOTICE));

    store.delete_task(0).await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.tasks, vec![Task::new("B")]);
    assert_eq!(store.completed_count().await, 0);
}

#[tokio::test]
async fn blank_input_raises_notice() {
    let store = store();
    store.edit_input("   ").await.unwrap();

    let result = store.submit_pending().await;
    assert_eq!(result, Err(DispatchError::Rejected(TaskError::BlankInput)));

    let state = store.snapshot().await;
    assert!(state.is_empty());
    assert_eq!(state.pending_input, "   ");

    let screen = render(&state, &Strings::new(Locale::Es));
    assert_eq!(screen.toast, Some("Por favor, escribe una tarea"));
}

#[tokio::test]
async fn every_dispatch_publishes_a_change() {
    let store = store();
    let mut changes = store.subscribe();
    let start = *changes.borrow_and_update();

    store.edit_input("A").await.unwrap();
    store.submit_pending().await.unwrap();
    let _ = store.delete_task(7).await;

    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), start + 3);
}

#[tokio::test(start_paused = true)]
async fn notice_expires_after_its_duration() {
    let store = store();
    let mut changes = store.subscribe();
    let mut actions = store.subscribe_actions();

    let started = Instant::now();
    assert!(store.submit_new_task("").await.is_err());
    changes.borrow_and_update();
    assert!(store.snapshot().await.notice.is_some());

    changes.changed().await.unwrap();

    assert!(started.elapsed() >= NOTICE);
    assert_eq!(store.snapshot().await.notice, None);
    assert!(matches!(
        actions.recv().await.unwrap(),
        TaskAction::NoticeExpired { notice_id: 0 }
    ));
}

#[tokio::test(start_paused = true)]
async fn stale_expiry_keeps_newer_notice() {
    let store = store();

    assert!(store.submit_new_task(" ").await.is_err());
    sleep(Duration::from_millis(1500)).await;
    store.dismiss_notice().await.unwrap();
    assert!(store.submit_new_task("\t").await.is_err());

    // First notice's timer fires at 2000ms
    sleep(Duration::from_millis(600)).await;
    let notice = store.snapshot().await.notice.unwrap();
    assert_eq!(notice.id, 1);

    sleep(Duration::from_millis(1000)).await;
    let notice = store.snapshot().await.notice.unwrap();
    assert_eq!(notice.id, 1);

    // Second one at 3500ms
    sleep(Duration::from_millis(500)).await;
    assert_eq!(store.snapshot().await.notice, None);
}

#[tokio::test(start_paused = true)]
async fn shutdown_waits_for_pending_notice_timer() {
    let store = store();
    assert!(store.submit_new_task("").await.is_err());

    let started = Instant::now();
    store.shutdown(Duration::from_secs(5)).await.unwrap();
    assert!(started.elapsed() >= NOTICE);

    // The expiry fired after shutdown began, so it was dropped
    assert!(store.snapshot().await.notice.is_some());
    assert!(matches!(
        store.submit_new_task("late").await,
        Err(DispatchError::Store(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn quitting_right_after_blank_input_shuts_down_cleanly() {
    let config = AppConfig::default();
    let store = TaskListStore::new(TaskEnvironment::new(config.notice_duration));
    assert!(store.submit_new_task(" ").await.is_err());

    assert_eq!(store.shutdown(config.shutdown_timeout()).await, Ok(()));
}
