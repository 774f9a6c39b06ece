/*!
 * Process Registry Tests
 * PID allocation, table capacity and kill semantics
 */

use pretty_assertions::assert_eq;
use simpleos_kernel::process::{ProcessRegistry, ProcessState, ScriptedEntropy};
use simpleos_kernel::ProcessError;

fn registry(capacity: usize) -> (ProcessRegistry, ScriptedEntropy) {
    (
        ProcessRegistry::with_capacity(capacity),
        ScriptedEntropy::new(),
    )
}

#[test]
fn test_process_creation() {
    let mut registry = ProcessRegistry::with_capacity(10);
    let mut entropy = ScriptedEntropy::new().with_priorities([5]);

    let pid = registry.create("init", &mut entropy).unwrap();
    assert_eq!(pid, 1);

    let process = registry.get(pid).unwrap();
    assert_eq!(process.name, "init");
    assert_eq!(process.priority, 5);
    assert_eq!(process.cpu_time, 0);
    assert_eq!(process.state, ProcessState::Ready);

    let second = registry.create("shell", &mut entropy).unwrap();
    assert_eq!(second, 2);
    assert_eq!(registry.get(second).unwrap().priority, 3);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_pids_are_never_reused() {
    let (mut registry, mut entropy) = registry(10);

    let a = registry.create("a", &mut entropy).unwrap();
    registry.kill(a).unwrap();
    let b = registry.create("b", &mut entropy).unwrap();

    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert!(registry.get(a).is_none());
}

#[test]
fn test_table_full() {
    let (mut registry, mut entropy) = registry(10);
    for i in 0..10 {
        registry.create(&format!("p{}", i), &mut entropy).unwrap();
    }

    let err = registry.create("overflow", &mut entropy).unwrap_err();
    assert_eq!(err, ProcessError::TableFull { capacity: 10 });
    assert_eq!(err.to_string(), "Process table full! (10 slots)");
    assert_eq!(registry.len(), 10);
}

#[test]
fn test_failed_create_does_not_consume_pid() {
    let (mut registry, mut entropy) = registry(1);
    registry.create("only", &mut entropy).unwrap();

    assert!(registry.create("rejected", &mut entropy).is_err());
    assert_eq!(registry.next_pid(), 2);

    registry.kill(1).unwrap();
    assert_eq!(registry.create("next", &mut entropy).unwrap(), 2);
}

#[test]
fn test_kill_missing_process() {
    let (mut registry, _) = registry(4);

    let err = registry.kill(42).unwrap_err();
    assert_eq!(err, ProcessError::NotFound(42));
    assert_eq!(err.to_string(), "Process PID 42 not found!");
}

#[test]
fn test_list_follows_slot_order() {
    let (mut registry, mut entropy) = registry(4);
    registry.create("a", &mut entropy).unwrap();
    registry.create("b", &mut entropy).unwrap();
    registry.create("c", &mut entropy).unwrap();

    // The freed middle slot is the lowest free one, so PID 4 lands there
    registry.kill(2).unwrap();
    registry.create("d", &mut entropy).unwrap();

    let pids: Vec<_> = registry.list().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![1, 4, 3]);
}

#[test]
fn test_long_names_are_truncated() {
    let (mut registry, mut entropy) = registry(2);
    let long = "x".repeat(40);

    let pid = registry.create(&long, &mut entropy).unwrap();
    assert_eq!(registry.get(pid).unwrap().name, "x".repeat(31));
}

#[test]
fn test_terminate_all_and_reset() {
    let (mut registry, mut entropy) = registry(4);
    registry.create("a", &mut entropy).unwrap();
    registry.create("b", &mut entropy).unwrap();

    let terminated = registry.terminate_all();
    assert_eq!(terminated.len(), 2);
    assert!(terminated
        .iter()
        .all(|p| p.state == ProcessState::Terminated));
    assert!(registry.is_empty());
    assert_eq!(registry.next_pid(), 3);

    registry.reset();
    assert_eq!(registry.create("fresh", &mut entropy).unwrap(), 1);
}
