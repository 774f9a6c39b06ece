/*!
 * Scheduler Tests
 * Round-robin rotation, CPU budget completion, simulated I/O
 */

use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use simpleos_kernel::process::{
    DispatchOutcome, Entropy, ProcessRegistry, ProcessState, Scheduler, ScriptedEntropy,
    TickReport,
};
use simpleos_kernel::{Pid, Priority};

mock! {
    pub Decisions {}

    impl Entropy for Decisions {
        fn priority(&mut self) -> Priority;
        fn should_block(&mut self, pid: Pid) -> bool;
        fn should_wake(&mut self, pid: Pid) -> bool;
    }
}

fn spawn(names: &[&str], entropy: &mut ScriptedEntropy) -> ProcessRegistry {
    let mut registry = ProcessRegistry::with_capacity(10);
    for name in names {
        registry.create(name, entropy).unwrap();
    }
    registry
}

fn run(
    scheduler: &mut Scheduler,
    registry: &mut ProcessRegistry,
    entropy: &mut ScriptedEntropy,
    ticks: usize,
) -> Vec<Option<Pid>> {
    (0..ticks)
        .map(|_| scheduler.tick(registry, entropy).dispatched())
        .collect()
}

#[test]
fn test_round_robin_rotation() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["A", "B", "C"], &mut entropy);
    let mut scheduler = Scheduler::new();

    let order = run(&mut scheduler, &mut registry, &mut entropy, 4);
    assert_eq!(order, vec![Some(1), Some(2), Some(3), Some(1)]);

    let a = registry.get(1).unwrap();
    assert_eq!(a.cpu_time, 2);
    assert_eq!(a.state, ProcessState::Running);
    assert_eq!(registry.get(2).unwrap().state, ProcessState::Ready);
    assert_eq!(registry.get(3).unwrap().state, ProcessState::Ready);
}

#[test]
fn test_three_ticks_dispatch_each_once() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["A", "B", "C"], &mut entropy);
    let mut scheduler = Scheduler::new();

    let order = run(&mut scheduler, &mut registry, &mut entropy, 3);
    assert_eq!(order, vec![Some(1), Some(2), Some(3)]);

    let cpu: Vec<_> = registry.list().iter().map(|p| p.cpu_time).collect();
    assert_eq!(cpu, vec![1, 1, 1]);
    assert_eq!(scheduler.current(), Some(3));
}

#[test]
fn test_rotation_is_fair() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["a", "b", "c", "d"], &mut entropy);
    let mut scheduler = Scheduler::new();

    run(&mut scheduler, &mut registry, &mut entropy, 8);

    for process in registry.list() {
        assert_eq!(process.cpu_time, 2, "PID {}", process.pid);
    }
}

#[test]
fn test_at_most_one_running() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["a", "b", "c"], &mut entropy);
    let mut scheduler = Scheduler::new();

    for _ in 0..12 {
        scheduler.tick(&mut registry, &mut entropy);
        let running = registry
            .list()
            .iter()
            .filter(|p| p.state == ProcessState::Running)
            .count();
        assert!(running <= 1);
    }
}

#[test]
fn test_completion_after_budget() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["solo"], &mut entropy);
    let mut scheduler = Scheduler::new();

    for tick in 1..=10 {
        let report = scheduler.tick(&mut registry, &mut entropy);
        match report {
            TickReport::Dispatched(dispatch) => {
                assert_eq!(dispatch.cpu_time, tick);
                assert_eq!(dispatch.outcome, DispatchOutcome::Running);
            }
            other => panic!("unexpected report {:?}", other),
        }
    }

    // The eleventh tick exceeds the budget of ten
    match scheduler.tick(&mut registry, &mut entropy) {
        TickReport::Dispatched(dispatch) => {
            assert_eq!(dispatch.pid, 1);
            assert_eq!(dispatch.cpu_time, 11);
            assert_eq!(dispatch.outcome, DispatchOutcome::Completed);
        }
        other => panic!("unexpected report {:?}", other),
    }

    assert!(registry.get(1).is_none());
    assert!(registry.is_empty());
    assert_eq!(scheduler.current(), None);
    assert_eq!(scheduler.tick(&mut registry, &mut entropy), TickReport::Empty);

    let stats = scheduler.stats();
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.dispatches, 11);
    assert_eq!(stats.empty_ticks, 1);
}

#[test]
fn test_custom_budget() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["short"], &mut entropy);
    let mut scheduler = Scheduler::with_budget(2);

    let order = run(&mut scheduler, &mut registry, &mut entropy, 4);
    assert_eq!(order, vec![Some(1), Some(1), Some(1), None]);
    assert!(registry.is_empty());
}

#[test]
fn test_killed_current_restarts_scan() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["A", "B", "C"], &mut entropy);
    let mut scheduler = Scheduler::new();

    assert_eq!(scheduler.tick(&mut registry, &mut entropy).dispatched(), Some(1));
    registry.kill(1).unwrap();

    // PID 1 no longer resolves; the scan starts from slot 0
    assert_eq!(scheduler.tick(&mut registry, &mut entropy).dispatched(), Some(2));
    assert_eq!(scheduler.current(), Some(2));
}

#[test]
fn test_killed_middle_process_is_skipped() {
    let mut entropy = ScriptedEntropy::new();
    let mut registry = spawn(&["A", "B", "C"], &mut entropy);
    let mut scheduler = Scheduler::new();

    scheduler.tick(&mut registry, &mut entropy);
    registry.kill(2).unwrap();

    assert_eq!(scheduler.tick(&mut registry, &mut entropy).dispatched(), Some(3));
}

#[test]
fn test_blocked_process_keeps_rotation_point() {
    let mut entropy = ScriptedEntropy::new().with_blocks([true]);
    let mut registry = spawn(&["A", "B", "C"], &mut entropy);
    let mut scheduler = Scheduler::new();

    match scheduler.tick(&mut registry, &mut entropy) {
        TickReport::Dispatched(dispatch) => {
            assert_eq!(dispatch.pid, 1);
            assert_eq!(dispatch.outcome, DispatchOutcome::Waiting);
        }
        other => panic!("unexpected report {:?}", other),
    }
    assert_eq!(registry.get(1).unwrap().state, ProcessState::Waiting);
    assert_eq!(scheduler.current(), Some(1));

    // Waiting is not demoted; the scan continues after it
    assert_eq!(scheduler.tick(&mut registry, &mut entropy).dispatched(), Some(2));
    assert_eq!(registry.get(1).unwrap().state, ProcessState::Waiting);
}

#[test]
fn test_idle_tick_wakes_waiting_processes() {
    let mut entropy = ScriptedEntropy::new().with_blocks([true, true]);
    let mut registry = spawn(&["A", "B"], &mut entropy);
    let mut scheduler = Scheduler::new();

    run(&mut scheduler, &mut registry, &mut entropy, 2);
    assert!(registry
        .list()
        .iter()
        .all(|p| p.state == ProcessState::Waiting));

    let report = scheduler.tick(&mut registry, &mut entropy);
    assert_eq!(report, TickReport::Idle { woken: vec![1, 2] });
    assert!(report.is_idle());
    assert!(registry.list().iter().all(|p| p.state == ProcessState::Ready));

    // Nothing runs on the wake-up tick itself
    let cpu: Vec<_> = registry.list().iter().map(|p| p.cpu_time).collect();
    assert_eq!(cpu, vec![1, 1]);

    let stats = scheduler.stats();
    assert_eq!(stats.blocked, 2);
    assert_eq!(stats.idle_ticks, 1);
    assert_eq!(stats.woken, 2);
}

#[test]
fn test_idle_tick_without_wakeups() {
    let mut entropy = ScriptedEntropy::new()
        .with_blocks([true])
        .always_wake(false);
    let mut registry = spawn(&["A"], &mut entropy);
    let mut scheduler = Scheduler::new();

    scheduler.tick(&mut registry, &mut entropy);
    let report = scheduler.tick(&mut registry, &mut entropy);

    assert_eq!(report, TickReport::Idle { woken: vec![] });
    assert_eq!(registry.get(1).unwrap().state, ProcessState::Waiting);
}

#[test]
fn test_woken_current_is_redispatched() {
    let mut entropy = ScriptedEntropy::new().with_blocks([true]);
    let mut registry = spawn(&["A"], &mut entropy);
    let mut scheduler = Scheduler::new();

    let order = run(&mut scheduler, &mut registry, &mut entropy, 3);
    assert_eq!(order, vec![Some(1), None, Some(1)]);
    assert_eq!(registry.get(1).unwrap().cpu_time, 2);
}

#[test]
fn test_empty_table_does_not_consult_entropy() {
    let mut registry = ProcessRegistry::with_capacity(4);
    let mut entropy = MockDecisions::new();
    entropy.expect_should_wake().never();
    entropy.expect_should_block().never();

    let mut scheduler = Scheduler::new();
    assert_eq!(scheduler.tick(&mut registry, &mut entropy), TickReport::Empty);
}

#[test]
fn test_decisions_are_asked_per_pid() {
    let mut registry = ProcessRegistry::with_capacity(4);
    let mut entropy = MockDecisions::new();
    entropy.expect_priority().times(1).return_const(2u8);
    entropy
        .expect_should_block()
        .with(eq(1))
        .times(1)
        .return_const(true);
    entropy
        .expect_should_wake()
        .with(eq(1))
        .times(1)
        .return_const(false);

    let pid = registry.create("io-bound", &mut entropy).unwrap();
    assert_eq!(registry.get(pid).unwrap().priority, 2);

    let mut scheduler = Scheduler::new();
    scheduler.tick(&mut registry, &mut entropy);
    assert_eq!(
        scheduler.tick(&mut registry, &mut entropy),
        TickReport::Idle { woken: vec![] }
    );
}
