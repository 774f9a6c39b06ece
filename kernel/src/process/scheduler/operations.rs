/*!
 * Scheduler Core Operations
 * Tick: preempt, select, dispatch, post-dispatch policy, wake-ups
 */

use super::{Dispatch, DispatchOutcome, Scheduler, TickReport};
use crate::process::entropy::Entropy;
use crate::process::registry::ProcessRegistry;
use crate::process::types::ProcessState;
use tracing::{debug, info};

impl Scheduler {
    /// Run one scheduling step
    ///
    /// 1. A Running current process is demoted to Ready.
    /// 2. The next Ready process is searched starting one slot after the
    ///    current process, wrapping at the end of the table.
    /// 3. A found process runs for one tick and then either blocks, completes
    ///    (exceeded its CPU budget), or stays Running.
    /// 4. With nothing Ready, waiting processes may wake instead.
    ///
    /// Never fails; an empty table reports [`TickReport::Empty`].
    pub fn tick(&mut self, registry: &mut ProcessRegistry, entropy: &mut dyn Entropy) -> TickReport {
        self.stats.ticks += 1;

        if registry.is_empty() {
            self.current = None;
            self.stats.empty_ticks += 1;
            debug!("No processes to schedule");
            return TickReport::Empty;
        }

        let table = &mut registry.table;

        // Resolve the rotation point fresh; a killed process no longer resolves
        let current_index = self.current.and_then(|pid| table.position(&pid));
        if current_index.is_none() {
            self.current = None;
        }

        if let Some(index) = current_index {
            if let Some((_, process)) = table.slot_mut(index) {
                if process.is_running() {
                    process.state = ProcessState::Ready;
                }
            }
        }

        let start = current_index.map_or(0, |index| index + 1);
        let next = table.indices_from(start).find(|&index| {
            table
                .slot(index)
                .is_some_and(|(_, process)| process.is_ready())
        });

        match next {
            Some(index) => self.dispatch(registry, index, entropy),
            None => self.wake_waiting(registry, entropy),
        }
    }

    fn dispatch(
        &mut self,
        registry: &mut ProcessRegistry,
        index: usize,
        entropy: &mut dyn Entropy,
    ) -> TickReport {
        let Some((&pid, process)) = registry.table.slot_mut(index) else {
            return TickReport::Idle { woken: Vec::new() };
        };

        process.state = ProcessState::Running;
        process.cpu_time = process.cpu_time.saturating_add(1);
        self.current = Some(pid);
        self.stats.dispatches += 1;

        let name = process.name.to_string();
        let cpu_time = process.cpu_time;
        info!(pid, name = %name, cpu_time, "Running process");

        let outcome = if entropy.should_block(pid) {
            process.state = ProcessState::Waiting;
            DispatchOutcome::Waiting
        } else if cpu_time > self.cpu_time_budget {
            process.state = ProcessState::Terminated;
            DispatchOutcome::Completed
        } else {
            DispatchOutcome::Running
        };

        match outcome {
            DispatchOutcome::Waiting => {
                // The blocked process keeps the rotation point
                self.stats.blocked += 1;
                info!(pid, "Process waiting on I/O");
            }
            DispatchOutcome::Completed => {
                registry.table.free_at(index);
                self.current = None;
                self.stats.completed += 1;
                info!(pid, cpu_time, "Process completed execution");
            }
            DispatchOutcome::Running => {}
        }

        TickReport::Dispatched(Dispatch {
            pid,
            name,
            cpu_time,
            outcome,
        })
    }

    fn wake_waiting(&mut self, registry: &mut ProcessRegistry, entropy: &mut dyn Entropy) -> TickReport {
        let mut woken = Vec::new();

        for (&pid, process) in registry.table.iter_mut() {
            if process.is_waiting() && entropy.should_wake(pid) {
                process.state = ProcessState::Ready;
                woken.push(pid);
                info!(pid, "Process ready (I/O complete)");
            }
        }

        self.stats.idle_ticks += 1;
        self.stats.woken += woken.len() as u64;
        debug!(woken = woken.len(), "No READY processes, system idle");

        TickReport::Idle { woken }
    }
}
