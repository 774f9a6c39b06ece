/*!
 * Scheduling Decision Source
 *
 * Priority assignment, simulated I/O blocking and wake-ups are random in the
 * running system. They sit behind [`Entropy`] so the scheduler itself stays
 * deterministic and tests can script every decision.
 */

use crate::core::limits::{BLOCK_ODDS, MAX_PRIORITY, MIN_PRIORITY, WAKE_ODDS};
use crate::core::types::{Pid, Priority};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Nondeterministic decisions consumed by the process registry and scheduler
pub trait Entropy {
    /// Priority for a newly created process, expected in `MIN_PRIORITY..=MAX_PRIORITY`
    fn priority(&mut self) -> Priority;

    /// Whether the just-dispatched process blocks on simulated I/O
    fn should_block(&mut self, pid: Pid) -> bool;

    /// Whether a waiting process finishes its simulated I/O on an idle tick
    fn should_wake(&mut self, pid: Pid) -> bool;
}

/// Random decisions backed by a seedable [`StdRng`]
///
/// One dispatch in `BLOCK_ODDS` blocks; one waiting process in `WAKE_ODDS`
/// wakes.
#[derive(Debug, Clone)]
pub struct RandomEntropy {
    rng: StdRng,
}

impl RandomEntropy {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Default for RandomEntropy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Entropy for RandomEntropy {
    fn priority(&mut self) -> Priority {
        self.rng.gen_range(MIN_PRIORITY..=MAX_PRIORITY)
    }

    fn should_block(&mut self, _pid: Pid) -> bool {
        self.rng.gen_ratio(1, BLOCK_ODDS)
    }

    fn should_wake(&mut self, _pid: Pid) -> bool {
        self.rng.gen_ratio(1, WAKE_ODDS)
    }
}

/// Scripted decisions for deterministic runs
///
/// Queued answers are consumed first; once a queue runs dry the fallback
/// applies. The default never blocks, always wakes and assigns priority 3.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    priorities: VecDeque<Priority>,
    blocks: VecDeque<bool>,
    wakes: VecDeque<bool>,
    default_priority: Priority,
    default_block: bool,
    default_wake: bool,
}

impl ScriptedEntropy {
    pub fn new() -> Self {
        Self {
            priorities: VecDeque::new(),
            blocks: VecDeque::new(),
            wakes: VecDeque::new(),
            default_priority: 3,
            default_block: false,
            default_wake: true,
        }
    }

    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities.extend(priorities);
        self
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = bool>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn with_wakes(mut self, wakes: impl IntoIterator<Item = bool>) -> Self {
        self.wakes.extend(wakes);
        self
    }

    pub fn default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn always_block(mut self, block: bool) -> Self {
        self.default_block = block;
        self
    }

    pub fn always_wake(mut self, wake: bool) -> Self {
        self.default_wake = wake;
        self
    }
}

impl Default for ScriptedEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for ScriptedEntropy {
    fn priority(&mut self) -> Priority {
        self.priorities.pop_front().unwrap_or(self.default_priority)
    }

    fn should_block(&mut self, _pid: Pid) -> bool {
        self.blocks.pop_front().unwrap_or(self.default_block)
    }

    fn should_wake(&mut self, _pid: Pid) -> bool {
        self.wakes.pop_front().unwrap_or(self.default_wake)
    }
}
