/*!
 * Resource Table
 * Fixed-capacity slot store shared by the process and file tables
 *
 * Every slot carries an occupancy flag, a key and a payload. Lookups scan the
 * slots linearly; capacities are small and fixed at construction, so there is
 * no secondary index. Freed slots are scrubbed and handed out again lowest
 * index first.
 */

use crate::core::errors::{TableError, TableResult};

/// Payloads stored in a [`ResourceTable`]
///
/// `scrub` runs when a slot is freed and must leave no trace of the previous
/// occupant. The default resets the payload to `Default::default()`.
pub trait Scrub: Default {
    fn scrub(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
struct Slot<K, P> {
    occupied: bool,
    key: K,
    payload: P,
}

/// Fixed-capacity table addressed by key
#[derive(Debug)]
pub struct ResourceTable<K, P> {
    slots: Box<[Slot<K, P>]>,
    occupied: usize,
}

impl<K, P> ResourceTable<K, P>
where
    K: PartialEq + Default,
    P: Scrub,
{
    /// Create a table with `capacity` free slots
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| Slot::default()).collect();
        Self { slots, occupied: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// First occupied slot whose key equals `key`
    pub fn find(&self, key: &K) -> Option<&P> {
        self.position(key).map(|index| &self.slots[index].payload)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut P> {
        self.position(key)
            .map(move |index| &mut self.slots[index].payload)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Claim the lowest free slot for `key`
    ///
    /// Fails with `Duplicate` when the key is already present (checked first)
    /// and with `Full` when every slot is taken. A failed call leaves the
    /// table untouched.
    pub fn allocate(&mut self, key: K, payload: P) -> TableResult<&mut P> {
        if self.contains(&key) {
            return Err(TableError::Duplicate);
        }

        let index = self
            .slots
            .iter()
            .position(|slot| !slot.occupied)
            .ok_or(TableError::Full)?;

        let slot = &mut self.slots[index];
        slot.occupied = true;
        slot.key = key;
        slot.payload = payload;
        self.occupied += 1;

        Ok(&mut slot.payload)
    }

    /// Scrub and release the slot holding `key`
    pub fn free(&mut self, key: &K) -> TableResult<()> {
        let index = self.position(key).ok_or(TableError::NotFound)?;
        self.release(index);
        Ok(())
    }

    /// Occupied slots in slot-index order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &P)> {
        self.slots
            .iter()
            .filter(|slot| slot.occupied)
            .map(|slot| (&slot.key, &slot.payload))
    }

    /// Scrub every slot
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].occupied {
                self.release(index);
            }
        }
    }

    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.occupied && slot.key == *key)
    }

    pub(crate) fn slot(&self, index: usize) -> Option<(&K, &P)> {
        self.slots
            .get(index)
            .filter(|slot| slot.occupied)
            .map(|slot| (&slot.key, &slot.payload))
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<(&K, &mut P)> {
        self.slots
            .get_mut(index)
            .filter(|slot| slot.occupied)
            .map(|slot| (&slot.key, &mut slot.payload))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut P)> {
        self.slots
            .iter_mut()
            .filter(|slot| slot.occupied)
            .map(|slot| (&slot.key, &mut slot.payload))
    }

    /// Release the slot at `index`, returning the key it held
    pub(crate) fn free_at(&mut self, index: usize) -> Option<K> {
        if !self.slots.get(index)?.occupied {
            return None;
        }
        let key = std::mem::take(&mut self.slots[index].key);
        self.release(index);
        Some(key)
    }

    /// Every slot index once, starting at `start` and wrapping at the end
    pub(crate) fn indices_from(&self, start: usize) -> impl Iterator<Item = usize> {
        let capacity = self.slots.len();
        (0..capacity).map(move |offset| (start + offset) % capacity)
    }

    /// Payload of a slot whether or not it is occupied
    #[cfg(test)]
    pub(crate) fn raw_payload(&self, index: usize) -> &P {
        &self.slots[index].payload
    }

    fn release(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.payload.scrub();
        slot.key = K::default();
        slot.occupied = false;
        self.occupied -= 1;
    }
}
