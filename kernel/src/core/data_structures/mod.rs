/*!
 * Data Structures
 *
 * Specialized data structures for kernel tables:
 * - Inline strings for bounded names that mostly avoid heap allocation
 * - Fixed-capacity resource tables with occupancy flags and slot recycling
 */

mod inline_string;
mod slot_table;

pub use inline_string::InlineString;
pub use slot_table::{ResourceTable, Scrub};
