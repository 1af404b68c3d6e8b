//! Catalog domain model.
//!
//! Everything in here is pure: records, the fixed type tags, the list query
//! (search + sort), the gallery type filter and id-range navigation. The
//! views derive what they display from a roster through these functions.

mod filter;
mod nav;
mod query;
mod record;
mod tags;

pub use filter::{FilterMode, TypeFilter, TypeSelection};
pub use nav::{IdRange, Page};
pub use query::{ListQuery, SortKey, SortOrder};
pub use record::{Ability, Record, RecordKey, Sprites, Stat};
pub use tags::{ROSTER_SIZE, STAT_MAX, TYPE_TAGS};
