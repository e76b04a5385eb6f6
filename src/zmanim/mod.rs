//! Zmanim computation.
//!
//! ## Module Structure
//!
//! - [`zman`]: the [`Zman`] names, their handlers, and [`ZmanValue`]
//! - [`calendar`]: [`ZmanimCalendar`], the per-day computation handle
//! - [`collector`]: [`ZmanimBatchCollector`] and its [`ZmanimResult`]

pub mod calendar;
pub mod collector;
pub mod zman;

pub use calendar::ZmanimCalendar;
pub use collector::{DayZmanim, ZmanimBatchCollector, ZmanimResult};
pub use zman::{Zman, ZmanValue};
