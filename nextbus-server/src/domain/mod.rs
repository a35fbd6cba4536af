//! Domain types for the next-bus finder.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

pub mod clock;
mod code;
mod compass;

pub use clock::{ClockError, minutes_component_until, parse_clock};
pub use code::{DirectionCode, InvalidCode, RouteCode, StopCode};
pub use compass::Compass;
