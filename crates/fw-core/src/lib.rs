//! # fw-core — FortuneWheel Core
//!
//! Pure, stateless foundations of the wheel engine:
//! - **Wheel model**: ordered distinct segment labels, validated at construction
//! - **Pointer geometry**: segment ↔ angle ↔ rotation mapping, target rotation math
//! - **Easing**: monotone ease-out curves shaping animation velocity
//! - **Timing**: spin duration / frame pacing / banner profiles as data
//! - **Theme**: host theme colors and segment fill derivation
//!
//! Everything here is a pure function over its inputs. The only state in the
//! whole engine (current rotation, session phase) lives in `fw-engine`.

pub mod easing;
pub mod error;
pub mod geometry;
pub mod theme;
pub mod timing;
pub mod wheel;

pub use easing::*;
pub use error::*;
pub use geometry::*;
pub use theme::*;
pub use timing::*;
pub use wheel::*;
