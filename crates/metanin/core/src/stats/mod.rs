//! Attribute system.
//!
//! # Architecture
//!
//! ```text
//! [ BaseAttributes (user input) ]
//!      ↓  guild %  →  charm (flat | %)  →  truncate  →  faction
//! [ ResolvedAttributes ]
//!      ↓
//! [ Damage / DPS ]
//! ```
//!
//! Only base attributes are stored in a [`Build`](crate::Build). Resolved
//! attributes are a pure function of the build and are recomputed on demand.

pub mod attribute;
pub mod bonus;
pub mod charm;
pub mod resolver;

pub use attribute::{Attribute, BaseAttributes, ResolvedAttributes};
pub use bonus::Bonus;
pub use charm::Charm;
pub use resolver::{AttributeModifiers, resolve_attributes};
