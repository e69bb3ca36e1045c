//! The per-frame systems, in pipeline order.

pub mod collision;
pub mod combat;
pub mod input;
pub mod movement;
pub mod presentation;
pub mod resource_sharing;

pub use collision::CollisionSystem;
pub use combat::CombatSystem;
pub use input::InputSystem;
pub use movement::MovementSystem;
pub use presentation::{DisplayRecord, PresentationQuery};
pub use resource_sharing::ResourceSharingSystem;
