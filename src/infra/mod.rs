//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации;
//! - генерация ID;
//! - абстракции хранения и провайдера идентичности.

pub mod identity;
pub mod ids;
pub mod persistence;
pub mod rng;

pub use identity::{IdentityError, IdentityProvider, StaticIdentityProvider};
pub use ids::IdGenerator;
pub use persistence::{Account, InMemoryStorage, Storage};
pub use rng::{DeterministicRng, SystemRng};
