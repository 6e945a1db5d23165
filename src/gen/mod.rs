// Procedural generation of the synthetic dataset: users, stories,
// conversation histories and the startup population.

pub mod conversation;
pub mod corpus;
pub mod population;
pub mod profile;
pub mod random;

pub use conversation::generate_chat_session;
pub use population::{build_population, Population, PopulationConfig, PopulationError};
pub use profile::{generate_contacts, generate_user};
