//! Card system: definitions, the play protocol, built-in cards, catalog.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data (id, name, type, faction, cost)
//! - `Card`: Legality check plus resolve procedure
//! - `CardCatalog`: ID to card factory lookup
//!
//! ## Built-in Cards
//!
//! | id                  | faction  | type           | cost |
//! |---------------------|----------|----------------|------|
//! | `backdoor_access`   | criminal | event          | 2    |
//! | `network_expansion` | criminal | resource       | 3    |
//! | `bank_job`          | criminal | operation      | 2    |
//! | `sure_gamble`       | anarch   | event          | 5    |
//! | `corroder`          | anarch   | program        | 2    |
//! | `surveillance_grid` | nbn      | infrastructure | 3    |
//! | `scorched_earth`    | weyland  | operation      | 4    |
//! | `ice_wall`          | weyland  | ice            | 3    |
//! | `armed_response`    | weyland  | operation      | 3    |

pub mod card;
pub mod corporation;
pub mod definition;
pub mod registry;
pub mod runner;

pub use card::Card;
pub use corporation::{ArmedResponse, IceWall, ScorchedEarth, SurveillanceGrid};
pub use definition::{CardDefinition, CardType, Cost};
pub use registry::{create_card, CardCatalog, CardFactory};
pub use runner::{BackdoorAccess, BankJob, Corroder, NetworkExpansion, SureGamble};
