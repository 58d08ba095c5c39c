//! Business logic of recymap: finding drop-off points near a user
//! and combining the results with image classification.

pub mod bbox;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use recymap_entities::{
        category::*, classification::*, contact::*, geo::*, id::*, location::*, time::*,
    };
}
