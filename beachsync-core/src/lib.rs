//! Use cases and gateway abstractions for synchronizing bathing sites
//! from the service guide into an NGSI-LD context broker.

pub mod gateways;
pub mod lookup;
pub mod usecases;

pub mod entities {
    pub use beachsync_entities::{
        cross_reference::*, entity::*, geo::*, site::*, time::*,
    };

    #[cfg(test)]
    pub use beachsync_entities::builders::*;
}
