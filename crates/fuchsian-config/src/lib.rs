// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config persistence for the fuchsian orbit engine.
//!
//! Stores hold raw blobs; [`ConfigService`] turns them into typed values via
//! JSON. [`load_orbit_config`] and [`save_orbit_config`] bind the service to
//! [`fuchsian_orbit::OrbitConfig`].

mod memory;
mod orbit;
mod service;

pub use memory::InMemoryConfigStore;
pub use orbit::{load_orbit_config, save_orbit_config, ORBIT_CONFIG_KEY};
pub use service::{ConfigError, ConfigService, ConfigStore};
