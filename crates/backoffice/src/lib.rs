//! Composition root for the back-office core. An outer layer (HTTP, CLI)
//! builds [`di::DependenciesInject`] once and drives the services from it.

pub mod di;
