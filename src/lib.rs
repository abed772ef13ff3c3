//! Client-side state for the notice and profile webview screens.
//!
//! The two engines are [`paging::PagedListLoader`] (cursor pagination with an
//! append-only item log) and [`form::EntityFormBinder`] (entity ⇄ field binding
//! with first-failure-wins validation). [`screens`] wires them to a transport
//! and produces plain view models.

pub mod address;
pub mod config;
pub mod date_fmt;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod paging;
pub mod remote;
pub mod screens;
