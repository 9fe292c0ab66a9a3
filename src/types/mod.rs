// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource kinds, records and selector queries.

pub mod kind;
pub mod resource;

pub use kind::ResourceKind;
pub use resource::{ResourceRecord, ResourceSnapshot, SelectorQuery};
