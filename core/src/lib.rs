// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of ticklist: the todo data-access layer and the view-state coordinator.

mod coordinator;
mod error;
mod item;
mod service;

pub use crate::coordinator::{Coordinator, Failure, Operation, ViewState};
pub use crate::error::TodoError;
pub use crate::item::{Item, ItemId};
pub use crate::service::{RemoteTodoService, TodoService, validate_title};
pub use ticklist_store::{Credential, StoreConfig, StoreError};

/// The name of the application.
pub const APP_NAME: &str = "ticklist";
