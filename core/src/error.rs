// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ticklist_store::StoreError;

/// Failures of todo data-access operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// Input failed a local precondition and never reached the store.
    #[error("Invalid todo: {0}")]
    Validation(String),

    /// The round trip to the store failed.
    #[error("Store request failed: {0}")]
    Store(#[from] StoreError),

    /// The store reported success but returned no row.
    #[error("Todo not found: {0}")]
    NotFound(String),
}
