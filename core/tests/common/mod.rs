// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides an in-memory [`TodoService`] that records every call
//! and can be told to fail or to hold a response until released.

mod fake_service;

#[allow(unused_imports)]
pub use fake_service::{Call, FakeService, item};
