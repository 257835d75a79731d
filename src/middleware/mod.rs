// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! HTTP middleware.

pub mod security;
