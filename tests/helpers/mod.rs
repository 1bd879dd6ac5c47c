// ABOUTME: Test helper module root for FitTrack integration tests
// ABOUTME: Exposes the in-process Axum request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod axum_test;
