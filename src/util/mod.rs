// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate mapping, chart series and overlay drawing helpers.

pub mod chart;
pub mod geometry;
pub mod overlay;
pub mod series;
