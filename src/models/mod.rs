// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Observation data model, timeline indexing and navigation.

pub mod navigation;
pub mod observation;
pub mod playback;
pub mod timeline;
