// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod models;
pub mod store;
pub mod summary;
pub mod sync;
pub mod usage;
pub mod utils;
