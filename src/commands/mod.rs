// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod categories;
pub mod dash;
pub mod doctor;
pub mod expenses;
pub mod exporter;
pub mod incomes;
pub mod profile;
