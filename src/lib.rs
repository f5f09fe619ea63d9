// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod auth;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod locale;
pub mod models;
pub mod period;
pub mod register;
pub mod session;
pub mod store;
pub mod utils;
