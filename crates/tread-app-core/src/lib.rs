// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Tread tools.
//! Keeps the CLI and test harnesses independent of where config lives.

pub mod config;
