// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Benchmarks live in `benches/`; run them with `cargo bench -p tread-benches`.
