// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion config with a flamegraph profiler attached.
///
/// Rendering is cheap, so the defaults favour many short samples over long measurement windows.
pub fn criterion() -> Criterion {
    let frequency = env_or::<i32>("INTERFERENCE_PROFILE_FREQ", 200).clamp(1, 1000);
    let sample_size = env_or::<usize>("INTERFERENCE_BENCH_SAMPLES", 100).clamp(10, 500);
    let warmup_ms = env_or::<u64>("INTERFERENCE_BENCH_WARMUP_MS", 500).clamp(100, 10_000);
    let measurement_ms = env_or::<u64>("INTERFERENCE_BENCH_MEASURE_MS", 2_000).clamp(200, 60_000);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_millis(warmup_ms))
        .measurement_time(Duration::from_millis(measurement_ms))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
