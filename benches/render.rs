// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use interference::generate::{generate, GenerateParams};
use interference::render_pattern_unicode;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod profiler;

#[derive(Debug, Clone, Copy)]
enum Case {
    Small,
    Medium,
    LargeDense,
}

impl Case {
    fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeDense => "large_dense",
        }
    }

    fn params(self) -> GenerateParams {
        match self {
            Self::Small => {
                GenerateParams { width: 6, height: 4, markers: 3, arrows: 2, sequence_len: None }
            }
            Self::Medium => GenerateParams::default(),
            Self::LargeDense => GenerateParams {
                width: 64,
                height: 48,
                markers: 26,
                arrows: 400,
                sequence_len: Some(40),
            },
        }
    }
}

// Benchmark identity (keep stable):
// - Group names in this file: `render.pattern`, `generate.pattern`
// - Case IDs must remain stable across refactors so results stay comparable over time.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.pattern");
    for case in [Case::Small, Case::Medium, Case::LargeDense] {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let pattern = generate(&mut rng, &case.params()).expect("generate");
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered = render_pattern_unicode(black_box(&pattern));
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("generate.pattern");
    for case in [Case::Small, Case::Medium, Case::LargeDense] {
        let params = case.params();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(0);
                let pattern = generate(&mut rng, black_box(&params)).expect("generate");
                black_box(pattern.markers().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
