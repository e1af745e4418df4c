// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use notam::Notam;

const A0623_91: &str = include_str!("../tests/data/A0623_91.txt");
const C2661_23: &str = include_str!("../tests/data/C2661_23.txt");

/// Benchmark parsing of single NOTAMs
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, text) in [("A0623_91", A0623_91), ("C2661_23", C2661_23)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| b.iter(|| Notam::parse(black_box(text))));
    }

    group.finish();
}

/// Benchmark decoding of abbreviations
fn bench_decode(c: &mut Criterion) {
    let notam = Notam::parse(C2661_23).expect("NOTAM should parse");

    c.bench_function("decode", |b| b.iter(|| black_box(&notam).decoded()));
}

criterion_group!(benches, bench_parse, bench_decode);
criterion_main!(benches);
