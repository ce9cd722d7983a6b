//! Benchmarking using `criterion`.
//!
//! Targets whose name ends with a backend name (`mul_matrix4x4_glam`,
//! `mul_matrix4x4_scalar`, ...) are reported in one group per operation,
//! with one function per backend, so criterion plots the backends side by
//! side.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use std::time::Duration;

const BACKEND_SUFFIXES: [&str; 3] = ["glam", "scalar", "nalgebra"];

/// Defines a function `$name` taking a [`Criterion`] that runs the
/// benchmark function of the same name in the `$group` module.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                ),
            );
        }
    };
}

/// [`Benchmarker`] measuring a single function with `criterion`.
#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    c: &'a mut Criterion,
    group: &'static str,
    function: &'static str,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, target_name: &'static str) -> Self {
        let (group, function) = split_target_name(target_name);
        Self { c, group, function }
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        let mut benchmark_group = self.c.benchmark_group(self.group);
        benchmark_group.bench_function(self.function, |b| b.iter(&mut f));
        benchmark_group.finish();
    }
}

/// Configuration for the vector and matrix kernels, which run in
/// nanoseconds. Many samples over a short measurement window keep the run
/// time down while resolving small differences between backends.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .sample_size(200)
        .noise_threshold(0.02)
}

/// Splits a target name into a benchmark group and a function ID. A trailing
/// backend name becomes the function ID, with the rest as the group.
/// Otherwise, the full name is used for both.
fn split_target_name(target_name: &'static str) -> (&'static str, &'static str) {
    target_name
        .rsplit_once('_')
        .filter(|(_, suffix)| BACKEND_SUFFIXES.contains(suffix))
        .unwrap_or((target_name, target_name))
}
