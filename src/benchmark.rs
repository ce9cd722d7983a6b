//! Benchmarking of vector and matrix operations.

#[cfg(feature = "criterion")]
pub mod criterion;

pub mod benchmarks;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can run and time a function repeatedly.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs the benchmarked function in a loop for a fixed duration, after an
/// optional delay. Useful for attaching an external profiler to the loop.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        /// A benchmarking target.
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            fn execute(&self, benchmarker: impl Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        dot_vector3,
        cross_vector3,
        normalize_vector3,
        transform_coord_vector3_glam,
        transform_coord_vector3_scalar,
        transform_normal_vector3_glam,
        transform_normal_vector3_scalar,
    },
    matrix => {
        mul_matrix4x4_glam,
        mul_matrix4x4_scalar,
        transpose_matrix4x4_glam,
        transpose_matrix4x4_scalar,
        invert_matrix4x4_glam,
        invert_matrix4x4_scalar,
        rotation_roll_pitch_yaw_glam,
        rotation_roll_pitch_yaw_scalar,
        look_at_rh_glam,
        look_at_rh_scalar,
        perspective_fov_rh_glam,
        perspective_fov_rh_scalar,
    },
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        log::debug!(
            "Ran {iterations} iterations in {:.3} s",
            start.elapsed().as_secs_f64()
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            std::thread::sleep(remaining);
        }
    }
}

/// Runs the given benchmarking target for at least `duration` seconds (and at
/// least once), starting no earlier than `delay` seconds after this call.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(duration, delayer);

    log::info!("Running benchmark target {target:?}");
    target.execute(benchmarker);
}
