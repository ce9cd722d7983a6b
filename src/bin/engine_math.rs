use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, ensure};
    use clap::{Args, Parser, Subcommand};
    use engine_math::{
        Vector3,
        angle::{Angle, Degrees},
        backend::{BackendKind, GlamBackend, ScalarBackend, TransformBackend},
    };

    const MIN_DIRECTION_NORM: f32 = 1e-6;
    const MIN_VIEW_UP_SINE: f32 = 1e-3;

    #[derive(Debug, Parser)]
    #[command(about = "Vector, matrix and transform utilities", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Project a world-space point through a look-at camera with a
        /// perspective projection
        Project(ProjectArgs),
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: engine_math::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    #[derive(Debug, Args)]
    struct ProjectArgs {
        /// Camera position, as `x,y,z`
        #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
        eye: Vector3,

        /// Point the camera looks at, as `x,y,z`
        #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
        target: Vector3,

        /// Approximate upward direction of the camera, as `x,y,z`
        #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true, default_value = "0,1,0")]
        up: Vector3,

        /// Vertical field of view in degrees
        #[arg(long, default_value_t = 60.0)]
        fov_deg: f32,

        /// Width-to-height ratio of the view
        #[arg(long, default_value_t = 1.0)]
        aspect: f32,

        /// Distance to the near clipping plane
        #[arg(long, default_value_t = 0.1)]
        near: f32,

        /// Distance to the far clipping plane
        #[arg(long, default_value_t = 100.0)]
        far: f32,

        /// World-space point to project, as `x,y,z`
        #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
        point: Vector3,

        /// Backend computing the transforms
        #[arg(long, value_enum, default_value_t = BackendKind::default())]
        backend: BackendKind,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Project(args) => {
                log::debug!("Projecting with the {} backend", args.backend.name());
                match args.backend {
                    BackendKind::Glam => project::<GlamBackend>(&args),
                    BackendKind::Scalar => project::<ScalarBackend>(&args),
                    #[cfg(feature = "nalgebra")]
                    BackendKind::Nalgebra => {
                        project::<engine_math::backend::NalgebraBackend>(&args)
                    }
                }
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                engine_math::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

    fn project<B: TransformBackend>(args: &ProjectArgs) -> Result<()> {
        ensure!(
            args.fov_deg > 0.0 && args.fov_deg < 180.0,
            "Field of view must be between 0 and 180 degrees, got {}",
            args.fov_deg
        );
        ensure!(args.aspect > 0.0, "Aspect ratio must be positive, got {}", args.aspect);
        ensure!(
            args.near > 0.0 && args.far > args.near,
            "Clipping planes must satisfy 0 < near < far, got near = {} and far = {}",
            args.near,
            args.far
        );
        ensure!(
            has_stable_view_basis(&args.eye, &args.target, &args.up),
            "The eye and target must differ, and the view direction must not be (nearly) \
             parallel to up"
        );

        let view = B::look_at_rh(&args.eye, &args.target, &args.up);
        let projection = B::perspective_fov_rh(
            Degrees(args.fov_deg).radians(),
            args.aspect,
            args.near,
            args.far,
        );
        let view_projection = B::multiply(&view, &projection);

        let view_space_point = B::transform_coord(&args.point, &view);
        let projected_point = B::transform_coord(&args.point, &view_projection);

        println!("View:\n{view}");
        println!("Projection:\n{projection}");
        println!("View-projection:\n{view_projection}");
        println!("View-space point: {}", format_vector3(&view_space_point));
        println!("Projected point:  {}", format_vector3(&projected_point));

        if !view_space_point.z.is_sign_negative() {
            log::warn!("The point lies behind the camera");
        }
        Ok(())
    }

    /// Whether the view direction and the up vector are non-zero and span an
    /// angle whose sine exceeds [`MIN_VIEW_UP_SINE`].
    fn has_stable_view_basis(eye: &Vector3, target: &Vector3, up: &Vector3) -> bool {
        let view_direction = (target - eye).try_normalized(MIN_DIRECTION_NORM);
        let up = up.try_normalized(MIN_DIRECTION_NORM);
        match (view_direction, up) {
            (Some(view_direction), Some(up)) => view_direction.cross(&up).norm() > MIN_VIEW_UP_SINE,
            _ => false,
        }
    }

    fn parse_vector3(value: &str) -> Result<Vector3> {
        let components = value
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("Invalid vector component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        let [x, y, z] = components[..] else {
            anyhow::bail!(
                "Expected three comma-separated components, got {}",
                components.len()
            );
        };
        Ok(Vector3::new(x, y, z))
    }

    fn format_vector3(vector: &Vector3) -> String {
        format!("({:.4}, {:.4}, {:.4})", vector.x, vector.y, vector.z)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parsing_vector3_works() {
            assert_eq!(
                parse_vector3("1, -2.5,3").unwrap(),
                Vector3::new(1.0, -2.5, 3.0)
            );
        }

        #[test]
        fn parsing_vector3_with_wrong_component_count_fails() {
            assert!(parse_vector3("1,2").is_err());
            assert!(parse_vector3("1,2,3,4").is_err());
        }

        #[test]
        fn parsing_vector3_with_invalid_component_fails() {
            assert!(parse_vector3("1,two,3").is_err());
        }

        #[test]
        fn project_command_parses() {
            let cli = Cli::try_parse_from([
                "engine_math",
                "project",
                "--eye",
                "0,0,5",
                "--target",
                "0,0,0",
                "--point",
                "1,-1,0",
                "--backend",
                "scalar",
            ])
            .unwrap();

            let Command::Project(args) = cli.command else {
                panic!("expected project command");
            };
            assert_eq!(args.eye, Vector3::new(0.0, 0.0, 5.0));
            assert_eq!(args.point, Vector3::new(1.0, -1.0, 0.0));
            assert_eq!(args.up, Vector3::UP);
            assert_eq!(args.backend, BackendKind::Scalar);
        }

        #[test]
        fn view_basis_rejects_nearly_parallel_up() {
            let eye = Vector3::new(2.0, 0.0, 0.0);
            assert!(!has_stable_view_basis(&eye, &Vector3::new(2.0, 10.0, 1e-5), &Vector3::UP));
            assert!(!has_stable_view_basis(&eye, &Vector3::new(2.0, -10.0, 0.0), &Vector3::UP));
            assert!(!has_stable_view_basis(&eye, &eye, &Vector3::UP));
            assert!(!has_stable_view_basis(&eye, &Vector3::ZERO, &Vector3::ZERO));
        }

        #[test]
        fn view_basis_accepts_oblique_up() {
            let eye = Vector3::new(2.0, 0.0, 0.0);
            assert!(has_stable_view_basis(&eye, &Vector3::ZERO, &Vector3::UP));
            assert!(has_stable_view_basis(&eye, &Vector3::new(2.0, 10.0, 0.1), &Vector3::UP));
        }

        #[test]
        fn projecting_with_degenerate_camera_fails() {
            let cli = Cli::try_parse_from([
                "engine_math",
                "project",
                "--eye",
                "1,1,1",
                "--target",
                "1,1,1",
                "--point",
                "0,0,0",
            ])
            .unwrap();

            let Command::Project(args) = cli.command else {
                panic!("expected project command");
            };
            assert!(project::<GlamBackend>(&args).is_err());
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
