//! Lamina CLI — ply failure evaluation, envelope export, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lamina")]
#[command(version, about = "Lamina — composite ply failure-criterion engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate failure criteria for a stress state.
    Evaluate {
        /// Material name from the built-in database (or --materials file).
        #[arg(short, long, default_value = "t300_epoxy")]
        material: String,

        /// Criterion name (tsai_hill, hashin, ...). Omit to run all.
        #[arg(short, long)]
        criterion: Option<String>,

        /// Fiber-direction stress σ∥.
        #[arg(long, default_value_t = 0.0)]
        sigma1: f64,

        /// Transverse stress σ⊥.
        #[arg(long, default_value_t = 0.0)]
        sigma2: f64,

        /// In-plane shear stress τ∥⊥.
        #[arg(long, default_value_t = 0.0)]
        tau12: f64,

        /// Fiber-direction strain ε∥.
        #[arg(long, default_value_t = 0.0)]
        eps1: f64,

        /// Transverse strain ε⊥.
        #[arg(long, default_value_t = 0.0)]
        eps2: f64,

        /// Engineering shear strain γ∥⊥.
        #[arg(long, default_value_t = 0.0)]
        gamma12: f64,

        /// Ply angle in degrees.
        #[arg(long, default_value_t = 0.0)]
        angle: f64,

        /// Treat the ply as embedded (in-situ strengthening).
        #[arg(long)]
        embedded: bool,

        /// Load materials from a JSON file instead of the built-in database.
        #[arg(long)]
        materials: Option<String>,

        /// Append telemetry events to this JSON-lines file.
        #[arg(long)]
        telemetry: Option<String>,
    },

    /// Tessellate a failure envelope and export it as JSON.
    Envelope {
        /// Material name.
        #[arg(short, long, default_value = "t300_epoxy")]
        material: String,

        /// Criterion name.
        #[arg(short, long, default_value = "tsai_hill")]
        criterion: String,

        /// Tessellation quality factor (1.0 = base resolution).
        #[arg(short, long, default_value_t = 1.0)]
        quality: f64,

        /// Output JSON file path.
        #[arg(short, long, default_value = "envelope.json")]
        output: String,

        /// Load materials from a JSON file instead of the built-in database.
        #[arg(long)]
        materials: Option<String>,

        /// Append telemetry events to this JSON-lines file.
        #[arg(long)]
        telemetry: Option<String>,
    },

    /// List available materials and criteria.
    List,

    /// Validate a material definition file.
    Validate {
        /// Path to a material JSON file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            material,
            criterion,
            sigma1,
            sigma2,
            tau12,
            eps1,
            eps2,
            gamma12,
            angle,
            embedded,
            materials,
            telemetry,
        } => commands::evaluate(&commands::EvaluateArgs {
            material,
            criterion,
            stress: [sigma1, sigma2, tau12],
            strain: [eps1, eps2, gamma12],
            angle_deg: angle,
            embedded,
            materials,
            telemetry,
        }),
        Commands::Envelope {
            material,
            criterion,
            quality,
            output,
            materials,
            telemetry,
        } => commands::envelope(
            &material,
            &criterion,
            quality,
            &output,
            materials.as_deref(),
            telemetry.as_deref(),
        ),
        Commands::List => commands::list(),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
