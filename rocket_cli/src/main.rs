//! # Oilfire CLI
//!
//! Terminal front-end for the engine sizing pipeline: an interactive prompt
//! session, a scriptable single design, and a thrust × chamber-pressure sweep.
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (default `warn`, which shows table clamps and fuel fallbacks).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rocket_core::calculations::evaluate_with;
use rocket_core::file_io::{load_assumptions, save_record, ResultSink, TextRecordSink};
use rocket_core::geometry::{ChamberNozzleProfile, FlangeLayout, FlangeSpec, InjectorLayout};
use rocket_core::{CalcError, CalcResult, DesignAssumptions, DesignRecord, DesignRequest, Evaluation, Fuel};
use tracing_subscriber::EnvFilter;

/// Directory text records go to unless `--out` says otherwise
const DEFAULT_RECORD_DIR: &str = "TXTs";

#[derive(Parser)]
#[command(name = "rocket-cli")]
#[command(about = "Oilfire - liquid rocket engine sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for thrust, chamber pressure and fuel, then size the engine
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Size one engine from command-line parameters
    Design {
        #[command(flatten)]
        design: DesignArgs,
        /// Thrust (lbf)
        #[arg(long, default_value_t = 200.0)]
        thrust: f64,
        /// Chamber pressure (psi)
        #[arg(long, default_value_t = 500.0)]
        chamber_pressure: f64,
        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Also save a JSON design record to this file (or into this
        /// directory, named from the inputs)
        #[arg(long)]
        save: Option<PathBuf>,
        /// Label stored in the JSON design record
        #[arg(long, default_value = "")]
        label: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Size one engine per thrust × chamber-pressure grid point
    Sweep {
        #[command(flatten)]
        design: DesignArgs,
        /// Thrust values (lbf), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        thrust: Vec<f64>,
        /// Chamber pressure values (psi), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        chamber_pressure: Vec<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Parameters shared by `design` and `sweep`.
#[derive(Args)]
struct DesignArgs {
    /// Fuel: alcohol, gasoline or ethanol
    #[arg(long, default_value = "gasoline", value_parser = parse_fuel)]
    fuel: Fuel,
    /// Oxidizer/fuel mixture ratio (defaults to the fuel's usual ratio)
    #[arg(long)]
    mixture_ratio: Option<f64>,
    /// Characteristic length L* (in)
    #[arg(long, default_value_t = 60.0)]
    characteristic_length: f64,
    /// Coolant velocity (ft/s)
    #[arg(long, default_value_t = 30.0)]
    coolant_velocity: f64,
    /// Number of fuel injector holes
    #[arg(long, default_value_t = 12)]
    fuel_holes: u32,
    /// Number of oxidizer injector holes
    #[arg(long, default_value_t = 12)]
    oxidizer_holes: u32,
    /// Chamber/throat diameter ratio Dc/Dt
    #[arg(long, default_value_t = 3.0)]
    contraction_ratio: f64,
}

impl DesignArgs {
    fn request(&self, thrust_lbf: f64, chamber_pressure_psi: f64) -> DesignRequest {
        DesignRequest {
            fuel: self.fuel,
            thrust_lbf,
            chamber_pressure_psi,
            mixture_ratio: self.mixture_ratio.unwrap_or_else(|| self.fuel.default_mixture_ratio()),
            characteristic_length_in: self.characteristic_length,
            coolant_velocity_ft_s: self.coolant_velocity,
            fuel_holes: self.fuel_holes,
            oxidizer_holes: self.oxidizer_holes,
            contraction_ratio: self.contraction_ratio,
        }
    }
}

/// Where results go and which design basis applies.
#[derive(Args)]
struct OutputArgs {
    /// Directory for text records
    #[arg(long, default_value = DEFAULT_RECORD_DIR)]
    out: PathBuf,
    /// Skip writing text records
    #[arg(long)]
    no_record: bool,
    /// JSON file overriding design assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

impl OutputArgs {
    fn basis(&self) -> CalcResult<DesignAssumptions> {
        match &self.assumptions {
            Some(path) => load_assumptions(path),
            None => Ok(DesignAssumptions::default()),
        }
    }

    fn sink(&self) -> Option<TextRecordSink> {
        (!self.no_record).then(|| TextRecordSink::new(&self.out))
    }
}

fn parse_fuel(s: &str) -> Result<Fuel, String> {
    Fuel::from_str_flexible(s).map_err(|e| e.to_string())
}

fn main() -> CalcResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive { output } => cmd_interactive(&output),
        Commands::Design {
            design,
            thrust,
            chamber_pressure,
            json,
            save,
            label,
            output,
        } => cmd_design(
            &design.request(thrust, chamber_pressure),
            json,
            save.as_deref(),
            &label,
            &output,
        ),
        Commands::Sweep {
            design,
            thrust,
            chamber_pressure,
            output,
        } => cmd_sweep(&design, &thrust, &chamber_pressure, &output),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    let Some(input) = prompt_line(prompt) else {
        return default;
    };
    if input.is_empty() {
        return default;
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            println!("  Invalid number, using {}", default);
            default
        }
    }
}

fn prompt_fuel(prompt: &str) -> Fuel {
    match prompt_line(prompt) {
        Some(s) if !s.is_empty() => Fuel::resolve(&s),
        _ => Fuel::DEFAULT,
    }
}

fn cmd_interactive(output: &OutputArgs) -> CalcResult<()> {
    println!("Oilfire - Liquid Rocket Engine Sizing");
    println!("=====================================");
    println!();

    let thrust = prompt_f64("Thrust (lbf) [200]: ", 200.0);
    let chamber_pressure = prompt_f64("Chamber pressure (psi) [500]: ", 500.0);
    let fuel = prompt_fuel("Fuel (alcohol/gasoline/ethanol) [gasoline]: ");

    let request = DesignRequest {
        thrust_lbf: thrust,
        chamber_pressure_psi: chamber_pressure,
        ..DesignRequest::for_fuel(fuel)
    };

    let evaluation = evaluate_with(&request, &output.basis()?)?;
    print_summary(&request, &evaluation);
    write_record(output, &request, &evaluation)
}

fn cmd_design(
    request: &DesignRequest,
    json: bool,
    save: Option<&Path>,
    label: &str,
    output: &OutputArgs,
) -> CalcResult<()> {
    let evaluation = evaluate_with(request, &output.basis()?)?;

    if json {
        let text = serde_json::to_string_pretty(&evaluation).map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", text);
    } else {
        print_summary(request, &evaluation);
    }

    if let Some(path) = save {
        let record = DesignRecord::new(label, request.clone(), evaluation.result);
        let path = if path.is_dir() {
            path.join(record.file_name())
        } else {
            path.to_path_buf()
        };
        save_record(&record, &path)?;
        println!("Design record saved to {}", path.display());
    }

    write_record(output, request, &evaluation)
}

fn cmd_sweep(design: &DesignArgs, thrusts: &[f64], pressures: &[f64], output: &OutputArgs) -> CalcResult<()> {
    let basis = output.basis()?;
    let mut sink = output.sink();

    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "F (lbf)", "Pc (psi)", "w (kg/s)", "Dt (mm)", "Dc (mm)", "Lc (mm)", "clamps"
    );
    for &thrust in thrusts {
        for &chamber_pressure in pressures {
            let request = design.request(thrust, chamber_pressure);
            let evaluation = evaluate_with(&request, &basis)?;
            let r = &evaluation.result;
            println!(
                "{:>10.1} {:>10.1} {:>10.4} {:>10.3} {:>10.3} {:>10.3} {:>8}",
                thrust,
                chamber_pressure,
                r.total_propellant_flow.0,
                r.throat_diameter.0,
                r.chamber_diameter.0,
                r.chamber_length.0,
                evaluation.clamps.len()
            );
            if let Some(sink) = sink.as_mut() {
                sink.record(&request, r)?;
            }
        }
    }

    if let Some(sink) = sink {
        println!();
        println!("Wrote {} records to {}", sink.written().len(), sink.dir().display());
    }
    Ok(())
}

fn write_record(output: &OutputArgs, request: &DesignRequest, evaluation: &Evaluation) -> CalcResult<()> {
    if let Some(mut sink) = output.sink() {
        sink.record(request, &evaluation.result)?;
        println!("Record written to {}", sink.path_for(request).display());
    }
    Ok(())
}

fn print_summary(request: &DesignRequest, evaluation: &Evaluation) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  ENGINE DESIGN");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Fuel:             {} + gaseous oxygen", request.fuel.display_name());
    println!("  Thrust:           {:.1} lbf", request.thrust_lbf);
    println!("  Chamber pressure: {:.1} psi", request.chamber_pressure_psi);
    println!("  Mixture ratio:    {:.2}", request.mixture_ratio);
    println!();
    println!("Results:");
    for quantity in evaluation.result.quantities() {
        println!("  {:<32} {:>14.6} {}", quantity.name, quantity.value, quantity.unit);
    }

    let profile = ChamberNozzleProfile::from_result(&evaluation.result);
    let injector = InjectorLayout::from_design(request, &evaluation.result);
    println!();
    println!("Geometry:");
    println!("  Overall length:       {:.1} mm", profile.overall_length().0);
    println!(
        "  Injector rings:       ox {:.2} mm, fuel {:.2} mm",
        injector.oxidizer_ring_radius().0,
        injector.fuel_ring_radius().0
    );
    if let Ok(flange) = FlangeLayout::from_result(&evaluation.result, &FlangeSpec::default()) {
        println!(
            "  Flange:               outer R {:.2} mm, {} x {:.2} mm bolts on R {:.2} mm",
            flange.outer_radius.0,
            flange.bolt_count,
            flange.bolt_diameter.0,
            flange.bolt_circle_radius.0
        );
    }

    if !evaluation.is_within_tables() {
        println!();
        println!("Warning: inputs outside tabulated data, endpoint values used:");
        for clamp in &evaluation.clamps {
            println!("  {}: {} clamped to {}", clamp.table, clamp.query, clamp.bound);
        }
    }
    println!("═══════════════════════════════════════");
}
