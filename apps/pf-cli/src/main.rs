use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pf_app::{
    AppError, AppResult, OperatingParameters, SessionState, load_parameters, render_chart,
};
use pf_hydro::PIPE_CATALOG;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Pumpflow CLI - pump operating point calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the combined chart and print a summary (or full JSON)
    Chart {
        #[command(flatten)]
        inputs: ChartInputs,
        /// Emit the full chart series as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the arranged pump curve as CSV
    PumpCurve {
        #[command(flatten)]
        inputs: ChartInputs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the system resistance curve as CSV
    SystemCurve {
        #[command(flatten)]
        inputs: ChartInputs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the nominal pipe size catalog
    Pipes,
    /// Validate a parameters file
    Validate {
        /// Path to the parameters YAML file
        params_path: PathBuf,
    },
}

#[derive(Args)]
struct ChartInputs {
    /// Parameters YAML file (documented defaults apply when omitted)
    #[arg(short, long)]
    params: Option<PathBuf>,
    /// Pump curve dataset, CSV or spreadsheet (bundled default when omitted)
    #[arg(short, long)]
    curve: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chart { inputs, json } => cmd_chart(&inputs, json),
        Commands::PumpCurve { inputs, output } => cmd_pump_curve(&inputs, output.as_deref()),
        Commands::SystemCurve { inputs, output } => cmd_system_curve(&inputs, output.as_deref()),
        Commands::Pipes => cmd_pipes(),
        Commands::Validate { params_path } => cmd_validate(&params_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Build the recompute inputs shared by the chart/export commands.
fn build_inputs(inputs: &ChartInputs) -> AppResult<(OperatingParameters, SessionState)> {
    let params = match &inputs.params {
        Some(path) => load_parameters(path)?,
        None => OperatingParameters::default(),
    };

    let mut session = SessionState::new();
    if let Some(path) = &inputs.curve {
        let bytes = fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");
        session.upload(&bytes, filename)?;
    }
    Ok((params, session))
}

fn cmd_chart(inputs: &ChartInputs, json: bool) -> AppResult<()> {
    let (params, session) = build_inputs(inputs)?;
    let chart = render_chart(&params, &session)?;

    if json {
        let rendered = serde_json::to_string_pretty(&chart)
            .map_err(|e| AppError::Io(io::Error::other(e)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Operating point chart ({})", chart.dataset_status);
    println!(
        "  Pump curve:   {} points, discharge {:.1}-{:.1} m³/h, head {:.1}-{:.1} m",
        chart.discharge.len(),
        chart.discharge.first().copied().unwrap_or(0.0),
        chart.discharge.last().copied().unwrap_or(0.0),
        min_of(&chart.head),
        max_of(&chart.head),
    );
    println!(
        "  System curve: {} points, flow up to {:.1} m³/h, head {:.1}-{:.1} m",
        chart.loss_flow.len(),
        chart.loss_flow.last().copied().unwrap_or(0.0),
        min_of(&chart.loss_head),
        max_of(&chart.loss_head),
    );
    println!("  The curves cross at the operating point; plot them to read it off.");
    Ok(())
}

fn cmd_pump_curve(inputs: &ChartInputs, output: Option<&Path>) -> AppResult<()> {
    let (params, session) = build_inputs(inputs)?;
    let chart = render_chart(&params, &session)?;

    let mut csv = String::from("discharge_m3_per_h,head_m,efficiency\n");
    for i in 0..chart.discharge.len() {
        csv.push_str(&format!(
            "{},{},{}\n",
            chart.discharge[i], chart.head[i], chart.efficiency[i]
        ));
    }
    write_output(&csv, output, chart.discharge.len(), "pump curve")
}

fn cmd_system_curve(inputs: &ChartInputs, output: Option<&Path>) -> AppResult<()> {
    let (params, session) = build_inputs(inputs)?;
    let chart = render_chart(&params, &session)?;

    let mut csv = String::from("flow_m3_per_h,total_head_m\n");
    for i in 0..chart.loss_flow.len() {
        csv.push_str(&format!("{},{}\n", chart.loss_flow[i], chart.loss_head[i]));
    }
    write_output(&csv, output, chart.loss_flow.len(), "system curve")
}

fn write_output(csv: &str, output: Option<&Path>, points: usize, what: &str) -> AppResult<()> {
    if let Some(path) = output {
        fs::write(path, csv)?;
        println!("✓ Exported {points} {what} points to {}", path.display());
    } else {
        print!("{csv}");
        io::stdout().flush()?;
    }
    Ok(())
}

fn cmd_pipes() -> AppResult<()> {
    println!("Nominal pipe size catalog:");
    for entry in &PIPE_CATALOG {
        println!(
            "  {:>2} in  (inner diameter {:.3} in)",
            entry.nominal_in, entry.inner_diameter_in
        );
    }
    Ok(())
}

fn cmd_validate(params_path: &Path) -> AppResult<()> {
    println!("Validating parameters: {}", params_path.display());
    let params = load_parameters(params_path)?;
    println!("✓ Parameters are valid");
    println!(
        "  {} pipe, {} parallel x {} series pumps",
        params.pipe_size, params.parallel_count, params.series_count
    );
    Ok(())
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
