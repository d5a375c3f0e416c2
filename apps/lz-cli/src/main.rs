use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use lz_app::{
    AppResult, RunMode, RunOptions, RunRequest, ensure_run, extract_series, get_run_summary,
    list_runs, list_scenarios, load_project, load_run,
};
use lz_results::GnuplotScript;

#[derive(Parser)]
#[command(name = "lz-cli")]
#[command(about = "lorenzsim CLI - fixed-step Lorenz system simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List scenarios in a project
    Scenarios {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Run a simulation
    #[command(subcommand)]
    Run(RunCommands),
    /// List cached runs for a scenario
    Runs {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Scenario ID to list runs for
        scenario_id: String,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export a variable's time series from a run
    ExportSeries {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Variable name (x, y, or z)
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a run's data file and a gnuplot script for it
    Plot {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Trajectory data file to write
        #[arg(long, default_value = "full_simulation.dat")]
        data: PathBuf,
        /// Gnuplot script file to write
        #[arg(long, default_value = "plot_results.gp")]
        script: PathBuf,
        /// PNG the script renders to
        #[arg(long, default_value = "lorenz_plot.png")]
        output: String,
        /// Title across the multiplot
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Subcommand)]
enum RunCommands {
    /// Run one pass over the scenario's full span
    Full {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Scenario ID to simulate
        scenario_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// Run two chained passes split at t-mid, the second warm-started
    Split {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Scenario ID to simulate
        scenario_id: String,
        /// Split time, strictly inside the scenario span
        #[arg(long)]
        t_mid: f64,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenarios { project_path } => cmd_scenarios(&project_path),
        Commands::Run(run_cmd) => match run_cmd {
            RunCommands::Full {
                project_path,
                scenario_id,
                no_cache,
            } => cmd_run(&project_path, &scenario_id, RunMode::Full, !no_cache),
            RunCommands::Split {
                project_path,
                scenario_id,
                t_mid,
                no_cache,
            } => cmd_run(
                &project_path,
                &scenario_id,
                RunMode::Split { t_mid },
                !no_cache,
            ),
        },
        Commands::Runs {
            project_path,
            scenario_id,
        } => cmd_runs(&project_path, &scenario_id),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::ExportSeries {
            project_path,
            run_id,
            variable,
            output,
        } => cmd_export_series(&project_path, &run_id, &variable, output.as_deref()),
        Commands::Plot {
            project_path,
            run_id,
            data,
            script,
            output,
            title,
        } => cmd_plot(&project_path, &run_id, &data, &script, &output, title),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_project(project_path)?;
    lz_app::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_scenarios(project_path: &Path) -> AppResult<()> {
    let project = load_project(project_path)?;
    let scenarios = list_scenarios(&project);

    if scenarios.is_empty() {
        println!("No scenarios found in project");
    } else {
        println!("Scenarios in project:");
        for sc in scenarios {
            println!(
                "  {} - {} (span [{}, {}], h = {})",
                sc.id, sc.name, sc.t_min, sc.t_max, sc.step_h
            );
        }
    }
    Ok(())
}

fn cmd_run(
    project_path: &Path,
    scenario_id: &str,
    mode: RunMode,
    use_cache: bool,
) -> AppResult<()> {
    match mode {
        RunMode::Full => println!("Running full simulation for scenario: {}", scenario_id),
        RunMode::Split { t_mid } => println!(
            "Running split simulation for scenario: {} (t_mid = {})",
            scenario_id, t_mid
        ),
    }

    let request = RunRequest {
        project_path,
        scenario_id,
        mode,
        options: RunOptions {
            use_cache,
            solver_version: "0.1.0".to_string(),
        },
    };

    let response = ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Simulation completed: {}", response.run_id);
    }

    print_timing_summary(&response.timing);

    // Load results and show brief summary
    let (_manifest, samples) = load_run(project_path, &response.run_id)?;
    let summary = get_run_summary(&samples)?;
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3}",
        summary.time_range.0, summary.time_range.1
    );
    if !summary.all_finite {
        println!("  Warning: trajectory contains non-finite values (divergent configuration)");
    }

    Ok(())
}

fn print_timing_summary(timing: &lz_app::RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let compile_pct = 100.0 * timing.compile_time_s / total;
    let solve_pct = 100.0 * timing.solve_time_s / total;
    let save_pct = 100.0 * timing.save_time_s / total;

    println!("\nTiming summary:");
    println!(
        "  Compile: {:.3}s ({:.1}%)",
        timing.compile_time_s, compile_pct
    );
    println!("  Solve:   {:.3}s ({:.1}%)", timing.solve_time_s, solve_pct);
    println!("  Save:    {:.3}s ({:.1}%)", timing.save_time_s, save_pct);
    if timing.load_cache_time_s > 0.0 {
        println!("  Cache load: {:.3}s", timing.load_cache_time_s);
    }
    println!("  Total:   {:.3}s", timing.total_time_s);
    if timing.steps > 0 {
        println!("  Steps:   {}", timing.steps);
    }
}

fn cmd_runs(project_path: &Path, scenario_id: &str) -> AppResult<()> {
    let runs = list_runs(project_path, scenario_id)?;

    if runs.is_empty() {
        println!("No cached runs found for scenario: {}", scenario_id);
    } else {
        println!("Cached runs for scenario '{}':", scenario_id);
        for manifest in runs {
            println!("  {} ({})", manifest.run_id, manifest.timestamp);
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, samples) = load_run(project_path, run_id)?;
    let summary = get_run_summary(&samples)?;

    println!("\nRun Summary:");
    println!("  Scenario: {}", manifest.scenario_id);
    println!("  Recorded: {}", manifest.timestamp);
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3}",
        summary.time_range.0, summary.time_range.1
    );
    println!(
        "  Final state: ({:.6}, {:.6}, {:.6})",
        summary.final_state.0, summary.final_state.1, summary.final_state.2
    );
    if !summary.all_finite {
        println!("  Warning: trajectory contains non-finite values");
    }

    Ok(())
}

fn cmd_export_series(
    project_path: &Path,
    run_id: &str,
    variable: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, samples) = load_run(project_path, run_id)?;
    let series = extract_series(&samples, variable)?;

    // Build CSV
    let mut csv = String::from("t,value\n");
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_plot(
    project_path: &Path,
    run_id: &str,
    data: &Path,
    script: &Path,
    output: &str,
    title: Option<String>,
) -> AppResult<()> {
    let (manifest, samples) = load_run(project_path, run_id)?;

    lz_results::write_trajectory(data, &samples)?;

    let summary = get_run_summary(&samples)?;
    let title = title.unwrap_or_else(|| {
        format!(
            "Lorenz System (t={} to {})",
            summary.time_range.0, summary.time_range.1
        )
    });

    let gp = GnuplotScript::new(data.display().to_string(), title, output.to_string());
    gp.write_to(script)?;

    println!("✓ Plot inputs for run {} written:", manifest.run_id);
    println!(" - {} (data file)", data.display());
    println!(" - {} (gnuplot script)", script.display());
    println!();
    println!(
        "Run 'gnuplot {}' to generate '{}'",
        script.display(),
        output
    );

    Ok(())
}
