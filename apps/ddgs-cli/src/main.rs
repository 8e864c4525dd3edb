use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ddgs_balance::{BalanceResult, compare, compute};
use ddgs_core::units::{as_pct, as_tph};
use ddgs_project::{ProjectResult, Scenario, load_scenario, save_scenario};
use tracing::info;

#[derive(Parser)]
#[command(name = "ddgs-cli")]
#[command(about = "DDGS protein simulator - dryer mass balance tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and input ranges
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run the mass balance for a scenario
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Skip the no-syrup comparison
        #[arg(long)]
        no_compare: bool,
        /// Write result fields as CSV to this path (- for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a default scenario file to start from
    Init {
        /// Destination path for the scenario YAML file
        path: PathBuf,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            no_compare,
            output,
        } => cmd_run(&scenario_path, !no_compare, output.as_deref()),
        Commands::Init { path } => cmd_init(&path),
    }
}

fn cmd_validate(scenario_path: &Path) -> ProjectResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_run(scenario_path: &Path, with_compare: bool, output: Option<&Path>) -> ProjectResult<()> {
    let scenario = load_scenario(scenario_path)?;
    info!(name = %scenario.name, "running scenario");

    let inputs = scenario.to_inputs();
    let result = compute(&inputs);

    println!("Scenario: {}", scenario.name);
    println!();
    println!(
        "  DDGS as-fed:         {:>8.2} t/h",
        as_tph(result.product_as_fed_mass)
    );
    println!(
        "  DDGS dry solids:     {:>8.2} t/h",
        as_tph(result.product_dry_mass)
    );
    println!(
        "  Protein (% DS):      {:>8.2} %",
        as_pct(result.protein_pct_dry)
    );
    println!(
        "  Protein (% as-fed):  {:>8.2} %",
        as_pct(result.protein_pct_as_fed)
    );

    print_stream_detail(&scenario, &result);

    if with_compare {
        let comparison = compare(&inputs);
        let base = &comparison.without_syrup;
        println!();
        println!("No-syrup comparison:");
        println!(
            "  DDGS as-fed:         {:>8.2} t/h",
            as_tph(base.product_as_fed_mass)
        );
        println!(
            "  Protein (% as-fed):  {:>8.2} %",
            as_pct(base.protein_pct_as_fed)
        );
        println!(
            "  Δ DDGS as-fed:       {:>+8.2} t/h",
            as_tph(comparison.delta_product_as_fed())
        );
        println!(
            "  Δ Protein (as-fed):  {:>+8.2} pp",
            as_pct(comparison.delta_protein_pct_as_fed())
        );
    }

    if let Some(out_path) = output {
        let csv = result_csv(&result);
        if is_stdout_path(out_path) {
            println!();
            print!("{}", csv);
        } else {
            std::fs::write(out_path, csv)?;
            println!();
            println!("✓ Exported results to {}", out_path.display());
        }
    }

    Ok(())
}

/// `-` as the output path means stdout, as usual for export flags.
fn is_stdout_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn cmd_init(path: &Path) -> ProjectResult<()> {
    let scenario = Scenario::default();
    save_scenario(path, &scenario)?;
    println!("✓ Wrote default scenario to {}", path.display());
    Ok(())
}

fn print_stream_detail(scenario: &Scenario, result: &BalanceResult) {
    // The syrup row shows the as-fed flow left after the cut.
    let syrup_after_cut =
        scenario.syrup.flow_t_per_h * (1.0 - scenario.dryer.syrup_cut_pct / 100.0);

    println!();
    println!("Stream detail:");
    println!(
        "  {:<18} {:>12} {:>10} {:>10} {:>13} {:>13}",
        "stream", "as-fed t/h", "solids %", "DS t/h", "protein %DS", "protein t/h"
    );
    println!(
        "  {:<18} {:>12.2} {:>10.1} {:>10.2} {:>13.1} {:>13.2}",
        "wet cake (WDG)",
        scenario.wet_cake.flow_t_per_h,
        scenario.wet_cake.solids_pct,
        as_tph(result.ds_wet_cake),
        scenario.wet_cake.protein_ds_pct,
        as_tph(result.protein_wet_cake)
    );
    println!(
        "  {:<18} {:>12.2} {:>10.1} {:>10.2} {:>13.1} {:>13.2}",
        "syrup (CDS, cut)",
        syrup_after_cut,
        scenario.syrup.solids_pct,
        as_tph(result.ds_syrup),
        scenario.syrup.protein_ds_pct,
        as_tph(result.protein_syrup)
    );
    println!();
    println!("  DS into dryer:       {:>8.2} t/h", as_tph(result.ds_in));
    println!("  DS lost:             {:>8.2} t/h", as_tph(result.ds_lost));
}

fn result_csv(result: &BalanceResult) -> String {
    let mut csv = String::from("field,value\n");
    let rows: [(&str, f64); 12] = [
        ("ds_wet_cake_t_per_h", as_tph(result.ds_wet_cake)),
        ("protein_wet_cake_t_per_h", as_tph(result.protein_wet_cake)),
        ("ds_syrup_t_per_h", as_tph(result.ds_syrup)),
        ("protein_syrup_t_per_h", as_tph(result.protein_syrup)),
        ("ds_in_t_per_h", as_tph(result.ds_in)),
        ("ds_out_t_per_h", as_tph(result.ds_out)),
        ("ds_lost_t_per_h", as_tph(result.ds_lost)),
        ("protein_total_t_per_h", as_tph(result.protein_total)),
        ("product_dry_t_per_h", as_tph(result.product_dry_mass)),
        (
            "product_as_fed_t_per_h",
            as_tph(result.product_as_fed_mass),
        ),
        ("protein_pct_dry", as_pct(result.protein_pct_dry)),
        ("protein_pct_as_fed", as_pct(result.protein_pct_as_fed)),
    ];
    for (field, value) in rows {
        csv.push_str(&format!("{},{}\n", field, value));
    }
    csv
}
