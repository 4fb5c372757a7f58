use clap::Parser;
use log::info;

use tbell_combo_rs::chart::write_chart;
use tbell_combo_rs::cli::{Cli, Command, LimitArgs};
use tbell_combo_rs::error::Result;
use tbell_combo_rs::interface::{display_banner, display_outcome, prompt_limits, prompt_yes_no};
use tbell_combo_rs::menu::{load_menu, MenuTable};
use tbell_combo_rs::optimizer::{load_limits, save_limits, solve_combo, MacroLimits};

fn main() {
    env_logger::builder().parse_env("LOG").init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Solve(args) => cmd_solve(&cli, &args),
        Command::Dashboard => cmd_dashboard(&cli),
    }
}

/// Limits from the `--limits` file if it exists, defaults otherwise.
fn base_limits(cli: &Cli) -> Result<MacroLimits> {
    match &cli.limits {
        Some(path) if path.exists() => {
            info!("Loading limits from {}", path.display());
            load_limits(path)
        }
        _ => Ok(MacroLimits::default()),
    }
}

/// Load the menu, or explain how to produce it.
fn open_menu(cli: &Cli) -> Result<Option<MenuTable>> {
    if !cli.file.exists() {
        eprintln!("Menu file not found: {}", cli.file.display());
        eprintln!("Run the scraper first to create it.");
        return Ok(None);
    }

    let menu = load_menu(&cli.file)?;
    println!("Loaded {} menu items", menu.len());
    Ok(Some(menu))
}

/// Solve, print the outcome and draw the chart when there is a combo.
fn solve_and_report(cli: &Cli, menu: &MenuTable, limits: &MacroLimits) -> Result<()> {
    let outcome = solve_combo(menu, limits)?;
    display_outcome(&outcome);

    if let Some(solution) = outcome.solution() {
        write_chart(&cli.chart, solution, &mut rand::thread_rng())?;
        println!("Chart written to {}", cli.chart.display());
    }
    Ok(())
}

/// One-shot solve with limits from file and flags.
fn cmd_solve(cli: &Cli, args: &LimitArgs) -> Result<()> {
    let Some(menu) = open_menu(cli)? else {
        return Ok(());
    };
    let limits = args.apply(base_limits(cli)?);

    display_banner();
    solve_and_report(cli, &menu, &limits)
}

/// Prompt for limits, solve, and repeat until the user is done.
fn cmd_dashboard(cli: &Cli) -> Result<()> {
    let Some(menu) = open_menu(cli)? else {
        return Ok(());
    };
    let mut limits = base_limits(cli)?;

    display_banner();
    loop {
        limits = prompt_limits(&limits)?;
        println!();
        solve_and_report(cli, &menu, &limits)?;

        if !prompt_yes_no("Adjust limits and re-solve?", true)? {
            break;
        }
    }

    if let Some(path) = &cli.limits {
        if prompt_yes_no("Save these limits?", true)? {
            save_limits(path, &limits)?;
            println!("Limits saved to {}", path.display());
        }
    }

    Ok(())
}
