use std::path::PathBuf;

use clap::Parser;
use log::info;

use tbell_combo_rs::collector::{collect_menu, fetch_html, read_html, DEFAULT_MENU_URL};
use tbell_combo_rs::error::Result;
use tbell_combo_rs::menu::save_menu;

#[derive(Parser, Debug)]
#[command(name = "scraper")]
#[command(about = "Scrape the Taco Bell nutrition grid into a menu CSV")]
struct Args {
    /// Page to fetch
    #[arg(long, default_value = DEFAULT_MENU_URL)]
    url: String,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(long, conflicts_with = "url")]
    html: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long, default_value = "tbell_menu.csv")]
    out: PathBuf,

    /// Keep drinks in the menu
    #[arg(long)]
    keep_beverages: bool,
}

fn main() {
    env_logger::builder().parse_env("LOG").init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let html = match &args.html {
        Some(path) => read_html(path)?,
        None => fetch_html(&args.url)?,
    };

    let menu = collect_menu(&html, args.keep_beverages)?;
    save_menu(&args.out, &menu)?;

    info!("Menu written to {}", args.out.display());
    println!("Wrote {} items to {}", menu.len(), args.out.display());
    Ok(())
}
