//! CLI layer: argument parsing, logging setup, command dispatch and output.

pub mod args;
mod status;

pub use args::*;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vtfind::{
    clean_path, find_vtable, list_interfaces, InterfaceSummary, StatusHandle, VTableResult,
    VtableError,
};

use status::{StderrStatus, STDERR_CHANNEL};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Extract COM interface vtable layouts from C/C++ header files
#[derive(Parser, Debug)]
#[command(name = "vtfind", version, about, after_help = "\
Run 'vtfind <COMMAND> --help' for detailed options and examples.\n\
Common options: -r (recurse into subdirectories), --json (machine-readable output)")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the vtable of one interface, inherited slots included
    Show(ShowArgs),

    /// List every interface declared in the matched headers
    List(ListArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => cmd_show(args),
        Commands::List(args) => cmd_list(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, wins over `--log-level`.
fn init_logging(log_level: &str) {
    let level = match log_level {
        "error" | "info" | "debug" | "trace" => log_level,
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────

fn cmd_show(args: ShowArgs) -> Result<(), VtableError> {
    init_logging(&args.log_level);

    let display = StderrStatus::default();
    let status = args.status.then(|| StatusHandle::new(&display, STDERR_CHANNEL));
    let result = find_vtable(&args.interface, &args.pattern, args.recurse, status)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_vtable(&args.interface, &result));
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> Result<(), VtableError> {
    init_logging(&args.log_level);

    let display = StderrStatus::default();
    let status = args.status.then(|| StatusHandle::new(&display, STDERR_CHANNEL));
    let interfaces = list_interfaces(&args.pattern, args.recurse, status)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&interfaces)?);
    } else {
        print!("{}", render_interfaces(&interfaces));
        eprintln!("{} interfaces found", interfaces.len());
    }
    Ok(())
}

// ─── Text output ────────────────────────────────────────────────────

/// Aligned table: slot, method, line, defining interface, IID.
pub(crate) fn render_vtable(requested: &str, result: &VTableResult) -> String {
    let rows: Vec<[String; 5]> = result.methods.iter()
        .map(|m| [
            m.index.to_string(),
            m.name.clone(),
            m.line_number.map_or_else(|| "-".to_string(), |l| l.to_string()),
            m.defining_interface.clone(),
            m.interface_id.clone().unwrap_or_else(|| "-".to_string()),
        ])
        .collect();

    let mut out = format!(
        "{} ({} slots) in {}\n",
        requested,
        result.methods.len(),
        clean_path(&result.source_path.to_string_lossy())
    );
    out.push_str(&render_table(["#", "Method", "Line", "Interface", "IID"], &rows));
    out
}

/// One row per declaration: name, idiom, base, IID, `path:line`.
pub(crate) fn render_interfaces(interfaces: &[InterfaceSummary]) -> String {
    let rows: Vec<[String; 5]> = interfaces.iter()
        .map(|i| [
            i.name.clone(),
            i.kind.to_string(),
            i.base.clone().unwrap_or_else(|| "-".to_string()),
            i.interface_id.clone(),
            format!("{}:{}", clean_path(&i.path.to_string_lossy()), i.line),
        ])
        .collect();
    render_table(["Interface", "Kind", "Base", "IID", "Location"], &rows)
}

fn render_table<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(|h| h.len());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: Vec<&str>| {
        let line: Vec<String> = cells.iter().zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_row(header.to_vec());
    for row in rows {
        push_row(row.iter().map(String::as_str).collect());
    }
    out
}
