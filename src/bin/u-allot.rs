use std::collections::HashSet;
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_allot::allocation::{AllocationConfig, AllocationRunner};
use u_allot::report::{
    write_assignments_csv, write_summary_csv, AllocationReport, Language, ProgramPalette,
    SlotLabels,
};
use u_allot::roster::{load_applicants, load_offerings};

#[derive(Parser, Debug)]
#[command(
    name = "u-allot",
    about = "Assign applicants to time-slotted programs by ranked preference and seeded lottery",
    version
)]
struct Cli {
    /// Programs CSV: ProgramName, Capacity, Day, TimeSlot
    #[arg(long)]
    programs: PathBuf,
    /// Preferences CSV: name, then preferences in rank order
    #[arg(long)]
    applicants: PathBuf,
    /// Maximum programs per applicant
    #[arg(long, default_value_t = 1)]
    max_per_applicant: usize,
    /// Lottery seed; a random one is chosen and printed when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Write the per-applicant summary CSV here
    #[arg(long)]
    output: Option<PathBuf>,
    /// Write one CSV row per assignment here
    #[arg(long)]
    assignments_output: Option<PathBuf>,
    /// Output language: en or zh-tw
    #[arg(long, default_value_t = Language::English)]
    language: Language,
    /// Print program names without background colors
    #[arg(long)]
    no_color: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level/filter '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("telemetry error: {err}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;
    let text = cli.language.text();

    let offerings = load_offerings(&cli.programs).with_context(|| {
        format!(
            "reading programs from {} ({})",
            cli.programs.display(),
            text.programs_format
        )
    })?;
    let applicants = load_applicants(&cli.applicants).with_context(|| {
        format!(
            "reading applicants from {} ({})",
            cli.applicants.display(),
            text.applicants_format
        )
    })?;
    info!(
        offerings = offerings.len(),
        applicants = applicants.len(),
        "roster loaded"
    );

    let mut config = AllocationConfig::default().with_max_per_applicant(cli.max_per_applicant);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let result = AllocationRunner::run(&applicants, &offerings, &config)?;
    let report = AllocationReport::build(&applicants, &offerings, &result.assignments);

    let labels = SlotLabels::default();
    let palette = ProgramPalette::new(offerings.iter().map(|o| o.program.clone()));
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let program_label = |program: &str, label: String| {
        if color {
            palette.paint(program, &format!(" {label} "))
        } else {
            label
        }
    };

    println!("{}", text.title);
    println!("{}\n", text.subtitle);
    println!("{}: {}\n", text.max_programs, cli.max_per_applicant);

    println!("{}:", text.time_slots);
    for (slot, label) in labels.iter() {
        println!("  {slot}: {label}");
    }

    if color {
        println!("\n{}:", text.programs);
        let mut programs: Vec<&str> = offerings.iter().map(|o| o.program.as_str()).collect();
        let mut seen = HashSet::new();
        programs.retain(|p| seen.insert(*p));
        for program in programs {
            println!("  {}", program_label(program, program.to_string()));
        }
    }

    println!("\n{} ({} {}):", text.assignments, text.seed, result.seed);
    for row in &report.applicants {
        let programs: Vec<String> = row
            .assignments
            .iter()
            .map(|a| program_label(a.program.as_str(), labels.describe(a)))
            .collect();
        if programs.is_empty() {
            println!("  {}: {}", row.applicant_id, text.none);
        } else {
            println!("  {}: {}", row.applicant_id, programs.join(", "));
        }
    }

    println!("\n{}:", text.fill_rates);
    for fill in &report.offerings {
        match fill.fill_rate() {
            Some(rate) => println!(
                "  {}: {}/{} ({:.0}%)",
                fill.key,
                fill.assigned,
                fill.capacity,
                rate * 100.0
            ),
            None => println!("  {}: {}/0", fill.key, fill.assigned),
        }
    }

    println!(
        "\n{}",
        cli.language.totals(
            report.total_assigned(),
            report.total_capacity(),
            report.overall_fill_rate(),
            report.unassigned().count(),
        )
    );

    if let Some(path) = &cli.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_summary_csv(file, &report, &labels)?;
        println!("{}: {}", text.download, path.display());
    }
    if let Some(path) = &cli.assignments_output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_assignments_csv(file, &report)?;
        info!(path = %path.display(), "assignments written");
    }

    Ok(())
}
