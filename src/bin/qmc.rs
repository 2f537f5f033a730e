use clap::Parser;
use log::info;

use qmc_rs::minimize::Minimizer;
use qmc_rs::render::{default_names, Renderer};

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Minimize a Boolean function with the Quine-McCluskey method")]
struct Cli {
    /// Number of variables.
    #[arg(short = 'n', long = "vars", value_name = "INT")]
    num_vars: usize,

    /// Minterms (rows where the function is true).
    #[arg(value_name = "MINTERM")]
    minterms: Vec<u32>,

    /// Comma-separated variable names, most significant first (default: x1,...,xn).
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    names: Option<Vec<String>>,

    /// Print the coverage chart.
    #[arg(long)]
    chart: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Enable trace logging.
    #[arg(long)]
    trace: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.trace {
        simplelog::LevelFilter::Trace
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let minimizer = Minimizer::new(args.num_vars)?;
    let m = minimizer.minimize(args.minterms.iter().copied())?;
    let names = args.names.unwrap_or_else(|| default_names(args.num_vars));
    let r = Renderer::for_minimization(&m, names)?;

    println!("Quine-McCluskey minimization for {} variables", m.num_vars());
    println!("Minterms: {:?}", m.minterms());

    println!();
    println!("Prime implicants ({}):", m.prime_implicants().len());
    for (i, p) in m.prime_implicants().iter().enumerate() {
        println!("  P{}: {}  ->  {}", i, r.pattern(p), r.term(p));
    }

    if args.chart {
        println!();
        println!("Coverage chart:");
        print!("{}", r.chart(&m));
    }

    println!();
    if m.essential_indices().is_empty() {
        println!("Essential implicants: none");
    } else {
        println!("Essential implicants ({}):", m.essential_indices().len());
        for &i in m.essential_indices() {
            let p = &m.prime_implicants()[i];
            println!("  P{}: {}  ->  {}", i, r.pattern(p), r.term(p));
        }
    }

    println!();
    let cover: Vec<String> = m
        .minimal_cover_indices()
        .iter()
        .map(|i| format!("P{}", i))
        .collect();
    println!("Selected cover: {}", cover.join(", "));

    println!();
    println!("Reduced DNF (all primes):");
    println!("F = {}", r.dnf(m.prime_implicants()));
    println!("Minimal DNF (greedy):");
    println!("F = {}", r.dnf(&m.minimal_implicants()));
    println!(
        "Terms: {}, literals: {}",
        m.minimal_cover_indices().len(),
        m.literal_count()
    );

    info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
