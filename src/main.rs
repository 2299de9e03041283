use colored::Colorize;
use parbench::logging::init_logging;
use parbench::{run_all, BenchConfig, Result};
use std::io::{self, BufRead, IsTerminal};
use tracing::info;

fn configure_pool(config: &BenchConfig) -> Result<()> {
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        info!(threads, "configured worker pool");
    }
    Ok(())
}

fn wait_for_enter() {
    println!("Press Enter to exit.");
    let mut line = String::new();
    // Nothing useful to do if stdin is gone
    let _ = io::stdin().lock().read_line(&mut line);
}

fn main() -> Result<()> {
    let config = BenchConfig::load()?;
    init_logging(&config.log_level);
    configure_pool(&config)?;

    println!("{}", "=== Sequential vs parallel (rayon) ===".bold());
    println!(
        "Logical CPUs: {}, worker threads: {}\n",
        num_cpus::get(),
        rayon::current_num_threads()
    );

    run_all(&config, |report| report.print())?;

    println!("{}", "All workloads finished.".green());

    if config.pause_on_exit && io::stdin().is_terminal() {
        wait_for_enter();
    }

    Ok(())
}
