//! Main application orchestrator.
//!
//! Coordinates one board generation:
//! 1. Initializes logging.
//! 2. Seeds the random source and resolves the level preset.
//! 3. Generates the round (path, chain, board).
//! 4. Walks the intended path and validates it against the board.
//! 5. Writes the rendered board to the output file.
//!
//! The verbose log (`mathpath.log`) is flushed after each phase unless
//! `--quiet` is set.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::{log_error, log_info};
use crate::board::{generate_round, Round, Walk};
use crate::sequence::get_level_config;

const LOG_FILE: &str = "mathpath.log";

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for an unknown level, a failed generation, a
/// generated board whose intended path does not validate, or an I/O
/// failure writing the board.
pub async fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(LOG_FILE) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                LOG_FILE, e
            );
        } else {
            log_info!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    let policy = get_level_config(cli.level)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    phase_header(quiet_mode, &format!("Generating Level {}", cli.level));
    log_info!(
        quiet_mode,
        "Numbers up to {}, fractions {} (denominators up to {}), seed {}",
        policy.max_num,
        if policy.allow_fractions { "allowed" } else { "disabled" },
        policy.max_denominator,
        cli.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "from entropy".to_string())
    );

    let round = generate_round(cli.level, &mut rng).await.map_err(|e| {
        log_error!(quiet_mode, "[ERROR] Round generation failed: {}", e);
        flush_log(quiet_mode, "round generation");
        AppError::from(e)
    })?;
    log_round(quiet_mode, &round);
    flush_log(quiet_mode, "round generation");

    phase_header(quiet_mode, "Checking Intended Path");
    check_intended_path(quiet_mode, &round)?;
    flush_log(quiet_mode, "path check");

    if let Err(e) = file_handler::write_board_file(&cli.output, &round, true) {
        log_error!(
            quiet_mode,
            "[ERROR] Failed to write board file ({}): {}",
            cli.output.display(),
            e
        );
        flush_log(quiet_mode, "board output");
        return Err(AppError::Io(e));
    }
    log_info!(
        quiet_mode,
        "\n[INFO] Board written to {}",
        cli.output.display()
    );
    flush_log(quiet_mode, "board output");

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "\nGenerated a {}-cell path with {} steps at level {}. Board written to '{}', see '{}' for verbose output ({} lines).",
            round.path.len(),
            round.sequence.len(),
            round.level,
            cli.output.display(),
            LOG_FILE,
            logger::lines_written()
        );
    }
    Ok(())
}

fn log_round(quiet_mode: bool, round: &Round) {
    log_info!(
        quiet_mode,
        "Path: {} cells from {} to {}",
        round.path.len(),
        round.path.start().map(|c| c.to_string()).unwrap_or_default(),
        round.path.end().map(|c| c.to_string()).unwrap_or_default()
    );
    log_info!(quiet_mode, "Cells: {:?}", round.solution());
    log_info!(
        quiet_mode,
        "Sequence: {} steps, {} entries",
        round.sequence.len(),
        round.entries.len()
    );
    for (i, step) in round.sequence.iter().enumerate() {
        log_info!(quiet_mode, "  {:>3}. {}", i + 1, step);
    }
}

/// Replays the intended path as a player walk and validates it. A board
/// whose own solution does not check out is a generator fault.
fn check_intended_path(quiet_mode: bool, round: &Round) -> Result<(), AppError> {
    let mut walk = Walk::for_path(&round.path);
    for cell in round.solution() {
        walk.toggle(cell);
    }
    let result = round.validate(walk.cells());
    log_info!(
        quiet_mode,
        "Validated {} cells: valid={}, valid length={}, start={}, end={}",
        result.walked_length,
        result.is_valid,
        result.is_valid_length,
        result.starts_at_start_square,
        result.ends_at_end_square
    );
    if result.is_solved() {
        log_info!(quiet_mode, "[INFO] Intended path solves the board");
        return Ok(());
    }
    let details = result
        .error_details
        .clone()
        .unwrap_or_else(|| "walk does not finish the puzzle".to_string());
    log_error!(quiet_mode, "[ERROR] Intended path rejected: {}", details);
    flush_log(quiet_mode, "path check");
    Err(AppError::General(format!(
        "generated board fails its own solution: {}",
        details
    )))
}

fn phase_header(quiet_mode: bool, title: &str) {
    log_info!(
        quiet_mode,
        "\n============================================================"
    );
    log_info!(quiet_mode, "{}", title);
    log_info!(
        quiet_mode,
        "============================================================"
    );
}

fn flush_log(quiet_mode: bool, phase: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Log to stderr as the log file itself might be the one failing.
        eprintln!(
            "[WARNING] Failed to flush {} after {}: {}",
            LOG_FILE, phase, e
        );
    }
}
