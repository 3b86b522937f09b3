//! File output for the CLI: the rendered board goes to the path given on
//! the command line, replacing any earlier board.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use crate::board::Round;

/// Writes the round's board to `file_path`, creating or truncating it.
///
/// The solution board with the path marked follows the puzzle board when
/// `reveal_path` is set.
pub fn write_board_file(file_path: &Path, round: &Round, reveal_path: bool) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "Math Path, level {}", round.level)?;
    writeln!(writer)?;
    round.board.write_to(&mut writer, false)?;
    if reveal_path {
        writeln!(writer)?;
        writeln!(writer, "Solution ({} cells):", round.path.len())?;
        round.board.write_to(&mut writer, true)?;
    }
    writer.flush()?; // Ensure all buffered content is written to disk.
    Ok(())
}
