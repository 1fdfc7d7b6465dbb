use std::fmt;

use super::*;

/// One line per row, `1` for alive and `0` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols as usize) {
            for &cell in row {
                f.write_str(if cell == 1 { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
