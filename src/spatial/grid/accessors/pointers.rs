use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }
}
