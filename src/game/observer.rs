use crate::Cell;

/// CellObserver is the seam between the engine and whatever renders it.
/// The UI registers an observer on the board and gets handed every cell that
/// changes occupant, one call per cell, so it can repaint that cell and
/// enable or disable its widget. The engine keeps no reference back into the
/// UI; notification is strictly one-way.
pub trait CellObserver {
    fn cell_changed(&mut self, cell: &Cell);
}
