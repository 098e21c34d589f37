use crate::core::{Curve, Path};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Kurve und Anzeige-Pfad werden gemeinsam gesichert, damit nach einem Undo
/// die vom Benutzer gesetzten Henkel wieder erscheinen und nicht aus der
/// Kurve neu synthetisiert werden.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub curve: Curve,
    pub display_path: Path,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen Zustands.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            curve: state.curve.clone(),
            display_path: state.display_path.clone(),
        }
    }

    /// Stellt den Snapshot wieder her; die Kurve gilt als ersetzt.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.replace_curve(self.curve);
        state.display_path = self.display_path;
        state
            .display_path
            .arm_auto_set_control_points(state.options.auto_set_control_points);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Ändert die maximale Tiefe; überzählige alte Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            let excess = stack.len().saturating_sub(max_depth);
            stack.drain(..excess);
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
