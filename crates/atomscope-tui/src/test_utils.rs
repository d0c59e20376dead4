//! Shared helpers for widget and render tests.

use atomscope_app::AppState;
use atomscope_core::{AtomSnapshot, AtomValue, SnapshotNode, SNAPSHOT_SCHEMA_VERSION};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Terminal over a `TestBackend` for full-frame render assertions.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).unwrap();
        Self { terminal }
    }

    pub fn draw_with(&mut self, render: impl FnOnce(&mut Frame)) {
        self.terminal.draw(render).unwrap();
    }

    /// Concatenate every cell symbol in the back buffer.
    pub fn content(&self) -> String {
        buffer_text(self.terminal.backend().buffer())
    }
}

/// Collect all text from a buffer, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut full = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                full.push_str(cell.symbol());
            }
        }
        full.push('\n');
    }
    full
}

/// State with a small loaded graph:
/// countAtom (42) <- derivedAtom (atom ref), plus an unrelated userAtom.
pub fn sample_state() -> AppState {
    let snapshot = AtomSnapshot {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        app_name: None,
        captured_at: None,
        atoms: vec![
            SnapshotNode {
                id: 1.into(),
                debug_label: Some("countAtom".to_string()),
                value: AtomValue::number(42.0),
                dependents: vec![2.into()],
            },
            SnapshotNode {
                id: 2.into(),
                debug_label: Some("derivedAtom".to_string()),
                value: AtomValue::atom_ref(1),
                dependents: vec![],
            },
            SnapshotNode {
                id: 3.into(),
                debug_label: Some("userAtom".to_string()),
                value: AtomValue::record(vec![(
                    "name".to_string(),
                    AtomValue::text("Ada"),
                )]),
                dependents: vec![],
            },
        ],
    };

    let mut state = AppState::new(std::path::PathBuf::from("atoms.json"));
    state.apply_snapshot(snapshot);
    state
}
