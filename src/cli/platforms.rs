use tabled::Table;

use crate::{
    platforms::{DEFAULT_DISPLAY, PlatformDisplay, RECOGNIZED},
    types::PlatformTableRow,
};

/// Prints the display table for every known platform plus the fallback entry.
pub fn platforms() {
    let rows: Vec<PlatformTableRow> = RECOGNIZED
        .iter()
        .map(|(key, display)| row(key, display))
        .chain(std::iter::once(row("(other)", &DEFAULT_DISPLAY)))
        .collect();

    println!("{}", Table::new(rows));
}

fn row(key: &str, display: &PlatformDisplay) -> PlatformTableRow {
    PlatformTableRow {
        key: key.to_string(),
        label: display.label.to_string(),
        icon: display.icon.to_string(),
        color: display.color.to_string(),
    }
}
