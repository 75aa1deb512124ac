//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire a chips input over the set-backed store end to end.
//! - Keep output deterministic for quick local sanity checks.

use chips_core::{
    Chip, ChipDataSource, ChipOptions, ChipsInput, DataSourceResult, SelectionObserver,
    SetChipDataSource,
};
use std::rc::Rc;

struct PrintSelection;

impl SelectionObserver for PrintSelection {
    fn on_chip_selected(&self, chip: &Chip) {
        println!("selected {}", chip.title);
    }

    fn on_chip_unselected(&self, chip: &Chip) {
        println!("unselected {}", chip.title);
    }
}

fn sample_contacts() -> Vec<Chip> {
    vec![
        Chip::new("Zoe Park").with_subtitle("zoe@example.com"),
        Chip::new("Amy Chen").with_subtitle("amy@example.com"),
        Chip::new("Bob Diaz").with_subtitle("bob@example.com"),
    ]
}

fn run() -> DataSourceResult<()> {
    let mut input = ChipsInput::new(SetChipDataSource::new(), ChipOptions::default());
    input
        .source_mut()
        .add_selection_observer(Rc::new(PrintSelection));
    input.set_filterable_chips(sample_contacts())?;

    for candidate in input.candidates("a") {
        input.select_candidate(&candidate)?;
    }
    input.submit_text("team-lead@example.com")?;
    input.delete_on_empty_input("")?;

    let view = input.view();
    println!("chips_core version={}", chips_core::core_version());
    println!(
        "selected count={} header_visible={}",
        view.item_count(),
        view.header_visible()
    );
    for chip in view.rows().iter() {
        println!("token {}", chip.title);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("chips_cli error: {err}");
        std::process::exit(1);
    }
}
