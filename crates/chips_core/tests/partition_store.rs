use chips_core::{
    Chip, ChipDataSource, ChipQuery, ChipValidationError, DataSourceError, Partition,
    SetChipDataSource,
};
use uuid::Uuid;

fn ids(chips: Vec<Chip>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = chips.into_iter().map(|chip| chip.id).collect();
    ids.sort();
    ids
}

#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    original: Vec<Uuid>,
    filtered: Vec<Uuid>,
    selected: Vec<Uuid>,
}

fn snapshot(source: &SetChipDataSource) -> Snapshot {
    Snapshot {
        original: ids(source.original_chips()),
        filtered: ids(source.filtered_chips()),
        selected: ids(source.selected_chips()),
    }
}

fn assert_invariants(source: &SetChipDataSource) {
    for chip in source.filtered_chips() {
        assert!(
            !source.exists_in_selected(&chip),
            "chip {} is both filtered and selected",
            chip.id
        );
        assert!(
            source.original_chips().contains(&chip),
            "filtered chip {} missing from original",
            chip.id
        );
        assert!(chip.is_filterable());
    }
}

fn contacts() -> Vec<Chip> {
    vec![Chip::new("Zoe"), Chip::new("Amy"), Chip::new("Bob")]
}

#[test]
fn set_filterable_chips_marks_and_loads_pool() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();

    assert_eq!(source.filtered_len(), 3);
    assert_eq!(source.original_len(), 3);
    assert_eq!(source.selected_len(), 0);
    assert!(source.filtered_chips().iter().all(Chip::is_filterable));
    assert_invariants(&source);
}

#[test]
fn selected_chips_are_sorted_by_title() {
    let mut source = SetChipDataSource::new();
    for chip in contacts() {
        source.add_selected_chip(chip).unwrap();
    }

    let titles: Vec<String> = source
        .selected_chips()
        .into_iter()
        .map(|chip| chip.title)
        .collect();
    assert_eq!(titles, vec!["Amy", "Bob", "Zoe"]);
    assert_eq!(source.selected_chip(0).unwrap().title, "Amy");
    assert_eq!(source.selected_chip(2).unwrap().title, "Zoe");
}

#[test]
fn take_then_replace_restores_every_partition() {
    let mut source = SetChipDataSource::new();
    let chips = contacts();
    let bob = chips[2].clone();
    source.set_filterable_chips(chips).unwrap();
    let before = snapshot(&source);

    let taken = source.take_chip(&bob).unwrap();
    assert_eq!(taken, bob);
    assert!(source.exists_in_selected(&bob));
    assert!(!source.exists_in_filtered(&bob));
    assert_invariants(&source);

    source.replace_chip(&bob).unwrap();
    assert_eq!(snapshot(&source), before);
    assert_invariants(&source);
}

#[test]
fn take_and_replace_by_position() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();

    let expected = source.filtered_chip(1).unwrap();
    let taken = source.take_chip_at(1).unwrap();
    assert_eq!(taken, expected);
    assert_eq!(source.selected_len(), 1);

    let replaced = source.replace_chip_at(0).unwrap();
    assert_eq!(replaced, expected);
    assert_eq!(source.filtered_len(), 3);
    assert_eq!(source.selected_len(), 0);
}

#[test]
fn add_filtered_chip_twice_keeps_one_member() {
    let mut source = SetChipDataSource::new();
    let amy = Chip::new("Amy");
    let lookalike = Chip::with_id(amy.id, "Amy (again)").unwrap();

    source.add_filtered_chip(amy.clone()).unwrap();
    source.add_filtered_chip(lookalike).unwrap();

    assert_eq!(source.filtered_len(), 1);
    assert_eq!(source.original_len(), 1);
    assert_eq!(source.filtered_chip(0).unwrap().title, "Amy");
}

#[test]
fn non_filterable_selection_is_not_restored() {
    let mut source = SetChipDataSource::new();
    let custom = Chip::new("typed@example.com");

    source.add_selected_chip(custom.clone()).unwrap();
    assert!(source.exists_in_selected(&custom));

    assert!(source.remove_selected_chip(&custom).unwrap());
    assert!(!source.exists_in_selected(&custom));
    assert!(!source.exists_in_filtered(&custom));
    assert!(!source.exists_in_data_source(&custom));
}

#[test]
fn replace_drops_non_filterable_chip() {
    let mut source = SetChipDataSource::new();
    let custom = Chip::new("typed@example.com");
    source.add_selected_chip(custom.clone()).unwrap();

    let replaced = source.replace_chip(&custom).unwrap();
    assert!(!replaced.is_filterable());
    assert!(!source.exists_in_data_source(&custom));
}

#[test]
fn remove_selected_chip_does_not_restore_filterable_chip() {
    let mut source = SetChipDataSource::new();
    let chips = contacts();
    let amy = chips[1].clone();
    source.set_filterable_chips(chips).unwrap();
    source.take_chip(&amy).unwrap();

    assert!(source.remove_selected_chip(&amy).unwrap());
    assert!(!source.exists_in_data_source(&amy));
    assert!(!source.remove_selected_chip(&amy).unwrap());
}

#[test]
fn replace_chip_never_selected_is_not_found() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();
    let stranger = Chip::new("Stranger");

    let err = source.replace_chip(&stranger).unwrap_err();
    assert_eq!(
        err,
        DataSourceError::NotFound {
            partition: Partition::Selected,
            id: stranger.id,
        }
    );
}

#[test]
fn take_chip_outside_filtered_is_not_found() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();
    let before = snapshot(&source);
    let stranger = Chip::new("Stranger");

    let err = source.take_chip(&stranger).unwrap_err();
    assert!(matches!(
        err,
        DataSourceError::NotFound {
            partition: Partition::Filtered,
            ..
        }
    ));
    assert_eq!(snapshot(&source), before);
}

#[test]
fn take_selected_custom_chip_is_not_filterable() {
    let mut source = SetChipDataSource::new();
    let custom = Chip::new("typed@example.com");
    source.add_selected_chip(custom.clone()).unwrap();

    let err = source.take_chip(&custom).unwrap_err();
    assert_eq!(err, DataSourceError::NotFilterable(custom.id));
    assert!(source.exists_in_selected(&custom));
}

#[test]
fn positional_access_out_of_range_is_reported() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();
    let before = snapshot(&source);

    let err = source.take_chip_at(3).unwrap_err();
    assert_eq!(
        err,
        DataSourceError::IndexOutOfRange {
            partition: Partition::Filtered,
            index: 3,
            len: 3,
        }
    );
    assert!(matches!(
        source.replace_chip_at(0),
        Err(DataSourceError::IndexOutOfRange {
            partition: Partition::Selected,
            ..
        })
    ));
    assert_eq!(snapshot(&source), before);
}

#[test]
fn absent_chip_is_rejected_without_side_effects() {
    let mut source = SetChipDataSource::new();
    source.set_filterable_chips(contacts()).unwrap();
    let taken = source.filtered_chip(0).unwrap();
    source.take_chip(&taken).unwrap();
    let before = snapshot(&source);

    let mut nil = Chip::new("Nobody");
    nil.id = Uuid::nil();
    let blank = Chip::new("  ");
    let invalid_nil = DataSourceError::InvalidChip(ChipValidationError::NilId);

    assert_eq!(source.add_filtered_chip(nil.clone()), Err(invalid_nil.clone()));
    assert_eq!(source.add_selected_chip(nil.clone()), Err(invalid_nil.clone()));
    assert_eq!(source.take_chip(&nil), Err(invalid_nil.clone()));
    assert_eq!(source.replace_chip(&nil), Err(invalid_nil.clone()));
    assert_eq!(source.remove_selected_chip(&nil), Err(invalid_nil));
    assert_eq!(
        source.set_filterable_chips(vec![Chip::new("Valid"), blank.clone()]),
        Err(DataSourceError::InvalidChip(ChipValidationError::BlankTitle))
    );
    assert_eq!(
        source.set_selected_chips(vec![blank]),
        Err(DataSourceError::InvalidChip(ChipValidationError::BlankTitle))
    );

    assert_eq!(snapshot(&source), before);
}

#[test]
fn set_selected_chips_replaces_selection() {
    let mut source = SetChipDataSource::new();
    let chips = contacts();
    let (zoe, amy, bob) = (chips[0].clone(), chips[1].clone(), chips[2].clone());
    source.set_filterable_chips(chips).unwrap();
    source.take_chip(&zoe).unwrap();

    let preloaded = Chip::new("Preloaded");
    source
        .set_selected_chips(vec![amy.clone(), preloaded.clone()])
        .unwrap();

    assert_eq!(ids(source.selected_chips()), ids(vec![amy.clone(), preloaded.clone()]));
    assert!(!source.exists_in_data_source(&zoe));
    assert!(source.exists_in_filtered(&bob));
    assert!(!source.exists_in_filtered(&amy));
    assert_eq!(
        ids(source.original_chips()),
        ids(vec![amy, bob, preloaded])
    );
    assert_invariants(&source);
}

#[test]
fn preloaded_candidate_returns_to_pool_on_replace() {
    let mut source = SetChipDataSource::new();
    let amy = Chip::new("Amy");
    let bob = Chip::new("Bob");
    source
        .set_filterable_chips(vec![amy.clone(), bob.clone()])
        .unwrap();

    source.set_selected_chips(vec![amy.clone()]).unwrap();
    let replaced = source.replace_chip(&amy).unwrap();

    assert!(replaced.is_filterable());
    assert!(source.exists_in_filtered(&amy));
    assert_invariants(&source);
    assert_eq!(source.take_chip(&amy).unwrap(), amy);
    assert!(source.exists_in_selected(&amy));
}

#[test]
fn clear_operations_empty_their_partitions() {
    let mut source = SetChipDataSource::new();
    let chips = contacts();
    let amy = chips[1].clone();
    source.set_filterable_chips(chips).unwrap();
    source.take_chip(&amy).unwrap();

    source.clear_filtered_chips();
    assert_eq!(source.filtered_len(), 0);
    assert_eq!(source.original_len(), 0);
    assert_eq!(source.selected_len(), 1);

    source.clear_selected_chips();
    assert_eq!(source.selected_len(), 0);
    assert!(!source.exists_in_data_source(&amy));
}

#[test]
fn loading_candidates_never_duplicates_a_selected_chip() {
    let mut source = SetChipDataSource::new();
    let chips = contacts();
    let amy = chips[1].clone();
    source.set_filterable_chips(chips.clone()).unwrap();
    source.take_chip(&amy).unwrap();

    source.set_filterable_chips(chips).unwrap();
    assert!(source.exists_in_selected(&amy));
    assert!(!source.exists_in_filtered(&amy));
    assert_eq!(source.filtered_len(), 2);
    assert_invariants(&source);
}

#[test]
fn invariants_hold_across_mixed_sequence() {
    let mut source = SetChipDataSource::new();
    let chips: Vec<Chip> = (0..8).map(|n| Chip::new(format!("contact-{n}"))).collect();
    source.set_filterable_chips(chips.clone()).unwrap();
    assert_invariants(&source);

    for chip in chips.iter().step_by(2) {
        source.take_chip(chip).unwrap();
        assert_invariants(&source);
    }
    source.add_selected_chip(chips[1].clone()).unwrap();
    assert_invariants(&source);
    source.add_selected_chip(Chip::new("custom")).unwrap();
    assert_invariants(&source);
    source.replace_chip_at(0).unwrap();
    assert_invariants(&source);
    source.add_filtered_chip(chips[2].clone()).unwrap();
    assert_invariants(&source);
    source.clear_selected_chips();
    assert_invariants(&source);
    source.take_chip_at(0).unwrap();
    assert_invariants(&source);

    // Chips dropped by clear_selected_chips are gone for good.
    assert_eq!(source.selected_len(), 1);
    assert_eq!(source.filtered_len(), 3);
    assert_eq!(source.original_len(), 3);
}
