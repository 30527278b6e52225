use littlelemon::catalog::{CategoryList, UnknownCategory};

#[test]
fn menu_filter_chips_reflect_selection() {
    let mut list = CategoryList::new(["starters", "MAINS", "desserts", "drinks"]);
    list.toggle("desserts").unwrap();
    list.toggle("MAINS").unwrap();

    let labels: Vec<_> = list.chips().into_iter().map(|chip| chip.label).collect();
    assert_eq!(labels, ["Starters", "Mains", "Desserts", "Drinks"]);

    let selected: Vec<_> = list
        .chips()
        .into_iter()
        .filter(|chip| chip.selected)
        .map(|chip| chip.category)
        .collect();
    assert_eq!(selected, ["MAINS", "desserts"]);

    assert_eq!(list.toggle("Mains"), Err(UnknownCategory("Mains".into())));
    list.clear_selection();
    assert!(list.chips().iter().all(|chip| !chip.selected));
}
