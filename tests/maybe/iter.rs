use maybe_rail::Maybe;

#[test]
fn iter_yields_zero_or_one_item() {
    let present = Maybe::some(3);
    assert_eq!(present.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(present.iter().len(), 1);

    let absent: Maybe<i32> = Maybe::none();
    assert_eq!(absent.iter().count(), 0);
    assert_eq!(absent.iter().len(), 0);
}

#[test]
fn iter_mut_updates_held_value() {
    let mut present = Maybe::some(3);
    for value in &mut present {
        *value += 1;
    }
    assert_eq!(present, Maybe::some(4));
}

#[test]
fn into_iter_moves_value_out() {
    let names: Vec<String> = Maybe::some("ana".to_string()).into_iter().collect();
    assert_eq!(names, vec!["ana".to_string()]);

    let flattened: Vec<i32> = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(flattened, vec![1, 3]);
}

#[test]
fn collecting_requires_every_item_present() {
    let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
    assert_eq!(all, Maybe::some(vec![1, 2]));

    let empty: Maybe<Vec<i32>> = Vec::<Maybe<i32>>::new().into_iter().collect();
    assert_eq!(empty, Maybe::some(vec![]));
}

#[test]
fn collecting_stops_at_first_absence() {
    let mut consumed = 0;
    let items = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)];
    let collected: Maybe<Vec<i32>> = items
        .into_iter()
        .inspect(|_| consumed += 1)
        .collect();

    assert!(collected.is_absent());
    assert_eq!(consumed, 2);
}
