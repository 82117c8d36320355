use std::cmp::Ordering;

use intervalmap::IntervalMap;

#[test]
fn assigning_the_baseline_value_stores_nothing() {
    let mut map = IntervalMap::new('A');
    map.assign(1, 5, 'A');
    assert!(map.is_uniform());
}

#[test]
fn the_baseline_is_never_replaced() {
    let mut map = IntervalMap::new('A');
    map.assign(-100, 100, 'Z');
    assert_eq!(&'A', map.baseline());
    assert_eq!(&'A', map.value_at(&-101));
    assert_eq!(&'Z', map.value_at(&-100));
    assert_eq!(&'Z', map.value_at(&99));
    assert_eq!(&'A', map.value_at(&100));
}

#[test]
fn splitting_a_segment() {
    let mut map = IntervalMap::new('A');
    map.assign(0, 10, 'B');
    map.assign(3, 5, 'C');
    assert_eq!(4, map.boundary_count());
    for (key, value) in [(0, 'B'), (2, 'B'), (3, 'C'), (4, 'C'), (5, 'B'), (9, 'B'), (10, 'A')].iter() {
        assert_eq!(value, map.value_at(key), "wrong value at {}", key);
    }
}

#[test]
fn partial_overlap_on_the_right() {
    let mut map = IntervalMap::new('A');
    map.assign(0, 5, 'B');
    map.assign(3, 8, 'C');
    assert_eq!(3, map.boundary_count());
    for (key, value) in [(0, 'B'), (2, 'B'), (3, 'C'), (7, 'C'), (8, 'A')].iter() {
        assert_eq!(value, map.value_at(key), "wrong value at {}", key);
    }
}

#[test]
fn partial_overlap_on_the_left() {
    let mut map = IntervalMap::new('A');
    map.assign(3, 8, 'B');
    map.assign(0, 5, 'C');
    assert_eq!(3, map.boundary_count());
    for (key, value) in [(-1, 'A'), (0, 'C'), (4, 'C'), (5, 'B'), (7, 'B'), (8, 'A')].iter() {
        assert_eq!(value, map.value_at(key), "wrong value at {}", key);
    }
}

#[test]
fn canonical_form_makes_equality_structural() {
    let mut merged = IntervalMap::new('A');
    merged.assign(1, 9, 'B');

    let mut pieced = IntervalMap::new('A');
    pieced.assign(1, 5, 'B');
    pieced.assign(5, 9, 'B');

    assert_eq!(merged, pieced);
}

#[test]
fn clone_only_values() {
    let mut map = IntervalMap::new("base".to_string());
    map.assign(1, 5, "hot".to_string());
    assert_eq!("hot", *map.value_at(&3));
    assert_eq!("base", *map.value_at(&5));
}

#[test]
fn float_values_only_need_an_ordering() {
    let mut map = IntervalMap::new(0.0);
    map.assign(1, 5, 2.5);
    assert_eq!(&2.5, map.value_at(&3));
    assert_eq!(&0.0, map.value_at(&5));
}

#[test]
fn values_equal_under_the_ordering_coalesce() {
    // `Tag`s are ordered by level alone; the label is payload.
    #[derive(Clone, Debug)]
    struct Tag {
        level: u8,
        label: &'static str,
    }

    impl PartialEq for Tag {
        fn eq(&self, other: &Self) -> bool {
            self.level == other.level
        }
    }

    impl PartialOrd for Tag {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.level.partial_cmp(&other.level)
        }
    }

    let tag = |level, label| Tag { level, label };

    let mut map = IntervalMap::new(tag(0, "base"));
    map.assign(1, 5, tag(1, "first"));
    map.assign(5, 9, tag(1, "second"));

    // Both level-1 segments merge; the label of the second is dropped.
    assert_eq!(2, map.boundary_count());
    assert_eq!("first", map.value_at(&7).label);
    assert_eq!("base", map.value_at(&9).label);
}
