use playbill_booklet::*;
use std::borrow::Cow;
use std::cell::Cell;

fn labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("P{}", i)).collect()
}

#[test]
fn test_pad_already_full_sheets_is_identity() {
    for count in [0, 4, 8, 12] {
        let pages = labels(count);
        let calls = Cell::new(0);

        let padded = pad_to_multiple_of_4(&pages, |i| {
            calls.set(calls.get() + 1);
            format!("FILLER-{}", i)
        });

        assert_eq!(calls.get(), 0, "factory called for {} pages", count);
        match padded {
            Cow::Borrowed(slice) => assert!(std::ptr::eq(slice, pages.as_slice())),
            Cow::Owned(_) => panic!("Expected borrowed input for {} pages", count),
        }
    }
}

#[test]
fn test_pad_five_pages_appends_three_fillers() {
    let pages = labels(5);
    let padded = pad_to_multiple_of_4(&pages, |i| format!("FILLER-{}", i));

    assert_eq!(padded.len(), 8);
    assert_eq!(&padded[..5], pages.as_slice());
    assert_eq!(&padded[5..], &["FILLER-0", "FILLER-1", "FILLER-2"]);
}

#[test]
fn test_pad_does_not_touch_input() {
    let pages = labels(6);
    let before = pages.clone();

    let padded = pad_to_multiple_of_4(&pages, |i| format!("FILLER-{}", i));

    assert_eq!(pages, before);
    assert_eq!(padded.len(), 8);
}

#[test]
fn test_pad_single_page() {
    let pages = vec!["cover"];
    let padded = pad_to_multiple_of_4(&pages, |_| "blank");
    assert_eq!(&*padded, &["cover", "blank", "blank", "blank"]);
}

#[test]
fn test_try_pad_propagates_factory_error() {
    let pages = labels(6);
    let mut requested = Vec::new();

    let result = try_pad_to_multiple_of_4(&pages, |i| {
        requested.push(i);
        if i == 1 {
            Err(format!("no filler for index {}", i))
        } else {
            Ok(format!("FILLER-{}", i))
        }
    });

    assert_eq!(result, Err("no filler for index 1".to_string()));
    assert_eq!(requested, vec![0, 1]);
}

#[test]
fn test_try_pad_success_matches_infallible() {
    let pages = labels(7);
    let fallible =
        try_pad_to_multiple_of_4::<_, (), _>(&pages, |i| Ok(format!("FILLER-{}", i))).unwrap();
    let infallible = pad_to_multiple_of_4(&pages, |i| format!("FILLER-{}", i));
    assert_eq!(fallible, infallible);
}

#[test]
#[should_panic(expected = "filler factory exploded")]
fn test_pad_factory_panic_propagates() {
    let pages = labels(3);
    let _ = pad_to_multiple_of_4(&pages, |_| -> String { panic!("filler factory exploded") });
}

#[test]
fn test_booklet_try_new_propagates_factory_error() {
    let result = Booklet::try_new(labels(6), |i| {
        if i == 1 {
            Err("second filler failed")
        } else {
            Ok(format!("FILLER-{}", i))
        }
    });
    assert_eq!(result.unwrap_err(), "second filler failed");
}

#[test]
fn test_booklet_keeps_source_order() {
    let booklet = Booklet::new(labels(9), |i| format!("FILLER-{}", i));

    assert_eq!(booklet.len(), 12);
    assert_eq!(booklet.source(), labels(9).as_slice());
    assert_eq!(booklet.fillers(), &["FILLER-0", "FILLER-1", "FILLER-2"]);
}
