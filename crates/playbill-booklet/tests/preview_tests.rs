use playbill_booklet::*;

fn create_test_booklet(num_pages: usize) -> Booklet<String> {
    let pages = (1..=num_pages).map(|i| format!("P{}", i)).collect();
    Booklet::new(pages, |i| format!("FILLER-{}", i))
}

#[test]
fn test_reading_order_preview_numbers_pages() {
    let booklet = create_test_booklet(6);
    let preview = generate_preview(&booklet, PreviewMode::ReadingOrder, None);

    match preview {
        Preview::ReadingOrder(pages) => {
            assert_eq!(pages.len(), 8);
            for (index, page) in pages.iter().enumerate() {
                assert_eq!(page.page_number, index + 1);
            }
            assert_eq!(pages[0].content, "P1");
            assert_eq!(pages[6].content, "FILLER-0");
            assert_eq!(pages[7].content, "FILLER-1");
        }
        Preview::Imposition(_) => panic!("Expected reading order preview"),
    }
}

#[test]
fn test_imposition_preview_is_spreads() {
    let booklet = create_test_booklet(8);
    let preview = generate_preview(&booklet, PreviewMode::Imposition, None);

    match preview {
        Preview::Imposition(spreads) => assert_eq!(spreads, booklet.spreads()),
        Preview::ReadingOrder(_) => panic!("Expected imposition preview"),
    }
}

#[test]
fn test_preview_limited_by_sheets() {
    let booklet = create_test_booklet(20);

    for max_sheets in 1..=5 {
        let reading = generate_preview(&booklet, PreviewMode::ReadingOrder, Some(max_sheets));
        assert_eq!(reading.len(), max_sheets * 4, "max_sheets: {}", max_sheets);

        let imposition = generate_preview(&booklet, PreviewMode::Imposition, Some(max_sheets));
        assert_eq!(imposition.len(), max_sheets * 2, "max_sheets: {}", max_sheets);
    }
}

#[test]
fn test_preview_limit_larger_than_booklet() {
    let booklet = create_test_booklet(4);
    let preview = generate_preview(&booklet, PreviewMode::Imposition, Some(10));
    assert_eq!(preview.len(), 2);
}

#[test]
fn test_preview_of_empty_booklet() {
    let booklet = create_test_booklet(0);
    assert!(generate_preview(&booklet, PreviewMode::ReadingOrder, None).is_empty());
    assert!(generate_preview(&booklet, PreviewMode::Imposition, Some(3)).is_empty());
}
