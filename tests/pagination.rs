use meteorite_landings::api::paginate;
use meteorite_landings::models::RawLanding;

fn named(n: usize) -> RawLanding {
    RawLanding {
        name: Some(format!("m{}", n)),
        ..RawLanding::default()
    }
}

fn page_of(len: usize) -> Vec<RawLanding> {
    vec![RawLanding::default(); len]
}

#[test]
fn stops_at_first_short_page() {
    let mut pages = vec![page_of(2000), page_of(2000), page_of(500)].into_iter();
    let mut calls = 0usize;
    let mut offsets = Vec::new();

    let rows = paginate(2000, |limit, offset| {
        assert_eq!(limit, 2000);
        calls += 1;
        offsets.push(offset);
        Ok(pages.next().expect("no page should be requested past the short one"))
    })
    .unwrap();

    assert_eq!(calls, 3);
    assert_eq!(rows.len(), 4500);
    assert_eq!(offsets, vec![0, 2000, 4000]);
}

#[test]
fn exact_multiple_fetches_one_trailing_empty_page() {
    let mut pages = vec![page_of(2000), page_of(2000), page_of(0)].into_iter();
    let mut calls = 0usize;

    let rows = paginate(2000, |_, _| {
        calls += 1;
        Ok(pages.next().unwrap())
    })
    .unwrap();

    // The loop only stops on a short page, so the empty page is requested.
    assert_eq!(calls, 3);
    assert_eq!(rows.len(), 4000);
}

#[test]
fn single_short_page_is_one_call() {
    let mut calls = 0usize;
    let rows = paginate(2000, |_, _| {
        calls += 1;
        Ok(page_of(123))
    })
    .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(rows.len(), 123);
}

#[test]
fn concatenation_preserves_row_order() {
    let mut pages = vec![
        vec![named(0), named(1)],
        vec![named(2), named(3)],
        vec![named(4)],
    ]
    .into_iter();

    let rows = paginate(2, |_, _| Ok(pages.next().unwrap())).unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_deref().unwrap()).collect();
    assert_eq!(names, vec!["m0", "m1", "m2", "m3", "m4"]);
}

#[test]
fn transport_error_aborts() {
    let mut calls = 0usize;
    let result = paginate(2, |_, _| {
        calls += 1;
        if calls == 2 {
            anyhow::bail!("request failed with HTTP 502");
        }
        Ok(page_of(2))
    });
    assert!(result.is_err());
    assert_eq!(calls, 2);
}
