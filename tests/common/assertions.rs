//! Domain-specific assertion macros for paperscope harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! property of the filtered result was violated.

/// Assert that a filtered result has exactly these titles, in order.
///
/// ```rust
/// assert_titles!(predicate::filter(&papers, &state), ["ECG Study"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($result:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<String> = $result.iter().map(|p| p.title.clone()).collect();
        let expected: Vec<String> = vec![$($title.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "filtered titles differ");
    }};
}

/// Assert that `sub` is an order-preserving subsequence of `full`, with no
/// paper repeated. Papers are compared by address.
#[macro_export]
macro_rules! assert_subsequence {
    ($sub:expr, $full:expr) => {{
        let full: &[paperscope_core::Paper] = &$full;
        let mut last: Option<usize> = None;
        for paper in $sub.iter() {
            let idx = full
                .iter()
                .position(|p| std::ptr::eq(p, *paper))
                .unwrap_or_else(|| panic!(
                    "assert_subsequence! failed: {:?} is not in the collection",
                    paper.title
                ));
            if let Some(prev) = last {
                assert!(
                    idx > prev,
                    "assert_subsequence! failed: {:?} (index {}) does not follow index {}",
                    paper.title, idx, prev
                );
            }
            last = Some(idx);
        }
    }};
}

/// Assert that every paper in `small` also appears in `large`.
#[macro_export]
macro_rules! assert_subset {
    ($small:expr, $large:expr) => {{
        for paper in $small.iter() {
            assert!(
                $large.iter().any(|p| std::ptr::eq(*p, *paper)),
                "assert_subset! failed: {:?} missing from the larger result",
                paper.title
            );
        }
    }};
}
