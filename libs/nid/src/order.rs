//! Total order over bases and identifiers.
//!
//! Bases compare byte by byte, which given the big-endian layout is the
//! same as comparing by timestamp and then by the random part. Identifiers
//! compare by name first and then by base, so the empty identifier sorts
//! before everything else. The `Ord` impls of [`Base`] and [`Nid`] agree
//! with these functions.

use std::cmp::Ordering;

use crate::base::Base;
use crate::nid::Nid;

/// Compares two bases as unsigned big-endian 128-bit integers.
pub fn compare_base(a: &Base, b: &Base) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Compares two identifiers by name, then by base.
pub fn compare(a: &Nid, b: &Nid) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| compare_base(&a.base(), &b.base()))
}

/// Sorts bases in place in ascending order.
pub fn sort_bases(bases: &mut [Base]) {
    bases.sort_unstable_by(compare_base);
}

/// Sorts identifiers in place in ascending order.
pub fn sort(ids: &mut [Nid]) {
    ids.sort_unstable_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Naming;
    use chrono::DateTime;
    use proptest::prelude::*;
    use rstest::rstest;

    fn low(n: u8) -> Base {
        let mut bytes = [0u8; 16];
        bytes[15] = n;
        Base::from_bytes(bytes)
    }

    fn high(n: u8) -> Base {
        let mut bytes = [0u8; 16];
        bytes[0] = n;
        Base::from_bytes(bytes)
    }

    fn named(name: &'static str, base: Base) -> Nid {
        Naming::must_new(name).bind(base)
    }

    #[rstest]
    #[case::equal_empty(Base::EMPTY, Base::EMPTY, Ordering::Equal)]
    #[case::equal(low(1), low(1), Ordering::Equal)]
    #[case::less(low(1), low(2), Ordering::Less)]
    #[case::greater(low(2), low(1), Ordering::Greater)]
    #[case::leading_byte_wins(high(1), low(0xff), Ordering::Greater)]
    #[case::unsigned(low(0x80), low(0x7f), Ordering::Greater)]
    fn test_compare_base(#[case] a: Base, #[case] b: Base, #[case] want: Ordering) {
        assert_eq!(compare_base(&a, &b), want);
        assert_eq!(a.cmp(&b), want);
    }

    #[rstest]
    #[case::equal(named("example", low(1)), named("example", low(1)), Ordering::Equal)]
    #[case::equal_empty(Nid::EMPTY, Nid::default(), Ordering::Equal)]
    #[case::empty_first(Nid::EMPTY, named("a", low(1)), Ordering::Less)]
    #[case::less_by_base(named("example", low(1)), named("example", low(2)), Ordering::Less)]
    #[case::less_by_name_alpha(named("example_a", high(1)), named("example_b", high(1)), Ordering::Less)]
    #[case::greater_by_name_alpha(named("example_b", high(1)), named("example_a", high(1)), Ordering::Greater)]
    #[case::less_by_name_numeric(named("example_1", high(1)), named("example_2", high(1)), Ordering::Less)]
    #[case::greater_by_name_numeric(named("example_2", high(1)), named("example_1", high(1)), Ordering::Greater)]
    #[case::name_before_base(named("a", high(9)), named("b", low(1)), Ordering::Less)]
    fn test_compare(#[case] a: Nid, #[case] b: Nid, #[case] want: Ordering) {
        assert_eq!(compare(&a, &b), want);
        assert_eq!(a.cmp(&b), want);
    }

    #[test]
    fn test_sort() {
        let mut list = vec![
            named("example_b", high(1)),
            named("example_2", high(1)),
            named("example_a", high(1)),
            named("example_1", high(1)),
            named("example", high(1)),
            named("example", low(2)),
            named("example", high(1)),
            named("example", low(1)),
            Nid::EMPTY,
        ];

        let want = vec![
            Nid::EMPTY,
            named("example", low(1)),
            named("example", low(2)),
            named("example", high(1)),
            named("example", high(1)),
            named("example_1", high(1)),
            named("example_2", high(1)),
            named("example_a", high(1)),
            named("example_b", high(1)),
        ];

        sort(&mut list);
        assert_eq!(list, want);
    }

    #[test]
    fn test_sort_bases() {
        let mut list = vec![low(2), Base::EMPTY, low(1), Base::EMPTY];
        sort_bases(&mut list);
        assert_eq!(list, vec![Base::EMPTY, Base::EMPTY, low(1), low(2)]);
    }

    #[test]
    fn test_sort_generated_by_time() {
        let naming = Naming::must_new("event");
        let mut list: Vec<Nid> = [30_000, 10_000, 20_000]
            .into_iter()
            .map(|ms| naming.create_at(DateTime::from_timestamp_millis(ms).unwrap()))
            .collect();

        sort(&mut list);

        let stamps: Vec<i64> = list.iter().map(|id| id.base().timestamp_ms()).collect();
        assert_eq!(stamps, vec![10_000, 20_000, 30_000]);
    }

    proptest! {
        #[test]
        fn later_timestamp_sorts_after(t1 in 0i64..(1i64 << 47), gap in 1i64..1_000_000) {
            let a = Base::generate_at(DateTime::from_timestamp_millis(t1).unwrap());
            let b = Base::generate_at(DateTime::from_timestamp_millis(t1 + gap).unwrap());
            prop_assert_eq!(compare_base(&a, &b), Ordering::Less);
            prop_assert!(a.to_string() < b.to_string());
        }
    }
}
