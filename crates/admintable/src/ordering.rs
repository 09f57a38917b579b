//! Sort direction and value comparison for grouped columns.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two optional field values in direction `dir`.
///
/// Absent values sort last in both directions. Numbers compare by exact
/// value, so an `Int` and a `Float` are equal only when they denote the same
/// number, even beyond 2^53. Values of different kinds order by kind
/// (booleans, then numbers, then text). The result is a total order usable
/// by `sort_by`.
pub fn compare_field_values(a: Option<&Value<'_>>, b: Option<&Value<'_>>, dir: Dir) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => dir.apply(compare_values(a, b)),
    }
}

fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => compare_floats(*a, *b),
        (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).reverse(),
        (a, b) => kind_rank(a).cmp(&kind_rank(b)),
    }
}

// `total_cmp` except that -0.0 and 0.0 are equal, matching `Int(0)`.
fn compare_floats(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

// NaNs sit at the ends the way `total_cmp` puts them: negative NaNs first,
// positive NaNs last.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= TWO_POW_63 {
        return Ordering::Less;
    }
    if float < -TWO_POW_63 {
        return Ordering::Greater;
    }

    // In range, so the truncated float converts to i64 exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal if float > whole => Ordering::Less,
        Ordering::Equal if float < whole => Ordering::Greater,
        ordering => ordering,
    }
}

fn kind_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::Text(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_and_default() {
        assert_eq!(Dir::default(), Dir::Asc);
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn compare_text() {
        let a = Value::text("apple");
        let b = Value::text("banana");
        assert_eq!(compare_field_values(Some(&a), Some(&b), Dir::Asc), Ordering::Less);
        assert_eq!(compare_field_values(Some(&a), Some(&b), Dir::Desc), Ordering::Greater);
    }

    #[test]
    fn compare_mixed_numbers() {
        let a = Value::Int(2);
        let b = Value::Float(2.5);
        assert_eq!(compare_field_values(Some(&a), Some(&b), Dir::Asc), Ordering::Less);
    }

    #[test]
    fn absent_sorts_last_in_both_directions() {
        let a = Value::text("a");
        assert_eq!(compare_field_values(None, Some(&a), Dir::Asc), Ordering::Greater);
        assert_eq!(compare_field_values(None, Some(&a), Dir::Desc), Ordering::Greater);
        assert_eq!(compare_field_values(None, None, Dir::Desc), Ordering::Equal);
    }

    #[test]
    fn mismatched_kinds_order_by_kind() {
        let flag = Value::Bool(true);
        let text = Value::text("x");
        assert_eq!(compare_field_values(Some(&flag), Some(&text), Dir::Asc), Ordering::Less);
    }

    #[test]
    fn ints_and_floats_compare_exactly_past_two_pow_53() {
        let big = 1i64 << 53;
        let int = Value::Int(big);
        let float = Value::Float(big as f64);
        let next = Value::Int(big + 1);

        assert_eq!(compare_values(&int, &float), Ordering::Equal);
        assert_eq!(compare_values(&float, &next), Ordering::Less);
        assert_eq!(compare_values(&next, &float), Ordering::Greater);
        assert_eq!(compare_values(&int, &next), Ordering::Less);
    }

    #[test]
    fn zeros_and_nans() {
        assert_eq!(compare_values(&Value::Float(-0.0), &Value::Float(0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Int(0), &Value::Float(-0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Int(i64::MAX), &Value::Float(f64::NAN)), Ordering::Less);
        assert_eq!(compare_values(&Value::Float(f64::NAN), &Value::Float(f64::INFINITY)), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(i64::MIN), &Value::Float(-1e19)), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(-3), &Value::Float(-2.5)), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(-2), &Value::Float(-2.5)), Ordering::Greater);
    }

    fn number() -> impl Strategy<Value = Value<'static>> {
        let big = 1i64 << 53;
        prop_oneof![
            (-4i64..4).prop_map(move |d| Value::Int(big + d)),
            (-4i64..4).prop_map(move |d| Value::Float((big + d) as f64)),
            (-4i64..4).prop_map(Value::Int),
            (-8i64..8).prop_map(|n| Value::Float(n as f64 / 2.0)),
            Just(Value::Float(-0.0)),
            Just(Value::Int(i64::MAX)),
            Just(Value::Float(i64::MAX as f64)),
            Just(Value::Float(f64::NAN)),
            Just(Value::Float(f64::INFINITY)),
            Just(Value::Bool(true)),
            Just(Value::text("n")),
        ]
    }

    proptest! {
        #[test]
        fn comparison_is_a_total_order(values in prop::collection::vec(number(), 3..40)) {
            for a in &values {
                prop_assert_eq!(compare_values(a, a), Ordering::Equal);
                for b in &values {
                    prop_assert_eq!(compare_values(a, b), compare_values(b, a).reverse());
                    for c in &values {
                        if compare_values(a, b) != Ordering::Greater
                            && compare_values(b, c) != Ordering::Greater
                        {
                            prop_assert_ne!(compare_values(a, c), Ordering::Greater);
                        }
                    }
                }
            }

            let mut sorted: Vec<Option<Value<'static>>> = values.into_iter().map(Some).collect();
            sorted.sort_by(|a, b| compare_field_values(a.as_ref(), b.as_ref(), Dir::Desc));
            for pair in sorted.windows(2) {
                prop_assert_ne!(
                    compare_field_values(pair[0].as_ref(), pair[1].as_ref(), Dir::Desc),
                    Ordering::Greater
                );
            }
        }
    }
}
