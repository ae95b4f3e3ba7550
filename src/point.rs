//! Point classification with structural `match`.
//!
//! The literal `0` in a pattern filters; a bare name such as `x` or `y`
//! always binds the matched component, whatever an outer `x`/`y` holds.

use crate::fault::Fault;
use std::fmt;
use tracing::debug;

/// A numeric component. `Int(0)` and `Float(0.0)` both match the literal zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

/// Anything that can be handed to [`match_point`].
#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
    Pair(Number, Number),
    Number(Number),
    Text(String),
    Seq(Vec<Subject>),
}

impl Subject {
    pub fn point(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Subject::Pair(x.into(), y.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Subject::Text(s.into())
    }

    /// Splits a two-component subject into its components.
    ///
    /// Any length-2 sequence qualifies, whatever its elements are.
    fn as_pair(&self) -> Option<(Subject, Subject)> {
        match self {
            Subject::Pair(x, y) => Some((Subject::Number(*x), Subject::Number(*y))),
            Subject::Seq(items) => match items.as_slice() {
                [x, y] => Some((x.clone(), y.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// True only for numbers equal to the literal `0`.
    fn is_zero(&self) -> bool {
        matches!(self, Subject::Number(n) if n.is_zero())
    }

    /// Nested form: text is quoted once it sits inside a pair or sequence.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Text(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Number(n) => write!(f, "{}", n),
            Subject::Text(s) => f.write_str(s),
            Subject::Pair(x, y) => write!(f, "({}, {})", x, y),
            Subject::Seq(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<Number> for Subject {
    fn from(n: Number) -> Self {
        Subject::Number(n)
    }
}

impl From<(i64, i64)> for Subject {
    fn from((x, y): (i64, i64)) -> Self {
        Subject::point(x, y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Origin,
    OnYAxis { y: Subject },
    OnXAxis { x: Subject },
    Point { x: Subject, y: Subject },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Origin => write!(f, "Origin"),
            Report::OnYAxis { y } => write!(f, "Y={}", y),
            Report::OnXAxis { x } => write!(f, "X={}", x),
            Report::Point { x, y } => write!(f, "X={}, Y={}", x, y),
        }
    }
}

/// Classifies `subject`; anything without a point shape is rejected.
///
/// Only number components are tested against zero. Any other component is
/// captured as-is by the axis and general arms.
pub fn match_point(subject: &Subject) -> Result<Report, Fault> {
    // Never read: the arms below bind their own `x` and `y`.
    let x = 1;
    let y = 2;
    debug!(x, y, "outer bindings before match");

    let Some(pair) = subject.as_pair() else {
        return Err(Fault::invalid_input("Not a point"));
    };

    let report = match pair {
        (x, y) if x.is_zero() && y.is_zero() => Report::Origin,
        (x, y) if x.is_zero() => Report::OnYAxis { y },
        (x, y) if y.is_zero() => Report::OnXAxis { x },
        (x, y) => Report::Point { x, y },
    };
    debug!(%report, "classified point");
    Ok(report)
}

/// Same classification on a typed integer pair; the compiler proves it total.
pub fn classify(point: (i64, i64)) -> Report {
    let num = |n: i64| Subject::Number(Number::Int(n));
    match point {
        (0, 0) => Report::Origin,
        (0, y) => Report::OnYAxis { y: num(y) },
        (x, 0) => Report::OnXAxis { x: num(x) },
        (x, y) => Report::Point { x: num(x), y: num(y) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::FaultKind;
    use proptest::prelude::*;

    #[test]
    fn test_origin() {
        assert_eq!(classify((0, 0)), Report::Origin);
        assert_eq!(classify((0, 0)).to_string(), "Origin");
    }

    #[test]
    fn test_zero_one_takes_y_axis_branch() {
        let report = match_point(&Subject::point(0, 1)).unwrap();
        assert_eq!(report, Report::OnYAxis { y: Subject::Number(Number::Int(1)) });
        assert_eq!(report.to_string(), "Y=1");
    }

    #[test]
    fn test_axis_and_general_reports() {
        assert_eq!(classify((0, 5)).to_string(), "Y=5");
        assert_eq!(classify((3, 0)).to_string(), "X=3");
        assert_eq!(classify((2, 3)).to_string(), "X=2, Y=3");
        assert_eq!(classify((-4, -7)).to_string(), "X=-4, Y=-7");
    }

    #[test]
    fn test_outer_names_do_not_filter() {
        // x=1, y=2 exist in match_point; (1, 2) must not be special
        assert_eq!(match_point(&Subject::point(1, 2)).unwrap().to_string(), "X=1, Y=2");
        assert_eq!(match_point(&Subject::point(0, 2)).unwrap().to_string(), "Y=2");
        assert_eq!(match_point(&Subject::point(1, 0)).unwrap().to_string(), "X=1");
    }

    #[test]
    fn test_float_zero_matches_literal_zero() {
        assert_eq!(match_point(&Subject::point(0.0, 0)).unwrap(), Report::Origin);
        assert_eq!(match_point(&Subject::point(0, 1.5)).unwrap().to_string(), "Y=1.5");
        assert_eq!(match_point(&Subject::point(2.0, 0)).unwrap().to_string(), "X=2.0");
    }

    #[test]
    fn test_two_element_sequence_is_a_point() {
        let subject = Subject::Seq(vec![
            Subject::Number(Number::Int(3)),
            Subject::Number(Number::Int(0)),
        ]);
        assert_eq!(match_point(&subject).unwrap().to_string(), "X=3");
    }

    #[test]
    fn test_sequence_components_need_not_be_numbers() {
        let zero_text = Subject::Seq(vec![Subject::from(Number::Int(0)), Subject::text("a")]);
        assert_eq!(match_point(&zero_text).unwrap().to_string(), "Y=a");

        let nested = Subject::Seq(vec![Subject::point(0, 0), Subject::from(Number::Int(1))]);
        assert_eq!(match_point(&nested).unwrap().to_string(), "X=(0, 0), Y=1");

        let mixed = Subject::Seq(vec![Subject::from(Number::Int(1)), Subject::text("y")]);
        assert_eq!(match_point(&mixed).unwrap().to_string(), "X=1, Y=y");

        let text_then_zero = Subject::Seq(vec![Subject::text("0"), Subject::from(Number::Int(0))]);
        assert_eq!(match_point(&text_then_zero).unwrap().to_string(), "X=0");
    }

    #[test]
    fn test_nested_text_is_quoted() {
        let inner = Subject::Seq(vec![Subject::text("a"), Subject::from(Number::Int(2))]);
        let subject = Subject::Seq(vec![inner, Subject::from(Number::Int(0))]);
        assert_eq!(match_point(&subject).unwrap().to_string(), "X=(\"a\", 2)");
    }

    #[test]
    fn test_non_points_are_rejected() {
        let subjects = [
            Subject::Number(Number::Int(0)),
            Subject::text("0,0"),
            Subject::Seq(vec![Subject::Number(Number::Int(1))]),
            Subject::Seq(vec![
                Subject::Number(Number::Int(1)),
                Subject::Number(Number::Int(2)),
                Subject::Number(Number::Int(3)),
            ]),
        ];
        for subject in &subjects {
            let fault = match_point(subject).unwrap_err();
            assert_eq!(fault.kind, FaultKind::InvalidInput);
            assert_eq!(fault.message, "Not a point");
        }
    }

    proptest! {
        #[test]
        fn prop_y_axis_reports_second_component(y in any::<i64>().prop_filter("non-zero", |y| *y != 0)) {
            prop_assert_eq!(classify((0, y)).to_string(), format!("Y={}", y));
        }

        #[test]
        fn prop_x_axis_reports_first_component(x in any::<i64>().prop_filter("non-zero", |x| *x != 0)) {
            prop_assert_eq!(classify((x, 0)).to_string(), format!("X={}", x));
        }

        #[test]
        fn prop_general_points(
            x in any::<i64>().prop_filter("non-zero", |x| *x != 0),
            y in any::<i64>().prop_filter("non-zero", |y| *y != 0),
        ) {
            prop_assert_eq!(classify((x, y)).to_string(), format!("X={}, Y={}", x, y));
        }

        #[test]
        fn prop_dynamic_and_typed_agree(x in -3i64..3, y in -3i64..3) {
            prop_assert_eq!(match_point(&Subject::from((x, y))).unwrap(), classify((x, y)));
        }
    }
}
