use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPS: f64 = 1e-9;

fn assert_touching(stack: &Stack) {
    for pair in stack.polygons().windows(2) {
        let (_, top_prev) = pair[0].bounds();
        let (bottom_next, _) = pair[1].bounds();
        assert!(
            (bottom_next.y - top_prev.y).abs() < EPS,
            "gap {} between n={} and n={}",
            bottom_next.y - top_prev.y,
            pair[0].shape().n(),
            pair[1].shape().n()
        );
    }
}

#[test]
fn parse_rejects_non_digits() {
    assert_eq!(parse_digits("0912").unwrap(), vec![0, 9, 1, 2]);
    assert_eq!(parse_digits("").unwrap(), Vec::<u8>::new());
    assert_eq!(
        parse_digits("12a4"),
        Err(StackError::NotADigit { ch: 'a', pos: 2 })
    );
    assert_eq!(
        parse_digits("1 2"),
        Err(StackError::NotADigit { ch: ' ', pos: 1 })
    );
    // non-ASCII digits are rejected too
    assert!(matches!(
        parse_digits("1٣"),
        Err(StackError::NotADigit { ch: '٣', pos: 1 })
    ));
}

#[test]
fn default_input_order() {
    let stack = stack_digits("6031301721", StackCfg::default()).unwrap();
    assert_eq!(stack.digit_string(), "7633211100");
    assert_eq!(stack.digits(), &[7, 6, 3, 3, 2, 1, 1, 1, 0, 0]);
    let ns: Vec<u32> = stack.polygons().iter().map(|p| p.shape().n()).collect();
    assert_eq!(ns, vec![10, 9, 6, 6, 5, 4, 4, 4, 3, 3]);
    assert_touching(&stack);
}

#[test]
fn three_polygon_scenario() {
    let stack = stack_digits("345", StackCfg::default()).unwrap();
    assert_eq!(stack.digit_string(), "543");
    let polys = stack.polygons();
    let ns: Vec<u32> = polys.iter().map(|p| p.shape().n()).collect();
    assert_eq!(ns, vec![8, 7, 6]);
    // first polygon rests on y = 0
    assert_eq!(polys[0].center().y, polys[0].shape().in_radius());
    assert!(polys[0].bounds().0.y.abs() < EPS);
    let total: f64 = polys.iter().map(|p| p.size().y).sum();
    assert!((stack.height() - total).abs() < EPS);
    let (_, top) = polys[2].bounds();
    assert!((top.y - stack.height()).abs() < EPS);
    assert!(polys.iter().all(|p| p.center().x == 0.0));
    assert_touching(&stack);
}

#[test]
fn empty_input_gives_empty_stack() {
    let stack = stack_digits("", StackCfg::default()).unwrap();
    assert!(stack.polygons().is_empty());
    assert_eq!(stack.height(), 0.0);
    assert_eq!(stack.digit_string(), "");
}

#[test]
fn config_is_validated() {
    let bad = StackCfg {
        side_length: 0.0,
        ..StackCfg::default()
    };
    assert!(matches!(
        stack_digits("1", bad),
        Err(StackError::BadSideLength(_))
    ));
    let few = StackCfg {
        sides_offset: 1,
        ..StackCfg::default()
    };
    assert_eq!(
        stack_digits("91", few).unwrap_err(),
        StackError::TooFewSides { digit: 1, sides: 2 }
    );
}

#[test]
fn side_length_scales_heights() {
    let unit = stack_digits("2718", StackCfg::default()).unwrap();
    let big = stack_digits(
        "2718",
        StackCfg {
            side_length: 2.5,
            ..StackCfg::default()
        },
    )
    .unwrap();
    assert!((big.height() - 2.5 * unit.height()).abs() < EPS);
    assert_touching(&big);
}

#[test]
fn randomized_inputs_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let len = rng.gen_range(1..40);
        let input: String = (0..len)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        let stack = stack_digits(&input, StackCfg::default()).unwrap();
        assert_eq!(stack.polygons().len(), len);
        assert_touching(&stack);
    }
}

proptest! {
    #[test]
    fn digits_sorted_and_stack_gapless(input in "[0-9]{1,24}", side in 0.1f64..10.0) {
        let cfg = StackCfg { side_length: side, ..StackCfg::default() };
        let stack = stack_digits(&input, cfg).unwrap();
        prop_assert!(stack.digits().windows(2).all(|w| w[0] >= w[1]));
        let mut sorted: Vec<u8> = parse_digits(&input).unwrap();
        sorted.sort_unstable();
        let mut got = stack.digits().to_vec();
        got.sort_unstable();
        prop_assert_eq!(got, sorted);

        let tol = 1e-9 * side.max(1.0) * input.len() as f64;
        for pair in stack.polygons().windows(2) {
            let (_, top_prev) = pair[0].bounds();
            let (bottom_next, _) = pair[1].bounds();
            prop_assert!((bottom_next.y - top_prev.y).abs() <= tol);
        }
        let total: f64 = stack.polygons().iter().map(|p| p.size().y).sum();
        prop_assert!((stack.height() - total).abs() <= tol);
    }
}
