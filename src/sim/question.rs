//! Procedural arithmetic question generation
//!
//! Pure given the injected RNG: the same random sequence produces the same
//! question, options, and lane assignment.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::state::{Gate, GateStatus};
use crate::consts::{LANE_COUNT, ROAD_DEPTH};

/// Draws allowed while fuzzing distractors before we call it a bug. The
/// candidate neighborhood around any answer holds far more than two distinct
/// values, so hitting this means the range policy is broken.
const MAX_FUZZ_TRIES: u32 = 64;

/// Arithmetic operation posed by a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "×",
        }
    }
}

/// A generated question with its lane-mapped option set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Rendered as `"{a} {op} {b}"`
    pub text: String,
    /// One option per lane, exactly one equal to `answer`
    pub options: Vec<i32>,
    /// Position of `answer` within `options`
    pub correct_index: usize,
    pub answer: i32,
}

/// Generate a question for the given difficulty tier (1-based).
///
/// Operand ranges widen with difficulty; multiplication only appears above
/// tier 3. Subtraction always keeps the right operand in `[1, a - 1]` so the
/// answer stays positive.
pub fn generate_question<R: Rng>(difficulty: u32, rng: &mut R) -> Question {
    let d = difficulty as i32;
    let ops: &[Op] = if difficulty > 3 {
        &[Op::Add, Op::Sub, Op::Mul]
    } else {
        &[Op::Add, Op::Sub]
    };
    let op = ops[rng.random_range(0..ops.len())];

    let (a, b) = match op {
        Op::Add => (
            rng.random_range(2..=7 + 3 * d),
            rng.random_range(2..=7 + 3 * d),
        ),
        Op::Sub => {
            let a = rng.random_range(4..=11 + 4 * d);
            let b = rng.random_range(1..=(a - 1).min(6 + 3 * d));
            (a, b)
        }
        Op::Mul => (rng.random_range(2..=5 + d), rng.random_range(2..=4 + d)),
    };
    let answer = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
    };

    let text = format!("{a} {} {b}", op.symbol());

    // Distractors live in a small neighborhood around the answer, floored at
    // 1. The fuzz span grows with difficulty so wide-operand answers get
    // plausibly wide wrong options.
    let fuzz_span = 5 + d;
    let mut options = Vec::with_capacity(LANE_COUNT);
    options.push(answer);
    let mut tries = 0;
    while options.len() < LANE_COUNT {
        tries += 1;
        assert!(
            tries <= MAX_FUZZ_TRIES,
            "distractor fuzzing stalled on {options:?}"
        );
        let fuzz = rng.random_range(1..=fuzz_span);
        let candidate = if rng.random_bool(0.5) {
            answer + fuzz
        } else {
            (answer - fuzz).max(1)
        };
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|&v| v == answer)
        .expect("answer is seeded into the option set");

    Question {
        text,
        options,
        correct_index,
        answer,
    }
}

/// Wrap a generated question into a gate at the far visible boundary
pub fn create_gate<R: Rng>(id: u32, difficulty: u32, rng: &mut R) -> Gate {
    let question = generate_question(difficulty, rng);
    Gate {
        id,
        z: -ROAD_DEPTH,
        question: question.text,
        options: question.options,
        correct_index: question.correct_index,
        status: GateStatus::Pending,
        resolved: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Re-evaluate the rendered question text
    fn eval(text: &str) -> i32 {
        let mut parts = text.split_whitespace();
        let a: i32 = parts.next().unwrap().parse().unwrap();
        let op = parts.next().unwrap();
        let b: i32 = parts.next().unwrap().parse().unwrap();
        match op {
            "+" => a + b,
            "-" => a - b,
            "×" => a * b,
            _ => panic!("unknown operator {op:?}"),
        }
    }

    proptest! {
        #[test]
        fn question_invariants_hold(difficulty in 1u32..=6, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let q = generate_question(difficulty, &mut rng);

            prop_assert_eq!(q.options.len(), LANE_COUNT);
            let mut distinct = q.options.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), LANE_COUNT);

            prop_assert!(q.correct_index < q.options.len());
            prop_assert_eq!(q.options[q.correct_index], q.answer);
            prop_assert_eq!(eval(&q.text), q.answer);
            prop_assert!(q.answer >= 1);
            prop_assert!(q.options.iter().all(|&o| o >= 1));
        }

        #[test]
        fn subtraction_stays_positive(difficulty in 1u32..=6, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let q = generate_question(difficulty, &mut rng);
            if q.text.contains('-') {
                let mut parts = q.text.split_whitespace();
                let a: i32 = parts.next().unwrap().parse().unwrap();
                let b: i32 = parts.nth(1).unwrap().parse().unwrap();
                prop_assert!(b >= 1);
                prop_assert!(b < a);
            }
        }

        #[test]
        fn easy_tiers_never_multiply(difficulty in 1u32..=3, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let q = generate_question(difficulty, &mut rng);
            prop_assert!(!q.text.contains('×'));
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let mut rng1 = Pcg32::seed_from_u64(1234);
        let mut rng2 = Pcg32::seed_from_u64(1234);
        let q1 = generate_question(3, &mut rng1);
        let q2 = generate_question(3, &mut rng2);
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_create_gate_spawns_at_far_boundary() {
        let mut rng = Pcg32::seed_from_u64(99);
        let gate = create_gate(7, 1, &mut rng);
        assert_eq!(gate.id, 7);
        assert_eq!(gate.z, -ROAD_DEPTH);
        assert_eq!(gate.status, GateStatus::Pending);
        assert!(!gate.resolved);
        assert_eq!(gate.options.len(), LANE_COUNT);
        assert_eq!(gate.options[gate.correct_index], eval(&gate.question));
    }
}
