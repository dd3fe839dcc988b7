//! Plain-text rendering of tasks and solutions.
//!
//! A task shows every value but the last; the solution shows all values
//! with the operation between each pair, followed by the hint.

use chainmat_chains::ChainSnapshot;

/// `" 3  9, 1, 2, 10, 2"`
pub fn task_line(number: usize, chain: &ChainSnapshot) -> String {
    let values: Vec<String> = chain.task_values().iter().map(i64::to_string).collect();
    format!("{number:>2}  {}", values.join(", "))
}

/// `" 3  9 (-8) 1 (·2) 2 (+8) 10  The operations ..."`
pub fn solution_line(number: usize, chain: &ChainSnapshot) -> String {
    let mut line = format!("{number:>2} ");
    for (i, value) in chain.values.iter().enumerate() {
        line.push_str(&format!(" {value}"));
        if let Some(op) = chain.operations.get(i) {
            line.push_str(&format!(" ({op})"));
        }
    }
    line.push_str("  ");
    line.push_str(&chain.hint);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChainSnapshot {
        ChainSnapshot {
            identity: "muladdsub,8,8,2,9".into(),
            kind: "muladdsub".into(),
            values: vec![9, 1, 2, 10],
            operations: vec!["-8".into(), "·2".into(), "+8".into()],
            hint: "The operations -8, ·2, +8 are repeated in this order.".into(),
        }
    }

    #[test]
    fn task_line_hides_last_value() {
        assert_eq!(task_line(5, &sample()), " 5  9, 1, 2");
    }

    #[test]
    fn solution_line_interleaves_operations_and_appends_hint() {
        assert_eq!(
            solution_line(12, &sample()),
            "12  9 (-8) 1 (·2) 2 (+8) 10  The operations -8, ·2, +8 are repeated in this order."
        );
    }
}
