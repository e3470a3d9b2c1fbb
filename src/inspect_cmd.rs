//! Inspect command: print a matrix file and report transition-matrix validity.

use anyhow::{Context, Result};

use trek_markov::{EPSILON, is_valid_transition_matrix};
use trek_matrix::DenseMatrix;

use crate::cli::InspectArgs;

/// Load and describe a matrix file.
pub fn run(args: InspectArgs) -> Result<()> {
    let matrix = DenseMatrix::from_file(&args.matrix)
        .with_context(|| format!("failed to load matrix: {}", args.matrix.display()))?;
    println!("{}", describe(&matrix));
    Ok(())
}

fn describe(matrix: &DenseMatrix) -> String {
    let verdict = if is_valid_transition_matrix(matrix) {
        "valid transition matrix".to_string()
    } else {
        format!("not a transition matrix (needs square shape and row sums of 1 +/- {EPSILON})")
    };
    format!(
        "{}x{} matrix:\n{}\n{verdict}",
        matrix.rows(),
        matrix.cols(),
        matrix.pretty()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_valid_matrix() {
        let m: DenseMatrix = "0.5,0.5\n1.0,0.0".parse().unwrap();
        assert_eq!(
            describe(&m),
            "2x2 matrix:\n[[0.5, 0.5],\n[1.0, 0.0]]\nvalid transition matrix"
        );
    }

    #[test]
    fn describes_invalid_matrix() {
        let m: DenseMatrix = "0.5,0.5,0.0\n1.0,0.0,0.0".parse().unwrap();
        assert!(describe(&m).ends_with("not a transition matrix (needs square shape and row sums of 1 +/- 0.00001)"));
    }
}
