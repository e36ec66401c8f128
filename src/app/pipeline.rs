//! One solve, from evidence documents to a `Solution`.
//!
//! read documents -> decode evidence -> pick mode -> solve -> (coefficients)
//!
//! `run_solve` does the file reads; `run_solve_with_documents` is the pure
//! part and is what tests drive.

use tracing::info;

use crate::domain::{Coefficients, Point, Root, SolutionFile, SolveConfig, SolveMode};
use crate::error::{AppError, SolveError};
use crate::fit::{QuadraticFit, RootFit, coefficients, fit_with, solve};
use crate::io::ingest::{EvidenceDocument, Loaded, load_points, load_roots, read_document};
use crate::math::Fraction;

/// Outcome of one solve, by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Roots(RootFit),
    Points(QuadraticFit),
}

impl Solution {
    pub fn mode(&self) -> SolveMode {
        match self {
            Solution::Roots(_) => SolveMode::Roots,
            Solution::Points(_) => SolveMode::Points,
        }
    }

    pub fn c(&self) -> &Fraction {
        match self {
            Solution::Roots(fit) => &fit.c,
            Solution::Points(fit) => &fit.c,
        }
    }

    /// Labels of every evidence record the solve consumed.
    pub fn used_labels(&self) -> Vec<String> {
        match self {
            Solution::Roots(fit) => vec![
                fit.roots[0].label.clone(),
                fit.roots[1].label.clone(),
                fit.point.label.clone(),
            ],
            Solution::Points(fit) => fit.used.to_vec(),
        }
    }

    /// Portable JSON form.
    pub fn to_file(&self) -> SolutionFile {
        let (roots, point) = match self {
            Solution::Roots(fit) => (
                Some([fit.roots[0].r.to_string(), fit.roots[1].r.to_string()]),
                Some([fit.point.x.to_string(), fit.point.y.to_string()]),
            ),
            Solution::Points(_) => (None, None),
        };

        SolutionFile {
            tool: "qc".to_string(),
            mode: self.mode(),
            c: self.c().into(),
            c_display: self.c().to_string(),
            used: self.used_labels(),
            roots,
            point,
        }
    }
}

/// Everything computed by a single `qc solve` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub solution: Solution,
    pub points: Loaded<Point>,
    pub roots: Option<Loaded<Root>>,
    /// `a`, `b`, `c` for the chosen triple, when requested in mode B.
    pub coefficients: Option<Coefficients>,
}

/// Execute the full solve pipeline from the documents named in `config`.
pub fn run_solve(config: &SolveConfig) -> Result<RunOutput, AppError> {
    let points_doc = read_document(&config.points_path)?;
    let roots_doc = match &config.roots_path {
        Some(path) => Some(read_document(path)?),
        None => None,
    };
    info!(
        mode = config.mode().display_name(),
        points = %config.points_path.display(),
        roots = ?config.roots_path.as_ref().map(|p| p.display().to_string()),
        "loaded evidence documents"
    );

    Ok(run_solve_with_documents(config, &points_doc, roots_doc.as_ref())?)
}

/// Execute the pipeline with already-parsed documents.
///
/// Mode A runs when a roots document is given, mode B otherwise.
pub fn run_solve_with_documents(
    config: &SolveConfig,
    points_doc: &EvidenceDocument,
    roots_doc: Option<&EvidenceDocument>,
) -> Result<RunOutput, SolveError> {
    let points = load_points(points_doc, config.use_k)?;

    match roots_doc {
        Some(roots_doc) => {
            let roots = load_roots(roots_doc, config.use_k)?;
            info!(
                mode = SolveMode::Roots.display_name(),
                roots = roots.items.len(),
                points = points.items.len(),
                "solving"
            );

            // Only the first point (after ordering) is consumed.
            let point = points.items.first().ok_or(SolveError::InsufficientData {
                what: "points",
                needed: 1,
                found: 0,
            })?;
            let fit = solve(&roots.items, point)?;
            info!(c = %fit.c, "solved");

            Ok(RunOutput {
                solution: Solution::Roots(fit),
                points,
                roots: Some(roots),
                coefficients: None,
            })
        }
        None => {
            info!(
                mode = SolveMode::Points.display_name(),
                points = points.items.len(),
                search = ?config.search,
                "solving"
            );

            let fit = fit_with(&points.items, config.search)?;
            let coeffs = if config.coefficients {
                Some(coefficients(&points.items, &fit)?)
            } else {
                None
            };
            info!(c = %fit.c, used = ?fit.used, "solved");

            Ok(RunOutput {
                solution: Solution::Points(fit),
                points,
                roots: None,
                coefficients: coeffs,
            })
        }
    }
}
