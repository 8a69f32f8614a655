//! Derivative-free minimisation for small parameter vectors.

use trend_api::SolverConfig;
use trend_spi::{TsError, TsResult};

/// Reflection coefficient.
const ALPHA: f64 = 1.0;
/// Expansion coefficient.
const GAMMA: f64 = 2.0;
/// Contraction coefficient.
const RHO: f64 = 0.5;
/// Shrink coefficient.
const SIGMA: f64 = 0.5;

/// Result of a converged search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
}

struct Vertex {
    point: Vec<f64>,
    value: f64,
}

/// Nelder-Mead simplex search within box bounds.
///
/// The initial simplex is `start` plus one vertex offset by `steps[i]` along
/// each coordinate. Every trial point is projected onto `bounds`, and a
/// non-finite objective counts as `+inf`.
///
/// The search has converged once the objective values across the simplex
/// agree to a relative `config.tolerance`, or once every vertex lies within
/// `config.tolerance` of the best one. Running out of iterations first is a
/// [`TsError::ConvergenceFailure`].
pub fn nelder_mead<F>(
    objective: F,
    start: &[f64],
    steps: &[f64],
    bounds: &[(f64, f64)],
    config: &SolverConfig,
) -> TsResult<SearchOutcome>
where
    F: Fn(&[f64]) -> f64,
{
    config.validate()?;
    if steps.len() != start.len() || bounds.len() != start.len() {
        return Err(TsError::InvalidData(
            "search start, steps and bounds differ in length".to_string(),
        ));
    }

    let project = |mut x: Vec<f64>| -> Vec<f64> {
        for (v, &(lo, hi)) in x.iter_mut().zip(bounds) {
            *v = v.clamp(lo, hi);
        }
        x
    };
    let evaluate = |x: &[f64]| -> f64 {
        let value = objective(x);
        if value.is_finite() {
            value
        } else {
            f64::INFINITY
        }
    };

    let origin = project(start.to_vec());
    let origin_value = objective(&origin);
    if !origin_value.is_finite() {
        return Err(TsError::NumericalError(
            "objective is not finite at the starting point".to_string(),
        ));
    }

    let n = origin.len();
    if n == 0 {
        return Ok(SearchOutcome {
            point: origin,
            value: origin_value,
            iterations: 0,
        });
    }

    let mut simplex = Vec::with_capacity(n + 1);
    for i in 0..n {
        let mut point = origin.clone();
        point[i] += steps[i];
        let mut point = project(point);
        // At an upper bound, step the other way.
        if point[i] == origin[i] {
            point[i] = (origin[i] - steps[i]).clamp(bounds[i].0, bounds[i].1);
        }
        let value = evaluate(&point);
        simplex.push(Vertex { point, value });
    }
    simplex.push(Vertex {
        point: origin,
        value: origin_value,
    });

    for iteration in 0..=config.max_iterations {
        simplex.sort_by(|a, b| a.value.total_cmp(&b.value));

        if has_converged(&simplex, config.tolerance) {
            let best = simplex.swap_remove(0);
            return Ok(SearchOutcome {
                point: best.point,
                value: best.value,
                iterations: iteration,
            });
        }
        if iteration == config.max_iterations {
            break;
        }

        let centroid: Vec<f64> = (0..n)
            .map(|j| simplex[..n].iter().map(|v| v.point[j]).sum::<f64>() / n as f64)
            .collect();
        let toward = |from: &[f64], coeff: f64| -> Vec<f64> {
            project(
                centroid
                    .iter()
                    .zip(from)
                    .map(|(c, x)| c + coeff * (x - c))
                    .collect(),
            )
        };

        let best_value = simplex[0].value;
        let second_worst = simplex[n - 1].value;
        let worst_value = simplex[n].value;

        let reflected = toward(&simplex[n].point, -ALPHA);
        let reflected_value = evaluate(&reflected);

        let replacement = if reflected_value < best_value {
            let expanded = toward(&reflected, GAMMA);
            let expanded_value = evaluate(&expanded);
            if expanded_value < reflected_value {
                Some((expanded, expanded_value))
            } else {
                Some((reflected, reflected_value))
            }
        } else if reflected_value < second_worst {
            Some((reflected, reflected_value))
        } else if reflected_value < worst_value {
            let outside = toward(&reflected, RHO);
            let outside_value = evaluate(&outside);
            (outside_value <= reflected_value).then_some((outside, outside_value))
        } else {
            let inside = toward(&simplex[n].point, RHO);
            let inside_value = evaluate(&inside);
            (inside_value < worst_value).then_some((inside, inside_value))
        };

        match replacement {
            Some((point, value)) => simplex[n] = Vertex { point, value },
            None => {
                let best = simplex[0].point.clone();
                for vertex in simplex.iter_mut().skip(1) {
                    let shrunk = best
                        .iter()
                        .zip(&vertex.point)
                        .map(|(b, x)| b + SIGMA * (x - b))
                        .collect();
                    vertex.point = project(shrunk);
                    vertex.value = evaluate(&vertex.point);
                }
            }
        }
    }

    Err(TsError::ConvergenceFailure {
        iterations: config.max_iterations,
    })
}

/// Simplex values agree to a relative tolerance, or the simplex has collapsed.
fn has_converged(simplex: &[Vertex], tolerance: f64) -> bool {
    let best = &simplex[0];
    let worst = &simplex[simplex.len() - 1];

    let spread = worst.value - best.value;
    if spread.is_finite() && spread <= tolerance * (best.value.abs() + tolerance) {
        return true;
    }

    simplex[1..].iter().all(|v| {
        v.point
            .iter()
            .zip(&best.point)
            .all(|(x, b)| (x - b).abs() <= tolerance)
    })
}
