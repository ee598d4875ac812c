use crate::{Num, PI, TWO_PI};

/// Result of an iterative root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    pub value: Num,
    pub iterations: u32,
    pub converged: bool,
}

/// Approximates the root of a function using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to approximate the root of.
/// f_prime - The derivative of the function.
/// x0 - The initial guess.
/// epsilon - The maximum error allowed.
/// max_steps - Upper bound on the number of Newton steps.
///
/// # Returns
/// The last iterate, flagged with whether the step size dropped below
/// `epsilon` before `max_steps` ran out.
pub fn newton_approx(
    f: impl Fn(Num) -> Num,
    f_prime: impl Fn(Num) -> Num,
    x0: Num,
    epsilon: Num,
    max_steps: u32,
) -> Approximation {
    let mut x = x0;

    for step in 1..=max_steps {
        let x_next = x - f(x) / f_prime(x);

        let error = (x_next - x).abs();

        if error < epsilon {
            return Approximation {
                value: x_next,
                iterations: step,
                converged: true,
            };
        }

        x = x_next;
    }

    Approximation {
        value: x,
        iterations: max_steps,
        converged: false,
    }
}

/// Applies `x_{k+1} = g(x_k)` exactly `iterations` times, without checking
/// for convergence.
pub fn fixed_point(g: impl Fn(Num) -> Num, x0: Num, iterations: u32) -> Num {
    (0..iterations).fold(x0, |x, _| g(x))
}

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: Num, end: Num, count: usize) -> Vec<Num> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as Num;

            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as Num
                    }
                })
                .collect()
        }
    }
}

/// Wraps an angle into (-π, π].
pub fn wrap_angle(angle: Num) -> Num {
    let wrapped = (angle + PI).rem_euclid(TWO_PI) - PI;

    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

#[cfg(all(test, feature = "f64"))]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn newton_finds_square_root() {
        let approx = newton_approx(|x| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-12, 50);

        assert!(approx.converged);
        assert!((approx.value - Num::sqrt(2.0)).abs() < 1e-6);
    }

    #[test]
    fn newton_reports_exhausted_steps() {
        // No real root, the iteration keeps bouncing around
        let approx = newton_approx(|x| x * x + 1.0, |x| 2.0 * x, 0.5, 1e-12, 20);

        assert!(!approx.converged);
        assert_eq!(approx.iterations, 20);
    }

    #[test]
    fn fixed_point_runs_requested_steps() {
        let value = fixed_point(|x| x + 1.0, 0.0, 10);

        assert_eq!(value, 10.0);
    }

    #[test_case(0 ; "empty")]
    #[test_case(1 ; "single")]
    #[test_case(2 ; "ends only")]
    #[test_case(1000 ; "default sample count")]
    fn linspace_length_and_ends(count: usize) {
        let values = linspace(0.0, 10.0, count);

        assert_eq!(values.len(), count);
        if count > 1 {
            assert_eq!(values[0], 0.0);
            assert_eq!(values[count - 1], 10.0);
        }
    }

    #[test_case(0.0, 0.0)]
    #[test_case(TWO_PI, 0.0)]
    #[test_case(PI, PI)]
    #[test_case(-PI, PI)]
    #[test_case(3.0 * PI, PI)]
    #[test_case(-0.5, -0.5)]
    fn wrapping(angle: Num, expected: Num) {
        assert!((wrap_angle(angle) - expected).abs() < 1e-5);
    }
}
