use crate::RfError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// Brent root finder configuration.
#[derive(Clone, Copy, Debug)]
pub struct BrentConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the root position
    pub abs_tol: Real,
    /// Relative tolerance on the root position
    pub rel_tol: Real,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-12,
            rel_tol: 4.0 * f64::EPSILON,
        }
    }
}

/// Brent root finder result.
#[derive(Clone, Copy, Debug)]
pub struct BrentResult {
    /// Root estimate
    pub root: Real,
    /// Residual f(root)
    pub residual: Real,
    /// Number of iterations
    pub iterations: usize,
}

/// Bracketed scalar root finder (Brent's method).
///
/// Combines inverse quadratic interpolation and the secant rule with a
/// bisection fallback, so the bracket never widens. The caller must supply
/// `lo < hi` with `f(lo)` and `f(hi)` of opposite sign.
pub fn brent<F>(mut f: F, lo: Real, hi: Real, cfg: &BrentConfig) -> Result<BrentResult, RfError>
where
    F: FnMut(Real) -> Result<Real, RfError>,
{
    let mut a = lo;
    let mut b = hi;
    let mut fa = f(a)?;
    let mut fb = f(b)?;

    if fa == 0.0 {
        return Ok(BrentResult {
            root: a,
            residual: 0.0,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(BrentResult {
            root: b,
            residual: 0.0,
            iterations: 0,
        });
    }
    if fa * fb > 0.0 {
        return Err(RfError::BracketFailed {
            what: "brent",
            lo,
            hi,
        });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 0..cfg.max_iterations {
        // Keep b as the best estimate: |f(b)| <= |f(c)|, bracket is [b, c]
        if fb.abs() > fc.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * cfg.rel_tol * b.abs() + 0.5 * cfg.abs_tol;
        let m = 0.5 * (c - b);

        if m.abs() <= tol || fb == 0.0 {
            return Ok(BrentResult {
                root: b,
                residual: fb,
                iterations: iter,
            });
        }

        if e.abs() < tol || fa.abs() <= fb.abs() {
            // Interpolation is not trustworthy, bisect
            d = m;
            e = m;
        } else {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant rule
                (2.0 * m * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q0 = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * m * q0 * (q0 - r) - (b - a) * (r - 1.0)),
                    (q0 - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            if 2.0 * p < (3.0 * m * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if m > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b)?;

        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
    }

    Err(RfError::ConvergenceFailed {
        what: "brent",
        iterations: cfg.max_iterations,
        residual: fb,
    })
}

/// Principal branch of the Lambert W function, for z >= -1/e.
///
/// Halley iteration from a branch-appropriate starting guess. Accurate to
/// roughly machine precision over the domain needed by the Colebrook-White
/// closed form (large positive arguments).
pub fn lambert_w0(z: Real) -> Result<Real, RfError> {
    ensure_finite(z, "lambert_w0 argument")?;

    let min_z = -1.0 / std::f64::consts::E;
    if z < min_z {
        return Err(RfError::InvalidArg {
            what: "lambert_w0 argument below -1/e",
        });
    }
    if z == 0.0 {
        return Ok(0.0);
    }

    // Starting guess: series near the branch point, log-based elsewhere
    let mut w = if z < -0.25 {
        let p = (2.0 * (std::f64::consts::E * z + 1.0)).sqrt();
        -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p
    } else if z < std::f64::consts::E {
        // ln(1 + z) is within the Halley basin for moderate z
        z.ln_1p()
    } else {
        let l = z.ln();
        l - l.ln()
    };

    for _ in 0..60 {
        let ew = w.exp();
        let wew = w * ew;
        let r = wew - z;
        if r.abs() <= 1e-14 * (z.abs() + wew.abs()) {
            return Ok(w);
        }
        let wp1 = w + 1.0;
        let delta = r / (ew * wp1 - (w + 2.0) * r / (2.0 * wp1));
        w -= delta;
        if delta.abs() <= 1e-14 * (1.0 + w.abs()) {
            return Ok(w);
        }
    }

    Err(RfError::ConvergenceFailed {
        what: "lambert_w0",
        iterations: 60,
        residual: w * w.exp() - z,
    })
}
