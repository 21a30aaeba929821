//! Scenario corpus
//!
//! Worked examples stored as JSON under `tests/fixtures/`. Each scenario
//! names an operation, its inputs, and either the expected value or the
//! expected error kind. Complex numbers are written as `[re, im]`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail, ensure};
use moebius_core::{Circle, Complex, Error, MoebiusTransform, derive_from_triples, inverse_circle};
use serde::Deserialize;

/// A complex number as `[re, im]`
pub type Point = [f64; 2];

/// Default comparison tolerance for scenario values
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Expected error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Pole,
    DegenerateTransform,
    CollinearOrDuplicatePoints,
    DegenerateCircle,
}

impl ErrorKind {
    /// Check whether `error` falls into this category
    pub fn matches(&self, error: &Error) -> bool {
        matches!(
            (self, error),
            (ErrorKind::Pole, Error::Pole { .. })
                | (ErrorKind::DegenerateTransform, Error::DegenerateTransform { .. })
                | (
                    ErrorKind::CollinearOrDuplicatePoints,
                    Error::CollinearOrDuplicatePoints { .. }
                )
                | (ErrorKind::DegenerateCircle, Error::DegenerateCircle { .. })
        )
    }
}

/// Either an expected value or an expected error
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// The operation fails with this kind of error
    Error { error: ErrorKind },
    /// The operation succeeds with this value
    Value(T),
}

/// Expected circle
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CircleSpec {
    pub center: Point,
    pub radius: f64,
}

/// Operation under test
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Case {
    Apply {
        transform: [Point; 4],
        z: Point,
        expected: Outcome<Point>,
    },
    Invert {
        transform: [Point; 4],
        expected: Outcome<[Point; 4]>,
    },
    Derive {
        source: [Point; 3],
        target: [Point; 3],
        expected: Outcome<[Point; 3]>,
    },
    InverseCircle {
        center: Point,
        radius: f64,
        expected: Outcome<CircleSpec>,
    },
    TransformCircle {
        transform: [Point; 4],
        circle: CircleSpec,
        expected: Outcome<CircleSpec>,
    },
}

/// A named scenario
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,
    /// What the scenario demonstrates
    #[serde(default)]
    pub description: String,
    /// Comparison tolerance, if not the default
    #[serde(default)]
    pub tolerance: Option<f64>,
    /// Operation and expectations
    pub case: Case,
}

/// Directory holding the JSON fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load all scenarios from a JSON file
pub fn load_scenarios(path: impl AsRef<Path>) -> anyhow::Result<Vec<Scenario>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

fn complex(p: Point) -> Complex {
    Complex::new(p[0], p[1])
}

fn transform(coeffs: [Point; 4]) -> MoebiusTransform {
    MoebiusTransform::from(coeffs.map(complex))
}

fn check_point(label: &str, actual: Complex, expected: Point, tol: f64) -> anyhow::Result<()> {
    let expected = complex(expected);
    ensure!(
        (actual - expected).norm() <= tol,
        "{label}: got {actual}, expected {expected}"
    );
    Ok(())
}

fn check_circle(actual: &Circle, expected: &CircleSpec, tol: f64) -> anyhow::Result<()> {
    check_point("center", actual.center(), expected.center, tol)?;
    ensure!(
        (actual.radius() - expected.radius).abs() <= tol,
        "radius: got {}, expected {}",
        actual.radius(),
        expected.radius
    );
    Ok(())
}

/// Compare a result against an outcome, checking values with `check`
fn check_outcome<T, E>(
    result: Result<T, Error>,
    expected: &Outcome<E>,
    check: impl FnOnce(&T, &E) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match (result, expected) {
        (Ok(value), Outcome::Value(e)) => check(&value, e),
        (Err(err), Outcome::Error { error }) if error.matches(&err) => Ok(()),
        (Err(err), Outcome::Error { error }) => bail!("expected {error:?} error, got {err}"),
        (Err(err), Outcome::Value(_)) => bail!("unexpected error: {err}"),
        (Ok(_), Outcome::Error { error }) => bail!("expected {error:?} error, got a value"),
    }
}

impl Scenario {
    /// Run the scenario, returning an error describing any mismatch
    pub fn run(&self) -> anyhow::Result<()> {
        let tol = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);

        match &self.case {
            Case::Apply {
                transform: t,
                z,
                expected,
            } => check_outcome(transform(*t).apply(complex(*z)), expected, |w, e| {
                check_point("image", *w, *e, tol)
            }),
            Case::Invert {
                transform: t,
                expected,
            } => check_outcome(transform(*t).invert(), expected, |inv, e| {
                for (label, (actual, exp)) in ["a", "b", "c", "d"]
                    .iter()
                    .zip(inv.coefficients().iter().zip(e.iter()))
                {
                    check_point(label, *actual, *exp, tol)?;
                }
                Ok(())
            }),
            Case::Derive {
                source,
                target,
                expected,
            } => {
                let src = source.map(complex);
                let result = derive_from_triples(src, target.map(complex));
                check_outcome(result, expected, |t, images| {
                    for (z, w) in src.iter().zip(images.iter()) {
                        check_point("image", t.apply(*z)?, *w, tol)?;
                    }
                    Ok(())
                })
            }
            Case::InverseCircle {
                center,
                radius,
                expected,
            } => check_outcome(inverse_circle(complex(*center), *radius), expected, |(z, r), e| {
                check_circle(&Circle::new(*z, *r)?, e, tol)
            }),
            Case::TransformCircle {
                transform: t,
                circle,
                expected,
            } => {
                let result = Circle::new(complex(circle.center), circle.radius)
                    .and_then(|c| c.transform(&transform(*t)));
                check_outcome(result, expected, |image, e| check_circle(image, e, tol))
            }
        }
    }
}
