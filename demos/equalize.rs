//! Runs every equalization method over a few sample segments.
//!
//! Usage:
//! ```text
//! cargo run --example equalize                  # all methods
//! cargo run --example equalize -- hobby         # one method
//! RUST_LOG=curve_eq=trace cargo run --example equalize
//! ```

use curve_eq::{CubicSegment, CurveEqError, EqMethodKind, EqSettings};

fn samples() -> Vec<(&'static str, CubicSegment)> {
    vec![
        (
            "quarter arc",
            CubicSegment::from_coords([(0.0, 0.0), (0.0, 40.0), (70.0, 100.0), (100.0, 100.0)]),
        ),
        (
            "lopsided bowl",
            CubicSegment::from_coords([(0.0, 0.0), (4.0, 4.0), (85.0, 10.0), (100.0, 0.0)]),
        ),
        (
            "retracted start",
            CubicSegment::from_coords([(0.0, 0.0), (0.0, 0.0), (45.0, 100.0), (100.0, 100.0)]),
        ),
        (
            "s-curve",
            CubicSegment::from_coords([(0.0, 0.0), (0.0, 50.0), (100.0, -50.0), (100.0, 0.0)]),
        ),
    ]
}

fn main() -> Result<(), CurveEqError> {
    // Default: WARN for everything, INFO for this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("equalize=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let kinds = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<EqMethodKind>()?],
        None => EqMethodKind::ALL.to_vec(),
    };

    let settings = EqSettings::default().with_preset(2)?.with_tension(0.9)?;

    for kind in kinds {
        let method = settings.with_method(kind).method();
        for (name, segment) in samples() {
            let handles = method.apply(&segment).rounded();
            tracing::info!(
                %method,
                sample = name,
                p1 = %handles.p1,
                p2 = %handles.p2,
                "equalized"
            );
        }
    }

    Ok(())
}
