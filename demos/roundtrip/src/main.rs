use argh::FromArgs;

use colorsys::{Color, ColorHLS, ColorHSV, ColorSpace, ColorYIQ, Triple};

#[derive(FromArgs)]
/// Push a batch of colors through every color space and back, and check the error
struct Args {
    /// number of colors in the batch
    #[argh(option, short = 'n', default = "16384")]
    samples: usize,

    /// largest absolute error accepted on any channel
    #[argh(option, short = 't', default = "1e-7")]
    tolerance: f64,
}

/// What a round trip has to satisfy to pass.
struct RoundTripCriteria {
    samples: usize,
    tolerance: f64,
}

impl From<Args> for RoundTripCriteria {
    fn from(args: Args) -> Self {
        Self {
            samples: args.samples,
            tolerance: args.tolerance,
        }
    }
}

/// Rows of a rolled linspace over [0, 1]: row `i` is `(x[i], x[i - 1], x[i - 2])`.
fn color_values(n: usize) -> Vec<Triple> {
    let x = |i: usize| i as f64 / (n - 1) as f64;
    (0..n)
        .map(|i| [x(i), x((i + n - 1) % n), x((i + n - 2) % n)])
        .collect()
}

fn max_abs_diff(a: Triple, b: Triple) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (x, y)| f64::max(acc, (x - y).abs()))
}

// rgb -> hsv -> rgb -> hls -> rgb -> yiq -> rgb with the dynamic converter
fn free_function_chain(rgb: Triple) -> Triple {
    let mut current = rgb;
    for space in [ColorSpace::Hsv, ColorSpace::Hls, ColorSpace::Yiq] {
        current = ColorSpace::Rgb.convert(space, current);
        current = space.convert(ColorSpace::Rgb, current);
    }
    current
}

// the same chain through the value model, one view per space
fn value_model_chain(rgb: Triple) -> Triple {
    let color = Color::from(rgb);
    let [h, s, v] = color.get_hsv();
    let hsv = ColorHSV::new(h, s, v);
    let [h, l, s] = hsv.get_hls();
    let hls = ColorHLS::new(h, l, s);
    let [y, i, q] = hls.get_yiq();
    ColorYIQ::new(y, i, q).get_rgb()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let criteria: RoundTripCriteria = argh::from_env::<Args>().into();

    if criteria.samples < 2 {
        return Err(format!("need at least 2 samples, got {}", criteria.samples).into());
    }

    let values = color_values(criteria.samples);
    log::info!("checking {} colors", values.len());

    let mut max_error_functions = 0.0f64;
    let mut max_error_model = 0.0f64;
    for rgb in values.iter().copied() {
        max_error_functions = max_error_functions.max(max_abs_diff(free_function_chain(rgb), rgb));
        max_error_model = max_error_model.max(max_abs_diff(value_model_chain(rgb), rgb));
    }

    log::info!("max error through the converters: {:e}", max_error_functions);
    log::info!("max error through the value model: {:e}", max_error_model);

    let max_error = max_error_functions.max(max_error_model);
    if max_error > criteria.tolerance {
        return Err(format!(
            "round trip error {:e} exceeds the tolerance {:e}",
            max_error, criteria.tolerance
        )
        .into());
    }

    println!(
        "{} colors round trip within {:e} (max error {:e})",
        criteria.samples, criteria.tolerance, max_error
    );

    Ok(())
}
