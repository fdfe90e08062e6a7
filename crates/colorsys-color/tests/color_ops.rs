use std::collections::HashMap;

use colorsys_color::{Color, ColorHSV, RgbRecord};

#[test]
fn addition() {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    let yellow = red + green;
    let magenta = red + blue;
    let cyan = green + blue;
    let white = red + green + blue;

    assert_eq!(yellow.get_rgb(), [1.0, 1.0, 0.0]);
    assert_eq!(magenta.get_rgb(), [1.0, 0.0, 1.0]);
    assert_eq!(cyan.get_rgb(), [0.0, 1.0, 1.0]);
    assert_eq!(white.get_rgb(), [1.0, 1.0, 1.0]);

    // clamped instead of overflowing
    assert_eq!((white + red).get_rgb(), [1.0, 1.0, 1.0]);
}

#[test]
fn subtraction() {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);
    let white = Color::new(1.0, 1.0, 1.0);

    let cyan = white - red;
    let magenta = white - green;
    let yellow = white - blue;

    assert_eq!(yellow.get_rgb(), [1.0, 1.0, 0.0]);
    assert_eq!(magenta.get_rgb(), [1.0, 0.0, 1.0]);
    assert_eq!(cyan.get_rgb(), [0.0, 1.0, 1.0]);

    assert_eq!((white - green - blue).get_rgb(), [1.0, 0.0, 0.0]);
    assert_eq!((white - red - blue).get_rgb(), [0.0, 1.0, 0.0]);
    assert_eq!((white - red - green).get_rgb(), [0.0, 0.0, 1.0]);
}

#[test]
fn in_place_addition_and_subtraction() {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    let mut clr = Color::new(1.0, 1.0, 1.0);

    clr -= red;
    assert_eq!(clr.get_rgb(), [0.0, 1.0, 1.0]);

    clr += red;
    clr -= green;
    assert_eq!(clr.get_rgb(), [1.0, 0.0, 1.0]);

    clr += green;
    clr -= blue;
    assert_eq!(clr.get_rgb(), [1.0, 1.0, 0.0]);
}

#[test]
fn equality() {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);
    let yellow = Color::new(1.0, 1.0, 0.0);
    let magenta = Color::new(1.0, 0.0, 1.0);
    let cyan = Color::new(0.0, 1.0, 1.0);
    let white = Color::new(1.0, 1.0, 1.0);

    let all = [red, green, blue, yellow, magenta, cyan, white];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(i == j, a == b, "{} vs {}", a, b);
        }
    }

    assert_eq!(red + green, yellow);
    assert_eq!(red + blue, magenta);
    assert_eq!(green + blue, cyan);
    assert_eq!(red + green + blue, white);

    assert_eq!(
        red + blue,
        HashMap::from([("red", 1.0), ("green", 0.0), ("blue", 1.0)])
    );
    assert_eq!(red + blue, RgbRecord::new(1.0, 0.0, 1.0));
}

#[test]
fn equality_against_json_record() -> Result<(), serde_json::Error> {
    let red = Color::new(1.0, 0.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    let map: HashMap<String, f64> = serde_json::from_str(r#"{"red": 1, "green": 0, "blue": 1}"#)?;
    assert_eq!(red + blue, map);
    assert_ne!(red, map);
    Ok(())
}

#[test]
fn multiplication() {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    let yellow = Color::new(1.0, 1.0, 0.0);
    let magenta = Color::new(1.0, 0.0, 1.0);
    let cyan = Color::new(0.0, 1.0, 1.0);

    assert_eq!(yellow * magenta, red);
    assert_eq!(magenta * cyan, blue);
    assert_eq!(yellow * cyan, green);

    let mut clr = yellow;
    clr *= magenta;
    assert_eq!(clr, red);

    let mut clr = magenta;
    clr *= cyan;
    assert_eq!(clr, blue);

    let mut clr = cyan;
    clr *= yellow;
    assert_eq!(clr, green);

    // the copies did not alias the originals
    assert_eq!(yellow, Color::new(1.0, 1.0, 0.0));
    assert_eq!(magenta, Color::new(1.0, 0.0, 1.0));
    assert_eq!(cyan, Color::new(0.0, 1.0, 1.0));
}

#[test]
fn hsv_views_combine_with_colors() {
    let red = ColorHSV::new(0.0, 1.0, 1.0);
    let cyan = ColorHSV::new(0.5, 1.0, 1.0);
    let white = ColorHSV::new(0.0, 0.0, 1.0);

    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    assert_eq!(cyan, white - red);
    assert_eq!(green + blue, cyan);

    // the result keeps the type of the left operand
    let difference: ColorHSV = white - red;
    assert_eq!(difference.get_hsv(), [0.5, 1.0, 1.0]);
    let sum: Color = green + blue;
    assert_eq!(sum.get_rgb(), [0.0, 1.0, 1.0]);
}
