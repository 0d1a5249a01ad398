//! A terminal color-swatch viewer.
//!
//! For every color given as a hashed hexadecimal argument, this demo prints
//! the color's swatch followed by a full sweep around the color wheel: the
//! hue rotated in 30 degree steps at the original saturation and value.
//! Without arguments, it shows a small default palette. The output uses
//! 24-bit ANSI escape sequences and hence needs a truecolor terminal.

use std::str::FromStr;

use tinge::{Float, Hsv, Rgb};

const DEFAULT_PALETTE: [&str; 4] = ["#dff9fb", "#e84118", "#44bd32", "#0097e6"];

fn print_row(color: Rgb) {
    print!("{color}  ");

    let Hsv { h, s, v } = color.to_hsv();
    for step in 0..12 {
        let rotated = Hsv::new(h + step as Float * 30.0, s, v);
        let [r, g, b] = rotated.to_rgb().to_24bit();
        print!("\x1b[48;2;{r};{g};{b}m  ");
    }

    println!("\x1b[0m");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let specs: Vec<&str> = if args.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for spec in specs {
        match Rgb::from_str(spec) {
            Ok(color) => print_row(color),
            Err(error) => {
                eprintln!("unable to parse \"{spec}\": {error}");
                std::process::exit(1);
            }
        }
    }
}
