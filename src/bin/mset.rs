use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::info;

use mandelbrot::buffer::format_from_name;
use mandelbrot::config::{
    parse_pair, parse_size, DEFAULT_MAX_ITERATIONS, DEFAULT_SIZE, DEFAULT_WIDTH,
};
use mandelbrot::{
    Complex, Explorer, IntegralPlane, MandelError, MouseButton, Pixel, Renderer, Result, ViewState,
};

fn validate<T: FromStr>(s: &str, err: &str) -> std::result::Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> std::result::Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

/// A replayed double click, written `in:X,Y` or `out:X,Y`.
fn parse_click(s: &str) -> Option<(MouseButton, Pixel)> {
    let index = s.find(':')?;
    let button = match &s[..index] {
        "in" => MouseButton::Left,
        "out" => MouseButton::Right,
        _ => return None,
    };
    let (x, y) = parse_pair::<usize>(&s[index + 1..], ',')?;
    Some((button, Pixel(x, y)))
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LOWERLEFT: &str = "lowerleft";
const WIDTH: &str = "width";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const FORMAT: &str = "format";
const CLICK: &str = "click";

fn args<'a>(
    default_size: &'a str,
    default_width: &'a str,
    default_iterations: &'a str,
    default_threads: &'a str,
) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mset")
        .version("0.1.0")
        .about("Mandelbrot set explorer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(default_size)
                .validator(|s| parse_size(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LOWERLEFT)
                .long(LOWERLEFT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,1.5")
                .validator(|s| validate::<Complex>(&s, "Could not parse corner point"))
                .help("Complex point under the top left pixel, as re,im"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .default_value(default_width)
                .validator(|s| match f64::from_str(&s) {
                    Ok(w) if w.is_finite() && w > 0.0 => Ok(()),
                    _ => Err("Width must be a positive number".to_string()),
                })
                .help("Width of the view on the complex plane"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value(default_iterations)
                .validator(|s| validate::<i64>(&s, "Could not parse iteration count"))
                .help("Iteration cap before any clicks are replayed"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with"),
        )
        .arg(
            Arg::with_name(FORMAT)
                .long(FORMAT)
                .short("f")
                .takes_value(true)
                .validator(|s| format_from_name(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Image format (png, jpg, bmp, ppm); defaults to the output extension"),
        )
        .arg(
            Arg::with_name(CLICK)
                .long(CLICK)
                .short("c")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| match parse_click(&s) {
                    Some(_) => Ok(()),
                    None => Err("Clicks look like in:X,Y or out:X,Y".to_string()),
                })
                .help("Double click to replay before rendering, in order"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| MandelError::Parse(name.to_string()))
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (width, height) = parse_size(matches.value_of(SIZE).unwrap_or_default())?;
    let plane = IntegralPlane(width, height);
    let mut view = ViewState::new(
        value(matches, LOWERLEFT)?,
        value(matches, WIDTH)?,
        value(matches, ITERATIONS)?,
    )?;
    let threads: usize = value(matches, THREADS)?;

    if let Some(clicks) = matches.values_of(CLICK) {
        for (button, pixel) in clicks.filter_map(parse_click) {
            match button {
                MouseButton::Left => view.zoom_in(&pixel, &plane),
                _ => view.zoom_out(&pixel, &plane),
            }
        }
    }
    info!(
        "rendering {}x{} from {} wide {} at {} iterations",
        width,
        height,
        view.lower_left(),
        view.width(),
        view.max_iterations()
    );

    let format = match matches.value_of(FORMAT) {
        Some(name) => Some(format_from_name(name)?),
        None => None,
    };
    let output = matches.value_of(OUTPUT).unwrap_or_default();
    let mut explorer = Explorer::with_view(view, plane, Renderer::new(threads));
    explorer.save_image(output, format)
}

fn main() {
    env_logger::init();

    let default_size = format!("{}x{}", DEFAULT_SIZE.0, DEFAULT_SIZE.1);
    let default_width = DEFAULT_WIDTH.to_string();
    let default_iterations = DEFAULT_MAX_ITERATIONS.to_string();
    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_size, &default_width, &default_iterations, &default_threads);

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        process::exit(1);
    }
}
