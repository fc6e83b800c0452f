extern crate d20kit as d20;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;

use clap::{App, Arg, ArgMatches};
use slog::Drain;

use d20::animation::Animator;
use d20::render::Texture;
use d20::solid::Mesh;
use d20::types::Rgba;
use d20::Spec;

fn main() {
    let matches = app().get_matches();

    // Set up logger.
    let drain = {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        slog_async::Async::new(drain).build().fuse()
    };
    let root_log = slog::Logger::root(drain, o!("d20kit_version" => env!("CARGO_PKG_VERSION")));

    let exit_code = match run(&matches, &root_log) {
        Ok(()) => 0,
        Err(error) => {
            crit!(root_log, "Giving up"; "error" => format!("{}", error));
            1
        }
    };
    // Let the async drain flush before we go.
    drop(root_log);
    std::process::exit(exit_code);
}

fn app() -> App<'static, 'static> {
    App::new("d20kit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders a spinning, textured icosahedron into a sprite sheet")
        .arg(
            Arg::with_name("TEXTURE")
                .help("Square image to stamp onto each face; defaults to flat grey")
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("PATH")
                .default_value("d20.png")
                .help("Where to write the sprite sheet"),
        )
        .arg(
            Arg::with_name("spec")
                .long("spec")
                .value_name("JSON")
                .takes_value(true)
                .help("Load settings from a JSON file; missing fields use the defaults"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("N")
                .takes_value(true)
                .help("Override the random seed"),
        )
        .arg(
            Arg::with_name("frames")
                .long("frames")
                .value_name("N")
                .takes_value(true)
                .help("Override the number of frames in one full turn"),
        )
        .arg(
            Arg::with_name("frame")
                .long("frame")
                .value_name("INDEX")
                .takes_value(true)
                .help("Only render this one frame of the animation"),
        )
        .arg(
            Arg::with_name("dump-spec")
                .long("dump-spec")
                .help("Print the effective settings as JSON and exit"),
        )
}

// Parse a numeric argument, if it was given at all.
fn numeric_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> d20::Result<Option<T>> {
    if !matches.is_present(name) {
        return Ok(None);
    }
    value_t!(matches, name, T)
        .map(Some)
        .map_err(|e| d20::Error::InvalidSpec(e.message))
}

/// The example spec (or one loaded from `--spec`) with
/// any command-line overrides applied, validated.
fn spec_from_args(matches: &ArgMatches) -> d20::Result<Spec> {
    let mut spec = match matches.value_of("spec") {
        Some(path) => Spec::load(path)?,
        None => Spec::new_example(),
    };
    if let Some(seed) = numeric_arg(matches, "seed")? {
        spec.seed = seed;
    }
    if let Some(frame_count) = numeric_arg(matches, "frames")? {
        spec.frame_count = frame_count;
    }
    spec.validate()?;
    Ok(spec)
}

// The one frame asked for by `--frame`, if any.
fn single_frame(matches: &ArgMatches, spec: &Spec) -> d20::Result<Option<usize>> {
    match numeric_arg::<usize>(matches, "frame")? {
        Some(index) if index >= spec.frame_count => Err(d20::Error::InvalidSpec(format!(
            "no frame {} in an animation of {} frames",
            index, spec.frame_count
        ))),
        other => Ok(other),
    }
}

fn run(matches: &ArgMatches, log: &slog::Logger) -> d20::Result<()> {
    let spec = spec_from_args(matches)?;

    if matches.is_present("dump-spec") {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let texture = match matches.value_of("TEXTURE") {
        Some(path) => {
            let texture = d20::image_io::load_texture(path)?;
            info!(log, "Loaded texture"; "path" => path, "size" => texture.size());
            texture
        }
        None => {
            warn!(log, "No texture given; using flat grey");
            Texture::flat(64, Rgba::new(0.5, 0.5, 0.5, 1.0))?
        }
    };

    let mesh = Mesh::generate(&spec, log)?;
    let animator = Animator::new(&spec, texture, log)?;
    // `default_value` guarantees this is present.
    let output = matches.value_of("output").unwrap_or("d20.png");

    if let Some(index) = single_frame(matches, &spec)? {
        let frame = animator.render_frame(&mesh, index)?;
        d20::image_io::save_buffer(&frame, output)?;
        info!(log, "Wrote single frame"; "frame" => index, "path" => output);
    } else {
        let sheet = animator.assemble(&mesh)?;
        d20::image_io::save_buffer(sheet.buffer(), output)?;
        info!(log, "Wrote sprite sheet"; "frames" => sheet.frame_count(), "path" => output);
    }
    Ok(())
}
