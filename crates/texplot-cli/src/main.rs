use indexmap::IndexSet;
use std::io::{Read, Write};
use std::path::Path;
use texplot::rewrite::{font_size_preamble, rewrite_markup};
use texplot::{
    Config, FigureRef, MarkupFormat, PgfSaveOptions, SaveOptions, StaticBackend, StaticFigure,
    TextEncoding, TickLabelOptions, TikzSaveOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Texplot(texplot::Error),
    Save(texplot::SaveError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Texplot(err) => write!(f, "{err}"),
            CliError::Save(err) => write!(f, "save failed: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<texplot::Error> for CliError {
    fn from(value: texplot::Error) -> Self {
        Self::Texplot(value)
    }
}

impl From<texplot::SaveError> for CliError {
    fn from(value: texplot::SaveError) -> Self {
        Self::Save(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Rewrite,
    Ticks,
    Preamble,
    Save,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    in_place: bool,
    format: Option<MarkupFormat>,
    encoding: Option<String>,
    config: Option<String>,
    scale: bool,
    strict_labels: bool,
    cdot: bool,
    exp_cutoff: Option<(i32, i32)>,
    precision: Option<u32>,
    extra: Vec<String>,
    markup: Option<String>,
    svg: Option<String>,
    no_group_sep: bool,
}

fn usage() -> &'static str {
    "texplot\n\
\n\
USAGE:\n\
  texplot [rewrite] [--format tex|pgf] [--encoding <label>] [--config <json>] [--out <path>|--in-place] [<path>|-]\n\
  texplot ticks [--scale] [--strict-labels] [--cdot] [--exp-cutoff <lo>:<hi>] [--precision <n>] [--extra <option>]...\n\
  texplot preamble [--config <json>]\n\
  texplot save --markup <path> [--svg <path>] [--format tex|pgf] [--encoding <label>] [--config <json>] [--no-group-sep]\n\
               [--scale] [--strict-labels] [--cdot] [--exp-cutoff <lo>:<hi>] [--precision <n>] [--extra <option>]... <basename>\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - rewrite infers the format from the file extension; stdin defaults to pgf.\n\
  - tex output gets group-plot separators; pgf output gets line widths and font sizes\n\
    divided by \\plotscale.\n\
  - save writes <basename>.tex or <basename>.pgf plus <basename>.pdf (rendered from --svg).\n\
  - Set RUST_LOG=debug to see what each rewrite pass matched.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "rewrite" => args.command = Command::Rewrite,
            "ticks" => args.command = Command::Ticks,
            "preamble" => args.command = Command::Preamble,
            "save" => args.command = Command::Save,
            "--in-place" => args.in_place = true,
            "--scale" => args.scale = true,
            "--strict-labels" => args.strict_labels = true,
            "--cdot" => args.cdot = true,
            "--no-group-sep" => args.no_group_sep = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = Some(
                    fmt.parse::<MarkupFormat>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--exp-cutoff" => {
                let Some(range) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.exp_cutoff = Some(parse_cutoff(range).ok_or(CliError::Usage(usage()))?);
            }
            "--precision" => {
                let Some(p) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.precision = Some(p.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--extra" => {
                let Some(opt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.extra.push(opt.clone());
            }
            "--encoding" | "--config" | "--out" | "--markup" | "--svg" => {
                let Some(value) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let slot = match a.as_str() {
                    "--encoding" => &mut args.encoding,
                    "--config" => &mut args.config,
                    "--out" => &mut args.out,
                    "--markup" => &mut args.markup,
                    _ => &mut args.svg,
                };
                *slot = Some(value.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.in_place && (args.out.is_some() || matches!(args.input.as_deref(), None | Some("-")))
    {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn parse_cutoff(range: &str) -> Option<(i32, i32)> {
    let (lo, hi) = range.split_once(':')?;
    Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

fn read_input(input: Option<&str>, encoding: TextEncoding) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(encoding.decode(&buf)?)
        }
        Some(path) => Ok(encoding.read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>, encoding: TextEncoding) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            std::io::stdout()
                .lock()
                .write_all(&encoding.encode(text)?)?;
            Ok(())
        }
        Some(path) => {
            encoding.write(path, text)?;
            Ok(())
        }
    }
}

fn infer_format(path: Option<&str>) -> Option<MarkupFormat> {
    let ext = Path::new(path?).extension()?.to_str()?;
    MarkupFormat::from_extension(ext)
}

fn tick_options(args: &Args) -> TickLabelOptions {
    let defaults = TickLabelOptions::default();
    TickLabelOptions {
        scale: args.scale,
        strict_labels: args.strict_labels,
        times_sci_notation: !args.cdot,
        exp_cutoff: args.exp_cutoff.unwrap_or(defaults.exp_cutoff),
        precision: args.precision.unwrap_or(defaults.precision),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match args.config.as_deref() {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let encoding = args
        .encoding
        .as_deref()
        .map(TextEncoding::from_label)
        .transpose()?
        .unwrap_or_default();

    match args.command {
        Command::Rewrite => {
            let text = read_input(args.input.as_deref(), encoding)?;
            let format = args
                .format
                .or_else(|| infer_format(args.input.as_deref()))
                .unwrap_or_default();
            tracing::debug!(%format, "rewriting markup");
            let rewritten = rewrite_markup(&text, format, &config.macros);
            let out = if args.in_place {
                args.input.as_deref()
            } else {
                args.out.as_deref()
            };
            write_text(&rewritten, out, encoding)
        }
        Command::Ticks => {
            let extra = args.extra.iter().cloned().collect::<IndexSet<_>>();
            let mut stdout = std::io::stdout().lock();
            for directive in tick_options(&args).augment(&extra) {
                writeln!(stdout, "{directive}")?;
            }
            Ok(())
        }
        Command::Preamble => {
            print!("{}", font_size_preamble(&config.macros));
            Ok(())
        }
        Command::Save => {
            let (Some(markup), Some(basename)) = (args.markup.as_deref(), args.input.as_deref())
            else {
                return Err(CliError::Usage(usage()));
            };
            let format = args
                .format
                .or_else(|| infer_format(Some(markup)))
                .unwrap_or_default();

            let figure = StaticFigure::load(
                Path::new(markup),
                format,
                args.svg.as_deref().map(Path::new),
                encoding,
            )?;
            let mut backend = StaticBackend::new();
            backend.add_figure(figure);

            let options = match format {
                MarkupFormat::Tikz => {
                    let mut opts = TikzSaveOptions {
                        encoding,
                        ticks: tick_options(&args),
                        group_separators: !args.no_group_sep,
                        config,
                        ..TikzSaveOptions::default()
                    };
                    opts.export.extra = args.extra.iter().cloned().collect();
                    SaveOptions::Tikz(opts)
                }
                MarkupFormat::Pgf => SaveOptions::Pgf(PgfSaveOptions { encoding, config }),
            };

            let saved = texplot::save(&backend, basename, FigureRef::Active, &options)?;
            println!("{}", saved.markup.display());
            println!("{}", saved.pdf.display());
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
