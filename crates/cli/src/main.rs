use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexboard::{
    board_to_svg, timed, Board, BoardRenderer, EdgeStyle, PlayerColor, Point2,
    RenderConfig, TileDirection, TilePoint,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for laying out hex boards the same way the browser does.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexboard")]
struct Opt {
    /// Path to a config file that overrides render options (breakpoint and
    /// stroke widths). Supported formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Path to a board JSON file, with a radius and a list of roads. If not
    /// given, an empty board of `--radius` is used
    #[structopt(short, long)]
    board: Option<PathBuf>,

    /// Radius of the empty board to lay out. Ignored if `--board` is given
    #[structopt(short, long, default_value = "2")]
    radius: u16,

    /// Tile size in pixels: the distance from a tile's center to any of its
    /// vertices
    #[structopt(short, long, default_value = "60")]
    size: f64,

    /// Width of the viewport being rendered for, in CSS pixels. This picks
    /// the road strip thickness
    #[structopt(short = "w", long, default_value = "1024")]
    viewport_width: f64,

    /// If given, the laid out board will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the board in. Supported formats:
    ///
    /// cfg - The full render config used, in TOML format
    ///
    /// css - Inline CSS styles for every edge of the board, as JSON
    ///
    /// json - The board itself, which can be loaded again with `--board`
    ///
    /// svg - 2D rendering of the board
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the full render config in a human-readable file
    Cfg,
    /// Export the placement of every edge strip as CSS
    Css,
    /// Export the board in JSON, which can be loaded again later
    Json,
    /// Render the board as a 2D SVG
    Svg,
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Cfg => "config.toml",
            Self::Css => "edges.json",
            Self::Json => "board.json",
            Self::Svg => "board.svg",
        }
    }
}

/// One entry in the CSS output
#[derive(Debug, Serialize)]
struct EdgeEntry {
    tile: TilePoint,
    direction: TileDirection,
    /// Color of the road on this edge, if there is one
    road: Option<PlayerColor>,
    style: EdgeStyle,
}

fn load_config(config_path: &Path) -> anyhow::Result<RenderConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn load_board(board_path: &Path) -> anyhow::Result<Board> {
    let input = fs::read_to_string(board_path)
        .with_context(|| format!("error opening board file {:?}", board_path))?;
    let board = Board::from_json(&input)
        .with_context(|| format!("invalid board in {:?}", board_path))?;
    info!("Loaded board from {:?}", board_path);
    Ok(board)
}

/// Generate the CSS style for every edge on the board. The board is placed
/// so that its top-left corner is at `(0, 0)`.
fn edge_styles(
    board: &Board,
    renderer: &BoardRenderer,
    size: f64,
    viewport_width: f64,
) -> anyhow::Result<Vec<EdgeEntry>> {
    let radius = f64::from(board.radius);
    let center = Point2::new(
        (radius + 0.5) * BoardRenderer::tile_width(size),
        radius * 1.5 * size + BoardRenderer::tile_height(size) / 2.0,
    );
    let roads: Vec<_> = board
        .roads
        .iter()
        .map(|road| {
            (road.edge().canonical(|tile| board.contains(tile)), road.color)
        })
        .collect();

    board
        .edges()
        .into_iter()
        .map(|edge| -> anyhow::Result<EdgeEntry> {
            let style = renderer.edge_style(
                edge.tile,
                edge.direction,
                size,
                center,
                viewport_width,
            )?;
            let road = roads
                .iter()
                .find(|(road_edge, _)| *road_edge == edge)
                .map(|(_, color)| *color);
            Ok(EdgeEntry {
                tile: edge.tile,
                direction: edge.direction,
                road,
                style,
            })
        })
        .collect()
}

/// Generate an output form of the board in the given format.
fn gen_output(
    opt: &Opt,
    output_dir: &Path,
    output_format: OutputFormat,
    board: &Board,
    renderer: &BoardRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        opt: &Opt,
        output_format: OutputFormat,
        board: &Board,
        renderer: &BoardRenderer,
    ) -> anyhow::Result<Vec<u8>> {
        Ok(match output_format {
            OutputFormat::Cfg => {
                // Serialize just the render config via toml
                toml::to_string_pretty(renderer.render_config())
                    .context("error serializing config")?
                    .into_bytes()
            }
            OutputFormat::Css => {
                let styles =
                    edge_styles(board, renderer, opt.size, opt.viewport_width)?;
                serde_json::to_vec_pretty(&styles)?
            }
            OutputFormat::Json => board.to_json().into_bytes(),
            OutputFormat::Svg => {
                board_to_svg(board, renderer, opt.size, opt.viewport_width)?
                    .to_string()
                    .into_bytes()
            }
        })
    }

    let output_file_path = output_dir.join(output_format.file_name());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(opt, output_format, board, renderer)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let render_config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => RenderConfig::default(),
    };
    let renderer =
        BoardRenderer::new(render_config).context("invalid render config")?;

    let board = match &opt.board {
        Some(board_path) => load_board(board_path)?,
        None => Board::new(opt.radius),
    };
    info!(
        "Board has {} tiles, {} edges and {} roads",
        board.tiles().len(),
        board.edges().len(),
        board.roads.len()
    );

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = &opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(output_dir)?;

        for output_format in opt.output_formats.iter().copied() {
            gen_output(&opt, output_dir, output_format, &board, &renderer)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
