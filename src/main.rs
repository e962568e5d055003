//! # omexml CLI
//!
//! A command-line tool for inspecting, validating, and rewriting OME-XML
//! metadata documents.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a document
//! omexml info sample.ome.xml
//!
//! # Validate a document
//! omexml validate sample.ome.xml
//!
//! # Generate a small synthetic document
//! omexml demo demo.ome.xml
//!
//! # Parse and re-serialize
//! omexml roundtrip input.ome.xml output.ome.xml
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use omexml::prelude::*;
use omexml::primitives::{LaserType, UnitsLength, UnitsTemperature, UnitsTime};
use omexml::store::OmeXmlMetadata;
use omexml::validator::validate_store;

/// omexml - OME-XML Metadata Inspector
#[derive(Parser)]
#[command(name = "omexml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a summary of an OME-XML document
    Info {
        /// Input OME-XML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate an OME-XML document
    Validate {
        /// Input OME-XML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate a small synthetic document for testing
    Demo {
        /// Output OME-XML file path
        #[arg(value_name = "OUTPUT", default_value = "demo.ome.xml")]
        output: PathBuf,
    },

    /// Parse a document and re-serialize it in canonical form
    Roundtrip {
        /// Input OME-XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output OME-XML file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Info { file } => run_info(file),
        Commands::Validate { file } => run_validate(file),
        Commands::Demo { output } => run_demo(output),
        Commands::Roundtrip { input, output } => run_roundtrip(input, output),
    }
}

fn load_store(path: &PathBuf) -> Result<OmeXmlMetadata> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    OmeXmlMetadata::from_xml(&xml)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn run_info(file: PathBuf) -> Result<()> {
    let store = load_store(&file)?;

    println!("{}", heading(&format!("OME document: {}", file.display())));
    if let Some(uuid) = store.uuid() {
        println!("  UUID:     {uuid}");
    }
    if let Some(creator) = store.creator() {
        println!("  Creator:  {creator}");
    }
    println!("  Images:        {}", store.image_count());
    println!("  Instruments:   {}", store.instrument_count());
    println!("  ROIs:          {}", store.roi_count());
    println!("  Plates:        {}", store.plate_count());
    println!("  Screens:       {}", store.screen_count());
    println!("  Projects:      {}", store.project_count());
    println!("  Datasets:      {}", store.dataset_count());
    println!("  Experimenters: {}", store.experimenter_count());
    println!("  Annotations:   {}", store.annotation_count());

    for index in 0..store.image_count() {
        let name = store.image_name(index).unwrap_or("<unnamed>");
        let (x, y, z, c, t) = (
            store.pixels_size_x(index).unwrap_or(0),
            store.pixels_size_y(index).unwrap_or(0),
            store.pixels_size_z(index).unwrap_or(0),
            store.pixels_size_c(index).unwrap_or(0),
            store.pixels_size_t(index).unwrap_or(0),
        );
        let pixel_type = store
            .pixels_type(index)
            .map(|p| p.token())
            .unwrap_or("?");
        println!("  Image #{index}: {name} [{x} x {y} x {z}, {c} channel(s), {t} timepoint(s), {pixel_type}]");
    }

    let resolution = store.resolve_references();
    println!("  References: {resolution}");
    Ok(())
}

fn run_validate(file: PathBuf) -> Result<()> {
    let store = load_store(&file)?;
    let report = validate_store(&store);

    println!("{}", heading(&format!("Validating {}", file.display())));
    println!("{report}");

    if report.passed() {
        println!("{}", success("document is valid"));
        Ok(())
    } else {
        anyhow::bail!("validation failed with {} error(s)", report.failure_count());
    }
}

fn run_demo(output: PathBuf) -> Result<()> {
    info!("building demo document");
    let mut store = OmeXmlMetadata::new();
    store.set_uuid(new_uuid_urn());
    store.set_creator(format!("omexml {}", env!("CARGO_PKG_VERSION")));

    store.set_instrument_id("Instrument:0", 0);
    store.set_microscope_model("Axio Observer", 0);
    store.set_laser_id("LightSource:0:0", 0, 0);
    store.set_laser_type(LaserType::SolidState, 0, 0);
    store.set_laser_wavelength(Length::new(488.0, UnitsLength::Nanometer), 0, 0);
    store.set_detector_id("Detector:0:0", 0, 0);

    store.set_image_id("Image:0", 0);
    store.set_image_name("demo_stack", 0);
    store.set_image_instrument_ref("Instrument:0", 0);
    store.set_pixels_id("Pixels:0", 0);
    store.set_pixels_size_x(256, 0);
    store.set_pixels_size_y(256, 0);
    store.set_pixels_size_z(5, 0);
    store.set_pixels_size_c(2, 0);
    store.set_pixels_physical_size_x(Length::micrometers(0.325), 0);
    store.set_pixels_physical_size_y(Length::micrometers(0.325), 0);
    for channel in 0..2 {
        store.set_channel_id(&lsid("Channel", format!("0:{channel}")), 0, channel);
        store.set_channel_light_source_settings_id("LightSource:0:0", 0, channel);
        store.set_channel_detector_settings_id("Detector:0:0", 0, channel);
    }
    store.set_channel_name("DAPI", 0, 0);
    store.set_channel_name("GFP", 0, 1);
    for plane in 0..5 {
        store.set_plane_the_z(plane as u32, 0, plane);
        store.set_plane_exposure_time(Time::new(80.0, UnitsTime::Millisecond), 0, plane);
    }
    store.set_imaging_environment_temperature(
        Temperature::new(37.0, UnitsTemperature::Celsius),
        0,
    );

    store.set_roi_id("ROI:0", 0);
    store.set_rectangle_id("Shape:0:0", 0, 0);
    store.set_rectangle_x(64.0, 0, 0);
    store.set_rectangle_y(64.0, 0, 0);
    store.set_rectangle_width(128.0, 0, 0);
    store.set_rectangle_height(128.0, 0, 0);
    store.set_image_roi_ref("ROI:0", 0, 0);

    store.set_comment_annotation_id("Annotation:0", 0);
    store.set_comment_annotation_value("generated by omexml demo", 0);
    store.set_image_annotation_ref("Annotation:0", 0, 0);

    let resolution = store.resolve_references();
    info!("demo document references: {resolution}");

    let xml = store.to_xml()?;
    fs::write(&output, xml)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{}", success(&format!("wrote {}", output.display())));
    Ok(())
}

fn run_roundtrip(input: PathBuf, output: PathBuf) -> Result<()> {
    let store = load_store(&input)?;
    let resolution = store.resolve_references();
    info!(
        "parsed {}: {} images, references: {}",
        input.display(),
        store.image_count(),
        resolution
    );

    let xml = store.to_xml()?;
    fs::write(&output, xml)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("{}", success(&format!("rewrote {} -> {}", input.display(), output.display())));
    if !resolution.is_clean() {
        println!("note: {resolution}");
    }
    Ok(())
}

#[cfg(feature = "colorized_output")]
fn heading(text: &str) -> String {
    console::style(text).bold().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn heading(text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "colorized_output")]
fn success(text: &str) -> String {
    console::style(text).green().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn success(text: &str) -> String {
    text.to_string()
}
