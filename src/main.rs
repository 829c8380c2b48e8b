//! rtfsig command line interface
//!
//! Examines a single RTF document, logs what was found and optionally writes
//! YARA rules for the unique strings.

use std::fs;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rtfsig::report::ReportFormat;
use rtfsig::utils::{init_logging, LogLevel};
use rtfsig::{
    generate_rules, AnalysisReport, Config, Error, ReportFormatter, RtfAnalyzer, VERSION,
};
use tracing::{debug, error, info};

fn main() {
    let matches = build_cli().get_matches();

    let level = LogLevel::from_verbose(matches.get_flag("verbose"));
    if let Err(e) = init_logging(level) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if let Err(code) = run(&matches) {
        process::exit(code);
    }
}

fn run(matches: &ArgMatches) -> Result<(), i32> {
    let rtf_file = matches
        .get_one::<String>("rtf-file")
        .expect("rtf-file is a required argument");

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(path).map_err(|e| {
            error!("❌ Failed to load config file: {}", e);
            1
        })?,
        None => Config::default(),
    };
    if matches.get_flag("exclude-risky") {
        config.analysis.include_risky = false;
    }

    let report_format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<ReportFormat>())
        .transpose()
        .map_err(|e| {
            error!("❌ {}", e);
            1
        })?;

    info!("Starting to parse file {}", rtf_file);
    let analyzer = match RtfAnalyzer::from_file(rtf_file, &config.analysis) {
        Ok(analyzer) => analyzer,
        Err(Error::FileNotFound(_)) | Err(Error::Io(_)) => {
            error!("Couldn't open file {}", rtf_file);
            return Err(1);
        }
        Err(e) => {
            error!("❌ Analysis failed for {}: {}", rtf_file, e);
            return Err(1);
        }
    };
    let findings = analyzer.findings();

    for observation in &findings.observations {
        info!("{}", observation.description());
    }

    if !findings.loose_strings.is_empty() {
        info!(
            "Interesting strings (higher chance of FP): {}",
            join(&findings.loose_strings)
        );
    }
    if !findings.strict_strings.is_empty() {
        debug!(
            "Interesting strings (lower chance of FP): {}",
            join(&findings.strict_strings)
        );
    }

    let rules = generate_rules(findings, &config.rules).map_err(|e| {
        error!("❌ Failed to generate rules: {}", e);
        1
    })?;

    if rules.is_empty() {
        info!("Did not find anything unique to signature, check the document for unique parts which have been missed");
    } else {
        info!("Found some unique strings!  Consider using vtgrep or deploying Yara rules");
        if let Some(yara_path) = matches.get_one::<String>("yara") {
            save_yara_rules(yara_path, &rules).map_err(|e| {
                error!("❌ Failed to write Yara rules to {}: {}", yara_path, e);
                1
            })?;
            info!("📋 Yara rules written to {}", yara_path);
        }
    }

    if let Some(format) = report_format {
        let report = AnalysisReport::new(rtf_file.as_str(), &analyzer);
        let output = ReportFormatter::format(&report, format).map_err(|e| {
            error!("❌ Failed to format report: {}", e);
            1
        })?;
        println!("{}", output);
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("rtfsig")
        .version(VERSION)
        .about(format!(
            "Examine RTF documents for artefacts that can be used to hunt similar files.\n\n\
             This is rtfsig version {}.",
            VERSION
        ))
        .arg(Arg::new("rtf-file")
            .short('f')
            .long("rtf-file")
            .value_name("FILE")
            .help("RTF file to analyse")
            .required(true))

        .arg(Arg::new("exclude-risky")
            .short('x')
            .long("exclude-risky")
            .action(ArgAction::SetTrue)
            .help("Exclude riskier items, e.g. the information group (default: all items included)"))

        .arg(Arg::new("yara")
            .short('y')
            .long("yara")
            .value_name("FILE")
            .help("Write Yara rules to file (default: not written)"))

        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Configuration file (JSON/YAML)"))

        .arg(Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .value_parser(["text", "json"])
            .help("Print an analysis report to stdout"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Print more debugging messages to screen"))
}

fn join<'a>(strings: impl IntoIterator<Item = &'a String>) -> String {
    strings
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn save_yara_rules(path: &str, rules: &[String]) -> std::io::Result<()> {
    fs::write(path, rules.concat())
}
