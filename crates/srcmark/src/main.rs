// crates/srcmark/src/main.rs

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use decide_marker::MarkerConfig;
use srcmark::config::AppConfig;

fn main() -> Result<()> {
    let matches = Command::new("srcmark")
        .version("0.1.0")
        .about("Maintains a path marker comment at the top of source files")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .help("Files or directories to process (default: current directory)"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .help("Project root for relative labels (default: nearest ancestor with .git)"),
        )
        .arg(
            Arg::new("glob")
                .long("glob")
                .num_args(1)
                .default_value("**/*")
                .help("Only process files whose absolute path matches this glob"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .num_args(1)
                .help("Explicit comment prefix override"),
        )
        .arg(
            Arg::new("no_auto_detect")
                .long("no-auto-detect")
                .action(ArgAction::SetTrue)
                .help("Do not consult the per-language comment table"),
        )
        .arg(
            Arg::new("no_skip_if_present")
                .long("no-skip-if-present")
                .action(ArgAction::SetTrue)
                .help("Rewrite the marker even when the first line already matches"),
        )
        .arg(
            Arg::new("disabled")
                .long("disabled")
                .action(ArgAction::SetTrue)
                .help("Kill switch: decide nothing, change nothing"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print decisions without writing files"),
        )
        .arg(
            Arg::new("watch")
                .long("watch")
                .action(ArgAction::SetTrue)
                .help("Keep running and process files as they change"),
        )
        .arg(
            Arg::new("stdin")
                .long("stdin")
                .action(ArgAction::SetTrue)
                .help("Read one document from stdin and write the result to stdout"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .num_args(1)
                .help("Language id for --stdin input (e.g. python, rust, html)"),
        )
        .arg(
            Arg::new("file_name")
                .long("file-name")
                .num_args(1)
                .help("Display name for --stdin input"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose logging"),
        )
        .get_matches();

    let paths: Vec<PathBuf> = matches
        .get_many::<String>("paths")
        .unwrap_or_default()
        .map(PathBuf::from)
        .collect();

    let mut config = AppConfig {
        paths: if paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            paths
        },
        root_override: matches.get_one::<String>("root").map(PathBuf::from),
        file_glob: matches
            .get_one::<String>("glob")
            .expect("glob has a default")
            .clone(),
        marker: MarkerConfig {
            enabled: !matches.get_flag("disabled"),
            auto_detect_comment: !matches.get_flag("no_auto_detect"),
            comment_prefix: matches.get_one::<String>("prefix").cloned(),
            skip_if_present: !matches.get_flag("no_skip_if_present"),
        },
        dry_run: matches.get_flag("dry_run"),
        verbose: matches.get_flag("verbose"),
    };
    config.apply_env();

    if matches.get_flag("stdin") {
        let language = match matches.get_one::<String>("language") {
            Some(language) => language.clone(),
            None => {
                eprintln!("Error: --stdin requires --language.");
                std::process::exit(1);
            }
        };
        let file_name = matches.get_one::<String>("file_name").map(String::as_str);
        return srcmark::run_stdin(&config, &language, file_name);
    }

    if matches.get_flag("watch") {
        println!("--------------------------------------------------");
        println!("srcmark watch mode");
        println!("Glob filter: {}", config.file_glob);
        if config.dry_run {
            println!("Dry run: decisions are printed, files stay untouched");
        }
        println!("--------------------------------------------------");
        return srcmark::run_watch(&config);
    }

    if config.verbose {
        println!("--------------------------------------------------");
        println!("Glob filter: {}", config.file_glob);
        match &config.root_override {
            Some(root) => println!("Project root: {}", root.display()),
            None => println!("Project root: discovered per file"),
        }
        println!("--------------------------------------------------");
    }

    let summary = srcmark::run(&config)?;
    println!("--------------------------------------------------");
    println!("Processed {}", summary);
    Ok(())
}
