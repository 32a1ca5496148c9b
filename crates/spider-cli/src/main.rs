//! Spider diagram reasoning CLI.
//!
//! Provides the `spider` binary for working with spider diagrams stored as
//! JSON: listing the inference rules, enumerating zones, inspecting
//! sub-diagram indices and applying rules step by step.
//!
//! Reads configuration from environment variables:
//! - `SPIDER_LOCALE`: locale for rule display names (default: "en")
//!
//! Logs go to stderr; stdout carries only command output.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use spider_core::zones::all_zones_for_contours;
use spider_core::{SpiderDiagram, SubDiagramIndex};
use spider_reasoning::{ApplyStyle, Proof, RuleArg, RuleRegistry};

/// Spider diagram reasoning tools.
#[derive(Parser)]
#[command(name = "spider", about = "Spider diagram reasoning tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the available inference rules.
    Rules,

    /// Print every zone induced by the given contours.
    Zones {
        /// Contour names.
        contours: Vec<String>,
    },

    /// List the sub-diagrams of a diagram with their indices.
    Inspect {
        /// Path to a JSON diagram, or "-" for stdin.
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Apply inference rules to a diagram and print the resulting goal.
    Apply {
        /// Path to a JSON diagram, or "-" for stdin.
        #[arg(short, long)]
        input: PathBuf,

        /// Rule application as RULE@INDEX. Repeat to apply several in order.
        #[arg(short, long = "step", required = true, value_parser = parse_step)]
        steps: Vec<(String, usize)>,

        /// Apply the rules backwards.
        #[arg(long)]
        backward: bool,

        /// Print every intermediate goal instead of only the last one.
        #[arg(long)]
        all_goals: bool,
    },
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let locale = std::env::var("SPIDER_LOCALE").unwrap_or_else(|_| "en".to_string());
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Rules => run_rules(&locale),
        Commands::Zones { contours } => run_zones(&contours),
        Commands::Inspect { input } => run_inspect(&input),
        Commands::Apply {
            input,
            steps,
            backward,
            all_goals,
        } => {
            let style = if backward {
                ApplyStyle::Backward
            } else {
                ApplyStyle::Forward
            };
            run_apply(&input, &steps, style, all_goals)
        }
    };
    process::exit(exit_code);
}

fn run_rules(locale: &str) -> i32 {
    let registry = RuleRegistry::with_builtin_rules();
    for rule in registry.iter() {
        let selection = match rule.instructions() {
            Ok(selection) => selection.prompt().to_string(),
            Err(e) => format!("({})", e),
        };
        println!(
            "{}\t{}\t{}\t{}",
            rule.name(),
            rule.display_name(locale),
            rule.argument_kind(),
            selection
        );
    }
    0
}

fn run_zones(contours: &[String]) -> i32 {
    let zones = all_zones_for_contours(contours);
    tracing::debug!("{} contour(s) induce {} zone(s)", contours.len(), zones.zones_count());
    for zone in zones.iter() {
        println!("{}", zone);
    }
    0
}

/// Execute the inspect subcommand.
///
/// Returns exit code: 0 = success, 2 = invalid diagram, 3 = I/O error.
fn run_inspect(input: &Path) -> i32 {
    let diagram = match load_diagram(input) {
        Ok(d) => d,
        Err(code) => return code,
    };

    for (index, node) in diagram.subdiagrams() {
        let detail = match node {
            SpiderDiagram::Null => String::new(),
            SpiderDiagram::Primary(psd) => format!(
                " spiders={} shaded={}",
                psd.spiders_count(),
                psd.shaded_zones_count()
            ),
            SpiderDiagram::Compound(csd) => format!(" {}", csd.operator()),
        };
        println!("{}\t{}{}", index, node.kind_name(), detail);
    }
    0
}

/// Execute the apply subcommand.
///
/// Returns exit code: 0 = success, 1 = rule application failed,
/// 2 = invalid diagram, 3 = I/O error.
fn run_apply(input: &Path, steps: &[(String, usize)], style: ApplyStyle, all_goals: bool) -> i32 {
    let goal = match load_diagram(input) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let registry = RuleRegistry::with_builtin_rules();
    let mut proof = Proof::new(goal);

    for (rule, index) in steps {
        tracing::info!("applying {} at sub-diagram {}", rule, index);
        let arg = RuleArg::SubDiagram {
            index: SubDiagramIndex(*index),
        };
        if let Err(e) = proof.apply_rule(&registry, rule, arg, style).map(|_| ()) {
            eprintln!("Error: step {} failed: {}", proof.len(), e);
            return 1;
        }
    }
    if proof.is_finished() {
        tracing::info!("goal reduced to the null diagram after {} step(s)", proof.steps().len());
    }

    let printed: Vec<&Arc<SpiderDiagram>> = if all_goals {
        proof.goals().collect()
    } else {
        vec![proof.current_goal()]
    };
    for goal in printed {
        match serde_json::to_string(goal.as_ref()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize goal: {}", e);
                return 3;
            }
        }
    }
    0
}

/// Reads and validates a JSON diagram. On failure, reports the error and
/// returns the exit code to use.
fn load_diagram(input: &Path) -> Result<Arc<SpiderDiagram>, i32> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(input)
    };
    let text = text.map_err(|e| {
        eprintln!("Error: failed to read '{}': {}", input.display(), e);
        3
    })?;

    let diagram: SpiderDiagram = serde_json::from_str(&text).map_err(|e| {
        eprintln!("Error: invalid diagram in '{}': {}", input.display(), e);
        2
    })?;
    tracing::debug!("loaded diagram with {} sub-diagram(s)", diagram.subdiagram_count());
    Ok(Arc::new(diagram))
}

/// Parse a `RULE@INDEX` step.
fn parse_step(s: &str) -> Result<(String, usize), String> {
    let (rule, index) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("invalid step '{}', expected RULE@INDEX", s))?;
    let index = index
        .parse::<usize>()
        .map_err(|e| format!("invalid sub-diagram index in '{}': {}", s, e))?;
    Ok((rule.to_string(), index))
}
