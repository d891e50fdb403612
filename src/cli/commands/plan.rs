//! Plan command handler

use logger::{error, info};

use degree_planner::config::Config;
use degree_planner::core::{
    error::PlanError,
    loader::parse_catalog_json,
    models::{DegreePlan, PlannedSemester},
    planner::{PlanRequest, Planner},
    scheduler::Season,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parameters for the plan command, resolved from CLI flags and config.
pub struct PlanArgs<'a> {
    /// Path to the catalog JSON file
    pub catalog: &'a Path,
    /// Student id to plan for
    pub student: &'a str,
    /// Season of the first planned semester, if given on the CLI
    pub start_season: Option<&'a str>,
    /// Year of the first planned semester
    pub start_year: i32,
    /// Courses-per-semester cap, if given on the CLI
    pub capacity: Option<u32>,
    /// Explicit output path for the JSON export
    pub output: Option<&'a Path>,
    /// Export to the config `out_dir` even without an explicit output path
    pub export: bool,
}

/// Run the plan command.
///
/// Loads the catalog, generates a plan for the requested student, prints it,
/// and optionally exports it as JSON. CLI flags win over config defaults for
/// the start season and capacity.
pub fn run(args: &PlanArgs<'_>, config: &Config, verbose: bool) {
    if let Err(err) = generate_single(args, config, verbose) {
        error!("Plan generation failed for '{}': {err}", args.student);
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn generate_single(args: &PlanArgs<'_>, config: &Config, verbose: bool) -> Result<(), String> {
    let catalog = parse_catalog_json(args.catalog).map_err(|e| {
        error!("Failed to load catalog {}: {e}", args.catalog.display());
        format!("✗ Failed to load {}: {e}", args.catalog.display())
    })?;

    if verbose {
        println!(
            "✓ Catalog loaded successfully from: {}",
            args.catalog.display()
        );
    } else {
        info!("Catalog loaded: {}", args.catalog.display());
    }

    let season_str = args
        .start_season
        .map_or_else(|| config.planning.start_season.clone(), ToString::to_string);
    let start_season =
        Season::from_str(&season_str).map_err(|e| format!("✗ Invalid start season: {e}"))?;

    let capacity = args.capacity.unwrap_or(config.planning.capacity);
    if capacity == 0 {
        return Err("✗ Capacity must be at least 1".to_string());
    }

    let request = PlanRequest {
        student_id: args.student.to_string(),
        start_season,
        start_year: args.start_year,
        capacity: usize::try_from(capacity).map_err(|_| "✗ Capacity is too large".to_string())?,
    };

    let planner = Planner::new(&catalog);
    let plan = match planner.generate_plan(&request) {
        Ok(plan) => plan,
        Err(PlanError::Unresolvable {
            semesters,
            unscheduled,
        }) => {
            // A partial schedule is diagnostic output only; it is never written out.
            print_partial(&semesters, &unscheduled);
            return Err(format!(
                "✗ Could not schedule {} course(s); no plan was saved",
                unscheduled.len()
            ));
        }
        Err(e) => return Err(format!("✗ {e}")),
    };

    print_plan(&plan);

    if args.output.is_some() || args.export {
        let output_path = resolve_output_path(args.output, config, args.student)?;
        export_plan_json(&plan, &output_path)?;
        println!("✓ Plan exported to: {}", output_path.display());
        info!("Exported degree plan to: {}", output_path.display());
    }

    Ok(())
}

fn print_plan(plan: &DegreePlan) {
    println!("\n=== Degree Plan for {} ===\n", plan.student_id);
    for semester in &plan.semesters {
        println!("{}. {}: {}", semester.order, semester.name, semester.courses.join(", "));
    }
    println!(
        "\n{} course(s) across {} semester(s)",
        plan.course_count(),
        plan.semesters.len()
    );
}

fn print_partial(semesters: &[PlannedSemester], unscheduled: &[String]) {
    if !semesters.is_empty() {
        println!("\n=== Partial Schedule (not saved) ===\n");
        for semester in semesters {
            println!("{}. {}: {}", semester.order, semester.name, semester.courses.join(", "));
        }
    }
    eprintln!("\n✗ Unscheduled courses: {}", unscheduled.join(", "));
}

fn resolve_output_path(
    output: Option<&Path>,
    config: &Config,
    student_id: &str,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    format!(
                        "✗ Failed to create output directory {}: {e}",
                        parent.display()
                    )
                })?;
            }
        }
        return Ok(path.to_path_buf());
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;
    Ok(out_dir.join(format!("{student_id}_plan.json")))
}

fn export_plan_json(plan: &DegreePlan, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(plan)
        .map_err(|e| format!("✗ Failed to serialize plan: {e}"))?;
    std::fs::write(path, json)
        .map_err(|e| format!("✗ Failed to write plan to {}: {e}", path.display()))
}
