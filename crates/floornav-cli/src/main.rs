use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use floornav_lib::{
    load_floor_plan, plan_route, resolve_poi, RouteAlgorithm, RouteEndpoint, RouteOutputKind,
    RouteRenderMode, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Indoor floor-plan navigation utilities")]
struct Cli {
    /// Path to the floor plan JSON document.
    #[arg(long)]
    plan: PathBuf,

    /// Output rendering for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Rich,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum AlgorithmArg {
    #[default]
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two endpoints on the floor plan.
    Route {
        /// Starting node id (or POI name with --poi).
        #[arg(long = "from")]
        from: String,
        /// Destination node id (or POI name with --poi).
        #[arg(long = "to")]
        to: String,
        /// Treat the endpoints as POI names resolved to their nearest nodes.
        #[arg(long)]
        poi: bool,
        /// Algorithm to use when planning the route.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// List the points of interest defined on the floor plan.
    Pois,
    /// Check the floor plan for ignorable data problems (dangling edges,
    /// unresolvable POIs). Warnings only; never fails.
    Validate,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            poi,
            algorithm,
        } => handle_route(&cli.plan, cli.format, &from, &to, poi, algorithm.into()),
        Command::Pois => handle_pois(&cli.plan),
        Command::Validate => handle_validate(&cli.plan),
    }
}

fn handle_route(
    plan_path: &Path,
    format: OutputFormat,
    from: &str,
    to: &str,
    poi: bool,
    algorithm: RouteAlgorithm,
) -> Result<()> {
    let plan = load_plan(plan_path)?;

    let endpoint = |label: &str| {
        if poi {
            RouteEndpoint::Poi(label.to_string())
        } else {
            RouteEndpoint::Node(label.to_string())
        }
    };
    let request = RouteRequest {
        start: endpoint(from),
        goal: endpoint(to),
        algorithm,
    };

    let route = plan_route(&plan, &request)
        .with_context(|| format!("failed to plan a route from {from} to {to}"))?;
    let summary = RouteSummary::from_plan(RouteOutputKind::Route, &plan, &route)?;

    match format {
        OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn handle_pois(plan_path: &Path) -> Result<()> {
    let plan = load_plan(plan_path)?;

    if plan.pois.is_empty() {
        println!("No points of interest defined.");
        return Ok(());
    }

    for poi in &plan.pois {
        let category: String = poi.category.into();
        println!(
            "{}: {} ({}) at ({:.0}, {:.0})",
            poi.id, poi.name, category, poi.x, poi.y
        );
    }

    Ok(())
}

fn handle_validate(plan_path: &Path) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let mut warnings = 0usize;

    for edge in plan.dangling_edges() {
        warnings += 1;
        println!(
            "warning: dangling edge {} ({} -> {}) references an unknown node",
            edge.id, edge.from, edge.to
        );
    }

    for poi in &plan.pois {
        if resolve_poi(&plan, poi).is_none() {
            warnings += 1;
            println!(
                "warning: POI '{}' cannot resolve to a node (plan has no nodes)",
                poi.name
            );
        }
    }

    println!(
        "{}: {} nodes, {} edges, {} POIs, {} warning(s)",
        plan.name,
        plan.nodes.len(),
        plan.edges.len(),
        plan.pois.len(),
        warnings
    );

    Ok(())
}

fn load_plan(path: &Path) -> Result<floornav_lib::FloorPlan> {
    load_floor_plan(path)
        .with_context(|| format!("failed to load floor plan from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
