// ==============================================================================
// main.rs — tire-inspect
// ------------------------------------------------------------------------------
// Loads a tire description, mounts it on a fresh rapier wheel body, attaches
// the requested visualization and prints the body's asset list as JSON.
//
//   tire-inspect data/tires/Sedan_RigidTire.json --vis mesh
//   tire-inspect data/tires/HMMWV_LugreTire.json --vis primitives --detach
// ==============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rapier3d::prelude::*;

use tire_subsystem::{
    BodySnapshot, DataConfig, ObjMeshLoader, Tire, TireParams, VisualizationType, WheelBody,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VisArg {
    None,
    Primitives,
    Mesh,
}

impl From<VisArg> for VisualizationType {
    fn from(v: VisArg) -> Self {
        match v {
            VisArg::None => VisualizationType::None,
            VisArg::Primitives => VisualizationType::Primitives,
            VisArg::Mesh => VisualizationType::Mesh,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tire-inspect", about = "Load a tire description and show its wheel-body assets")]
struct Args {
    /// Tire description (JSON)
    file: PathBuf,

    #[arg(long, value_enum, default_value = "mesh")]
    vis: VisArg,

    /// Vehicle data directory used to resolve mesh files [env: TIRE_DATA_DIR]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Detach again after attaching and print the result
    #[arg(long)]
    detach: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let params = match TireParams::from_file(&args.file) {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // wheel body + tire contact collider, the way the vehicle assembly would mount it
    let mut bodies = RigidBodySet::new();
    let mut colliders = ColliderSet::new();
    let handle = bodies.insert(RigidBodyBuilder::dynamic().build());
    if let Some(collider) = params.contact_collider() {
        colliders.insert_with_parent(collider.build(), handle, &mut bodies);
    }
    log::info!(
        "wheel body mass {:.3} kg ({} collider(s))",
        bodies[handle].mass(),
        colliders.len()
    );

    let data = args.data_dir.map(DataConfig::new).unwrap_or_default();
    let body = WheelBody::new("wheel", handle).into_shared();
    let mut tire = Tire::new("tire", params, body.clone())
        .with_mesh_loader(std::rc::Rc::new(ObjMeshLoader::new(data)));

    if let Err(e) = tire.add_visualization_assets(args.vis.into()) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    if !print_snapshot(&body.borrow()) {
        return ExitCode::FAILURE;
    }

    if args.detach {
        tire.remove_visualization_assets();
        if !print_snapshot(&body.borrow()) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn print_snapshot(body: &WheelBody) -> bool {
    match serde_json::to_string_pretty(&BodySnapshot::capture(body)) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            log::error!("snapshot serialization failed: {e}");
            false
        }
    }
}
