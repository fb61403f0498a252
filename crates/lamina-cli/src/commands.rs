//! CLI command implementations.

use std::fs::OpenOptions;
use std::io::BufWriter;
use std::time::Instant;

use lamina_criteria::{CriterionCatalog, FailureCriterion};
use lamina_envelope::EnvelopeExporter;
use lamina_io::{validate_materials, MaterialFile};
use lamina_material::{MaterialDatabase, MaterialStrengths, PlyState, StressStrainState};
use lamina_telemetry::{AnalysisEvent, EventBus, EventKind, JsonLinesSink};

/// Arguments for the `evaluate` command.
pub struct EvaluateArgs {
    pub material: String,
    pub criterion: Option<String>,
    pub stress: [f64; 3],
    pub strain: [f64; 3],
    pub angle_deg: f64,
    pub embedded: bool,
    pub materials: Option<String>,
    pub telemetry: Option<String>,
}

/// Evaluate one or all criteria for a stress state.
pub fn evaluate(args: &EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lamina Failure Evaluation");
    println!("─────────────────────────");
    println!();

    let db = load_database(args.materials.as_deref())?;
    let material = lookup_material(&db, &args.material)?.clone();
    let catalog = CriterionCatalog::with_defaults(&material)?;

    let ply = PlyState::from_degrees(args.angle_deg, 1.0, args.embedded);
    let state = StressStrainState::new(args.stress, args.strain);

    println!("Material:  {}", material.name);
    println!(
        "Stress:    σ∥ = {}, σ⊥ = {}, τ∥⊥ = {}",
        args.stress[0], args.stress[1], args.stress[2]
    );
    if args.strain != [0.0; 3] {
        println!(
            "Strain:    ε∥ = {}, ε⊥ = {}, γ∥⊥ = {}",
            args.strain[0], args.strain[1], args.strain[2]
        );
    }
    println!("Ply:       {}°, {}", args.angle_deg, if args.embedded { "embedded" } else { "free surface" });
    println!();

    let mut bus = open_telemetry(args.telemetry.as_deref())?;
    let mut sequence = 0u64;

    let selected: Vec<&dyn FailureCriterion> = match &args.criterion {
        Some(name) => {
            let criterion = catalog.get(name).ok_or_else(|| {
                format!(
                    "Unknown criterion: '{name}'. Available: {}",
                    catalog.names().join(", ")
                )
            })?;
            vec![criterion]
        }
        None => catalog.iter().collect(),
    };

    for criterion in selected {
        let name = criterion.name();
        match criterion.evaluate(&material, &ply, &state) {
            Ok(rf) => {
                if rf.value.is_finite() {
                    println!("  {:<12} RF = {:<12.4} {} ({})", name, rf.value, rf.mode.as_str(), rf.label);
                } else {
                    println!("  {:<12} RF = ∞            {}", name, rf.mode.as_str());
                }
                emit(&bus, &mut sequence, EventKind::Evaluation {
                    criterion: name.to_string(),
                    material: material.name.clone(),
                    reserve_factor: rf.value.is_finite().then_some(rf.value),
                    mode: rf.mode.as_str().to_string(),
                    label: rf.label.to_string(),
                });
            }
            Err(e) => {
                println!("  {:<12} FAULT: {e}", name);
                emit(&bus, &mut sequence, EventKind::Fault {
                    criterion: name.to_string(),
                    detail: e.to_string(),
                });
            }
        }
    }

    if let Some(bus) = bus.as_mut() {
        bus.flush();
    }

    Ok(())
}

/// Tessellate an envelope and export it as JSON.
pub fn envelope(
    material_name: &str,
    criterion_name: &str,
    quality: f64,
    output_path: &str,
    materials_path: Option<&str>,
    telemetry_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lamina Envelope Export");
    println!("══════════════════════");
    println!();

    let db = load_database(materials_path)?;
    let material = lookup_material(&db, material_name)?.clone();
    let catalog = CriterionCatalog::with_defaults(&material)?;

    let criterion = catalog.get(criterion_name).ok_or_else(|| {
        format!(
            "Unknown criterion: '{criterion_name}'. Available: {}",
            catalog.names().join(", ")
        )
    })?;

    println!("Material:   {}", material.name);
    println!("Criterion:  {criterion_name}");
    println!("Quality:    {quality}");
    println!();

    let start = Instant::now();
    let mesh = criterion.tessellate(&material, quality);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Quads:      {}", mesh.quad_count());
    println!("Wall time:  {:.3}ms", elapsed * 1000.0);
    if let Some((lo, hi)) = mesh.bounding_box() {
        println!(
            "Bounds:     [{:.1}, {:.1}, {:.1}] .. [{:.1}, {:.1}, {:.1}]",
            lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]
        );
    }

    let mut bus = open_telemetry(telemetry_path)?;
    let mut sequence = 0u64;
    emit(&bus, &mut sequence, EventKind::Tessellation {
        criterion: criterion_name.to_string(),
        material: material.name.clone(),
        quad_count: mesh.quad_count(),
        wall_time: elapsed,
    });
    if let Some(bus) = bus.as_mut() {
        bus.flush();
    }

    let exporter = EnvelopeExporter::new(output_path);
    exporter.export(&mesh, criterion_name, &material.name)?;
    println!();
    println!("Envelope written to: {output_path}");

    Ok(())
}

/// List available materials and criteria.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lamina Catalog");
    println!("──────────────");
    println!();

    let db = MaterialDatabase::with_defaults();
    let mut names = db.names();
    names.sort_unstable();
    println!("Materials ({}):", names.len());
    for name in names {
        println!("  {name}");
    }
    println!();

    // Criterion extension keys are resolvable against every preset.
    let reference = db.get("t300_epoxy").ok_or("Missing built-in preset")?;
    let catalog = CriterionCatalog::with_defaults(reference)?;
    println!("Criteria ({}):", catalog.len());
    for name in catalog.names() {
        println!("  {name}");
    }

    Ok(())
}

/// Validate a material definition file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lamina Validator");
    println!("────────────────");
    println!();

    println!("Validating materials: {path}");
    let file = MaterialFile::load(std::path::Path::new(path))?;
    match validate_materials(&file.materials) {
        Ok(()) => {
            println!("✅ {} material(s) valid.", file.materials.len());
            for material in &file.materials {
                println!("  {}", material.name);
            }
        }
        Err(e) => println!("❌ Validation failed: {e}"),
    }

    Ok(())
}

fn load_database(path: Option<&str>) -> Result<MaterialDatabase, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let file = MaterialFile::load(std::path::Path::new(path))?;
            validate_materials(&file.materials)?;
            let mut db = MaterialDatabase::empty();
            for material in file.materials {
                db.register(material);
            }
            Ok(db)
        }
        None => Ok(MaterialDatabase::with_defaults()),
    }
}

fn lookup_material<'a>(
    db: &'a MaterialDatabase,
    name: &str,
) -> Result<&'a MaterialStrengths, Box<dyn std::error::Error>> {
    db.get(name).ok_or_else(|| {
        let mut available = db.names();
        available.sort_unstable();
        format!("Unknown material: '{name}'. Available: {}", available.join(", ")).into()
    })
}

fn open_telemetry(path: Option<&str>) -> Result<Option<EventBus>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(JsonLinesSink::new(BufWriter::new(file))));
    Ok(Some(bus))
}

fn emit(bus: &Option<EventBus>, sequence: &mut u64, kind: EventKind) {
    if let Some(bus) = bus {
        bus.emit(AnalysisEvent {
            sequence: *sequence,
            kind,
        });
        *sequence += 1;
    }
}
