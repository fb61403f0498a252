//! Material database with literature-based unidirectional ply presets.
//!
//! Strength and modulus values are typical published data for the
//! named fiber/matrix systems, in MPa. Each preset also seeds the
//! extension scalars the bundled criteria declare, so the full
//! criterion catalog can be built against any preset out of the box.

use std::collections::HashMap;

use lamina_types::Scalar;

use crate::strengths::MaterialStrengths;

/// A named collection of ply material presets.
///
/// Materials are looked up by name (e.g. "t300_epoxy", "im7_8552").
/// Custom materials can be registered at runtime.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, MaterialStrengths>,
}

impl MaterialDatabase {
    /// Creates a new database with the 5 built-in ply presets.
    pub fn with_defaults() -> Self {
        let mut db = Self {
            materials: HashMap::new(),
        };

        db.register(t300_epoxy());
        db.register(im7_8552());
        db.register(e_glass_epoxy());
        db.register(s2_glass_epoxy());
        db.register(aramid_epoxy());

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, material: MaterialStrengths) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&MaterialStrengths> {
        self.materials.get(name)
    }

    /// Returns all registered material names.
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extension keys shared by every preset: curve-fit exponents,
/// interaction coefficients, matrix data, strain allowables.
fn common_extensions(
    mat: &mut MaterialStrengths,
    e_matrix: Scalar,
    r_matrix_t: Scalar,
    r_matrix_c: Scalar,
    gamma_allow: Scalar,
) {
    mat.set_extension("Cuntze.m", 2.6);
    mat.set_extension("Cuntze.muesp", 0.3);
    mat.set_extension("ZTL.f12star", -0.5);
    mat.set_extension("Rotem.Em", e_matrix);
    mat.set_extension("Rotem.Rmt", r_matrix_t);
    mat.set_extension("Rotem.Rmc", r_matrix_c);
    mat.set_extension("MaxStrain.gamma", gamma_allow);
}

// ─── Built-in Ply Presets (MPa) ───────────────────────────────────────

/// T300/epoxy — standard-modulus carbon, the classic baseline system.
fn t300_epoxy() -> MaterialStrengths {
    let mut mat = MaterialStrengths {
        name: "t300_epoxy".into(),
        r_par_tension: 1500.0,
        r_par_compression: 1200.0,
        r_nor_tension: 50.0,
        r_nor_compression: 250.0,
        r_shear: 70.0,
        e_par: 135_000.0,
        e_nor: 10_000.0,
        extensions: HashMap::new(),
    };
    common_extensions(&mut mat, 3500.0, 80.0, 240.0, 0.014);
    mat
}

/// IM7/8552 — intermediate-modulus carbon, aerospace prepreg.
fn im7_8552() -> MaterialStrengths {
    let mut mat = MaterialStrengths {
        name: "im7_8552".into(),
        r_par_tension: 2560.0,
        r_par_compression: 1590.0,
        r_nor_tension: 73.0,
        r_nor_compression: 185.0,
        r_shear: 90.0,
        e_par: 165_000.0,
        e_nor: 9_000.0,
        extensions: HashMap::new(),
    };
    common_extensions(&mut mat, 4670.0, 99.0, 300.0, 0.018);
    mat
}

/// E-glass/epoxy — the workhorse glass system.
fn e_glass_epoxy() -> MaterialStrengths {
    let mut mat = MaterialStrengths {
        name: "e_glass_epoxy".into(),
        r_par_tension: 1080.0,
        r_par_compression: 620.0,
        r_nor_tension: 39.0,
        r_nor_compression: 128.0,
        r_shear: 89.0,
        e_par: 39_000.0,
        e_nor: 8_600.0,
        extensions: HashMap::new(),
    };
    common_extensions(&mut mat, 3400.0, 72.0, 210.0, 0.020);
    mat
}

/// S2-glass/epoxy — higher-strength glass for impact-tolerant parts.
fn s2_glass_epoxy() -> MaterialStrengths {
    let mut mat = MaterialStrengths {
        name: "s2_glass_epoxy".into(),
        r_par_tension: 1700.0,
        r_par_compression: 1000.0,
        r_nor_tension: 63.0,
        r_nor_compression: 200.0,
        r_shear: 75.0,
        e_par: 52_000.0,
        e_nor: 12_000.0,
        extensions: HashMap::new(),
    };
    common_extensions(&mut mat, 3400.0, 72.0, 210.0, 0.016);
    mat
}

/// Aramid/epoxy (Kevlar 49 class) — very weak in compression.
fn aramid_epoxy() -> MaterialStrengths {
    let mut mat = MaterialStrengths {
        name: "aramid_epoxy".into(),
        r_par_tension: 1400.0,
        r_par_compression: 235.0,
        r_nor_tension: 12.0,
        r_nor_compression: 53.0,
        r_shear: 34.0,
        e_par: 76_000.0,
        e_nor: 5_500.0,
        extensions: HashMap::new(),
    };
    common_extensions(&mut mat, 3400.0, 72.0, 210.0, 0.015);
    mat
}
