// src/session.rs
//
// The session is the only code that mutates displayed geometry. It turns a
// generated structure into scene primitives, remembers the handles, and
// releases every one of them before the next model goes up.

use crate::config;
use crate::geometry::{lattice, molecule};
use crate::model::StructureModel;
use crate::rendering::primitives::{CylinderPrimitive, PrimitiveId, SpherePrimitive};
use crate::rendering::scene::{CameraPose, SceneHost};
use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Lattice,
    Molecule,
}

impl ModelKind {
    /// Selector order; also the order the drop-down shows.
    pub const ALL: [ModelKind; 2] = [ModelKind::Lattice, ModelKind::Molecule];

    pub fn title(&self) -> &'static str {
        match self {
            ModelKind::Lattice => "NaCl Crystal (Rock Salt)",
            ModelKind::Molecule => "PCl\u{2085} Molecule (Trigonal Bipyramidal)",
        }
    }

    pub fn generate(&self) -> StructureModel {
        match self {
            ModelKind::Lattice => lattice::generate(),
            ModelKind::Molecule => molecule::generate(),
        }
    }

    pub fn bond_radius(&self) -> f64 {
        match self {
            ModelKind::Lattice => config::LATTICE_BOND_RADIUS,
            ModelKind::Molecule => config::MOLECULE_BOND_RADIUS,
        }
    }

    pub fn camera(&self) -> CameraPose {
        let [x, y, z] = match self {
            ModelKind::Lattice => config::LATTICE_CAMERA,
            ModelKind::Molecule => config::MOLECULE_CAMERA,
        };
        CameraPose {
            position: Point3::new(x, y, z),
            target: Point3::origin(),
        }
    }
}

pub struct ModelSession {
    current: Option<ModelKind>,
    sphere_ids: Vec<PrimitiveId>,
    cylinder_ids: Vec<PrimitiveId>,
}

impl ModelSession {
    pub fn new() -> Self {
        Self {
            current: None,
            sphere_ids: Vec::new(),
            cylinder_ids: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<ModelKind> {
        self.current
    }

    /// Handles currently held by the session.
    pub fn primitive_count(&self) -> usize {
        self.sphere_ids.len() + self.cylinder_ids.len()
    }

    /// Tear down whatever is displayed, generate `kind`, register its atoms
    /// and bonds with the scene and move the camera to the model's preset.
    pub fn activate(&mut self, kind: ModelKind, scene: &mut impl SceneHost) {
        self.release(scene);

        let model = kind.generate();
        let (n_atoms, n_bonds) = model.counts();

        for atom in &model.atoms {
            let id = scene.add_sphere(SpherePrimitive {
                center: atom.position,
                radius: atom.species.radius(),
                species: atom.species,
            });
            self.sphere_ids.push(id);
        }

        let bond_radius = kind.bond_radius();
        for bond in &model.bonds {
            let id = scene.add_cylinder(CylinderPrimitive::between(bond.a, bond.b, bond_radius));
            self.cylinder_ids.push(id);
        }

        scene.set_camera(kind.camera());
        self.current = Some(kind);

        log::info!("{}: {} atoms, {} bonds", kind.title(), n_atoms, n_bonds);
    }

    /// Back to the empty state; every held handle is released.
    pub fn clear(&mut self, scene: &mut impl SceneHost) {
        self.release(scene);
        self.current = None;
    }

    fn release(&mut self, scene: &mut impl SceneHost) {
        for id in self.sphere_ids.drain(..) {
            scene.remove(id);
        }
        for id in self.cylinder_ids.drain(..) {
            scene.remove(id);
        }
    }
}

impl Default for ModelSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Scene double that tracks live handles and removal traffic.
    struct CountingHost {
        next: u64,
        live: HashSet<PrimitiveId>,
        removed: usize,
        camera: Option<CameraPose>,
    }

    impl CountingHost {
        fn new() -> Self {
            Self {
                next: 0,
                live: HashSet::new(),
                removed: 0,
                camera: None,
            }
        }

        fn allocate(&mut self) -> PrimitiveId {
            let id = PrimitiveId(self.next);
            self.next += 1;
            self.live.insert(id);
            id
        }
    }

    impl SceneHost for CountingHost {
        fn add_sphere(&mut self, _sphere: SpherePrimitive) -> PrimitiveId {
            self.allocate()
        }

        fn add_cylinder(&mut self, _cylinder: CylinderPrimitive) -> PrimitiveId {
            self.allocate()
        }

        fn remove(&mut self, id: PrimitiveId) -> bool {
            let hit = self.live.remove(&id);
            if hit {
                self.removed += 1;
            }
            hit
        }

        fn set_camera(&mut self, camera: CameraPose) {
            self.camera = Some(camera);
        }
    }

    #[test]
    fn test_activation_registers_full_model() {
        let mut host = CountingHost::new();
        let mut session = ModelSession::new();

        session.activate(ModelKind::Lattice, &mut host);

        let expected = ModelKind::Lattice.generate();
        assert_eq!(
            host.live.len(),
            expected.atoms.len() + expected.bonds.len()
        );
        assert_eq!(session.primitive_count(), host.live.len());
        assert_eq!(session.current(), Some(ModelKind::Lattice));
        assert_eq!(host.camera, Some(ModelKind::Lattice.camera()));
    }

    #[test]
    fn test_switching_models_releases_every_old_handle() {
        let mut host = CountingHost::new();
        let mut session = ModelSession::new();

        session.activate(ModelKind::Lattice, &mut host);
        let lattice_handles = host.live.len();

        session.activate(ModelKind::Molecule, &mut host);

        // Everything the lattice allocated has been removed
        assert_eq!(host.removed, lattice_handles);

        // Only molecule primitives remain
        let molecule = ModelKind::Molecule.generate();
        assert_eq!(host.live.len(), molecule.atoms.len() + molecule.bonds.len());
        assert!(host.live.iter().all(|id| id.0 >= lattice_handles as u64));
        assert_eq!(host.camera, Some(ModelKind::Molecule.camera()));
    }

    #[test]
    fn test_clear_returns_to_empty_state() {
        let mut host = CountingHost::new();
        let mut session = ModelSession::new();

        session.activate(ModelKind::Molecule, &mut host);
        session.clear(&mut host);

        assert!(host.live.is_empty());
        assert_eq!(session.current(), None);
        assert_eq!(session.primitive_count(), 0);
    }

    #[test]
    fn test_reactivation_is_self_contained() {
        let mut host = CountingHost::new();
        let mut session = ModelSession::new();

        session.activate(ModelKind::Lattice, &mut host);
        let first = host.live.len();
        session.activate(ModelKind::Lattice, &mut host);

        // Same cardinality, all fresh handles
        assert_eq!(host.live.len(), first);
        assert_eq!(host.removed, first);
    }
}
