use molbuild::{BondError, Element, LockState, Molecule, MoleculeError};

fn snapshot(mol: &Molecule) -> Vec<String> {
    mol.atoms().map(|a| a.to_string()).collect()
}

// create_bonds keeps what it managed before failing; add_chain does not.
#[test]
fn bonds_partial_chain_atomic() {
    let mut mol = Molecule::new("asymmetry");
    mol.create_branches(&[1, 1, 1]).unwrap();
    mol.mutate_atoms(&[(1, 2, Element::F)]).unwrap();

    let err = mol.create_bonds(&[(1, 1, 1, 2), (1, 3, 1, 2)]).unwrap_err();
    assert!(matches!(
        err,
        MoleculeError::InvalidBond(BondError::ValenceExceeded { id: 2, .. })
    ));
    assert_eq!(mol.bond_count(), 1, "first bond stays");

    let before = snapshot(&mol);
    let err = mol
        .add_chain(1, 3, Element::O, &[Element::C, Element::Cl, Element::Br])
        .unwrap_err();
    assert!(matches!(err, MoleculeError::InvalidBond(_)));
    assert_eq!(snapshot(&mol), before, "chain leaves nothing behind");
    assert_eq!(mol.atom_count(), 3);
}

fn magnesium_boron_sulfide() -> Molecule {
    let mut mol = Molecule::new("");
    mol.create_branches(&[2])
        .unwrap()
        .mutate_atoms(&[(1, 1, Element::Mg), (2, 1, Element::B)])
        .unwrap()
        .add_atoms(&[(2, 1, Element::S)])
        .unwrap()
        .lock()
        .unwrap()
        .unlock()
        .unwrap();
    mol
}

#[test]
fn failed_chain_preserves_exact_weight() {
    let mut reference = magnesium_boron_sulfide();
    reference.lock().unwrap();

    let mut mol = magnesium_boron_sulfide();
    let result = mol.add_chain(1, 1, Element::S, &[Element::P, Element::F, Element::Br]);
    assert!(result.is_err());
    mol.lock().unwrap();

    assert_eq!(mol.formula(), reference.formula());
    assert_eq!(
        mol.molecular_weight().unwrap().to_bits(),
        reference.molecular_weight().unwrap().to_bits()
    );
}

#[test]
fn methane_from_single_carbon() {
    let mut mol = Molecule::new("methane");
    mol.create_branches(&[1]).unwrap().lock().unwrap();
    assert_eq!(mol.state(), LockState::Locked);
    assert_eq!(mol.formula().unwrap(), "CH4");
    assert_eq!(mol.molecular_weight().unwrap(), 16.0);
}

#[test]
fn state_gates_every_operation() {
    let mut mol = Molecule::new("");
    assert_eq!(mol.formula(), Err(MoleculeError::UnlockedMolecule));
    assert_eq!(mol.molecular_weight(), Err(MoleculeError::UnlockedMolecule));

    mol.create_branches(&[1]).unwrap().lock().unwrap();
    assert_eq!(
        mol.create_branches(&[1]).unwrap_err(),
        MoleculeError::LockedMolecule
    );
    assert_eq!(mol.lock().unwrap_err(), MoleculeError::LockedMolecule);

    mol.unlock().unwrap();
    assert_eq!(mol.unlock().unwrap_err(), MoleculeError::UnlockedMolecule);
    assert_eq!(mol.formula(), Err(MoleculeError::UnlockedMolecule));
}

#[test]
fn self_bond_and_saturated_bond_leave_atoms_unchanged() {
    let mut mol = Molecule::new("");
    mol.create_branches(&[2, 2])
        .unwrap()
        .mutate_atoms(&[(1, 1, Element::Cl), (1, 2, Element::Br)])
        .unwrap()
        .create_bonds(&[(1, 1, 2, 1), (1, 2, 2, 2)])
        .unwrap();
    let before = snapshot(&mol);

    assert_eq!(
        mol.create_bonds(&[(2, 1, 2, 1)]).unwrap_err(),
        MoleculeError::InvalidBond(BondError::SelfBond { id: 2 })
    );
    assert_eq!(
        mol.create_bonds(&[(1, 1, 1, 2)]).unwrap_err(),
        MoleculeError::InvalidBond(BondError::ValenceExceeded {
            id: 1,
            element: Element::Cl
        })
    );
    assert_eq!(snapshot(&mol), before);
}

#[test]
fn unlock_of_all_hydrogen_branch_is_empty() {
    let mut mol = Molecule::new("hydrogen");
    mol.create_branches(&[2])
        .unwrap()
        .mutate_atoms(&[(1, 1, Element::H), (2, 1, Element::H)])
        .unwrap()
        .create_bonds(&[(1, 1, 2, 1)])
        .unwrap()
        .lock()
        .unwrap();
    assert_eq!(mol.formula().unwrap(), "H2");
    assert_eq!(mol.molecular_weight().unwrap(), 2.0);

    assert_eq!(mol.unlock().unwrap_err(), MoleculeError::EmptyMolecule);
    assert_eq!(mol.state(), LockState::Unlocked);
    assert_eq!(mol.branch_count(), 0);
}

#[test]
fn display_after_lock() {
    let mut mol = Molecule::new("ethanol");
    mol.create_branches(&[2])
        .unwrap()
        .create_bonds(&[(1, 1, 2, 1)])
        .unwrap()
        .add_atoms(&[(2, 1, Element::O)])
        .unwrap()
        .lock()
        .unwrap();
    assert_eq!(
        snapshot(&mol),
        vec![
            "Atom(C.1: C2,H,H,H)",
            "Atom(C.2: C1,O3,H,H)",
            "Atom(O.3: C2,H)",
            "Atom(H.4: C1)",
            "Atom(H.5: C1)",
            "Atom(H.6: C1)",
            "Atom(H.7: C2)",
            "Atom(H.8: C2)",
            "Atom(H.9: O3)",
        ]
    );
}

#[test]
fn parse_symbols() {
    assert_eq!("Cl".parse::<Element>(), Ok(Element::Cl));
    assert_eq!(
        "Na".parse::<Element>(),
        Err(MoleculeError::UnknownSymbol("Na".into()))
    );
}
