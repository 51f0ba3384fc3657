use roll_calc::{
    Quantity, RollError, roll_inner_diameter, roll_length, roll_material_height,
    roll_outer_diameter, roll_solve, try_roll_solve,
};

#[test]
fn solves_the_single_missing_quantity() {
    let (h, d0, d1, l) = (0.1, 2.0, 3.0, 39.273_134_62);

    // The dispatcher must hit the very same solver path, so compare exactly.
    assert_eq!(
        roll_solve(Some(h), Some(d0), Some(d1), None),
        roll_length(h, d0, d1)
    );
    assert_eq!(
        roll_solve(Some(h), Some(d0), None, Some(l)),
        roll_outer_diameter(h, d0, l)
    );
    assert_eq!(
        roll_solve(Some(h), None, Some(d1), Some(l)),
        roll_inner_diameter(h, d1, l)
    );
    assert_eq!(
        roll_solve(None, Some(d0), Some(d1), Some(l)),
        roll_material_height(d0, d1, l)
    );
}

#[test]
fn rejects_overdetermined_and_underdetermined_sets() {
    assert_eq!(
        try_roll_solve(Some(1.0), Some(2.0), Some(3.0), Some(4.0)),
        Err(RollError::Overdetermined)
    );
    assert_eq!(roll_solve(Some(1.0), Some(2.0), Some(3.0), Some(4.0)), None);

    assert_eq!(
        try_roll_solve(Some(1.0), None, None, Some(4.0)),
        Err(RollError::Underdetermined)
    );
    assert_eq!(
        try_roll_solve(None, None, None, None),
        Err(RollError::Underdetermined)
    );
    assert_eq!(roll_solve(Some(1.0), None, None, None), None);
}

#[test]
fn zero_counts_as_present_and_fails_validation() {
    // Absence is Option::None, never a sentinel value: a supplied zero is a
    // present (and invalid) quantity.
    assert_eq!(
        try_roll_solve(Some(0.0), Some(2.0), Some(3.0), None),
        Err(RollError::NotPositive(Quantity::MaterialHeight))
    );
    assert_eq!(roll_solve(Some(0.0), Some(2.0), Some(3.0), None), None);
}
