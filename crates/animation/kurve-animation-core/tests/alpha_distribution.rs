//! Alpha redistribution across leaf members, driven through real reveals.

use std::cell::RefCell;
use std::rc::Rc;

use kurve_animation_core::{
    AnimParams, Animation, DrawableHandle, Drawable, Group, PartialReveal, RevealBounds,
    SubmobjectMode,
};
use kurve_test_fixtures::{path_group, VPath};

const SEGMENTS: usize = 4;

fn four_lines() -> (Rc<RefCell<Group>>, DrawableHandle) {
    let group = Rc::new(RefCell::new(path_group(
        (0..4)
            .map(|i| {
                let y = i as f32;
                VPath::line([0.0, y, 0.0], [4.0, y, 0.0], SEGMENTS)
            })
            .collect(),
    )));
    let handle: DrawableHandle = group.clone();
    (group, handle)
}

fn leaf_point_count(group: &Group, index: usize) -> usize {
    group.family_member(index).unwrap().num_points()
}

#[test]
fn one_at_a_time_completes_in_order() {
    let (group, handle) = four_lines();
    let mut anim = PartialReveal::create(handle);

    anim.update(0.25).unwrap();
    {
        let g = group.borrow();
        // Leaf 0 is fully drawn at global alpha 0.25; the rest have not started.
        assert_eq!(leaf_point_count(&g, 0), SEGMENTS + 1);
        for i in 1..4 {
            assert_eq!(leaf_point_count(&g, i), 1);
        }
    }

    anim.update(0.99).unwrap();
    {
        let g = group.borrow();
        // The last leaf only completes at global alpha 1.0.
        let end = g.family_member(3).unwrap().points().last().copied().unwrap();
        assert!(end[0] < 4.0, "leaf 3 should not have reached its endpoint");
    }

    anim.update(1.0).unwrap();
    let g = group.borrow();
    for i in 0..4 {
        assert_eq!(leaf_point_count(&g, i), SEGMENTS + 1);
    }
}

#[test]
fn all_at_once_moves_every_leaf_together() {
    let (group, handle) = four_lines();
    let mut anim =
        PartialReveal::with_policy(handle, RevealBounds::Grow, AnimParams::default());

    anim.update(0.5).unwrap();
    let g = group.borrow();
    for i in 0..4 {
        let count = leaf_point_count(&g, i);
        assert!(count > 1 && count < SEGMENTS + 1, "leaf {i} had {count} points");
    }
}

#[test]
fn lagged_start_overlaps_leaves() {
    let (group, handle) = four_lines();
    let mut anim = PartialReveal::with_policy(
        handle,
        RevealBounds::Grow,
        AnimParams {
            submobject_mode: SubmobjectMode::LaggedStart,
            ..AnimParams::default()
        },
    );

    anim.update(0.5).unwrap();
    let g = group.borrow();
    // The first leaf is already complete while the last is still in flight:
    // windows overlap instead of running strictly in sequence.
    assert_eq!(leaf_point_count(&g, 0), SEGMENTS + 1);
    let last = leaf_point_count(&g, 3);
    assert!(last > 1 && last < SEGMENTS + 1);
}
