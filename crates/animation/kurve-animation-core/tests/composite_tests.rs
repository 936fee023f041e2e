//! Time composition: sequential switchover, parallel rescaling, per-point
//! staggering, and the center-extraction wrapper.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurve_animation_core::{
    AnimParams, Animation, AnimationGroup, ApplyToCenters, BaseAnimation, DelayByOrder,
    DelayByOrderConfig, Drawable, DrawableHandle, Homotopy, Rotating, RotatingConfig,
    Succession, UpdateFromAlphaFunc,
};
use kurve_test_fixtures::VPath;

fn point_handle(at: [f32; 3]) -> (Rc<RefCell<VPath>>, DrawableHandle) {
    let path = Rc::new(RefCell::new(VPath::new(vec![at])));
    let handle: DrawableHandle = path.clone();
    (path, handle)
}

/// Animation that records clean_up calls and the alphas it was driven with.
struct Probe {
    base: BaseAnimation,
    cleanups: Rc<Cell<usize>>,
    last_alpha: Rc<Cell<f32>>,
}

impl Probe {
    fn new(run_time: f32) -> (Self, Rc<Cell<usize>>, Rc<Cell<f32>>) {
        let (_, handle) = point_handle([0.0; 3]);
        let cleanups = Rc::new(Cell::new(0));
        let last_alpha = Rc::new(Cell::new(f32::NAN));
        let probe = Self {
            base: BaseAnimation::new(
                handle,
                AnimParams {
                    run_time,
                    ..AnimParams::default()
                },
            ),
            cleanups: cleanups.clone(),
            last_alpha: last_alpha.clone(),
        };
        (probe, cleanups, last_alpha)
    }
}

impl Animation for Probe {
    fn base(&self) -> &BaseAnimation {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAnimation {
        &mut self.base
    }

    fn update_mobject(&mut self, alpha: f32) -> Result<(), kurve_animation_core::AnimationError> {
        self.last_alpha.set(alpha);
        Ok(())
    }

    fn clean_up(&mut self) {
        self.cleanups.set(self.cleanups.get() + 1);
    }
}

fn shift_by_alpha(handle: DrawableHandle) -> Box<dyn Animation> {
    Box::new(Homotopy::new(
        Box::new(|x, y, z, t| [x + t, y, z]),
        handle,
    ))
}

#[test]
fn succession_selects_child_and_cleans_up_once() {
    let (probe0, cleanups0, _) = Probe::new(1.0);
    let (probe1, cleanups1, alpha1) = Probe::new(1.0);
    let (probe2, cleanups2, _) = Probe::new(1.0);
    let mut succession =
        Succession::new(vec![Box::new(probe0), Box::new(probe1), Box::new(probe2)]);
    assert_eq!(succession.run_time(), 3.0);

    succession.update(0.1).unwrap();
    assert_eq!(succession.current_index(), 0);

    // Global alpha 0.5 selects index 1 with local alpha 0.5.
    succession.update(0.5).unwrap();
    assert_eq!(succession.current_index(), 1);
    assert!((alpha1.get() - 0.5).abs() < 1e-6);
    assert_eq!(cleanups0.get(), 1);
    assert_eq!(cleanups1.get(), 0);

    // Replaying the same region does not re-fire the cleanup.
    succession.update(0.6).unwrap();
    assert_eq!(cleanups0.get(), 1);

    // Retiring the whole composite cleans the remaining children exactly once.
    succession.clean_up();
    assert_eq!(cleanups0.get(), 1);
    assert_eq!(cleanups1.get(), 1);
    assert_eq!(cleanups2.get(), 1);
}

#[test]
fn succession_rebases_shared_drawable() {
    let (path, handle) = point_handle([0.0; 3]);
    let anims = vec![shift_by_alpha(handle.clone()), shift_by_alpha(handle)];
    let mut succession = Succession::new(anims);

    succession.update(0.4).unwrap();
    // Child 0 at local alpha 0.8.
    assert!((path.borrow().points()[0][0] - 0.8).abs() < 1e-6);

    // Crossing the boundary completes child 0 (x = 1), then child 1 restarts
    // from the recaptured snapshot instead of jumping back to the origin.
    succession.update(0.6).unwrap();
    assert!((path.borrow().points()[0][0] - 1.2).abs() < 1e-6);

    succession.update(1.0).unwrap();
    assert!((path.borrow().points()[0][0] - 2.0).abs() < 1e-6);
}

#[test]
fn parallel_rescales_children_to_the_longest() {
    let (short, short_cleanups, short_alpha) = Probe::new(2.0);
    let (long, _, long_alpha) = Probe::new(4.0);
    let mut group = AnimationGroup::new(vec![Box::new(short), Box::new(long)]);
    assert_eq!(group.run_time(), 4.0);

    // Wall time 2 of 4: the short child has finished and holds at 1.
    group.update(0.5).unwrap();
    assert_eq!(short_alpha.get(), 1.0);
    assert_eq!(long_alpha.get(), 0.5);

    group.update(0.25).unwrap();
    assert_eq!(short_alpha.get(), 0.5);
    assert_eq!(long_alpha.get(), 0.25);

    group.clean_up();
    assert_eq!(short_cleanups.get(), 1);
}

#[test]
fn zero_duration_child_saturates() {
    let (instant, _, instant_alpha) = Probe::new(0.0);
    let (long, _, long_alpha) = Probe::new(2.0);
    let mut group = AnimationGroup::new(vec![Box::new(instant), Box::new(long)]);

    // No division fault at global alpha 0; the degenerate child just has not
    // started yet.
    group.update(0.0).unwrap();
    assert_eq!(instant_alpha.get(), 0.0);
    assert_eq!(long_alpha.get(), 0.0);

    group.update(0.01).unwrap();
    assert_eq!(instant_alpha.get(), 1.0);
}

#[test]
fn delay_by_order_follows_power_law() {
    let points: Vec<[f32; 3]> = (0..10).map(|i| [i as f32, 0.0, 0.0]).collect();
    let path = Rc::new(RefCell::new(VPath::new(points)));
    let handle: DrawableHandle = path.clone();
    let inner = Homotopy::new(Box::new(|x, y, z, t| [x, y + t, z]), handle);
    let mut stagger = DelayByOrder::new(Box::new(inner), DelayByOrderConfig::default());

    // Point 4 of 10 with max_power 5: exponent 1 + 5/10 * 4 = 3.
    let alpha = 0.5f32;
    assert!((stagger.point_alpha(alpha, 4) - alpha.powi(3)).abs() < 1e-6);

    stagger.update(alpha).unwrap();
    let warped = path.borrow().points()[4][1];
    assert!((warped - alpha.powi(3)).abs() < 1e-6);
    // Earlier points are further along than later ones.
    let first = path.borrow().points()[0][1];
    let last = path.borrow().points()[9][1];
    assert!(first > last);
}

#[test]
fn apply_to_centers_shifts_targets_by_center_delta() {
    let square_a = Rc::new(RefCell::new(VPath::square(1.0)));
    let mut shifted = VPath::square(1.0);
    shifted.shift([4.0, 0.0, 0.0]);
    let square_b = Rc::new(RefCell::new(shifted));
    let handle_a: DrawableHandle = square_a.clone();
    let handle_b: DrawableHandle = square_b.clone();

    let mut anim = ApplyToCenters::new(vec![handle_a, handle_b], |centers| {
        Box::new(Rotating::new(
            centers,
            RotatingConfig {
                radians: std::f32::consts::PI,
                about_point: Some([2.0, 0.0, 0.0]),
                ..RotatingConfig::default()
            },
        ))
    });

    // A half turn of the center constellation swaps the two squares.
    anim.update(1.0).unwrap();
    let center_a = square_a.borrow().get_center();
    let center_b = square_b.borrow().get_center();
    assert!((center_a[0] - 4.0).abs() < 1e-5);
    assert!((center_b[0] - 0.0).abs() < 1e-5);
    // Shapes are only shifted, never deformed.
    assert!((square_a.borrow().points()[0][0] - 4.5).abs() < 1e-5);
}

#[test]
fn update_from_alpha_func_sees_raw_alpha() {
    let (path, handle) = point_handle([0.0; 3]);
    let seen = Rc::new(Cell::new(0.0f32));
    let seen_in = seen.clone();
    let mut anim = UpdateFromAlphaFunc::new(
        handle,
        Box::new(move |drawable, alpha| {
            seen_in.set(alpha);
            drawable.move_to([alpha, 0.0, 0.0]);
        }),
        AnimParams::default(),
    );
    anim.update(0.75).unwrap();
    assert_eq!(seen.get(), 0.75);
    assert!((path.borrow().get_center()[0] - 0.75).abs() < 1e-6);
}
