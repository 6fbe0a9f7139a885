//! Persistent mark store of one chart
//!
//! Slots are keyed by datum index. Reconciling a new mark set updates surviving slots in place,
//! appends slots for new indices and truncates the rest, so no mark from a previous render can
//! outlive its datum.

use super::axis::{Axis, Margin};
use super::mark::{Mark, MarkVisual};
use super::transition::{AnimationSpec, Transition};
use egui::{Pos2, Rect};

#[derive(Clone, Debug)]
struct Slot {
    mark: Mark,
    /// Hover variant of `mark.visual`, when highlighted
    highlight: Option<MarkVisual>,
    transition: Option<Transition>,
}

impl Slot {
    fn target(&self) -> &MarkVisual {
        self.highlight.as_ref().unwrap_or(&self.mark.visual)
    }

    fn current(&self, now: f64) -> MarkVisual {
        match &self.transition {
            Some(t) => t.sample(self.target(), now),
            None => self.target().clone(),
        }
    }
}

/// Frame, axes and marks owned by one renderer
#[derive(Clone, Debug)]
pub struct DrawingSurface {
    frame: Rect,
    plot: Rect,
    axes: Vec<Axis>,
    slots: Vec<Slot>,
}

impl DrawingSurface {
    /// Empty surface measuring `frame`
    pub fn acquire(frame: Rect, margin: Margin) -> Self {
        Self {
            frame,
            plot: margin.inner(frame),
            axes: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn resize(&mut self, frame: Rect, margin: Margin) {
        self.frame = frame;
        self.plot = margin.inner(frame);
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Area inside the margins where marks live
    pub fn plot(&self) -> Rect {
        self.plot
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn set_axes(&mut self, axes: Vec<Axis>) {
        self.axes = axes;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replace the mark set and restart every slot's entrance
    ///
    /// Any in-flight transition is discarded and hover highlights are reset.
    pub fn reconcile(&mut self, marks: Vec<Mark>, anim: &AnimationSpec, now: f64) {
        let count = marks.len();
        for (index, mark) in marks.into_iter().enumerate() {
            let transition = Transition::new(
                anim.entrance_of(&mark.visual),
                now,
                anim.delay_for(index),
                anim,
            );
            let slot = Slot {
                mark,
                highlight: None,
                transition: Some(transition),
            };
            match self.slots.get_mut(index) {
                Some(existing) => *existing = slot,
                None => self.slots.push(slot),
            }
        }
        self.slots.truncate(count);
    }

    /// Swap targets while letting in-flight transitions run on
    ///
    /// Slots that were at rest jump straight to their new target.
    pub fn retarget(&mut self, marks: Vec<Mark>) {
        let count = marks.len();
        for (index, mark) in marks.into_iter().enumerate() {
            match self.slots.get_mut(index) {
                Some(slot) => {
                    slot.mark = mark;
                    slot.highlight = None;
                }
                None => self.slots.push(Slot {
                    mark,
                    highlight: None,
                    transition: None,
                }),
            }
        }
        self.slots.truncate(count);
    }

    /// Animate every slot from what is on screen now towards new targets
    pub fn morph(&mut self, marks: Vec<Mark>, anim: &AnimationSpec, now: f64) {
        let count = marks.len();
        for (index, mark) in marks.into_iter().enumerate() {
            let delay = anim.delay_for(index);
            match self.slots.get_mut(index) {
                Some(slot) => {
                    let from = slot.current(now);
                    slot.mark = mark;
                    slot.highlight = None;
                    slot.transition = Some(Transition::new(from, now, delay, anim));
                }
                None => {
                    let from = anim.entrance_of(&mark.visual);
                    self.slots.push(Slot {
                        mark,
                        highlight: None,
                        transition: Some(Transition::new(from, now, delay, anim)),
                    });
                }
            }
        }
        self.slots.truncate(count);
    }

    /// Set or clear the hover variant of one slot
    pub fn set_highlight(&mut self, index: usize, highlight: Option<MarkVisual>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.highlight = highlight;
        }
    }

    pub fn mark(&self, index: usize) -> Option<&Mark> {
        self.slots.get(index).map(|s| &s.mark)
    }

    /// On-screen state of one slot at `now`
    pub fn visual(&self, index: usize, now: f64) -> Option<MarkVisual> {
        self.slots.get(index).map(|s| s.current(now))
    }

    /// On-screen state of every slot, in paint order
    pub fn snapshot(&self, now: f64) -> Vec<(MarkVisual, &Mark)> {
        self.slots.iter().map(|s| (s.current(now), &s.mark)).collect()
    }

    /// Drop finished transitions; returns whether anything is still moving
    pub fn settle(&mut self, now: f64) -> bool {
        let mut animating = false;
        for slot in &mut self.slots {
            if slot.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
                slot.transition = None;
            }
            animating |= slot.transition.is_some();
        }
        animating
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.slots
            .iter()
            .any(|s| s.transition.as_ref().is_some_and(|t| !t.is_finished(now)))
    }

    /// Topmost slot under `pos`, using on-screen geometry
    pub fn hit_test(&self, pos: Pos2, slack: f32, now: f64) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .find(|(_, slot)| {
                let visual = slot.current(now);
                visual.is_hittable() && visual.geometry.contains(pos, slack)
            })
            .map(|(index, _)| index)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.axes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::mark::Geometry;
    use crate::chart::transition::Easing;
    use egui::{Color32, pos2};

    fn frame() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 300.0))
    }

    fn dots(xs: &[f32]) -> Vec<Mark> {
        xs.iter()
            .map(|x| {
                Mark::new(MarkVisual::new(
                    Geometry::Circle { center: pos2(*x, 50.0), radius: 5.0 },
                    Color32::RED,
                ))
            })
            .collect()
    }

    fn linear(duration: f64) -> AnimationSpec {
        AnimationSpec::new(duration, 0.0).with_easing(Easing::Linear)
    }

    #[test]
    fn test_reconcile_truncates_and_appends() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0, 20.0, 30.0]), &linear(1.0), 0.0);
        assert_eq!(s.len(), 3);
        s.reconcile(dots(&[10.0]), &linear(1.0), 0.5);
        assert_eq!(s.len(), 1);
        s.reconcile(dots(&[10.0, 20.0, 30.0, 40.0]), &linear(1.0), 0.6);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_reconcile_restarts_from_entrance() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0]), &linear(1.0), 0.0);
        s.reconcile(dots(&[10.0]), &linear(1.0), 0.5);
        match s.visual(0, 0.5).map(|v| v.geometry) {
            Some(Geometry::Circle { radius, .. }) => assert_eq!(radius, 0.0),
            other => panic!("unexpected {:?}", other),
        }
        assert!(s.settle(1.0));
        assert!(!s.settle(1.5));
    }

    #[test]
    fn test_retarget_keeps_running_transition() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0]), &linear(1.0), 0.0);
        s.retarget(dots(&[100.0]));
        assert!(s.is_animating(0.5));
        match s.visual(0, 0.5).map(|v| v.geometry) {
            Some(Geometry::Circle { center, radius }) => {
                assert_eq!(radius, 2.5);
                assert_eq!(center.x, 55.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.visual(0, 2.0), Some(dots(&[100.0])[0].visual.clone()));
    }

    #[test]
    fn test_retarget_at_rest_snaps() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0]), &linear(1.0), 0.0);
        s.settle(5.0);
        s.retarget(dots(&[100.0]));
        assert!(!s.is_animating(5.0));
        assert_eq!(s.visual(0, 5.0), Some(dots(&[100.0])[0].visual.clone()));
    }

    #[test]
    fn test_morph_starts_from_screen_state() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0]), &linear(0.0), 0.0);
        s.settle(1.0);
        s.morph(dots(&[30.0]), &linear(1.0), 1.0);
        match s.visual(0, 1.5).map(|v| v.geometry) {
            Some(Geometry::Circle { center, radius }) => {
                assert_eq!(center.x, 20.0);
                assert_eq!(radius, 5.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0, 12.0, 200.0]), &linear(0.0), 0.0);
        assert_eq!(s.hit_test(pos2(11.0, 50.0), 0.0, 1.0), Some(1));
        assert_eq!(s.hit_test(pos2(200.0, 50.0), 0.0, 1.0), Some(2));
        assert_eq!(s.hit_test(pos2(100.0, 50.0), 0.0, 1.0), None);
    }

    #[test]
    fn test_hit_test_skips_marks_not_yet_entered() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        let anim = AnimationSpec::new(1.0, 0.5).with_easing(Easing::Linear);
        s.reconcile(dots(&[10.0, 100.0]), &anim, 0.0);
        assert_eq!(s.hit_test(pos2(10.0, 50.0), 2.0, 0.0), None);
        assert_eq!(s.hit_test(pos2(100.0, 50.0), 2.0, 0.4), None);
        assert_eq!(s.hit_test(pos2(10.0, 50.0), 2.0, 0.4), Some(0));
        assert_eq!(s.hit_test(pos2(100.0, 50.0), 2.0, 2.0), Some(1));
    }

    #[test]
    fn test_hit_test_skips_transparent_marks() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        let fade = linear(1.0).with_entrance(crate::chart::Entrance::Fade);
        s.reconcile(dots(&[10.0]), &fade, 0.0);
        assert_eq!(s.hit_test(pos2(10.0, 50.0), 0.0, 0.0), None);
        assert_eq!(s.hit_test(pos2(10.0, 50.0), 0.0, 0.5), Some(0));
    }

    #[test]
    fn test_highlight_changes_target_until_cleared() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(0.0, 0.0, 0.0, 0.0));
        s.reconcile(dots(&[10.0]), &linear(0.0), 0.0);
        let big = MarkVisual::new(Geometry::Circle { center: pos2(10.0, 50.0), radius: 8.0 }, Color32::RED);
        s.set_highlight(0, Some(big.clone()));
        assert_eq!(s.visual(0, 1.0), Some(big));
        s.set_highlight(0, None);
        assert_eq!(s.visual(0, 1.0), Some(dots(&[10.0])[0].visual.clone()));
    }

    #[test]
    fn test_clear_empties_marks_and_axes() {
        let mut s = DrawingSurface::acquire(frame(), Margin::new(10.0, 10.0, 10.0, 10.0));
        s.reconcile(dots(&[10.0]), &linear(0.0), 0.0);
        s.clear();
        assert!(s.is_empty());
        assert!(s.axes().is_empty());
        assert_eq!(s.plot(), Rect::from_min_max(pos2(10.0, 10.0), pos2(390.0, 290.0)));
    }
}
