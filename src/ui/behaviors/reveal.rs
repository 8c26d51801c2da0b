//! Scroll-triggered entrance animations driven by `core::reveal`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::Element;

use super::{dom, frame};
use crate::core::reveal::{
    Playback, Pose, RevealAnimation, RevealMode, RevealPlan, TriggerSource, landing_reveals,
};
use crate::core::trigger::ToggleAction;
use crate::core::{PageResult, ScrollTrigger, TriggerEvent};

/// One element and its own playhead
struct Animated {
    element: Element,
    animation: RevealAnimation,
    playback: RefCell<Playback>,
    running: Cell<bool>,
}

impl Animated {
    fn new(element: Element, animation: RevealAnimation) -> Rc<Self> {
        Rc::new(Self {
            element,
            playback: RefCell::new(Playback::new(animation.total_ms())),
            animation,
            running: Cell::new(false),
        })
    }

    fn show(&self, pose: Pose) {
        let _ = dom::set_style(&self.element, "opacity", &pose.opacity.to_string());
        let _ = dom::set_style(&self.element, "transform", &pose.transform());
    }

    fn show_playhead(&self) {
        self.show(self.animation.pose_at(self.playback.borrow().time_ms()));
    }

    fn clear(&self) {
        let _ = dom::clear_style(&self.element, "opacity");
        let _ = dom::clear_style(&self.element, "transform");
    }

    /// Start a frame loop unless one is already driving this element.
    fn run(self: &Rc<Self>) {
        if self.running.replace(true) {
            return;
        }

        let animated = self.clone();
        let mut last_frame: Option<f64> = None;
        let started = frame::run_frames(move |now| {
            let delta = last_frame.map_or(0.0, |last| now - last);
            last_frame = Some(now);

            let playing = {
                let mut playback = animated.playback.borrow_mut();
                if !playback.is_playing() {
                    // stopped from outside, e.g. reset on leaving back; keep its styles
                    animated.running.set(false);
                    return false;
                }
                playback.advance(delta)
            };
            animated.show_playhead();
            if !playing {
                animated.running.set(false);
            }
            playing
        });

        if let Err(err) = started {
            self.running.set(false);
            leptos::logging::warn!("Reveal animation: {}", err);
        }
    }
}

/// A scroll trigger and the elements it animates
struct Reveal {
    trigger_element: Element,
    trigger: RefCell<ScrollTrigger>,
    mode: RevealMode,
    animated: Vec<Rc<Animated>>,
}

impl Reveal {
    fn new(trigger_element: Element, plan: &RevealPlan, animated: Vec<Rc<Animated>>) -> Self {
        if let RevealMode::Toggle {
            immediate_render: true,
            ..
        } = plan.mode
        {
            for item in &animated {
                item.show_playhead();
            }
        }

        Self {
            trigger_element,
            trigger: RefCell::new(ScrollTrigger::new(plan.start, plan.end)),
            mode: plan.mode,
            animated,
        }
    }

    fn update(&self, viewport_height: f64) {
        let rect = dom::rect_of(&self.trigger_element);
        let events = self
            .trigger
            .borrow_mut()
            .update(rect.top, rect.height, viewport_height);

        match self.mode {
            RevealMode::Scrub => {
                let progress = self
                    .trigger
                    .borrow()
                    .progress(rect.top, rect.height, viewport_height);
                for item in &self.animated {
                    item.show(item.animation.pose_at_progress(progress));
                }
            }
            RevealMode::Toggle {
                actions,
                clear_on_leave_back,
                ..
            } => {
                for event in events {
                    let action = actions.action_for(event);
                    for item in &self.animated {
                        item.playback.borrow_mut().apply(action);

                        if clear_on_leave_back && event == TriggerEvent::LeaveBack {
                            item.clear();
                        } else if item.playback.borrow().is_playing() {
                            item.run();
                        } else if action != ToggleAction::None {
                            item.show_playhead();
                        }
                    }
                }
            }
        }
    }
}

/// Build the reveals whose trigger and targets exist on this page
fn build(plan: &RevealPlan) -> PageResult<Vec<Reveal>> {
    let mut reveals = Vec::new();

    match plan.source {
        TriggerSource::Element(selector) => {
            let trigger_element = dom::query(selector)?;
            let mut animated = Vec::new();
            for target in &plan.targets {
                for (index, element) in dom::query_all(target.selector)?.into_iter().enumerate() {
                    animated.push(Animated::new(element, target.animation_for(index)));
                }
            }
            if !animated.is_empty() {
                reveals.push(Reveal::new(trigger_element, plan, animated));
            }
        }
        TriggerSource::EachTarget => {
            for target in &plan.targets {
                for (index, element) in dom::query_all(target.selector)?.into_iter().enumerate() {
                    let animated = vec![Animated::new(element.clone(), target.animation_for(index))];
                    reveals.push(Reveal::new(element, plan, animated));
                }
            }
        }
    }

    Ok(reveals)
}

/// Attach the landing page entrance animations.
pub fn init() -> PageResult<()> {
    let mut reveals = Vec::new();
    for plan in landing_reveals()? {
        match build(&plan) {
            Ok(built) => reveals.extend(built),
            Err(err) if err.is_missing_markup() => {
                leptos::logging::log!("Reveal skipped: {}", err);
            }
            Err(err) => return Err(err),
        }
    }
    if reveals.is_empty() {
        return Ok(());
    }

    let reveals = Rc::new(reveals);
    let window = dom::window()?;

    let update_all = {
        let reveals = reveals.clone();
        move || {
            let Ok((_, height)) = dom::window().and_then(|window| dom::viewport(&window)) else {
                return;
            };
            for reveal in reveals.iter() {
                reveal.update(height);
            }
        }
    };

    // one update per frame however many scroll events arrive
    let ticking = Rc::new(Cell::new(false));
    for event in ["scroll", "resize"] {
        let ticking = ticking.clone();
        let update_all = update_all.clone();
        dom::listen(&window, event, move |_| {
            if ticking.replace(true) {
                return;
            }
            let ticking = ticking.clone();
            let update_all = update_all.clone();
            let scheduled = frame::next_frame(move || {
                ticking.set(false);
                update_all();
            });
            if scheduled.is_err() {
                ticking.set(false);
            }
        })?;
    }

    update_all();
    Ok(())
}
