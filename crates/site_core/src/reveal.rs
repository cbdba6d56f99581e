//! Scroll-triggered reveals for page sections and staggered card grids.
//!
//! A block stays hidden until the renderer first reports it inside the viewport,
//! then plays its reveal once. Scrolling it out again does not hide it.

use std::{collections::HashMap, time::Duration};

use shared::domain::InstanceId;

use crate::{easing::Easing, transition::PageInstance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub duration: Duration,
    pub easing: Easing,
    /// Starting offset below the resting position, in logical pixels.
    pub rise: f32,
    pub from_scale: f32,
}

impl RevealStyle {
    /// Whole sections fade up as they scroll into view.
    pub const SECTION: RevealStyle = RevealStyle {
        duration: Duration::from_millis(600),
        easing: Easing::EaseOut,
        rise: 50.0,
        from_scale: 1.0,
    };

    /// Cards inside a staggered grid; a soft spring settled into a tween.
    pub const STAGGER_ITEM: RevealStyle = RevealStyle {
        duration: Duration::from_millis(700),
        easing: Easing::EaseOut,
        rise: 30.0,
        from_scale: 0.95,
    };

    fn hidden(&self) -> RevealVisual {
        RevealVisual {
            opacity: 0.0,
            offset_y: self.rise,
            scale: self.from_scale,
        }
    }
}

pub const STAGGER_DELAY_CHILDREN: Duration = Duration::from_millis(200);
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Delay before the `index`-th item of a staggered grid starts revealing.
pub fn stagger_delay(index: usize) -> Duration {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    STAGGER_DELAY_CHILDREN.saturating_add(STAGGER_STEP.saturating_mul(steps))
}

/// One revealable block: a section of a mounted page instance, or an item in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey {
    pub instance: InstanceId,
    pub section: &'static str,
    pub item: usize,
}

impl RevealKey {
    pub fn section(instance: InstanceId, section: &'static str) -> Self {
        Self {
            instance,
            section,
            item: 0,
        }
    }

    pub fn item(instance: InstanceId, section: &'static str, item: usize) -> Self {
        Self {
            instance,
            section,
            item: item + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisual {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl RevealVisual {
    pub const SHOWN: RevealVisual = RevealVisual {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy)]
enum Reveal {
    Running { starts_at: Duration, style: RevealStyle },
    Done,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    reveals: HashMap<RevealKey, Reveal>,
    instant: bool,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// With reduced motion every block shows at rest, and running reveals finish.
    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
        if instant {
            for reveal in self.reveals.values_mut() {
                *reveal = Reveal::Done;
            }
        }
    }

    /// Reports whether `key` is in view this frame and returns how to draw it.
    pub fn observe(
        &mut self,
        key: RevealKey,
        style: RevealStyle,
        delay: Duration,
        in_view: bool,
        now: Duration,
    ) -> RevealVisual {
        if let Some(reveal) = self.reveals.get(&key) {
            return sample(*reveal, now);
        }
        if self.instant {
            self.reveals.insert(key, Reveal::Done);
            return RevealVisual::SHOWN;
        }
        if !in_view {
            return style.hidden();
        }
        let reveal = Reveal::Running {
            starts_at: now.saturating_add(delay),
            style,
        };
        self.reveals.insert(key, reveal);
        sample(reveal, now)
    }

    pub fn is_revealed(&self, key: &RevealKey) -> bool {
        self.reveals.contains_key(key)
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.reveals.values().any(|reveal| match reveal {
            Reveal::Running { starts_at, style } => now < starts_at.saturating_add(style.duration),
            Reveal::Done => false,
        })
    }

    /// Forgets blocks of unmounted instances; a page mounted again reveals afresh.
    pub fn retain_instances(&mut self, instances: &[PageInstance]) {
        self.reveals
            .retain(|key, _| instances.iter().any(|instance| instance.id() == key.instance));
    }
}

fn sample(reveal: Reveal, now: Duration) -> RevealVisual {
    let Reveal::Running { starts_at, style } = reveal else {
        return RevealVisual::SHOWN;
    };
    if now < starts_at {
        return style.hidden();
    }
    if style.duration.is_zero() {
        return RevealVisual::SHOWN;
    }
    let elapsed = now - starts_at;
    let eased = style
        .easing
        .apply(elapsed.as_secs_f32() / style.duration.as_secs_f32());
    RevealVisual {
        opacity: eased,
        offset_y: style.rise * (1.0 - eased),
        scale: style.from_scale + (1.0 - style.from_scale) * eased,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Settings, shell::SiteShell};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn key(section: &'static str) -> RevealKey {
        RevealKey::section(InstanceId(900), section)
    }

    #[test]
    fn hidden_until_first_seen_then_plays_once() {
        let mut tracker = RevealTracker::new();
        let hero = key("hero");

        let hidden = tracker.observe(hero, RevealStyle::SECTION, Duration::ZERO, false, ms(0));
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, 50.0);
        assert!(!tracker.is_revealed(&hero));

        let start = tracker.observe(hero, RevealStyle::SECTION, Duration::ZERO, true, ms(100));
        assert_eq!(start.opacity, 0.0);
        assert!(tracker.is_animating(ms(100)));

        let midway = tracker.observe(hero, RevealStyle::SECTION, Duration::ZERO, true, ms(400));
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.offset_y > 0.0 && midway.offset_y < 50.0);

        // Scrolled back out of view: stays revealed.
        let after = tracker.observe(hero, RevealStyle::SECTION, Duration::ZERO, false, ms(700));
        assert_eq!(after, RevealVisual::SHOWN);
        assert!(!tracker.is_animating(ms(700)));
    }

    #[test]
    fn delay_holds_the_block_hidden() {
        let mut tracker = RevealTracker::new();
        let cta = key("cta");
        let delay = ms(300);

        let early = tracker.observe(cta, RevealStyle::SECTION, delay, true, ms(0));
        assert_eq!(early.opacity, 0.0);
        let still = tracker.observe(cta, RevealStyle::SECTION, delay, true, ms(299));
        assert_eq!(still.opacity, 0.0);
        let moving = tracker.observe(cta, RevealStyle::SECTION, delay, true, ms(450));
        assert!(moving.opacity > 0.0);
        assert!(tracker.is_animating(ms(899)));
        assert!(!tracker.is_animating(ms(900)));
    }

    #[test]
    fn stagger_items_start_in_order() {
        assert_eq!(stagger_delay(0), ms(200));
        assert_eq!(stagger_delay(1), ms(350));
        assert_eq!(stagger_delay(3), ms(650));

        let mut tracker = RevealTracker::new();
        let instance = InstanceId(4);
        let now = ms(500);
        let visuals: Vec<_> = (0..3)
            .map(|i| {
                tracker.observe(
                    RevealKey::item(instance, "pricing", i),
                    RevealStyle::STAGGER_ITEM,
                    stagger_delay(i),
                    true,
                    Duration::ZERO,
                );
                tracker.observe(
                    RevealKey::item(instance, "pricing", i),
                    RevealStyle::STAGGER_ITEM,
                    stagger_delay(i),
                    true,
                    now,
                )
            })
            .collect();
        assert!(visuals[0].opacity > visuals[1].opacity);
        assert!(visuals[1].opacity > visuals[2].opacity);
        assert!(visuals[2].scale < 1.0 && visuals[2].scale >= 0.95);
    }

    #[test]
    fn instant_mode_shows_everything_at_rest() {
        let mut tracker = RevealTracker::new();
        let faq = key("faq");
        tracker.observe(faq, RevealStyle::SECTION, Duration::ZERO, true, ms(0));
        assert!(tracker.is_animating(ms(10)));

        tracker.set_instant(true);
        assert!(!tracker.is_animating(ms(10)));
        assert_eq!(
            tracker.observe(faq, RevealStyle::SECTION, Duration::ZERO, true, ms(10)),
            RevealVisual::SHOWN
        );
        let unseen = key("below-fold");
        assert_eq!(
            tracker.observe(unseen, RevealStyle::SECTION, ms(400), false, ms(10)),
            RevealVisual::SHOWN
        );
    }

    #[test]
    fn unmounted_instances_are_forgotten() {
        let mut shell = SiteShell::new(&Settings::default());
        let live = shell.live_instance().expect("home").id();

        let mut tracker = RevealTracker::new();
        let hero = RevealKey::section(live, "hero");
        tracker.observe(hero, RevealStyle::SECTION, Duration::ZERO, true, ms(0));
        let stale = key("stale");
        tracker.observe(stale, RevealStyle::SECTION, Duration::ZERO, true, ms(0));

        tracker.retain_instances(shell.instances());
        assert!(tracker.is_revealed(&hero));
        assert!(!tracker.is_revealed(&stale));
    }
}
