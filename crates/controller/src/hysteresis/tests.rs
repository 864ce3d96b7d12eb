use super::*;
use crate::scheduler::manual::ManualScheduler;

const WINDOW: Duration = Duration::from_millis(250);

fn ms(millis: u64) -> Duration {
	Duration::from_millis(millis)
}

fn fire_all(hysteresis: &mut Hysteresis, scheduler: &ManualScheduler, by: Duration) {
	for id in scheduler.advance(by) {
		hysteresis.timer_fired(id);
	}
}

#[test]
fn arming_opens_the_window() {
	let mut scheduler = ManualScheduler::new();
	let mut hysteresis = Hysteresis::new(WINDOW);

	assert!(!hysteresis.is_armed(Channel::Modifier));
	hysteresis.arm(Channel::Modifier, &mut scheduler);
	assert!(hysteresis.is_armed(Channel::Modifier));
	assert!(!hysteresis.is_armed(Channel::Escape));
}

#[test]
fn window_elapses_to_idle() {
	let scheduler = ManualScheduler::new();
	let mut hysteresis = Hysteresis::new(WINDOW);

	hysteresis.arm(Channel::Escape, &mut scheduler.clone());
	fire_all(&mut hysteresis, &scheduler, ms(300));
	assert!(!hysteresis.is_armed(Channel::Escape));
	assert_eq!(scheduler.pending(), 0);
}

#[test]
fn rearming_restarts_rather_than_fires_early() {
	let scheduler = ManualScheduler::new();
	let mut handle = scheduler.clone();
	let mut hysteresis = Hysteresis::new(WINDOW);

	hysteresis.arm(Channel::Modifier, &mut handle);
	fire_all(&mut hysteresis, &scheduler, ms(200));

	// Re-arm at t=200; the first timer (deadline 250) was cancelled.
	hysteresis.arm(Channel::Modifier, &mut handle);
	fire_all(&mut hysteresis, &scheduler, ms(200));
	assert!(hysteresis.is_armed(Channel::Modifier), "restarted window is still open at t=400");

	fire_all(&mut hysteresis, &scheduler, ms(100));
	assert!(!hysteresis.is_armed(Channel::Modifier), "restarted window closed at t=500");
}

#[test]
fn other_channel_is_not_displaced() {
	let scheduler = ManualScheduler::new();
	let mut handle = scheduler.clone();
	let mut hysteresis = Hysteresis::new(WINDOW);

	hysteresis.arm(Channel::Escape, &mut handle);
	hysteresis.arm(Channel::Modifier, &mut handle);
	assert!(hysteresis.is_armed(Channel::Escape));
	assert!(!hysteresis.is_armed(Channel::Modifier));
	assert_eq!(scheduler.pending(), 1);
}

#[test]
fn stale_timer_ids_are_ignored() {
	let scheduler = ManualScheduler::new();
	let mut handle = scheduler.clone();
	let mut hysteresis = Hysteresis::new(WINDOW);

	hysteresis.arm(Channel::Modifier, &mut handle);
	fire_all(&mut hysteresis, &scheduler, ms(100));
	hysteresis.arm(Channel::Modifier, &mut handle);

	// The superseded timer's id must not close the restarted window.
	hysteresis.timer_fired(TimerId::from_raw(0));
	assert!(hysteresis.is_armed(Channel::Modifier));
}

#[test]
fn cancel_clears_window_and_timer() {
	let scheduler = ManualScheduler::new();
	let mut handle = scheduler.clone();
	let mut hysteresis = Hysteresis::new(WINDOW);

	hysteresis.arm(Channel::Escape, &mut handle);
	hysteresis.cancel(&mut handle);
	assert!(!hysteresis.is_armed(Channel::Escape));
	assert_eq!(scheduler.pending(), 0);
}
