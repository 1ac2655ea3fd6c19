use super::*;

// =============================================================
// Lifecycle under a fake clock
// =============================================================

/// Armed timers as `(due, registration order, toast id, step)`.
#[derive(Default)]
struct FakeTimers {
    now: u64,
    seq: u64,
    pending: Vec<(u64, u64, u64, ToastStep)>,
}

impl FakeTimers {
    /// Push a toast and arm its steps the way the notifier does.
    fn show(&mut self, stack: &mut ToastStack, timing: &ToastTiming, message: &str) -> u64 {
        let id = stack.push(message, ToastVariant::Info);
        for (delay, step) in schedule(timing) {
            self.pending.push((self.now + u64::from(delay), self.seq, id, step));
            self.seq += 1;
        }
        id
    }

    fn advance_to(&mut self, target: u64, stack: &mut ToastStack) {
        self.pending.sort_by_key(|(due, seq, _, _)| (*due, *seq));
        let split = self.pending.partition_point(|(due, _, _, _)| *due <= target);
        for (_, _, id, step) in self.pending.drain(..split) {
            stack.apply(id, step);
        }
        self.now = target;
    }
}

#[test]
fn schedule_orders_steps_by_delay() {
    let timing = ToastTiming::default();
    assert_eq!(
        schedule(&timing),
        [(100, ToastStep::Show), (3_000, ToastStep::Hide), (3_300, ToastStep::Remove)]
    );
}

#[test]
fn schedule_follows_custom_timing() {
    let timing = ToastTiming { enter_delay_ms: 50, visible_ms: 1_000, exit_ms: 200 };
    let delays = schedule(&timing).map(|(delay, _)| delay);
    assert_eq!(delays, [50, 1_000, 1_200]);
}

#[test]
fn toast_removed_within_lifetime_under_fake_time() {
    let timing = ToastTiming::default();
    let mut timers = FakeTimers::default();
    let mut stack = ToastStack::default();
    let id = timers.show(&mut stack, &timing, "Copiado para clipboard!");

    assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Entering));
    timers.advance_to(100, &mut stack);
    assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Shown));
    timers.advance_to(3_000, &mut stack);
    assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));
    timers.advance_to(3_299, &mut stack);
    assert!(stack.get(id).is_some());
    timers.advance_to(3_400, &mut stack);
    assert!(stack.is_empty());
}

#[test]
fn concurrent_toasts_expire_independently() {
    let timing = ToastTiming::default();
    let mut timers = FakeTimers::default();
    let mut stack = ToastStack::default();
    let first = timers.show(&mut stack, &timing, "one");
    timers.advance_to(1_000, &mut stack);
    let second = timers.show(&mut stack, &timing, "two");
    assert_eq!(stack.toasts().len(), 2);

    timers.advance_to(3_400, &mut stack);
    assert!(stack.get(first).is_none());
    assert_eq!(stack.get(second).map(|t| t.phase), Some(ToastPhase::Shown));

    timers.advance_to(4_400, &mut stack);
    assert!(stack.is_empty());
}

#[test]
fn steps_on_a_removed_toast_are_ignored() {
    let mut stack = ToastStack::default();
    let id = stack.push("gone", ToastVariant::Warning);
    stack.apply(id, ToastStep::Remove);
    stack.apply(id, ToastStep::Show);
    assert!(stack.is_empty());
}

// =============================================================
// ToastStack bookkeeping
// =============================================================

#[test]
fn ids_are_unique_and_increasing() {
    let mut stack = ToastStack::default();
    let a = stack.push("a", ToastVariant::Info);
    stack.remove(a);
    let b = stack.push("b", ToastVariant::Info);
    assert!(b > a);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut stack = ToastStack::default();
    stack.push("a", ToastVariant::Info);
    stack.set_phase(99, ToastPhase::Shown);
    stack.remove(99);
    assert_eq!(stack.toasts()[0].phase, ToastPhase::Entering);
}

// =============================================================
// ToastVariant / ToastPhase
// =============================================================

#[test]
fn variant_parse_falls_back_to_info() {
    assert_eq!(ToastVariant::parse("success"), ToastVariant::Success);
    assert_eq!(ToastVariant::parse("error"), ToastVariant::Error);
    assert_eq!(ToastVariant::parse("warning"), ToastVariant::Warning);
    assert_eq!(ToastVariant::parse("loud"), ToastVariant::Info);
}

#[test]
fn variant_class_name() {
    assert_eq!(ToastVariant::default().class_name(), "toast toast-info");
    assert_eq!(ToastVariant::Error.class_name(), "toast toast-error");
}

#[test]
fn only_shown_toasts_are_on_screen() {
    assert_eq!(ToastPhase::Shown.transform(), "translateX(0)");
    assert_eq!(ToastPhase::Entering.transform(), "translateX(100%)");
    assert_eq!(ToastPhase::Leaving.transform(), "translateX(100%)");
}
