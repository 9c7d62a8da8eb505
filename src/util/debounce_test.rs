use super::*;

#[test]
fn gate_only_latest_ticket_is_current() {
    let gate = DebounceGate::default();
    let first = gate.arm();
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn burst_of_keystrokes_fires_once() {
    // Simulate five keystrokes inside one debounce window: every timer wakes
    // up, but only the one armed by the last keystroke may run.
    let gate = DebounceGate::default();
    let tickets: Vec<u64> = (0..5).map(|_| gate.arm()).collect();
    let fired = tickets.iter().filter(|t| gate.is_current(**t)).count();
    assert_eq!(fired, 1);
    assert!(gate.is_current(*tickets.last().unwrap()));
}

#[test]
fn gate_clones_share_generation() {
    let gate = DebounceGate::default();
    let clone = gate.clone();
    let ticket = gate.arm();
    assert!(clone.is_current(ticket));
    clone.arm();
    assert!(!gate.is_current(ticket));
}

#[test]
fn debouncer_reports_delay() {
    assert_eq!(Debouncer::new(300).delay_ms(), 300);
}

#[test]
fn cancel_supersedes_pending_ticket() {
    let debouncer = Debouncer::new(300);
    let ticket = debouncer.gate.arm();
    debouncer.cancel();
    assert!(!debouncer.gate.is_current(ticket));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn schedule_runs_immediately_outside_browser() {
    use std::cell::Cell;
    use std::rc::Rc;

    let debouncer = Debouncer::new(300);
    let count = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let count = Rc::clone(&count);
        debouncer.schedule(move || count.set(count.get() + 1));
    }
    assert_eq!(count.get(), 3);
}
