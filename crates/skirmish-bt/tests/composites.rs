use skirmish_bt::{Action, BtNode, BtStatus, Condition, Selector, Sequence};
use skirmish_core::TickContext;

#[derive(Debug, Default)]
struct Probe {
    cond_evals: u32,
    action_ticks: u32,
    side_ticks: u32,
    flag: bool,
}

fn ctx(frame: u64) -> TickContext {
    TickContext::new(frame, 0.016)
}

#[test]
fn sequence_resumes_at_the_running_child() {
    // [Condition(true), Action(Running, then Success)]
    let cond = Condition::new("Gate", |_t: &TickContext,p: &mut Probe| {
        p.cond_evals += 1;
        true
    });
    let action = Action::new("Work", |_t: &TickContext,p: &mut Probe| {
        p.action_ticks += 1;
        if p.action_ticks >= 2 {
            BtStatus::Success
        } else {
            BtStatus::Running
        }
    });
    let mut seq: Sequence<Probe> = Sequence::new(vec![Box::new(cond), Box::new(action)]);
    let mut probe = Probe::default();

    assert_eq!(seq.tick(&ctx(1), &mut probe), BtStatus::Running);
    assert_eq!(probe.cond_evals, 1);

    // Second tick re-enters at the running child: the guard is NOT re-run.
    assert_eq!(seq.tick(&ctx(2), &mut probe), BtStatus::Success);
    assert_eq!(probe.cond_evals, 1);
    assert_eq!(probe.action_ticks, 2);

    // Cursor rewound: a third tick starts over from the guard.
    probe.action_ticks = 1; // next action tick reports Success again
    assert_eq!(seq.tick(&ctx(3), &mut probe), BtStatus::Success);
    assert_eq!(probe.cond_evals, 2);
}

#[test]
fn sequence_failure_rewinds_the_cursor() {
    let fail = Action::new("Doomed", |_t: &TickContext,p: &mut Probe| {
        p.action_ticks += 1;
        BtStatus::Failure
    });
    let late = Condition::new("Unreached", |_t: &TickContext,p: &mut Probe| {
        p.cond_evals += 1;
        true
    });
    let mut seq: Sequence<Probe> = Sequence::new(vec![Box::new(fail), Box::new(late)]);
    let mut probe = Probe::default();

    assert_eq!(seq.tick(&ctx(1), &mut probe), BtStatus::Failure);
    assert_eq!(seq.tick(&ctx(2), &mut probe), BtStatus::Failure);
    // Both ticks started from child 0; the second child never ran.
    assert_eq!(probe.action_ticks, 2);
    assert_eq!(probe.cond_evals, 0);
}

#[test]
fn selector_reevaluates_priority_every_tick() {
    // [Sequence(Condition(flag), Action(Success)), Action(Running)]
    let guard = Condition::new("Flag", |_t: &TickContext,p: &mut Probe| p.flag);
    let win = Action::new("Win", |_t: &TickContext,_p: &mut Probe| BtStatus::Success);
    let high: Sequence<Probe> = Sequence::new(vec![Box::new(guard), Box::new(win)]).named("High");
    let low = Action::new("Low", |_t: &TickContext,p: &mut Probe| {
        p.side_ticks += 1;
        BtStatus::Running
    });
    let mut sel: Selector<Probe> = Selector::new(vec![Box::new(high), Box::new(low)]);
    let mut probe = Probe::default();

    assert_eq!(sel.tick(&ctx(1), &mut probe), BtStatus::Running);
    assert_eq!(sel.tick(&ctx(2), &mut probe), BtStatus::Running);
    assert_eq!(probe.side_ticks, 2);

    // Higher-priority branch becomes viable: it interrupts the running one.
    probe.flag = true;
    assert_eq!(sel.tick(&ctx(3), &mut probe), BtStatus::Success);
    assert_eq!(probe.side_ticks, 2); // the running branch was not ticked again
}

#[test]
fn selector_fails_only_when_every_child_fails() {
    let a = Condition::new("A", |_t: &TickContext,_p: &mut Probe| false);
    let b = Condition::new("B", |_t: &TickContext,_p: &mut Probe| false);
    let mut sel: Selector<Probe> = Selector::new(vec![Box::new(a), Box::new(b)]);
    let mut probe = Probe::default();
    assert_eq!(sel.tick(&ctx(1), &mut probe), BtStatus::Failure);
}

#[test]
fn reset_rewinds_a_mid_flight_sequence() {
    let gate = Condition::new("Gate", |_t: &TickContext,p: &mut Probe| {
        p.cond_evals += 1;
        true
    });
    let stall = Action::new("Stall", |_t: &TickContext,_p: &mut Probe| BtStatus::Running);
    let mut seq: Sequence<Probe> = Sequence::new(vec![Box::new(gate), Box::new(stall)]);
    let mut probe = Probe::default();

    assert_eq!(seq.tick(&ctx(1), &mut probe), BtStatus::Running);
    seq.reset();

    // After reset the guard runs again instead of resuming at the stall.
    assert_eq!(seq.tick(&ctx(2), &mut probe), BtStatus::Running);
    assert_eq!(probe.cond_evals, 2);
}
