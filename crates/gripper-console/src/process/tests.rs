use std::cell::RefCell;
use std::rc::Rc;

use gripper_common::{ConsoleError, ConsoleOutputEvent, EventBus, HandlerRegistration};

use super::*;

fn collect(bus: &EventBus) -> (Rc<RefCell<Vec<ConsoleOutputEvent>>>, HandlerRegistration) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let reg = bus.subscribe(move |event: &ConsoleOutputEvent| {
        sink.borrow_mut().push(event.clone());
        Ok(())
    });
    (seen, reg)
}

fn joined(events: &[ConsoleOutputEvent], error: bool) -> String {
    events
        .iter()
        .filter(|e| e.is_error() == error)
        .map(|e| e.output())
        .collect()
}

#[test]
fn options_follow_config() {
    let config = gripper_config::schema::ConsoleConfig {
        shell: "/bin/bash".into(),
        channel_capacity: 16,
    };
    let options = ProcessOptions::from_config(&config).working_dir("/tmp");
    assert_eq!(options.shell, "/bin/bash");
    assert_eq!(options.channel_capacity, 16);
    assert_eq!(options.working_dir.as_deref(), Some(std::path::Path::new("/tmp")));
}

#[test]
fn new_process_is_idle() {
    let process = ConsoleProcess::new("echo hi", ProcessOptions::default());
    assert!(!process.is_started());
    assert_eq!(process.command(), "echo hi");
    assert!(!process.handle().as_str().is_empty());
}

#[test]
fn handles_are_unique() {
    let a = ConsoleProcess::new("true", ProcessOptions::default());
    let b = ConsoleProcess::new("true", ProcessOptions::default());
    assert_ne!(a.handle(), b.handle());
}

#[tokio::test]
async fn input_before_start_is_queued() {
    let mut process = ConsoleProcess::new("cat", ProcessOptions::default());
    process.enqueue_input("one\n").unwrap();
    process.enqueue_input("two\n").unwrap();
    assert_eq!(process.pending_input(), "one\ntwo\n");
}

#[tokio::test]
async fn interrupt_before_start_fails() {
    let mut process = ConsoleProcess::new("true", ProcessOptions::default());
    assert!(matches!(process.interrupt(), Err(ConsoleError::NotStarted(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn stdout_and_stderr_are_separated() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("echo out; echo err 1>&2", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();
    let exit = pump.run_to_exit(&bus).await.unwrap();

    assert!(exit.success());
    assert!(!exit.interrupted);
    let events = seen.borrow();
    assert_eq!(joined(&events, false), "out\n");
    assert_eq!(joined(&events, true), "err\n");
}

#[cfg(unix)]
#[tokio::test]
async fn exit_code_is_reported() {
    let bus = EventBus::new();
    let mut process = ConsoleProcess::new("exit 3", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();

    let exit = pump.run_to_exit(&bus).await.unwrap();
    assert_eq!(exit.code, Some(3));
    assert!(!exit.success());
    assert_eq!(pump.exit(), Some(exit));

    // Already exited: returns the recorded status.
    assert_eq!(pump.run_to_exit(&bus).await.unwrap(), exit);
}

#[cfg(unix)]
#[tokio::test]
async fn queued_input_reaches_the_process() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("read line; echo got:$line", ProcessOptions::default());
    process.enqueue_input("hello\n").unwrap();
    let mut pump = process.start().await.unwrap();
    assert_eq!(process.pending_input(), "");

    pump.run_to_exit(&bus).await.unwrap();
    assert_eq!(joined(&seen.borrow(), false), "got:hello\n");
}

#[cfg(unix)]
#[tokio::test]
async fn input_after_start_is_written() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("cat", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();
    process.enqueue_input("echoed\n").unwrap();
    process.close_input();

    let exit = pump.run_to_exit(&bus).await.unwrap();
    assert!(exit.success());
    assert_eq!(joined(&seen.borrow(), false), "echoed\n");
}

#[cfg(unix)]
#[tokio::test]
async fn input_after_close_fails() {
    let mut process = ConsoleProcess::new("cat", ProcessOptions::default());
    let _pump = process.start().await.unwrap();
    process.close_input();
    assert!(matches!(
        process.enqueue_input("late\n"),
        Err(ConsoleError::Io(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn interrupt_stops_the_process() {
    let bus = EventBus::new();
    let mut process = ConsoleProcess::new("exec sleep 30", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();

    process.interrupt().unwrap();
    let exit = pump.run_to_exit(&bus).await.unwrap();
    assert!(exit.interrupted);
    assert!(!exit.success());

    // A second interrupt is a no-op.
    assert!(process.interrupt().is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn start_twice_fails() {
    let mut process = ConsoleProcess::new("true", ProcessOptions::default());
    let _pump = process.start().await.unwrap();
    assert!(matches!(
        process.start().await,
        Err(ConsoleError::AlreadyStarted(_))
    ));
}

#[tokio::test]
async fn missing_shell_fails_to_spawn() {
    let options = ProcessOptions {
        shell: "/definitely/not/a/shell".into(),
        ..ProcessOptions::default()
    };
    let mut process = ConsoleProcess::new("true", options);
    let err = process.start().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Spawn { .. }));
    assert!(!process.is_started());
}

#[cfg(unix)]
#[tokio::test]
async fn drain_without_output_is_empty() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("exec sleep 30", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();
    assert_eq!(pump.drain(&bus), 0);
    assert!(seen.borrow().is_empty());
    assert!(pump.exit().is_none());
}

#[cfg(unix)]
#[tokio::test]
async fn drain_delivers_buffered_output() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("echo ready", ProcessOptions::default());
    let mut pump = process.start().await.unwrap();

    let mut delivered = 0;
    for _ in 0..500 {
        delivered += pump.drain(&bus);
        if pump.exit().is_some() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    assert!(pump.exit().is_some_and(|exit| exit.success()));
    assert!(delivered >= 1);
    assert_eq!(joined(&seen.borrow(), false), "ready\n");
}

#[cfg(unix)]
#[tokio::test]
async fn large_queued_input_does_not_stall_start() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);
    let options = ProcessOptions {
        channel_capacity: 1,
        ..ProcessOptions::default()
    };
    let input = "x".repeat(1 << 20);

    let mut process = ConsoleProcess::new("cat", options);
    process.enqueue_input(&input).unwrap();

    let started = tokio::time::timeout(std::time::Duration::from_secs(5), process.start()).await;
    let mut pump = started.expect("start blocked on stdin").unwrap();
    process.close_input();

    let exit = tokio::time::timeout(std::time::Duration::from_secs(30), pump.run_to_exit(&bus))
        .await
        .expect("cat did not finish")
        .unwrap();
    assert!(exit.success());
    assert_eq!(joined(&seen.borrow(), false).len(), input.len());
    assert!(pump.input_error().is_none());
}

#[cfg(unix)]
#[tokio::test]
async fn rejected_input_is_reported_through_pump() {
    let bus = EventBus::new();
    let (seen, _reg) = collect(&bus);

    let mut process = ConsoleProcess::new("exec 0<&-; echo hi; exit 7", ProcessOptions::default());
    process.enqueue_input(&"y".repeat(1 << 20)).unwrap();

    let mut pump = process.start().await.unwrap();
    assert!(process.is_started());

    let exit = pump.run_to_exit(&bus).await.unwrap();
    assert_eq!(exit.code, Some(7));
    assert_eq!(joined(&seen.borrow(), false), "hi\n");

    // The writer fails once the child closes stdin; the report may trail
    // the exit notice.
    for _ in 0..500 {
        if pump.input_error().is_some() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        pump.drain(&bus);
    }
    assert!(pump.input_error().is_some());
    assert!(matches!(
        process.enqueue_input("more\n"),
        Err(ConsoleError::Io(_))
    ));
}
