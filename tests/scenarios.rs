use std::sync::Arc;
use std::time::Duration;
use tokio::time;

use sdl_spec::core::Next;
use sdl_spec::core::Signal;
use sdl_spec::core::StateId;
use sdl_spec::engine::Context;
use sdl_spec::engine::Machine;
use sdl_spec::group::Group;
use sdl_spec::group::GroupConfig;
use sdl_spec::group::ProcessHandle;
use sdl_spec::mailbox::MailSend;
use sdl_spec::observer::EventKind;
use sdl_spec::observer::RecordingObserver;
use sdl_spec::sink::SinkHandle;
use sdl_spec::transmit;
use sdl_spec::transmit::Transmission;

// -----------------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------------

const THRESHOLD: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Count {
  Inc(u32),
  Dec,
}

impl Signal for Count {
  fn tag(&self) -> &'static str {
    match self {
      Self::Inc(_) => "Inc",
      Self::Dec => "Dec",
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Env {
  Overflow,
}

impl Signal for Env {
  fn tag(&self) -> &'static str {
    "Overflow"
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
  Up,
  Down,
}

impl StateId for Dir {
  fn name(&self) -> &'static str {
    match self {
      Self::Up => "up",
      Self::Down => "down",
    }
  }
}

struct Counter {
  counter: u32,
  out: MailSend<Env>,
}

impl Machine for Counter {
  type Signal = Count;
  type State = Dir;

  async fn handle(&mut self, state: Dir, signal: &Count, cx: &mut Context<'_>) -> Next<Dir> {
    match (state, signal) {
      (Dir::Up, Count::Inc(value)) => {
        self.counter += value;

        if self.counter > THRESHOLD {
          self.out.send(Env::Overflow).await;
          self.counter = THRESHOLD;
          return Next::Goto(Dir::Down);
        }

        Next::Stay
      }
      (Dir::Down, Count::Dec) => {
        self.counter -= 1;

        if self.counter == 0 {
          Next::Goto(Dir::Up)
        } else {
          Next::Stay
        }
      }
      _ => {
        cx.ignore();
        Next::Stay
      }
    }
  }
}

fn recording_group(observer: &Arc<RecordingObserver>) -> Group {
  Group::new(GroupConfig::new().with_observer(Arc::clone(observer)))
}

#[tokio::test(start_paused = true)]
async fn counter_overflows_once_and_returns_up() {
  let observer: Arc<RecordingObserver> = Arc::new(RecordingObserver::new());
  let group: Group = recording_group(&observer);
  let (out, sink): (MailSend<Env>, SinkHandle<Env>) = group.sink("env");

  let counter: ProcessHandle<Count> = group.spawn_opt("counter", |process| {
    process.start(Counter { counter: 0, out }, Dir::Up)
  });

  let target: &MailSend<Count> = counter.sender();

  transmit::execute([
    Transmission::new(10, target, Count::Inc(1)),
    Transmission::new(10, target, Count::Inc(4)),
    Transmission::new(10, target, Count::Dec),
    Transmission::new(10, target, Count::Dec),
    Transmission::new(10, target, Count::Dec),
    Transmission::new(10, target, Count::Dec),
  ])
  .await;

  time::sleep(Duration::from_millis(100)).await;

  assert_eq!(counter.state(), "up");
  assert_eq!(observer.entered("counter"), ["up", "down", "up"]);
  assert_eq!(observer.tags("counter", "down", EventKind::Consumed).len(), 4);

  group.close();

  assert_eq!(sink.join().await, [Env::Overflow]);
  assert!(counter.join().await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn counter_timeline_below_threshold_never_overflows() {
  let observer: Arc<RecordingObserver> = Arc::new(RecordingObserver::new());
  let group: Group = recording_group(&observer);
  let (out, sink): (MailSend<Env>, SinkHandle<Env>) = group.sink("env");

  let counter: MailSend<Count> = group.spawn("counter", |process| {
    process.start(Counter { counter: 0, out }, Dir::Up)
  });

  transmit::execute([
    Transmission::new(10, &counter, Count::Inc(0)),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Inc(4)),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Dec),
    Transmission::new(10, &counter, Count::Inc(0)),
  ])
  .await;

  time::sleep(Duration::from_millis(100)).await;

  assert_eq!(observer.entered("counter"), ["up"]);
  assert_eq!(observer.tags("counter", "up", EventKind::Ignored), ["Dec"; 6]);

  group.close();

  assert!(sink.join().await.is_empty());
}

#[tokio::test]
async fn counter_transition_table() {
  let group: Group = Group::default();
  let (out, _sink): (MailSend<Env>, SinkHandle<Env>) = group.sink("env");
  let mut machine: Counter = Counter { counter: 0, out };

  let mut cx: Context<'_> = Context::detached(Dir::Up);
  assert_eq!(machine.handle(Dir::Up, &Count::Inc(3), &mut cx).await, Next::Stay);

  let mut cx: Context<'_> = Context::detached(Dir::Up);
  assert_eq!(machine.handle(Dir::Up, &Count::Dec, &mut cx).await, Next::Stay);
  assert!(cx.is_ignored());

  let mut cx: Context<'_> = Context::detached(Dir::Up);
  assert_eq!(machine.handle(Dir::Up, &Count::Inc(2), &mut cx).await, Next::Goto(Dir::Down));
  assert_eq!(machine.counter, THRESHOLD);

  group.close();
}

// -----------------------------------------------------------------------------
// Greeter
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
enum Hello {
  Hi,
  Ho(u8),
}

impl Signal for Hello {
  fn tag(&self) -> &'static str {
    match self {
      Self::Hi => "Hi",
      Self::Ho(_) => "Ho",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
  Start,
  Next,
  Far,
}

impl StateId for Stage {
  fn name(&self) -> &'static str {
    match self {
      Self::Start => "start",
      Self::Next => "next",
      Self::Far => "far",
    }
  }
}

/// Saves `Ho` in `start`; `Hi` moves one stage further.
struct Greeter {
  next_takes_ho: bool,
}

impl Machine for Greeter {
  type Signal = Hello;
  type State = Stage;

  async fn handle(&mut self, state: Stage, signal: &Hello, cx: &mut Context<'_>) -> Next<Stage> {
    match (state, signal) {
      (Stage::Start, Hello::Ho(_)) => {
        cx.save();
        Next::Stay
      }
      (Stage::Start, Hello::Hi) => Next::Goto(Stage::Next),
      (Stage::Next, Hello::Ho(_)) if self.next_takes_ho => Next::Stay,
      (Stage::Next, Hello::Hi) => Next::Goto(Stage::Far),
      (Stage::Far, Hello::Ho(_)) => Next::Stay,
      _ => {
        cx.ignore();
        Next::Stay
      }
    }
  }
}

#[tokio::test(start_paused = true)]
async fn saved_signals_replay_in_next_state() {
  let observer: Arc<RecordingObserver> = Arc::new(RecordingObserver::new());
  let group: Group = recording_group(&observer);

  let greeter: MailSend<Hello> = group.spawn("greeter", |process| {
    process.start(Greeter { next_takes_ho: true }, Stage::Start)
  });

  transmit::send_with_delay(&greeter, [Hello::Ho(1), Hello::Ho(2), Hello::Hi], 10).await;

  time::sleep(Duration::from_millis(50)).await;

  assert_eq!(observer.tags("greeter", "start", EventKind::Saved), ["Ho", "Ho"]);
  assert_eq!(observer.tags("greeter", "next", EventKind::Consumed), ["Ho", "Ho"]);

  group.close();
}

#[tokio::test(start_paused = true)]
async fn saved_signals_precede_later_sends() {
  let observer: Arc<RecordingObserver> = Arc::new(RecordingObserver::new());
  let group: Group = recording_group(&observer);

  let greeter: MailSend<Hello> = group.spawn("greeter", |process| {
    process.start(Greeter { next_takes_ho: true }, Stage::Start)
  });

  transmit::send_with_delay(&greeter, [Hello::Ho(1), Hello::Ho(2), Hello::Hi, Hello::Ho(3)], 10).await;

  time::sleep(Duration::from_millis(50)).await;

  let values: Vec<String> = observer
    .matching("greeter", "next", EventKind::Consumed)
    .into_iter()
    .filter_map(|record| record.value)
    .collect();

  assert_eq!(values, ["Ho(1)", "Ho(2)", "Ho(3)"]);

  group.close();
}

#[tokio::test(start_paused = true)]
async fn saved_signals_do_not_survive_two_activations() {
  let observer: Arc<RecordingObserver> = Arc::new(RecordingObserver::new());
  let group: Group = recording_group(&observer);

  let greeter: MailSend<Hello> = group.spawn("greeter", |process| {
    process.start(Greeter { next_takes_ho: false }, Stage::Start)
  });

  transmit::send_with_delay(&greeter, [Hello::Ho(1), Hello::Ho(2), Hello::Hi, Hello::Hi], 10).await;

  time::sleep(Duration::from_millis(50)).await;

  assert_eq!(observer.entered("greeter"), ["start", "next", "far"]);
  assert_eq!(observer.tags("greeter", "next", EventKind::Ignored), ["Ho", "Ho"]);
  assert!(observer.tags("greeter", "far", EventKind::Consumed).is_empty());

  group.close();
}
