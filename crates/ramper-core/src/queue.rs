//! Control-to-render command queue.
//!
//! [`RampQueue`] serializes every `set`/`start_ramp` request through a
//! bounded lock-free single-producer single-consumer ring. The control
//! thread owns the [`RampSender`]; the render thread owns the
//! [`RampReceiver`] and drains it once per buffer, so rampers are only ever
//! mutated on the render thread.
//!
//! Unlike [`RampCell`](crate::RampCell), no command is dropped unless the
//! queue is full, and commands are applied in the order they were sent.
//!
//! # Example
//!
//! ```
//! use ramper_core::{RampConfig, RampQueue, RampedParameter, RampedParameters, ParamAddress};
//!
//! struct Gain {
//!     level: RampedParameter,
//! }
//!
//! impl RampedParameters for Gain {
//!     fn addresses(&self) -> &'static [ParamAddress] { &[0] }
//!     fn ramper(&self, a: ParamAddress) -> Option<&RampedParameter> {
//!         (a == 0).then_some(&self.level)
//!     }
//!     fn ramper_mut(&mut self, a: ParamAddress) -> Option<&mut RampedParameter> {
//!         (a == 0).then_some(&mut self.level)
//!     }
//! }
//!
//! let config = RampConfig::new().with_sample_rate(1000.0).with_default_ramp_ms(8.0);
//! let (mut tx, mut rx) = RampQueue::new(&config).unwrap();
//! let mut gain = Gain { level: RampedParameter::new(1.0) };
//!
//! tx.glide(0, 0.0).unwrap();
//! assert_eq!(rx.drain_into(&mut gain), 1);
//! assert_eq!(gain.level.samples_remaining(), 8);
//! ```

use ringbuf::traits::{Consumer, Observer, Producer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};

use crate::command::RampCommand;
use crate::config::RampConfig;
use crate::error::{RampError, RampResult};
use crate::params::RampedParameters;
use crate::sample::Sample;
use crate::types::{FrameCount, ParamAddress};

/// Constructor for a sender/receiver pair.
pub struct RampQueue;

impl RampQueue {
    /// Create a queue sized by `config.queue_capacity`.
    ///
    /// The sender converts millisecond ramp times with `config.sample_rate`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: &RampConfig) -> RampResult<(RampSender, RampReceiver)> {
        config.validate()?;
        let ring = HeapRb::<RampCommand>::new(config.queue_capacity);
        let (producer, consumer) = ring.split();
        log::debug!(
            "Created ramp queue: capacity {}, default ramp {} frames",
            config.queue_capacity,
            config.default_ramp_frames()
        );
        Ok((
            RampSender {
                producer,
                config: *config,
            },
            RampReceiver { consumer },
        ))
    }
}

/// Control-thread end of a [`RampQueue`].
pub struct RampSender {
    producer: HeapProd<RampCommand>,
    config: RampConfig,
}

impl RampSender {
    /// Send a command.
    ///
    /// Fails with [`RampError::NonFiniteValue`] for a NaN or infinite goal
    /// and [`RampError::QueueFull`] when the render thread has fallen behind.
    pub fn send(&mut self, command: RampCommand) -> RampResult<()> {
        let goal = command.kind.goal();
        if !goal.is_finite() {
            log::warn!(
                "Rejected non-finite ramp goal {} for parameter {}",
                goal,
                command.address
            );
            return Err(RampError::NonFiniteValue(goal));
        }
        self.producer.try_push(command).map_err(|_| {
            log::warn!(
                "Ramp queue full: dropped command for parameter {}",
                command.address
            );
            RampError::QueueFull
        })
    }

    /// Snap `address` to `value`.
    pub fn set(&mut self, address: ParamAddress, value: f32) -> RampResult<()> {
        self.send(RampCommand::set(address, value))
    }

    /// Ramp `address` to `goal` over `duration` samples.
    pub fn start_ramp(
        &mut self,
        address: ParamAddress,
        goal: f32,
        duration: FrameCount,
    ) -> RampResult<()> {
        self.send(RampCommand::ramp(address, goal, duration))
    }

    /// Ramp `address` to `goal` over `ms` milliseconds.
    pub fn start_ramp_ms(&mut self, address: ParamAddress, goal: f32, ms: f64) -> RampResult<()> {
        let duration = self.config.ms_to_frames(ms);
        self.start_ramp(address, goal, duration)
    }

    /// Ramp `address` to `goal` over the configured default ramp time.
    pub fn glide(&mut self, address: ParamAddress, goal: f32) -> RampResult<()> {
        let duration = self.config.default_ramp_frames();
        self.start_ramp(address, goal, duration)
    }

    /// Commands sent but not yet drained.
    pub fn pending(&self) -> usize {
        self.producer.occupied_len()
    }

    /// The configuration this queue was created with.
    pub fn config(&self) -> &RampConfig {
        &self.config
    }
}

/// Render-thread end of a [`RampQueue`].
pub struct RampReceiver {
    consumer: HeapCons<RampCommand>,
}

impl RampReceiver {
    /// Pop the oldest command.
    #[inline]
    pub fn try_recv(&mut self) -> Option<RampCommand> {
        self.consumer.try_pop()
    }

    /// Apply the commands pending on entry to `params` in send order.
    ///
    /// Commands sent while the drain runs wait for the next call. Returns how
    /// many commands reached a parameter. Commands for unknown addresses are
    /// discarded and reported once per drain.
    pub fn drain_into<S, P>(&mut self, params: &mut P) -> usize
    where
        S: Sample,
        P: RampedParameters<S> + ?Sized,
    {
        let pending = self.consumer.occupied_len();
        let mut applied = 0;
        let mut unknown = 0;
        for _ in 0..pending {
            let Some(command) = self.consumer.try_pop() else {
                break;
            };
            if params.apply(&command) {
                applied += 1;
            } else {
                unknown += 1;
            }
        }
        if unknown > 0 {
            log::warn!("Discarded {} ramp commands for unknown parameters", unknown);
        }
        applied
    }

    /// Whether no commands are waiting.
    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RampKind;
    use crate::params::tests::Pair;
    use crate::ramper::RampedParameter;
    use std::thread;

    fn queue(capacity: usize) -> (RampSender, RampReceiver) {
        let config = RampConfig::new()
            .with_sample_rate(1000.0)
            .with_queue_capacity(capacity);
        RampQueue::new(&config).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RampConfig::new().with_queue_capacity(0);
        assert!(matches!(
            RampQueue::new(&config),
            Err(RampError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_commands_arrive_in_order() {
        let (mut tx, mut rx) = queue(8);
        tx.set(10, 1.0).unwrap();
        tx.start_ramp(10, 2.0, 4).unwrap();
        assert_eq!(tx.pending(), 2);

        assert_eq!(rx.try_recv(), Some(RampCommand::set(10, 1.0)));
        assert_eq!(rx.try_recv(), Some(RampCommand::ramp(10, 2.0, 4)));
        assert_eq!(rx.try_recv(), None);
        assert!(rx.is_empty());
    }

    #[test]
    fn test_drain_applies_last_command_last() {
        let (mut tx, mut rx) = queue(8);
        let mut p = Pair::default();
        tx.start_ramp(10, 5.0, 10).unwrap();
        tx.set(10, 3.0).unwrap();
        tx.start_ramp(20, 1.0, 2).unwrap();

        assert_eq!(rx.drain_into(&mut p), 3);
        assert_eq!(p.a.value(), 3.0);
        assert!(!p.a.is_ramping());
        assert_eq!(p.b.samples_remaining(), 2);
    }

    #[test]
    fn test_unknown_addresses_are_skipped() {
        let (mut tx, mut rx) = queue(8);
        let mut p = Pair::default();
        tx.set(99, 1.0).unwrap();
        tx.set(10, 1.0).unwrap();
        assert_eq!(rx.drain_into(&mut p), 1);
        assert!(rx.is_empty());
        assert_eq!(p.a.value(), 1.0);
    }

    #[test]
    fn test_full_queue() {
        let (mut tx, mut rx) = queue(2);
        tx.set(10, 1.0).unwrap();
        tx.set(10, 2.0).unwrap();
        assert_eq!(tx.set(10, 3.0), Err(RampError::QueueFull));

        rx.try_recv();
        assert!(tx.set(10, 3.0).is_ok());
    }

    #[test]
    fn test_non_finite_goals_rejected() {
        let (mut tx, rx) = queue(2);
        for goal in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                tx.start_ramp(10, goal, 4),
                Err(RampError::NonFiniteValue(_))
            ));
            assert!(matches!(
                tx.set(10, goal),
                Err(RampError::NonFiniteValue(_))
            ));
        }
        assert!(rx.is_empty());
    }

    /// Sends another command every time the drain touches it.
    struct Echo {
        level: RampedParameter,
        tx: RampSender,
    }

    impl RampedParameters for Echo {
        fn addresses(&self) -> &'static [ParamAddress] {
            &[0]
        }

        fn ramper(&self, address: ParamAddress) -> Option<&RampedParameter> {
            (address == 0).then_some(&self.level)
        }

        fn ramper_mut(&mut self, address: ParamAddress) -> Option<&mut RampedParameter> {
            let _ = self.tx.set(0, 2.0);
            (address == 0).then_some(&mut self.level)
        }
    }

    #[test]
    fn test_drain_stops_at_commands_pending_on_entry() {
        let (mut tx, mut rx) = queue(8);
        tx.set(0, 1.0).unwrap();
        tx.start_ramp(0, 3.0, 4).unwrap();

        let mut echo = Echo {
            level: RampedParameter::new(0.0),
            tx,
        };
        assert_eq!(rx.drain_into(&mut echo), 2);
        assert_eq!(echo.tx.pending(), 2);
        assert_eq!(echo.level.samples_remaining(), 4);

        assert_eq!(rx.drain_into(&mut echo), 2);
        assert_eq!(echo.level.value(), 2.0);
        assert_eq!(echo.tx.pending(), 2);
    }

    #[test]
    fn test_ms_conversions() {
        let (mut tx, mut rx) = queue(4);
        tx.start_ramp_ms(10, 1.0, 2.5).unwrap();
        tx.glide(20, 1.0).unwrap();
        tx.start_ramp_ms(20, 0.0, 0.0).unwrap();

        assert_eq!(rx.try_recv().map(|c| c.kind.duration()), Some(3));
        assert_eq!(rx.try_recv().map(|c| c.kind.duration()), Some(10));
        assert_eq!(rx.try_recv().map(|c| c.kind), Some(RampKind::Set(0.0)));
    }

    #[test]
    fn test_cross_thread_fifo() {
        let (mut tx, mut rx) = queue(16);
        let writer = thread::spawn(move || {
            for i in 0..1000u32 {
                let command = RampCommand::ramp(10, i as f32, 1 + i);
                while tx.send(command).is_err() {
                    thread::yield_now();
                }
            }
        });

        let mut p = Pair::default();
        let mut expected = 0u32;
        while expected < 1000 {
            if let Some(command) = rx.try_recv() {
                assert_eq!(command.kind.goal(), expected as f32);
                p.apply(&command);
                expected += 1;
            }
            p.a.step();
        }
        writer.join().unwrap();
        assert_eq!(p.a.goal(), 999.0);
    }
}
