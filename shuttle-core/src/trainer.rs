//! Trainer: one poll iteration of the control loop
//!
//! The trainer owns one sampler, one menu and one presenter and runs them in
//! a fixed order every poll:
//!
//! 1. Selector (or Up/Down) updates the focused choice
//! 2. Confirm, Cancel and Pause are sampled; the first to fire acts
//! 3. The presenter redraws if anything visible changed
//!
//! Step 1 runs before step 2 so a Confirm commits the value read in the same
//! iteration.

use embedded_hal::delay::DelayNs;
use shuttle_display::{CharacterDisplay, DisplayError};
use shuttle_hal::{AnalogInput, ButtonId, ButtonInputs};

use crate::config::{DeviceConfig, SelectorKind};
use crate::input::InputSampler;
use crate::menu::{Event, Menu, Transition};
use crate::ui::DisplayPresenter;

/// What happened during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Screen change, if an event caused one
    pub transition: Option<Transition>,
    /// Whether the focused choice changed
    pub selection_changed: bool,
    /// Whether a frame was written to the display
    pub redrawn: bool,
    /// Display failure; the redraw is retried next poll
    pub display_error: Option<DisplayError>,
}

/// Top-level orchestrator
pub struct Trainer<B, A, D, L> {
    sampler: InputSampler<B, A, D>,
    menu: Menu,
    presenter: DisplayPresenter<L>,
    selector: SelectorKind,
}

impl<B, A, D, L> Trainer<B, A, D, L>
where
    B: ButtonInputs,
    A: AnalogInput,
    D: DelayNs,
    L: CharacterDisplay,
{
    /// Create a trainer on the initial screen with the configured defaults
    pub fn new(buttons: B, selector: A, delay: D, display: L, config: &DeviceConfig) -> Self {
        Self {
            sampler: InputSampler::new(buttons, selector, delay, config),
            menu: Menu::new(config.defaults),
            presenter: DisplayPresenter::new(display),
            selector: config.selector,
        }
    }

    /// Run one loop iteration
    pub fn poll(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome {
            selection_changed: self.update_selection(),
            ..Default::default()
        };

        // Every button is sampled so its edge state stays current, but only
        // the first event in precedence order acts.
        let mut fired = None;
        for event in Event::PRECEDENCE {
            if self.sampler.poll_button(event.button()) && fired.is_none() {
                fired = Some(event);
            }
        }
        if let Some(event) = fired {
            outcome.transition = self.menu.handle(event);
        }

        match self
            .presenter
            .refresh(self.menu.screen(), &self.menu.selections())
        {
            Ok(redrawn) => outcome.redrawn = redrawn,
            Err(e) => outcome.display_error = Some(e),
        }

        outcome
    }

    /// Feed elapsed wall time to the session clock
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.menu.advance_session(elapsed_ms);
    }

    fn update_selection(&mut self) -> bool {
        match self.selector {
            SelectorKind::Analog => match self.menu.focused_options() {
                Some(options) => {
                    let ordinal = self.sampler.read_selector(options);
                    self.menu.apply_selector(ordinal)
                }
                None => false,
            },
            SelectorKind::Stepped => {
                let up = self.sampler.poll_button(ButtonId::Up);
                let down = self.sampler.poll_button(ButtonId::Down);
                self.menu.step_selection(up as i8 - down as i8)
            }
        }
    }

    /// Get the menu state
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Access the input sampler
    pub fn sampler_mut(&mut self) -> &mut InputSampler<B, A, D> {
        &mut self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::{Handedness, TrainingType};
    use crate::menu::Screen;
    use shuttle_hal::FixedInput;

    #[derive(Default)]
    struct Levels([bool; ButtonId::COUNT]);

    impl ButtonInputs for Levels {
        fn is_active(&mut self, id: ButtonId) -> bool {
            self.0[id.index()]
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[derive(Default)]
    struct NullLcd {
        clears: u32,
    }

    impl CharacterDisplay for NullLcd {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            Ok(())
        }

        fn set_cursor(&mut self, _col: u8, _row: u8) -> Result<(), DisplayError> {
            Ok(())
        }

        fn write(&mut self, _text: &str) -> Result<(), DisplayError> {
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (16, 2)
        }
    }

    type TestTrainer = Trainer<Levels, FixedInput, NoDelay, NullLcd>;

    fn trainer(config: &DeviceConfig) -> TestTrainer {
        Trainer::new(Levels::default(), FixedInput(0), NoDelay, NullLcd::default(), config)
    }

    fn press(t: &mut TestTrainer, id: ButtonId) -> PollOutcome {
        t.sampler_mut().buttons_mut().0[id.index()] = true;
        let outcome = t.poll();
        t.sampler_mut().buttons_mut().0[id.index()] = false;
        t.poll();
        outcome
    }

    #[test]
    fn test_first_poll_draws_initial_screen() {
        let mut t = trainer(&DeviceConfig::DEFAULT);
        let outcome = t.poll();
        assert!(outcome.redrawn);
        assert_eq!(outcome.transition, None);
        assert_eq!(t.menu().screen(), Screen::ChooseHandedness);
        assert!(!t.poll().redrawn);
    }

    #[test]
    fn test_confirm_reports_transition() {
        let mut t = trainer(&DeviceConfig::DEFAULT);
        t.poll();
        let outcome = press(&mut t, ButtonId::Confirm);
        assert_eq!(
            outcome.transition,
            Some(Transition {
                from: Screen::ChooseHandedness,
                to: Screen::ChooseTrainingType,
                event: Event::Confirm,
            })
        );
        assert!(outcome.redrawn);
    }

    #[test]
    fn test_selector_read_before_confirm() {
        let mut t = trainer(&DeviceConfig::DEFAULT);
        t.poll();
        t.sampler_mut().selector_mut().0 = 4095;
        t.sampler_mut().buttons_mut().0[ButtonId::Confirm.index()] = true;
        let outcome = t.poll();
        assert!(outcome.selection_changed);
        assert_eq!(t.menu().selections().handedness, Handedness::Left);
        assert_eq!(t.menu().screen(), Screen::ChooseTrainingType);
    }

    #[test]
    fn test_confirm_wins_over_cancel() {
        let mut t = trainer(&DeviceConfig::DEFAULT);
        press(&mut t, ButtonId::Confirm);

        let levels = &mut t.sampler_mut().buttons_mut().0;
        levels[ButtonId::Confirm.index()] = true;
        levels[ButtonId::Cancel.index()] = true;
        let outcome = t.poll();
        assert_eq!(outcome.transition.map(|tr| tr.event), Some(Event::Confirm));
        assert_eq!(t.menu().screen(), Screen::ChooseDifficulty);

        // Cancel was consumed in the same cycle; holding it does nothing
        assert_eq!(t.poll().transition, None);
    }

    #[test]
    fn test_stepped_selector_ignores_analog() {
        let config = DeviceConfig {
            selector: SelectorKind::Stepped,
            ..DeviceConfig::DEFAULT
        };
        let mut t = trainer(&config);
        t.sampler_mut().selector_mut().0 = 4095;
        press(&mut t, ButtonId::Confirm);
        assert_eq!(t.menu().selections().handedness, Handedness::Right);

        assert!(press(&mut t, ButtonId::Down).selection_changed);
        assert_eq!(t.menu().selections().training, TrainingType::General);
        assert!(press(&mut t, ButtonId::Up).selection_changed);
        assert!(press(&mut t, ButtonId::Up).selection_changed);
        assert_eq!(t.menu().selections().training, TrainingType::Forehand);

        // Up and Down in the same cycle cancel out
        let levels = &mut t.sampler_mut().buttons_mut().0;
        levels[ButtonId::Up.index()] = true;
        levels[ButtonId::Down.index()] = true;
        assert!(!t.poll().selection_changed);
        assert_eq!(t.menu().selections().training, TrainingType::Forehand);
    }

    #[test]
    fn test_advance_counts_only_live_session() {
        let mut t = trainer(&DeviceConfig::DEFAULT);
        t.advance(100);
        assert!(t.menu().session().is_none());

        for _ in 0..4 {
            press(&mut t, ButtonId::Confirm);
        }
        assert_eq!(t.menu().screen(), Screen::SessionActive);
        t.advance(250);
        press(&mut t, ButtonId::Pause);
        t.advance(1000);
        assert_eq!(t.menu().session().map(|s| s.active_ms()), Some(250));
    }
}
