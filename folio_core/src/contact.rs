// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-only contact form.
//!
//! There is no endpoint: a submit waits out a fixed delay, always succeeds,
//! clears the fields, and shows a confirmation for a while before the form
//! comes back.

use alloc::string::String;

use crate::time::{Duration, Timestamp};

/// Fixed delays of the simulated round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactTimings {
    /// Time spent "sending".
    pub submitting: Duration,
    /// Time the confirmation stays up.
    pub confirmation: Duration,
}

impl ContactTimings {
    /// The site's timings.
    pub const DEFAULT: Self = Self {
        submitting: Duration::from_millis(1500),
        confirmation: Duration::from_millis(5000),
    };
}

impl Default for ContactTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The input's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The input's placeholder.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Message => "What would you like to discuss?",
        }
    }
}

/// Where the form is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    /// Accepting input.
    Editing,
    /// Pretending to send until the deadline.
    Submitting {
        /// When sending finishes.
        until: Timestamp,
    },
    /// Showing the confirmation until the deadline.
    Submitted {
        /// When the form comes back.
        until: Timestamp,
    },
}

/// The contact form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    phase: ContactPhase,
    timings: ContactTimings,
}

impl ContactForm {
    /// An empty form.
    #[must_use]
    pub fn new(timings: ContactTimings) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            phase: ContactPhase::Editing,
            timings,
        }
    }

    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Updates `field`. Ignored unless editing.
    pub fn set(&mut self, field: Field, value: &str) {
        if self.phase != ContactPhase::Editing {
            return;
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        slot.clear();
        slot.push_str(value);
    }

    /// Every field is filled in (the inputs are `required`).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| !self.get(field).trim().is_empty())
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Starts a submit. Returns `false` if not editing or incomplete.
    pub fn submit(&mut self, now: Timestamp) -> bool {
        if self.phase != ContactPhase::Editing || !self.is_complete() {
            return false;
        }
        self.phase = ContactPhase::Submitting {
            until: now + self.timings.submitting,
        };
        tracing::debug!("contact form submitting");
        true
    }

    /// Advances through expired phases. Returns whether the phase changed.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        let before = self.phase;
        loop {
            match self.phase {
                ContactPhase::Submitting { until } if now >= until => {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.phase = ContactPhase::Submitted {
                        until: until + self.timings.confirmation,
                    };
                    tracing::debug!("contact form sent");
                }
                ContactPhase::Submitted { until } if now >= until => {
                    self.phase = ContactPhase::Editing;
                }
                _ => break,
            }
        }
        self.phase != before
    }

    /// When [`ContactForm::poll`] next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        match self.phase {
            ContactPhase::Editing => None,
            ContactPhase::Submitting { until } | ContactPhase::Submitted { until } => Some(until),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactTimings::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello");
        form
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        assert!(!form.submit(Timestamp(0)));
        assert_eq!(form.phase(), ContactPhase::Editing);
    }

    #[test]
    fn full_cycle() {
        let mut form = filled();
        assert!(form.submit(Timestamp(100)));
        assert!(!form.poll(Timestamp(1599)));
        assert_eq!(form.get(Field::Name), "Ada");

        assert!(form.poll(Timestamp(1600)));
        assert_eq!(
            form.phase(),
            ContactPhase::Submitted {
                until: Timestamp(6600)
            }
        );
        assert!(Field::ALL.iter().all(|&f| form.get(f).is_empty()));

        assert!(form.poll(Timestamp(6600)));
        assert_eq!(form.phase(), ContactPhase::Editing);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn late_poll_skips_straight_back_to_editing() {
        let mut form = filled();
        form.submit(Timestamp(0));
        assert!(form.poll(Timestamp(60_000)));
        assert_eq!(form.phase(), ContactPhase::Editing);
    }

    #[test]
    fn inputs_are_frozen_while_sending() {
        let mut form = filled();
        form.submit(Timestamp(0));
        form.set(Field::Message, "edited");
        assert_eq!(form.get(Field::Message), "Hello");
        assert!(!form.submit(Timestamp(10)));
    }
}
