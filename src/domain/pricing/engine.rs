//! PricingEngine - turns payment terms into a payment schedule.
//!
//! # Rules
//!
//! | Type | Entries | Recurrence (when `is_recurring`) |
//! |------|---------|----------------------------------|
//! | full | `cost` at day 0 | `cost` every interval, from one interval later |
//! | partial | `down_payment` at day 0, rest at the remainder offset | none |
//! | installments | `n` entries one interval apart, last absorbs rounding | `floor(cost / n)` from one interval after the last installment |

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Timestamp};

use super::{PaymentSchedule, PaymentTerms, PaymentType, PricingError, Recurrence, ScheduleEntry};

/// Upper bound on installment count (thirty years of monthly payments).
pub const MAX_INSTALLMENTS: u32 = 360;

/// Upper bound on `interval_days` and `partial_remainder_due_days` accepted from configuration.
pub const MAX_INTERVAL_DAYS: u32 = 365;

/// Tunable scheduling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Days between installments and between recurring charges.
    pub interval_days: u32,
    /// Days after the schedule start at which a partial balance is due.
    pub partial_remainder_due_days: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            interval_days: 30,
            partial_remainder_due_days: 30,
        }
    }
}

/// Pure schedule calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Validates terms without building a schedule.
    pub fn validate(&self, terms: &PaymentTerms) -> Result<(), PricingError> {
        if !terms.cost.is_positive() {
            return Err(PricingError::NonPositiveCost { cost: terms.cost });
        }

        match terms.payment_type {
            PaymentType::Full => Ok(()),
            PaymentType::Partial => {
                if terms.down_payment.is_negative() {
                    return Err(PricingError::NegativeDownPayment {
                        down_payment: terms.down_payment,
                    });
                }
                if terms.down_payment > terms.cost {
                    return Err(PricingError::DownPaymentExceedsCost {
                        down_payment: terms.down_payment,
                        cost: terms.cost,
                    });
                }
                Ok(())
            }
            PaymentType::Installments => {
                if terms.installment_count < 2 {
                    return Err(PricingError::TooFewInstallments {
                        count: terms.installment_count,
                    });
                }
                if terms.installment_count > MAX_INSTALLMENTS {
                    return Err(PricingError::TooManyInstallments {
                        count: terms.installment_count,
                        max: MAX_INSTALLMENTS,
                    });
                }
                Ok(())
            }
        }
    }

    /// Builds the payment schedule for `terms`, anchored at `start`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the terms violate the payment invariants,
    /// or if an installment offset does not fit in `u32` days.
    pub fn schedule(
        &self,
        terms: &PaymentTerms,
        start: Timestamp,
    ) -> Result<PaymentSchedule, PricingError> {
        self.validate(terms)?;

        let schedule = match terms.payment_type {
            PaymentType::Full => self.full(terms, start),
            PaymentType::Partial => self.partial(terms),
            PaymentType::Installments => self.installments(terms, start)?,
        };

        debug_assert_eq!(schedule.total(), terms.cost);
        Ok(schedule)
    }

    fn full(&self, terms: &PaymentTerms, start: Timestamp) -> PaymentSchedule {
        let recurrence = if terms.is_recurring {
            self.monthly(terms.cost, self.policy.interval_days, start)
        } else {
            Recurrence::None
        };

        PaymentSchedule {
            entries: vec![ScheduleEntry {
                amount: terms.cost,
                due_offset_days: 0,
                label: "Payment in full".to_string(),
            }],
            recurrence,
        }
    }

    fn partial(&self, terms: &PaymentTerms) -> PaymentSchedule {
        PaymentSchedule {
            entries: vec![
                ScheduleEntry {
                    amount: terms.down_payment,
                    due_offset_days: 0,
                    label: "Down payment".to_string(),
                },
                ScheduleEntry {
                    amount: terms.cost - terms.down_payment,
                    due_offset_days: self.policy.partial_remainder_due_days,
                    label: "Remaining balance".to_string(),
                },
            ],
            recurrence: Recurrence::None,
        }
    }

    fn installments(
        &self,
        terms: &PaymentTerms,
        start: Timestamp,
    ) -> Result<PaymentSchedule, PricingError> {
        let count = terms.installment_count;
        let interval = self.policy.interval_days;
        let span = count
            .checked_mul(interval)
            .ok_or(PricingError::ScheduleTooLong {
                count,
                interval_days: interval,
            })?;
        // validate() guarantees count >= 2
        let base = terms.cost.split_floor(count).unwrap_or(Money::ZERO);

        let mut entries = Vec::with_capacity(count as usize);
        let mut allocated = Money::ZERO;
        for i in 0..count {
            let amount = if i + 1 == count {
                terms.cost - allocated
            } else {
                base
            };
            allocated = allocated + amount;
            entries.push(ScheduleEntry {
                amount,
                // i < count, so this stays below `span`
                due_offset_days: i * interval,
                label: format!("Installment {} of {}", i + 1, count),
            });
        }

        let recurrence = if terms.is_recurring {
            self.monthly(base, span, start)
        } else {
            Recurrence::None
        };

        Ok(PaymentSchedule {
            entries,
            recurrence,
        })
    }

    fn monthly(&self, amount: Money, starts_after_days: u32, start: Timestamp) -> Recurrence {
        Recurrence::Monthly {
            amount,
            interval_days: self.policy.interval_days,
            starts_after_days,
            starts_at: start.add_days(i64::from(starts_after_days)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn start() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800).unwrap()
    }

    fn cents(v: i64) -> Money {
        Money::from_cents(v)
    }

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    // ───────────────────────────────────────────────────────────────
    // full
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn full_payment_is_single_immediate_entry() {
        let schedule = engine()
            .schedule(&PaymentTerms::full(cents(250_000)), start())
            .unwrap();
        assert_eq!(schedule.amounts(), vec![cents(250_000)]);
        assert_eq!(schedule.offsets(), vec![0]);
        assert_eq!(schedule.recurrence(), &Recurrence::None);
    }

    #[test]
    fn recurring_full_payment_charges_cost_monthly() {
        let schedule = engine()
            .schedule(&PaymentTerms::full(cents(9_900)).recurring(), start())
            .unwrap();
        assert_eq!(
            schedule.recurrence(),
            &Recurrence::Monthly {
                amount: cents(9_900),
                interval_days: 30,
                starts_after_days: 30,
                starts_at: start().add_days(30),
            }
        );
    }

    // ───────────────────────────────────────────────────────────────
    // partial
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn partial_payment_splits_into_down_payment_and_remainder() {
        let schedule = engine()
            .schedule(&PaymentTerms::partial(cents(1000), cents(300)), start())
            .unwrap();
        assert_eq!(schedule.amounts(), vec![cents(300), cents(700)]);
        assert_eq!(schedule.offsets(), vec![0, 30]);
        assert_eq!(schedule.total(), cents(1000));
    }

    #[test]
    fn partial_remainder_offset_follows_policy() {
        let engine = PricingEngine::new(PricingPolicy {
            interval_days: 30,
            partial_remainder_due_days: 14,
        });
        let schedule = engine
            .schedule(&PaymentTerms::partial(cents(1000), cents(300)), start())
            .unwrap();
        assert_eq!(schedule.entries()[1].due_offset_days, 14);
        assert_eq!(schedule.entries()[1].due_at(start()), start().add_days(14));
    }

    #[test]
    fn partial_allows_zero_and_full_down_payment() {
        let zero = engine()
            .schedule(&PaymentTerms::partial(cents(1000), Money::ZERO), start())
            .unwrap();
        assert_eq!(zero.amounts(), vec![Money::ZERO, cents(1000)]);

        let all = engine()
            .schedule(&PaymentTerms::partial(cents(1000), cents(1000)), start())
            .unwrap();
        assert_eq!(all.amounts(), vec![cents(1000), Money::ZERO]);
    }

    #[test]
    fn partial_rejects_down_payment_above_cost() {
        let err = engine()
            .schedule(&PaymentTerms::partial(cents(1000), cents(1001)), start())
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::DownPaymentExceedsCost {
                down_payment: cents(1001),
                cost: cents(1000)
            }
        );
    }

    #[test]
    fn partial_rejects_negative_down_payment() {
        let err = engine()
            .schedule(&PaymentTerms::partial(cents(1000), cents(-1)), start())
            .unwrap_err();
        assert!(matches!(err, PricingError::NegativeDownPayment { .. }));
    }

    #[test]
    fn recurring_partial_has_no_recurrence() {
        let schedule = engine()
            .schedule(&PaymentTerms::partial(cents(1000), cents(500)).recurring(), start())
            .unwrap();
        assert!(!schedule.recurrence().is_recurring());
    }

    // ───────────────────────────────────────────────────────────────
    // installments
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn installments_last_entry_absorbs_remainder() {
        let schedule = engine()
            .schedule(&PaymentTerms::installments(cents(1000), 3), start())
            .unwrap();
        assert_eq!(schedule.amounts(), vec![cents(333), cents(333), cents(334)]);
        assert_eq!(schedule.total(), cents(1000));
    }

    #[test]
    fn even_installments_are_thirty_days_apart() {
        let schedule = engine()
            .schedule(&PaymentTerms::installments(cents(1500), 4), start())
            .unwrap();
        assert_eq!(
            schedule.amounts(),
            vec![cents(375), cents(375), cents(375), cents(375)]
        );
        assert_eq!(schedule.offsets(), vec![0, 30, 60, 90]);
        assert_eq!(schedule.recurrence(), &Recurrence::None);
        assert_eq!(schedule.entries()[3].label, "Installment 4 of 4");
    }

    #[test]
    fn recurring_installments_continue_after_last_installment() {
        let schedule = engine()
            .schedule(&PaymentTerms::installments(cents(1000), 3).recurring(), start())
            .unwrap();
        match schedule.recurrence() {
            Recurrence::Monthly {
                amount,
                starts_after_days,
                starts_at,
                ..
            } => {
                assert_eq!(*amount, cents(333));
                assert_eq!(*starts_after_days, 90);
                assert_eq!(*starts_at, start().add_days(90));
            }
            Recurrence::None => panic!("Expected monthly recurrence"),
        }
    }

    #[test]
    fn installments_reject_fewer_than_two() {
        for count in [0, 1] {
            let err = engine()
                .schedule(&PaymentTerms::installments(cents(1000), count), start())
                .unwrap_err();
            assert_eq!(err, PricingError::TooFewInstallments { count });
        }
    }

    #[test]
    fn installments_reject_absurd_counts() {
        let err = engine()
            .schedule(
                &PaymentTerms::installments(cents(1000), MAX_INSTALLMENTS + 1),
                start(),
            )
            .unwrap_err();
        assert!(matches!(err, PricingError::TooManyInstallments { .. }));
    }

    #[test]
    fn installment_offsets_that_overflow_are_rejected() {
        let engine = PricingEngine::new(PricingPolicy {
            interval_days: u32::MAX / 2,
            partial_remainder_due_days: 30,
        });
        let err = engine
            .schedule(&PaymentTerms::installments(cents(1000), 3).recurring(), start())
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::ScheduleTooLong {
                count: 3,
                interval_days: u32::MAX / 2
            }
        );
        assert_eq!(err.field(), "installment_count");

        let schedule = engine
            .schedule(&PaymentTerms::installments(cents(1000), 2), start())
            .unwrap();
        assert_eq!(schedule.offsets(), vec![0, u32::MAX / 2]);
    }

    #[test]
    fn longest_policy_interval_fits_the_longest_plan() {
        let engine = PricingEngine::new(PricingPolicy {
            interval_days: MAX_INTERVAL_DAYS,
            partial_remainder_due_days: MAX_INTERVAL_DAYS,
        });
        let schedule = engine
            .schedule(
                &PaymentTerms::installments(cents(1_000_000), MAX_INSTALLMENTS).recurring(),
                start(),
            )
            .unwrap();
        assert_eq!(
            schedule.offsets().last(),
            Some(&((MAX_INSTALLMENTS - 1) * MAX_INTERVAL_DAYS))
        );
        assert_eq!(schedule.total(), cents(1_000_000));
    }

    #[test]
    fn non_positive_cost_is_rejected_for_every_type() {
        for terms in [
            PaymentTerms::full(Money::ZERO),
            PaymentTerms::partial(cents(-5), Money::ZERO),
            PaymentTerms::installments(Money::ZERO, 3),
        ] {
            let err = engine().schedule(&terms, start()).unwrap_err();
            assert!(matches!(err, PricingError::NonPositiveCost { .. }));
        }
    }

    proptest! {
        #[test]
        fn installment_schedule_always_sums_to_cost(cost in 1i64..10_000_000, count in 2u32..60) {
            let schedule = engine()
                .schedule(&PaymentTerms::installments(cents(cost), count), start())
                .unwrap();
            prop_assert_eq!(schedule.entries().len(), count as usize);
            prop_assert_eq!(schedule.total(), cents(cost));
        }

        #[test]
        fn partial_schedule_always_sums_to_cost(cost in 1i64..10_000_000, ratio in 0u32..=100) {
            let down = cost * i64::from(ratio) / 100;
            let schedule = engine()
                .schedule(&PaymentTerms::partial(cents(cost), cents(down)), start())
                .unwrap();
            prop_assert_eq!(schedule.entries()[0].amount + schedule.entries()[1].amount, cents(cost));
        }
    }
}
