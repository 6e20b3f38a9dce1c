use super::error::ScenarioError;
use super::types::{ScenarioField, ScenarioInputs};

pub const MAX_TIMEFRAME_YEARS: i32 = 35;
pub const MAX_BEDROOMS: u32 = 10;

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            property_price: 300_000.0,
            deposit: 30_000.0,
            mortgage_rate: 4.5,
            mortgage_length: 25,
            property_appreciation_rate: 3.0,
            monthly_rent: 1_200.0,
            rent_increase_rate: 3.0,
            council_tax: 150.0,
            maintenance_costs: 100.0,
            num_bedrooms: 2,
            room_rental_income: 600.0,
            timeframe: 25,
        }
    }
}

impl ScenarioInputs {
    pub fn loan_amount(&self) -> f64 {
        self.property_price - self.deposit
    }

    /// Room income only counts when there is a spare room to let.
    pub fn monthly_room_income(&self) -> f64 {
        if self.num_bedrooms > 1 {
            self.room_rental_income
        } else {
            0.0
        }
    }

    /// Returns a copy with a new horizon; the mortgage term never outlasts it.
    pub fn with_timeframe(&self, timeframe: i32) -> Self {
        Self {
            timeframe,
            mortgage_length: self.mortgage_length.min(timeframe),
            ..self.clone()
        }
    }

    /// Returns a copy with one field replaced. Integer fields truncate `value`.
    pub fn with_field(&self, field: ScenarioField, value: f64) -> Self {
        let mut next = self.clone();
        match field {
            ScenarioField::PropertyPrice => next.property_price = value,
            ScenarioField::Deposit => next.deposit = value,
            ScenarioField::MortgageRate => next.mortgage_rate = value,
            ScenarioField::MortgageLength => next.mortgage_length = value as i32,
            ScenarioField::PropertyAppreciationRate => next.property_appreciation_rate = value,
            ScenarioField::MonthlyRent => next.monthly_rent = value,
            ScenarioField::RentIncreaseRate => next.rent_increase_rate = value,
            ScenarioField::CouncilTax => next.council_tax = value,
            ScenarioField::MaintenanceCosts => next.maintenance_costs = value,
            ScenarioField::NumBedrooms => next.num_bedrooms = value.max(0.0) as u32,
            ScenarioField::RoomRentalIncome => next.room_rental_income = value,
            ScenarioField::Timeframe => return self.with_timeframe(value as i32),
        }
        next
    }

    /// Same as [`with_field`](Self::with_field), addressing the field by wire name.
    pub fn with_named_field(&self, name: &str, value: f64) -> Result<Self, ScenarioError> {
        let field = ScenarioField::from_name(name)
            .ok_or_else(|| ScenarioError::UnknownField(name.to_string()))?;
        Ok(self.with_field(field, value))
    }

    /// Checks the caller-side preconditions. The engine never calls this.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.property_price.is_finite() || self.property_price < 0.0 {
            return Err(ScenarioError::PropertyPrice(self.property_price));
        }

        if !self.deposit.is_finite() || self.deposit < 0.0 || self.deposit > self.property_price {
            return Err(ScenarioError::Deposit {
                deposit: self.deposit,
                price: self.property_price,
            });
        }

        if !(0.0..=100.0).contains(&self.mortgage_rate) {
            return Err(ScenarioError::MortgageRate(self.mortgage_rate));
        }

        for (field, value) in [
            ("propertyAppreciationRate", self.property_appreciation_rate),
            ("rentIncreaseRate", self.rent_increase_rate),
        ] {
            if !value.is_finite() || value <= -100.0 {
                return Err(ScenarioError::GrowthRate { field, value });
            }
        }

        for (field, value) in [
            ("monthlyRent", self.monthly_rent),
            ("councilTax", self.council_tax),
            ("maintenanceCosts", self.maintenance_costs),
            ("roomRentalIncome", self.room_rental_income),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScenarioError::MonthlyAmount { field, value });
            }
        }

        if !(1..=MAX_BEDROOMS).contains(&self.num_bedrooms) {
            return Err(ScenarioError::NumBedrooms {
                value: self.num_bedrooms,
                max: MAX_BEDROOMS,
            });
        }

        if !(1..=MAX_TIMEFRAME_YEARS).contains(&self.timeframe) {
            return Err(ScenarioError::Timeframe {
                value: self.timeframe,
                max: MAX_TIMEFRAME_YEARS,
            });
        }

        if !(1..=self.timeframe).contains(&self.mortgage_length) {
            return Err(ScenarioError::MortgageLength {
                value: self.mortgage_length,
                timeframe: self.timeframe,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert_eq!(ScenarioInputs::default().validate(), Ok(()));
    }

    #[test]
    fn shrinking_timeframe_clamps_mortgage_length() {
        let inputs = ScenarioInputs::default().with_timeframe(15);
        assert_eq!(inputs.timeframe, 15);
        assert_eq!(inputs.mortgage_length, 15);
    }

    #[test]
    fn growing_timeframe_keeps_mortgage_length() {
        let inputs = ScenarioInputs::default().with_timeframe(35);
        assert_eq!(inputs.timeframe, 35);
        assert_eq!(inputs.mortgage_length, 25);
    }

    #[test]
    fn editing_mortgage_length_does_not_touch_timeframe() {
        let inputs = ScenarioInputs::default().with_field(ScenarioField::MortgageLength, 30.0);
        assert_eq!(inputs.mortgage_length, 30);
        assert_eq!(inputs.timeframe, 25);
        assert!(matches!(
            inputs.validate(),
            Err(ScenarioError::MortgageLength { value: 30, timeframe: 25 })
        ));
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let base = ScenarioInputs::default();
        let edited = base.with_field(ScenarioField::MonthlyRent, 1_500.0);
        assert_eq!(base.monthly_rent, 1_200.0);
        assert_eq!(edited.monthly_rent, 1_500.0);
        assert_eq!(
            ScenarioInputs {
                monthly_rent: 1_200.0,
                ..edited
            },
            base
        );
    }

    #[test]
    fn with_field_truncates_integer_fields() {
        let inputs = ScenarioInputs::default()
            .with_field(ScenarioField::NumBedrooms, 3.9)
            .with_field(ScenarioField::Timeframe, 20.7);
        assert_eq!(inputs.num_bedrooms, 3);
        assert_eq!(inputs.timeframe, 20);
        assert_eq!(inputs.mortgage_length, 20);
    }

    #[test]
    fn with_named_field_resolves_wire_names() {
        let inputs = ScenarioInputs::default()
            .with_named_field("timeframe", 10.0)
            .expect("known field");
        assert_eq!(inputs.mortgage_length, 10);

        let err = ScenarioInputs::default()
            .with_named_field("garden", 1.0)
            .expect_err("unknown field");
        assert_eq!(err, ScenarioError::UnknownField("garden".to_string()));
    }

    #[test]
    fn field_names_round_trip() {
        for field in ScenarioField::ALL {
            assert_eq!(ScenarioField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn room_income_requires_spare_room() {
        let mut inputs = ScenarioInputs::default();
        assert_eq!(inputs.monthly_room_income(), 600.0);
        inputs.num_bedrooms = 1;
        assert_eq!(inputs.monthly_room_income(), 0.0);
    }

    #[test]
    fn validate_rejects_deposit_above_price() {
        let mut inputs = ScenarioInputs::default();
        inputs.deposit = 400_000.0;
        let err = inputs.validate().expect_err("must reject oversized deposit");
        assert!(err.to_string().contains("deposit"));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let cases: Vec<(ScenarioInputs, &str)> = vec![
            (
                ScenarioInputs {
                    property_price: -1.0,
                    ..ScenarioInputs::default()
                },
                "propertyPrice",
            ),
            (
                ScenarioInputs {
                    mortgage_rate: -0.5,
                    ..ScenarioInputs::default()
                },
                "mortgageRate",
            ),
            (
                ScenarioInputs {
                    rent_increase_rate: -100.0,
                    ..ScenarioInputs::default()
                },
                "rentIncreaseRate",
            ),
            (
                ScenarioInputs {
                    council_tax: f64::NAN,
                    ..ScenarioInputs::default()
                },
                "councilTax",
            ),
            (
                ScenarioInputs {
                    num_bedrooms: 0,
                    ..ScenarioInputs::default()
                },
                "numBedrooms",
            ),
            (
                ScenarioInputs {
                    timeframe: 0,
                    mortgage_length: 0,
                    ..ScenarioInputs::default()
                },
                "timeframe",
            ),
            (
                ScenarioInputs {
                    mortgage_length: 0,
                    ..ScenarioInputs::default()
                },
                "mortgageLength",
            ),
        ];

        for (inputs, field) in cases {
            let err = inputs.validate().expect_err("must reject");
            assert!(
                err.to_string().contains(field),
                "expected error naming {field}, got {err}"
            );
        }
    }

    #[test]
    fn validate_accepts_negative_appreciation() {
        let inputs = ScenarioInputs {
            property_appreciation_rate: -2.5,
            rent_increase_rate: -1.0,
            ..ScenarioInputs::default()
        };
        assert_eq!(inputs.validate(), Ok(()));
    }
}
